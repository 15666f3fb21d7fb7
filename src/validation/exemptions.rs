//! Conditional exemption rules
//!
//! Decides whether a field is currently excused from the required-field
//! check because its section is hidden, disabled, or superseded by
//! another answer. Rules are independent predicates combined by OR: one
//! match exempts the field. Membership is by `FieldGroup` tag, never by
//! key-name prefix.

use crate::form::keys::{FieldGroup, FieldKey};
use crate::form::state::FormState;

/// Employment length at or above which previous-employment history is
/// not collected
const SETTLED_EMPLOYMENT_YEARS: f64 = 5.0;

/// Sentinel option that opens the matching free-text field
const OTHERS: &str = "Others";

struct ExemptionRule {
    name: &'static str,
    applies: fn(FieldKey) -> bool,
    exempt_when: fn(&FormState) -> bool,
}

/// The exemption policy, one rule per hidden/superseded section.
///
/// The previous-employment rule also covers the "other previous
/// designation" free text: once the whole section is hidden, its nested
/// free-text field goes with it.
static EXEMPTION_RULES: &[ExemptionRule] = &[
    ExemptionRule {
        name: "nic-superseded-by-passport",
        applies: |k| k.group() == FieldGroup::NationalId,
        exempt_when: |f| f.text(FieldKey::IdentityType) == "Passport",
    },
    ExemptionRule {
        name: "passport-superseded-by-nic",
        applies: |k| k.group() == FieldGroup::Passport,
        exempt_when: |f| f.text(FieldKey::IdentityType) == "NIC",
    },
    ExemptionRule {
        name: "previous-employment-settled",
        applies: |k| {
            matches!(
                k.group(),
                FieldGroup::PreviousEmployment | FieldGroup::PrevDesignationOther
            )
        },
        exempt_when: |f| {
            f.number(FieldKey::LengthOfEmployment) >= SETTLED_EMPLOYMENT_YEARS
        },
    },
    ExemptionRule {
        name: "supplementary-card-not-requested",
        applies: |k| k.group() == FieldGroup::Supplementary,
        exempt_when: |f| f.text(FieldKey::RequireSupplementaryCard) != "Yes",
    },
    ExemptionRule {
        name: "designation-not-others",
        applies: |k| k.group() == FieldGroup::DesignationOther,
        exempt_when: |f| f.text(FieldKey::Designation) != OTHERS,
    },
    ExemptionRule {
        name: "previous-designation-not-others",
        applies: |k| k.group() == FieldGroup::PrevDesignationOther,
        exempt_when: |f| f.text(FieldKey::PrevDesignation) != OTHERS,
    },
    ExemptionRule {
        name: "nature-of-business-not-others",
        applies: |k| k.group() == FieldGroup::NatureOfBusinessOther,
        exempt_when: |f| f.text(FieldKey::NatureOfBusiness) != OTHERS,
    },
    ExemptionRule {
        name: "correspondence-same-as-home",
        applies: |k| k.group() == FieldGroup::Correspondence,
        exempt_when: |f| !f.flag(FieldKey::CorrespondenceAddressDifferent),
    },
    ExemptionRule {
        name: "personal-assistant-not-authorized",
        applies: |k| k.group() == FieldGroup::PersonalAssistant,
        exempt_when: |f| f.text(FieldKey::RequirePa) != "Yes",
    },
    ExemptionRule {
        name: "edd-not-required",
        applies: |k| k.group() == FieldGroup::EddUpload,
        exempt_when: |f| f.text(FieldKey::RequiresEdd) != "Yes",
    },
    ExemptionRule {
        name: "individual-documents-wrong-type",
        applies: |k| k.group() == FieldGroup::IndividualDocuments,
        exempt_when: |f| f.text(FieldKey::ApplicationType) != "Individual",
    },
    ExemptionRule {
        name: "business-documents-wrong-type",
        applies: |k| k.group() == FieldGroup::BusinessDocuments,
        exempt_when: |f| f.text(FieldKey::ApplicationType) != "Business",
    },
];

/// True when `key` is currently excused from the required-field check.
///
/// Evaluated fresh on every call; the form changes on every keystroke
/// and nothing here is cached.
pub fn is_exempt(key: FieldKey, form: &FormState) -> bool {
    EXEMPTION_RULES
        .iter()
        .any(|rule| (rule.applies)(key) && (rule.exempt_when)(form))
}

/// Names of the rules exempting `key` right now (diagnostics)
pub fn matching_rules(key: FieldKey, form: &FormState) -> Vec<&'static str> {
    EXEMPTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(key) && (rule.exempt_when)(form))
        .map(|rule| rule.name)
        .collect()
}
