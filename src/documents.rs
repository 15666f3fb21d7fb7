//! Document-completeness gate
//!
//! Decides whether the final step's action is Submit or Save as
//! Incomplete. The active checklist depends on the application type,
//! plus one extra entry when a supplementary card rides on a passport
//! identity. This checklist is deliberately separate from the
//! required-field registry's document entries: the registry nudges, this
//! gate blocks submission.

use tracing::debug;

use crate::form::keys::FieldKey;
use crate::form::state::FormState;

/// One upload the gate insists on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentRequirement {
    pub key: FieldKey,
    pub label: &'static str,
}

const fn doc(key: FieldKey, label: &'static str) -> DocumentRequirement {
    DocumentRequirement { key, label }
}

const BUSINESS_DOCUMENTS: &[DocumentRequirement] = &[
    doc(FieldKey::BizNicCopy, "Business NIC Copy"),
    doc(FieldKey::BizBusinessReg, "Business Registration"),
    doc(FieldKey::BizBusinessCrib, "Business CRIB Report"),
    doc(FieldKey::BizBankStatements, "Bank Statements"),
    doc(FieldKey::BizCardApplicationReview, "Card Application Review"),
    doc(FieldKey::BizCribReports, "CRIB Reports"),
];

const INDIVIDUAL_DOCUMENTS: &[DocumentRequirement] = &[
    doc(FieldKey::IndNicCopy, "NIC Copy"),
    doc(FieldKey::IndSalarySlips, "Salary Slips"),
    doc(FieldKey::IndConditionChecklist, "Condition Checklist"),
    doc(FieldKey::IndGuarantorNic, "Guarantor NIC"),
    doc(FieldKey::IndAddressProof, "Address Proof"),
    doc(FieldKey::IndCribReports, "CRIB Reports"),
];

const SUPP_PASSPORT_BIO_PAGE: DocumentRequirement = doc(
    FieldKey::SuppPassportBioPage,
    "Supplementary Passport Bio Page",
);

/// The uploads currently required for submission
pub fn required_documents(form: &FormState) -> Vec<DocumentRequirement> {
    let base = if form.text(FieldKey::ApplicationType) == "Business" {
        BUSINESS_DOCUMENTS
    } else {
        INDIVIDUAL_DOCUMENTS
    };
    let mut docs = base.to_vec();

    if form.text(FieldKey::RequireSupplementaryCard) == "Yes"
        && form.text(FieldKey::SuppIdentityType) == "Passport"
    {
        docs.push(SUPP_PASSPORT_BIO_PAGE);
    }

    docs
}

/// True when a requirement's backing field holds an uploaded reference
pub fn is_satisfied(requirement: &DocumentRequirement, form: &FormState) -> bool {
    !form.text(requirement.key).trim().is_empty()
}

/// Requirements not yet satisfied, in checklist order
pub fn missing_documents(form: &FormState) -> Vec<DocumentRequirement> {
    required_documents(form)
        .into_iter()
        .filter(|requirement| !is_satisfied(requirement, form))
        .collect()
}

/// The submit gate: every active requirement satisfied
pub fn is_complete(form: &FormState) -> bool {
    let missing = missing_documents(form);
    debug!(missing = missing.len(), "document gate evaluation");
    missing.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::FormPatch;

    fn business_docs_filled() -> FormPatch {
        FormPatch::new()
            .set(FieldKey::ApplicationType, "Business")
            .set(FieldKey::BizNicCopy, "nic.pdf")
            .set(FieldKey::BizBusinessReg, "reg.pdf")
            .set(FieldKey::BizBusinessCrib, "crib.pdf")
            .set(FieldKey::BizBankStatements, "statements.pdf")
            .set(FieldKey::BizCardApplicationReview, "review.pdf")
            .set(FieldKey::BizCribReports, "reports.pdf")
    }

    #[test]
    fn business_type_uses_business_checklist() {
        let form = FormState::new()
            .apply(&FormPatch::new().set(FieldKey::ApplicationType, "Business"))
            .unwrap();
        let keys: Vec<FieldKey> = required_documents(&form).iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&FieldKey::BizBankStatements));
        assert!(!keys.contains(&FieldKey::IndNicCopy));
    }

    #[test]
    fn individual_and_unset_types_use_individual_checklist() {
        for application_type in ["Individual", ""] {
            let form = FormState::new()
                .apply(&FormPatch::new().set(FieldKey::ApplicationType, application_type))
                .unwrap();
            let keys: Vec<FieldKey> = required_documents(&form).iter().map(|d| d.key).collect();
            assert!(keys.contains(&FieldKey::IndSalarySlips));
            assert!(!keys.contains(&FieldKey::BizNicCopy));
        }
    }

    #[test]
    fn supplementary_passport_adds_bio_page() {
        let form = FormState::new()
            .apply(
                &business_docs_filled()
                    .set(FieldKey::RequireSupplementaryCard, "Yes")
                    .set(FieldKey::SuppIdentityType, "Passport"),
            )
            .unwrap();

        // all six business documents uploaded, bio page still missing
        let missing = missing_documents(&form);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].key, FieldKey::SuppPassportBioPage);
        assert!(!is_complete(&form));

        let complete = form
            .apply(&FormPatch::new().set(FieldKey::SuppPassportBioPage, "bio.jpg"))
            .unwrap();
        assert!(is_complete(&complete));
    }

    #[test]
    fn supplementary_nic_does_not_add_bio_page() {
        let form = FormState::new()
            .apply(
                &business_docs_filled()
                    .set(FieldKey::RequireSupplementaryCard, "Yes")
                    .set(FieldKey::SuppIdentityType, "NIC"),
            )
            .unwrap();
        assert!(is_complete(&form));
    }

    #[test]
    fn whitespace_upload_reference_is_not_satisfied() {
        let form = FormState::new()
            .apply(&business_docs_filled().set(FieldKey::BizCribReports, "   "))
            .unwrap();
        assert!(!is_complete(&form));
        assert_eq!(missing_documents(&form)[0].key, FieldKey::BizCribReports);
    }
}
