//! End-to-end completeness scenarios across the evaluator, formatter,
//! and document gate.

use ccapp::form::{FieldKey, FormPatch, FormState};
use ccapp::documents;
use ccapp::validation::{format_missing_fields, validate_required_fields, ALL_FIELDS_COMPLETE};

fn form_with(patch: FormPatch) -> FormState {
    FormState::new().apply(&patch).unwrap()
}

fn report_labels(form: &FormState) -> Vec<String> {
    validate_required_fields(form)
        .flatten()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn passport_identity_requires_passport_fields_not_nic() {
    let form = form_with(FormPatch::new().set(FieldKey::IdentityType, "Passport"));
    let labels = report_labels(&form);

    assert!(!labels.iter().any(|l| l == "NIC Number"));
    assert!(labels.iter().any(|l| l == "Passport Number"));
    assert!(labels.iter().any(|l| l == "Passport Expiry Date"));
}

#[test]
fn nic_identity_requires_nic_not_passport_fields() {
    let form = form_with(FormPatch::new().set(FieldKey::IdentityType, "NIC"));
    let labels = report_labels(&form);

    assert!(labels.iter().any(|l| l == "NIC Number"));
    assert!(!labels.iter().any(|l| l == "Passport Number"));
    assert!(!labels.iter().any(|l| l == "Passport Expiry Date"));
}

#[test]
fn declined_supplementary_card_reports_no_supplementary_field() {
    let form = form_with(FormPatch::new().set(FieldKey::RequireSupplementaryCard, "No"));
    let labels = report_labels(&form);

    assert!(
        !labels.iter().any(|l| l.starts_with("Supplementary")),
        "unexpected supplementary entries: {labels:?}"
    );
}

#[test]
fn requested_supplementary_card_reports_its_empty_fields() {
    let form = form_with(FormPatch::new().set(FieldKey::RequireSupplementaryCard, "Yes"));
    let labels = report_labels(&form);

    assert!(labels.iter().any(|l| l == "Supplementary Cardholder Name"));
    assert!(labels.iter().any(|l| l == "Supplementary NIC Number"));
}

#[test]
fn individual_application_swaps_document_families() {
    let form = form_with(FormPatch::new().set(FieldKey::ApplicationType, "Individual"));
    let labels = report_labels(&form);

    assert!(
        !labels.iter().any(|l| l.starts_with("Business")),
        "unexpected business entries: {labels:?}"
    );
    for expected in [
        "Individual NIC Copy",
        "Individual Salary Slips",
        "Individual Condition Checklist",
        "Guarantor NIC",
        "Individual Address Proof",
        "Individual CRIB Reports",
    ] {
        assert!(labels.iter().any(|l| l == expected), "missing {expected}");
    }
}

#[test]
fn settled_employment_drops_previous_history_from_the_report() {
    let settled = form_with(FormPatch::new().set(FieldKey::LengthOfEmployment, 6.0));
    let labels = report_labels(&settled);
    assert!(
        !labels.iter().any(|l| l.starts_with("Previous") || l == "Other Previous Designation"),
        "unexpected previous-employment entries: {labels:?}"
    );

    let fresh = form_with(FormPatch::new().set(FieldKey::LengthOfEmployment, 0.5));
    let labels = report_labels(&fresh);
    for expected in [
        "Previous Employer Name",
        "Previous Employer Address",
        "Previous Length of Service",
        "Previous Designation",
    ] {
        assert!(labels.iter().any(|l| l == expected), "missing {expected}");
    }
}

#[test]
fn document_gate_scenario_business_with_supplementary_passport() {
    let form = form_with(
        FormPatch::new()
            .set(FieldKey::ApplicationType, "Business")
            .set(FieldKey::BizNicCopy, "nic.pdf")
            .set(FieldKey::BizBusinessReg, "reg.pdf")
            .set(FieldKey::BizBusinessCrib, "crib.pdf")
            .set(FieldKey::BizBankStatements, "statements.pdf")
            .set(FieldKey::BizCardApplicationReview, "review.pdf")
            .set(FieldKey::BizCribReports, "reports.pdf")
            .set(FieldKey::RequireSupplementaryCard, "Yes")
            .set(FieldKey::SuppIdentityType, "Passport"),
    );

    assert!(!documents::is_complete(&form));

    let form = form
        .apply(&FormPatch::new().set(FieldKey::SuppPassportBioPage, "bio.jpg"))
        .unwrap();
    assert!(documents::is_complete(&form));
}

#[test]
fn formatter_contract_end_to_end() {
    let report = validate_required_fields(&FormState::new());
    let text = format_missing_fields(&report);

    // one bullet line per missing field, flat, no headers
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), report.len());
    assert!(lines.iter().all(|line| line.starts_with("\u{2022} ")));

    // ascending step order: Card Type (step 1) precedes Primary
    // Signature (step 6)
    let card = lines.iter().position(|l| l.ends_with("Card Type")).unwrap();
    let signature = lines
        .iter()
        .position(|l| l.ends_with("Primary Signature"))
        .unwrap();
    assert!(card < signature);

    // no duplicates
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), lines.len());
}

#[test]
fn complete_form_formats_the_fixed_message() {
    // fill every field the registry can currently demand
    let mut patch = FormPatch::new()
        .set(FieldKey::IdentityType, "NIC")
        .set(FieldKey::RequireSupplementaryCard, "No")
        .set(FieldKey::RequirePa, "No")
        .set(FieldKey::RequiresEdd, "No")
        .set(FieldKey::LengthOfEmployment, 6.0)
        .set(FieldKey::ApplicationType, "Business")
        .set(FieldKey::Designation, "Manager")
        .set(FieldKey::NetMonthlyIncome, 250_000.0);
    for key in [
        FieldKey::CardType,
        FieldKey::NicNumber,
        FieldKey::Title,
        FieldKey::FullName,
        FieldKey::NameOnCard,
        FieldKey::MothersMaidenName,
        FieldKey::DateOfBirth,
        FieldKey::MobileNumber,
        FieldKey::EmailAddress,
        FieldKey::HomeAddressLine,
        FieldKey::HomeDistrict,
        FieldKey::CardDeliveryLocation,
        FieldKey::EmploymentSector,
        FieldKey::FieldOfEmployment,
        FieldKey::EducationLevel,
        FieldKey::EmployerName,
        FieldKey::EmployerAddress,
        FieldKey::OfficeContactNumber,
        FieldKey::ResidenceType,
        FieldKey::Referee1Name,
        FieldKey::Referee1Nic,
        FieldKey::Referee1Mobile,
        FieldKey::Referee1Relationship,
        FieldKey::Referee1Address,
        FieldKey::Referee2Name,
        FieldKey::Referee2Nic,
        FieldKey::Referee2Mobile,
        FieldKey::Referee2Relationship,
        FieldKey::Referee2Address,
        FieldKey::AutoSettlement,
        FieldKey::SettlementPaymentOption,
        FieldKey::BizNicCopy,
        FieldKey::BizBusinessReg,
        FieldKey::BizBusinessCrib,
        FieldKey::BizBankStatements,
        FieldKey::BizCardApplicationReview,
        FieldKey::BizCribReports,
        FieldKey::PrimarySignature,
    ] {
        patch = patch.set(key, "filled");
    }

    let form = form_with(patch);
    let report = validate_required_fields(&form);
    assert!(report.is_empty(), "still missing: {:?}", report.flatten());
    assert_eq!(format_missing_fields(&report), ALL_FIELDS_COMPLETE);

    // and the gate agrees the Business uploads are in place
    assert!(documents::is_complete(&form));
}
