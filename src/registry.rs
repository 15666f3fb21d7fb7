//! Required-field registry
//!
//! One ordered, immutable entry per logically required field across the
//! whole wizard. The conditional families (passport, previous
//! employment, supplementary card, correspondence address, personal
//! assistant, individual documents) carry entries here too; whether an
//! entry is checked at a given moment is decided by the exemption rules,
//! not by its presence in this table.

use crate::form::keys::FieldKey;

/// A logically required field: key, display label, owning wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub step: u8,
}

const fn spec(key: FieldKey, label: &'static str, step: u8) -> RequiredFieldSpec {
    RequiredFieldSpec { key, label, step }
}

/// All required fields, in wizard order
pub const REQUIRED_FIELDS: &[RequiredFieldSpec] = &[
    // Step 1: Product selection
    spec(FieldKey::CardType, "Card Type", 1),
    spec(FieldKey::RequestedCreditLimit, "Requested Credit Limit", 1),
    // Step 2: Personal details
    spec(FieldKey::IdentityType, "Identity Type", 2),
    spec(FieldKey::NicNumber, "NIC Number", 2),
    spec(FieldKey::PassportNumber, "Passport Number", 2),
    spec(FieldKey::PassportExpiry, "Passport Expiry Date", 2),
    spec(FieldKey::Title, "Title", 2),
    spec(FieldKey::FullName, "Full Name", 2),
    spec(FieldKey::NameOnCard, "Name on Card", 2),
    spec(FieldKey::MothersMaidenName, "Mother's Maiden Name", 2),
    spec(FieldKey::DateOfBirth, "Date of Birth", 2),
    spec(FieldKey::MobileNumber, "Mobile Number", 2),
    spec(FieldKey::EmailAddress, "Email Address", 2),
    // Step 2: Addresses
    spec(FieldKey::HomeAddressLine, "Home Address", 2),
    spec(FieldKey::HomeDistrict, "Home District", 2),
    spec(FieldKey::CorrespondenceAddressLine, "Correspondence Address", 2),
    spec(FieldKey::CorrespondenceDistrict, "Correspondence District", 2),
    spec(FieldKey::CardDeliveryLocation, "Card Delivery Location", 2),
    // Step 3: Employment & income
    spec(FieldKey::EmploymentSector, "Employment Sector", 3),
    spec(FieldKey::FieldOfEmployment, "Field of Employment", 3),
    spec(FieldKey::EducationLevel, "Education Level", 3),
    spec(FieldKey::Designation, "Current Position/Designation", 3),
    spec(FieldKey::DesignationOther, "Other Designation", 3),
    spec(FieldKey::NatureOfBusinessOther, "Other Nature of Business", 3),
    spec(FieldKey::LengthOfEmployment, "Length of Employment", 3),
    spec(FieldKey::EmployerName, "Employer Name", 3),
    spec(FieldKey::EmployerAddress, "Employer Address", 3),
    spec(FieldKey::OfficeContactNumber, "Office Contact Number", 3),
    spec(FieldKey::PrevEmployerName, "Previous Employer Name", 3),
    spec(FieldKey::PrevEmployerAddress, "Previous Employer Address", 3),
    spec(FieldKey::PrevLengthOfService, "Previous Length of Service", 3),
    spec(FieldKey::PrevDesignation, "Previous Designation", 3),
    spec(FieldKey::PrevDesignationOther, "Other Previous Designation", 3),
    spec(FieldKey::NetMonthlyIncome, "Net Monthly Income", 3),
    spec(FieldKey::ResidenceType, "Type of Residence", 3),
    spec(
        FieldKey::RequiresEdd,
        "Extended Due Diligence (EDD) Required",
        3,
    ),
    spec(FieldKey::EddFormUpload, "KYC-EDD Form", 3),
    // Step 4: Supplementary card
    spec(FieldKey::SuppTitle, "Supplementary Card Title", 4),
    spec(FieldKey::SuppFullName, "Supplementary Cardholder Name", 4),
    spec(FieldKey::SuppNameOnCard, "Supplementary Name on Card", 4),
    spec(FieldKey::SuppDateOfBirth, "Supplementary Date of Birth", 4),
    spec(FieldKey::SuppIdentityType, "Supplementary Identity Type", 4),
    spec(FieldKey::SuppNicNumber, "Supplementary NIC Number", 4),
    spec(FieldKey::SuppRelationship, "Supplementary Relationship", 4),
    spec(FieldKey::SuppHomeAddress, "Supplementary Home Address", 4),
    spec(FieldKey::SuppTelephone, "Supplementary Telephone", 4),
    spec(
        FieldKey::SuppRequestedCreditLimit,
        "Supplementary Requested Credit Limit",
        4,
    ),
    // Step 4: Referees
    spec(FieldKey::Referee1Name, "Referee 1 Name", 4),
    spec(FieldKey::Referee1Nic, "Referee 1 NIC/Passport", 4),
    spec(FieldKey::Referee1Mobile, "Referee 1 Mobile Number", 4),
    spec(FieldKey::Referee1Relationship, "Referee 1 Relationship", 4),
    spec(FieldKey::Referee1Address, "Referee 1 Address", 4),
    spec(FieldKey::Referee2Name, "Referee 2 Name", 4),
    spec(FieldKey::Referee2Nic, "Referee 2 NIC/Passport", 4),
    spec(FieldKey::Referee2Mobile, "Referee 2 Mobile Number", 4),
    spec(FieldKey::Referee2Relationship, "Referee 2 Relationship", 4),
    spec(FieldKey::Referee2Address, "Referee 2 Address", 4),
    // Step 5: Preferences
    spec(FieldKey::AutoSettlement, "Auto-Settlement Preference", 5),
    spec(
        FieldKey::SettlementPaymentOption,
        "Settlement Payment Option",
        5,
    ),
    spec(FieldKey::PaName, "Personal Assistant Name", 5),
    spec(FieldKey::PaNic, "Personal Assistant NIC", 5),
    spec(FieldKey::PaAddress, "Personal Assistant Address", 5),
    spec(
        FieldKey::PaContactNumber,
        "Personal Assistant Contact Number",
        5,
    ),
    spec(FieldKey::PaEmail, "Personal Assistant Email", 5),
    // Step 6: Documents & declaration
    spec(FieldKey::ApplicationType, "Application Type", 6),
    spec(FieldKey::IndNicCopy, "Individual NIC Copy", 6),
    spec(FieldKey::IndSalarySlips, "Individual Salary Slips", 6),
    spec(
        FieldKey::IndConditionChecklist,
        "Individual Condition Checklist",
        6,
    ),
    spec(FieldKey::IndGuarantorNic, "Guarantor NIC", 6),
    spec(FieldKey::IndAddressProof, "Individual Address Proof", 6),
    spec(FieldKey::IndCribReports, "Individual CRIB Reports", 6),
    spec(FieldKey::BizNicCopy, "Business NIC Copy", 6),
    spec(FieldKey::BizBusinessReg, "Business Registration", 6),
    spec(FieldKey::BizBusinessCrib, "Business CRIB Report", 6),
    spec(FieldKey::BizBankStatements, "Bank Statements", 6),
    spec(
        FieldKey::BizCardApplicationReview,
        "Card Application Review",
        6,
    ),
    spec(FieldKey::BizCribReports, "CRIB Reports", 6),
    spec(FieldKey::PrimarySignature, "Primary Signature", 6),
];

/// Number of wizard steps the registry spans
pub const LAST_STEP: u8 = 6;
