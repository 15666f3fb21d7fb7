//! Field schema for the credit card application form
//!
//! Every form field has a stable `FieldKey`, a value kind, and a
//! conditional-visibility group. The serde names match the wire names
//! used by the persisted snapshot (camelCase).

use serde::{Deserialize, Serialize};

/// Value kind a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    List,
}

/// Conditional-visibility family a field belongs to
///
/// Exemption rules match on these tags instead of key-name prefixes, so
/// renaming a field cannot silently detach it from its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldGroup {
    General,
    NationalId,
    Passport,
    PreviousEmployment,
    Supplementary,
    DesignationOther,
    PrevDesignationOther,
    NatureOfBusinessOther,
    Correspondence,
    PersonalAssistant,
    EddUpload,
    IndividualDocuments,
    BusinessDocuments,
}

/// Identifier for every field in the application form.
///
/// Serialized names are the snapshot wire names, so a `FormState`
/// round-trips against blobs written by earlier versions of the
/// application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    // Step 1: Product selection
    CardType,
    RequestedCreditLimit,

    // Step 2: Personal identification
    IdentityType,
    NicNumber,
    PassportNumber,
    PassportExpiry,
    VisaNumber,
    VisaType,
    VisaExpiry,
    Title,
    FullName,
    NameOnCard,
    MothersMaidenName,
    DateOfBirth,
    MobileNumber,
    HomeTelephone,
    EmailAddress,

    // Step 2: Addresses
    HomeAddressLine,
    HomeDistrict,
    CorrespondenceAddressDifferent,
    CorrespondenceAddressLine,
    CorrespondenceDistrict,
    WorkAddressLine,
    WorkDistrict,
    CardDeliveryLocation,
    CardDeliveryBranch,

    // Step 3: Employment & income
    EmploymentSector,
    NatureOfBusiness,
    NatureOfBusinessOther,
    FieldOfEmployment,
    EducationLevel,
    Designation,
    DesignationOther,
    LengthOfEmployment,
    EmployerName,
    EmployerAddress,
    OfficeContactNumber,
    PrevEmployerName,
    PrevEmployerAddress,
    PrevLengthOfService,
    PrevDesignation,
    PrevDesignationOther,
    NetMonthlyIncome,
    OtherIncome,
    OtherIncomeSource,
    ResidenceType,
    NumberOfDependents,

    // Step 3: PEP / EDD
    #[serde(rename = "isPEP")]
    IsPep,
    #[serde(rename = "isPEPRelated")]
    IsPepRelated,
    PepNatureOfRelationship,
    PepFormUpload,
    #[serde(rename = "requiresEDD")]
    RequiresEdd,
    EddFormUpload,

    // Step 4: Supplementary card
    RequireSupplementaryCard,
    SuppTitle,
    SuppFullName,
    SuppMothersMaidenName,
    SuppNameOnCard,
    SuppDateOfBirth,
    SuppIdentityType,
    #[serde(rename = "suppNICNumber")]
    SuppNicNumber,
    SuppPassportNumber,
    SuppPassportExpiry,
    SuppVisaNumber,
    SuppVisaType,
    SuppVisaExpiry,
    SuppRelationship,
    SuppHomeAddress,
    SuppTelephone,
    SuppRequestedCreditLimit,
    SuppSignature,
    SuppPassportBioPage,

    // Step 4: Referees
    Referee1Name,
    #[serde(rename = "referee1NIC")]
    Referee1Nic,
    Referee1Mobile,
    Referee1Relationship,
    Referee1Address,
    Referee1HomeTelephone,
    Referee2Name,
    #[serde(rename = "referee2NIC")]
    Referee2Nic,
    Referee2Mobile,
    Referee2Relationship,
    Referee2Address,
    Referee2HomeTelephone,

    // Step 5: Auto-settlement
    AutoSettlement,
    SettlementAccountNumber,
    SettlementBranch,
    SettlementPaymentOption,

    // Step 5: Value-added services
    ValueAddedServices,
    VasWrittenRequestUpload,
    PaperStatementAddress,
    #[serde(rename = "selectedVAS")]
    SelectedVas,

    // Step 5: Personal assistant authorization
    #[serde(rename = "requirePA")]
    RequirePa,
    PaTitle,
    PaName,
    #[serde(rename = "paNIC")]
    PaNic,
    PaAddress,
    PaContactNumber,
    PaEmail,
    PaAuthorizationConsent,

    // Step 6: Application type & support documents
    ApplicationType,
    IndNicCopy,
    IndSalarySlips,
    IndConditionChecklist,
    IndGuarantorNic,
    IndAddressProof,
    IndCribReports,
    BizNicCopy,
    BizBusinessReg,
    BizBusinessCrib,
    BizBankStatements,
    BizCardApplicationReview,
    BizCribReports,

    // Step 6: Signatures & declaration
    PrimarySignature,
    DeclarationConsent,
    SignatureDate,
    BankName,
    SuppSignatureDate,
    AuthorizedOfficerSignature,
    AuthorizedOfficerDate,
}

impl FieldKey {
    /// Every field in the schema, in declaration order.
    pub const ALL: [FieldKey; 120] = [
        FieldKey::CardType,
        FieldKey::RequestedCreditLimit,
        FieldKey::IdentityType,
        FieldKey::NicNumber,
        FieldKey::PassportNumber,
        FieldKey::PassportExpiry,
        FieldKey::VisaNumber,
        FieldKey::VisaType,
        FieldKey::VisaExpiry,
        FieldKey::Title,
        FieldKey::FullName,
        FieldKey::NameOnCard,
        FieldKey::MothersMaidenName,
        FieldKey::DateOfBirth,
        FieldKey::MobileNumber,
        FieldKey::HomeTelephone,
        FieldKey::EmailAddress,
        FieldKey::HomeAddressLine,
        FieldKey::HomeDistrict,
        FieldKey::CorrespondenceAddressDifferent,
        FieldKey::CorrespondenceAddressLine,
        FieldKey::CorrespondenceDistrict,
        FieldKey::WorkAddressLine,
        FieldKey::WorkDistrict,
        FieldKey::CardDeliveryLocation,
        FieldKey::CardDeliveryBranch,
        FieldKey::EmploymentSector,
        FieldKey::NatureOfBusiness,
        FieldKey::NatureOfBusinessOther,
        FieldKey::FieldOfEmployment,
        FieldKey::EducationLevel,
        FieldKey::Designation,
        FieldKey::DesignationOther,
        FieldKey::LengthOfEmployment,
        FieldKey::EmployerName,
        FieldKey::EmployerAddress,
        FieldKey::OfficeContactNumber,
        FieldKey::PrevEmployerName,
        FieldKey::PrevEmployerAddress,
        FieldKey::PrevLengthOfService,
        FieldKey::PrevDesignation,
        FieldKey::PrevDesignationOther,
        FieldKey::NetMonthlyIncome,
        FieldKey::OtherIncome,
        FieldKey::OtherIncomeSource,
        FieldKey::ResidenceType,
        FieldKey::NumberOfDependents,
        FieldKey::IsPep,
        FieldKey::IsPepRelated,
        FieldKey::PepNatureOfRelationship,
        FieldKey::PepFormUpload,
        FieldKey::RequiresEdd,
        FieldKey::EddFormUpload,
        FieldKey::RequireSupplementaryCard,
        FieldKey::SuppTitle,
        FieldKey::SuppFullName,
        FieldKey::SuppMothersMaidenName,
        FieldKey::SuppNameOnCard,
        FieldKey::SuppDateOfBirth,
        FieldKey::SuppIdentityType,
        FieldKey::SuppNicNumber,
        FieldKey::SuppPassportNumber,
        FieldKey::SuppPassportExpiry,
        FieldKey::SuppVisaNumber,
        FieldKey::SuppVisaType,
        FieldKey::SuppVisaExpiry,
        FieldKey::SuppRelationship,
        FieldKey::SuppHomeAddress,
        FieldKey::SuppTelephone,
        FieldKey::SuppRequestedCreditLimit,
        FieldKey::SuppSignature,
        FieldKey::SuppPassportBioPage,
        FieldKey::Referee1Name,
        FieldKey::Referee1Nic,
        FieldKey::Referee1Mobile,
        FieldKey::Referee1Relationship,
        FieldKey::Referee1Address,
        FieldKey::Referee1HomeTelephone,
        FieldKey::Referee2Name,
        FieldKey::Referee2Nic,
        FieldKey::Referee2Mobile,
        FieldKey::Referee2Relationship,
        FieldKey::Referee2Address,
        FieldKey::Referee2HomeTelephone,
        FieldKey::AutoSettlement,
        FieldKey::SettlementAccountNumber,
        FieldKey::SettlementBranch,
        FieldKey::SettlementPaymentOption,
        FieldKey::ValueAddedServices,
        FieldKey::VasWrittenRequestUpload,
        FieldKey::PaperStatementAddress,
        FieldKey::SelectedVas,
        FieldKey::RequirePa,
        FieldKey::PaTitle,
        FieldKey::PaName,
        FieldKey::PaNic,
        FieldKey::PaAddress,
        FieldKey::PaContactNumber,
        FieldKey::PaEmail,
        FieldKey::PaAuthorizationConsent,
        FieldKey::ApplicationType,
        FieldKey::IndNicCopy,
        FieldKey::IndSalarySlips,
        FieldKey::IndConditionChecklist,
        FieldKey::IndGuarantorNic,
        FieldKey::IndAddressProof,
        FieldKey::IndCribReports,
        FieldKey::BizNicCopy,
        FieldKey::BizBusinessReg,
        FieldKey::BizBusinessCrib,
        FieldKey::BizBankStatements,
        FieldKey::BizCardApplicationReview,
        FieldKey::BizCribReports,
        FieldKey::PrimarySignature,
        FieldKey::DeclarationConsent,
        FieldKey::SignatureDate,
        FieldKey::BankName,
        FieldKey::SuppSignatureDate,
        FieldKey::AuthorizedOfficerSignature,
        FieldKey::AuthorizedOfficerDate,
    ];

    /// Wire name of the field (the snapshot/JSON identifier)
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::CardType => "cardType",
            FieldKey::RequestedCreditLimit => "requestedCreditLimit",
            FieldKey::IdentityType => "identityType",
            FieldKey::NicNumber => "nicNumber",
            FieldKey::PassportNumber => "passportNumber",
            FieldKey::PassportExpiry => "passportExpiry",
            FieldKey::VisaNumber => "visaNumber",
            FieldKey::VisaType => "visaType",
            FieldKey::VisaExpiry => "visaExpiry",
            FieldKey::Title => "title",
            FieldKey::FullName => "fullName",
            FieldKey::NameOnCard => "nameOnCard",
            FieldKey::MothersMaidenName => "mothersMaidenName",
            FieldKey::DateOfBirth => "dateOfBirth",
            FieldKey::MobileNumber => "mobileNumber",
            FieldKey::HomeTelephone => "homeTelephone",
            FieldKey::EmailAddress => "emailAddress",
            FieldKey::HomeAddressLine => "homeAddressLine",
            FieldKey::HomeDistrict => "homeDistrict",
            FieldKey::CorrespondenceAddressDifferent => "correspondenceAddressDifferent",
            FieldKey::CorrespondenceAddressLine => "correspondenceAddressLine",
            FieldKey::CorrespondenceDistrict => "correspondenceDistrict",
            FieldKey::WorkAddressLine => "workAddressLine",
            FieldKey::WorkDistrict => "workDistrict",
            FieldKey::CardDeliveryLocation => "cardDeliveryLocation",
            FieldKey::CardDeliveryBranch => "cardDeliveryBranch",
            FieldKey::EmploymentSector => "employmentSector",
            FieldKey::NatureOfBusiness => "natureOfBusiness",
            FieldKey::NatureOfBusinessOther => "natureOfBusinessOther",
            FieldKey::FieldOfEmployment => "fieldOfEmployment",
            FieldKey::EducationLevel => "educationLevel",
            FieldKey::Designation => "designation",
            FieldKey::DesignationOther => "designationOther",
            FieldKey::LengthOfEmployment => "lengthOfEmployment",
            FieldKey::EmployerName => "employerName",
            FieldKey::EmployerAddress => "employerAddress",
            FieldKey::OfficeContactNumber => "officeContactNumber",
            FieldKey::PrevEmployerName => "prevEmployerName",
            FieldKey::PrevEmployerAddress => "prevEmployerAddress",
            FieldKey::PrevLengthOfService => "prevLengthOfService",
            FieldKey::PrevDesignation => "prevDesignation",
            FieldKey::PrevDesignationOther => "prevDesignationOther",
            FieldKey::NetMonthlyIncome => "netMonthlyIncome",
            FieldKey::OtherIncome => "otherIncome",
            FieldKey::OtherIncomeSource => "otherIncomeSource",
            FieldKey::ResidenceType => "residenceType",
            FieldKey::NumberOfDependents => "numberOfDependents",
            FieldKey::IsPep => "isPEP",
            FieldKey::IsPepRelated => "isPEPRelated",
            FieldKey::PepNatureOfRelationship => "pepNatureOfRelationship",
            FieldKey::PepFormUpload => "pepFormUpload",
            FieldKey::RequiresEdd => "requiresEDD",
            FieldKey::EddFormUpload => "eddFormUpload",
            FieldKey::RequireSupplementaryCard => "requireSupplementaryCard",
            FieldKey::SuppTitle => "suppTitle",
            FieldKey::SuppFullName => "suppFullName",
            FieldKey::SuppMothersMaidenName => "suppMothersMaidenName",
            FieldKey::SuppNameOnCard => "suppNameOnCard",
            FieldKey::SuppDateOfBirth => "suppDateOfBirth",
            FieldKey::SuppIdentityType => "suppIdentityType",
            FieldKey::SuppNicNumber => "suppNICNumber",
            FieldKey::SuppPassportNumber => "suppPassportNumber",
            FieldKey::SuppPassportExpiry => "suppPassportExpiry",
            FieldKey::SuppVisaNumber => "suppVisaNumber",
            FieldKey::SuppVisaType => "suppVisaType",
            FieldKey::SuppVisaExpiry => "suppVisaExpiry",
            FieldKey::SuppRelationship => "suppRelationship",
            FieldKey::SuppHomeAddress => "suppHomeAddress",
            FieldKey::SuppTelephone => "suppTelephone",
            FieldKey::SuppRequestedCreditLimit => "suppRequestedCreditLimit",
            FieldKey::SuppSignature => "suppSignature",
            FieldKey::SuppPassportBioPage => "suppPassportBioPage",
            FieldKey::Referee1Name => "referee1Name",
            FieldKey::Referee1Nic => "referee1NIC",
            FieldKey::Referee1Mobile => "referee1Mobile",
            FieldKey::Referee1Relationship => "referee1Relationship",
            FieldKey::Referee1Address => "referee1Address",
            FieldKey::Referee1HomeTelephone => "referee1HomeTelephone",
            FieldKey::Referee2Name => "referee2Name",
            FieldKey::Referee2Nic => "referee2NIC",
            FieldKey::Referee2Mobile => "referee2Mobile",
            FieldKey::Referee2Relationship => "referee2Relationship",
            FieldKey::Referee2Address => "referee2Address",
            FieldKey::Referee2HomeTelephone => "referee2HomeTelephone",
            FieldKey::AutoSettlement => "autoSettlement",
            FieldKey::SettlementAccountNumber => "settlementAccountNumber",
            FieldKey::SettlementBranch => "settlementBranch",
            FieldKey::SettlementPaymentOption => "settlementPaymentOption",
            FieldKey::ValueAddedServices => "valueAddedServices",
            FieldKey::VasWrittenRequestUpload => "vasWrittenRequestUpload",
            FieldKey::PaperStatementAddress => "paperStatementAddress",
            FieldKey::SelectedVas => "selectedVAS",
            FieldKey::RequirePa => "requirePA",
            FieldKey::PaTitle => "paTitle",
            FieldKey::PaName => "paName",
            FieldKey::PaNic => "paNIC",
            FieldKey::PaAddress => "paAddress",
            FieldKey::PaContactNumber => "paContactNumber",
            FieldKey::PaEmail => "paEmail",
            FieldKey::PaAuthorizationConsent => "paAuthorizationConsent",
            FieldKey::ApplicationType => "applicationType",
            FieldKey::IndNicCopy => "indNicCopy",
            FieldKey::IndSalarySlips => "indSalarySlips",
            FieldKey::IndConditionChecklist => "indConditionChecklist",
            FieldKey::IndGuarantorNic => "indGuarantorNic",
            FieldKey::IndAddressProof => "indAddressProof",
            FieldKey::IndCribReports => "indCribReports",
            FieldKey::BizNicCopy => "bizNicCopy",
            FieldKey::BizBusinessReg => "bizBusinessReg",
            FieldKey::BizBusinessCrib => "bizBusinessCrib",
            FieldKey::BizBankStatements => "bizBankStatements",
            FieldKey::BizCardApplicationReview => "bizCardApplicationReview",
            FieldKey::BizCribReports => "bizCribReports",
            FieldKey::PrimarySignature => "primarySignature",
            FieldKey::DeclarationConsent => "declarationConsent",
            FieldKey::SignatureDate => "signatureDate",
            FieldKey::BankName => "bankName",
            FieldKey::SuppSignatureDate => "suppSignatureDate",
            FieldKey::AuthorizedOfficerSignature => "authorizedOfficerSignature",
            FieldKey::AuthorizedOfficerDate => "authorizedOfficerDate",
        }
    }

    /// Value kind this field holds
    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::RequestedCreditLimit
            | FieldKey::LengthOfEmployment
            | FieldKey::PrevLengthOfService
            | FieldKey::NetMonthlyIncome
            | FieldKey::OtherIncome
            | FieldKey::NumberOfDependents
            | FieldKey::SuppRequestedCreditLimit => FieldKind::Number,
            FieldKey::CorrespondenceAddressDifferent
            | FieldKey::PaAuthorizationConsent
            | FieldKey::DeclarationConsent => FieldKind::Flag,
            FieldKey::SelectedVas => FieldKind::List,
            _ => FieldKind::Text,
        }
    }

    /// Conditional-visibility family this field belongs to.
    ///
    /// Controlling flags (requireSupplementaryCard, requirePA,
    /// correspondenceAddressDifferent, requiresEDD, applicationType) stay
    /// in `General`: the control is never exempted by the section it
    /// controls.
    pub fn group(self) -> FieldGroup {
        match self {
            FieldKey::NicNumber => FieldGroup::NationalId,
            FieldKey::PassportNumber | FieldKey::PassportExpiry => FieldGroup::Passport,
            FieldKey::PrevEmployerName
            | FieldKey::PrevEmployerAddress
            | FieldKey::PrevLengthOfService
            | FieldKey::PrevDesignation => FieldGroup::PreviousEmployment,
            FieldKey::PrevDesignationOther => FieldGroup::PrevDesignationOther,
            FieldKey::SuppTitle
            | FieldKey::SuppFullName
            | FieldKey::SuppMothersMaidenName
            | FieldKey::SuppNameOnCard
            | FieldKey::SuppDateOfBirth
            | FieldKey::SuppIdentityType
            | FieldKey::SuppNicNumber
            | FieldKey::SuppPassportNumber
            | FieldKey::SuppPassportExpiry
            | FieldKey::SuppVisaNumber
            | FieldKey::SuppVisaType
            | FieldKey::SuppVisaExpiry
            | FieldKey::SuppRelationship
            | FieldKey::SuppHomeAddress
            | FieldKey::SuppTelephone
            | FieldKey::SuppRequestedCreditLimit
            | FieldKey::SuppSignature
            | FieldKey::SuppPassportBioPage
            | FieldKey::SuppSignatureDate => FieldGroup::Supplementary,
            FieldKey::DesignationOther => FieldGroup::DesignationOther,
            FieldKey::NatureOfBusinessOther => FieldGroup::NatureOfBusinessOther,
            FieldKey::CorrespondenceAddressLine | FieldKey::CorrespondenceDistrict => {
                FieldGroup::Correspondence
            }
            FieldKey::PaTitle
            | FieldKey::PaName
            | FieldKey::PaNic
            | FieldKey::PaAddress
            | FieldKey::PaContactNumber
            | FieldKey::PaEmail
            | FieldKey::PaAuthorizationConsent => FieldGroup::PersonalAssistant,
            FieldKey::EddFormUpload => FieldGroup::EddUpload,
            FieldKey::IndNicCopy
            | FieldKey::IndSalarySlips
            | FieldKey::IndConditionChecklist
            | FieldKey::IndGuarantorNic
            | FieldKey::IndAddressProof
            | FieldKey::IndCribReports => FieldGroup::IndividualDocuments,
            FieldKey::BizNicCopy
            | FieldKey::BizBusinessReg
            | FieldKey::BizBusinessCrib
            | FieldKey::BizBankStatements
            | FieldKey::BizCardApplicationReview
            | FieldKey::BizCribReports => FieldGroup::BusinessDocuments,
            _ => FieldGroup::General,
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_table_is_complete_and_unique() {
        let names: HashSet<&str> = FieldKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), FieldKey::ALL.len());
    }

    #[test]
    fn wire_names_match_serde() {
        for key in FieldKey::ALL {
            let json = serde_json::to_value(key).expect("serialize key");
            assert_eq!(json, serde_json::Value::String(key.as_str().to_string()));
        }
    }

    #[test]
    fn controlling_flags_stay_general() {
        assert_eq!(FieldKey::RequireSupplementaryCard.group(), FieldGroup::General);
        assert_eq!(FieldKey::RequirePa.group(), FieldGroup::General);
        assert_eq!(FieldKey::RequiresEdd.group(), FieldGroup::General);
        assert_eq!(FieldKey::ApplicationType.group(), FieldGroup::General);
        assert_eq!(
            FieldKey::CorrespondenceAddressDifferent.group(),
            FieldGroup::General
        );
    }

    #[test]
    fn passport_fields_are_not_personal_assistant() {
        // name-prefix matching would lump "passport*" and
        // "paperStatementAddress" in with the "pa*" family
        assert_eq!(FieldKey::PassportNumber.group(), FieldGroup::Passport);
        assert_eq!(FieldKey::PassportExpiry.group(), FieldGroup::Passport);
        assert_eq!(FieldKey::PaperStatementAddress.group(), FieldGroup::General);
    }

    #[test]
    fn field_kinds() {
        assert_eq!(FieldKey::RequestedCreditLimit.kind(), FieldKind::Number);
        assert_eq!(FieldKey::DeclarationConsent.kind(), FieldKind::Flag);
        assert_eq!(FieldKey::SelectedVas.kind(), FieldKind::List);
        assert_eq!(FieldKey::CardType.kind(), FieldKind::Text);
    }
}
