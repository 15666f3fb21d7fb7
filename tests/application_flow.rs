//! Full application session: wizard navigation, the save-incomplete
//! path, submission, and reload.

use std::time::Duration;

use ccapp::form::{FieldKey, FormPatch};
use ccapp::store::{self, ApplicationStatus, MemoryStore, SnapshotStore, STORE_KEY};
use ccapp::wizard::{Advance, ApplicationWizard, FinalAction, WizardStep};

fn business_documents() -> FormPatch {
    FormPatch::new()
        .set(FieldKey::ApplicationType, "Business")
        .set(FieldKey::BizNicCopy, "nic.pdf")
        .set(FieldKey::BizBusinessReg, "reg.pdf")
        .set(FieldKey::BizBusinessCrib, "crib.pdf")
        .set(FieldKey::BizBankStatements, "statements.pdf")
        .set(FieldKey::BizCardApplicationReview, "review.pdf")
        .set(FieldKey::BizCribReports, "reports.pdf")
}

#[tokio::test]
async fn abandoning_the_final_step_saves_incomplete() {
    let mut wizard = ApplicationWizard::new();
    wizard
        .update(&FormPatch::new().set(FieldKey::FullName, "A. Perera"))
        .unwrap();

    while let Advance::Moved(_) = wizard.advance() {}
    assert_eq!(wizard.step(), WizardStep::Declaration);
    assert_eq!(wizard.advance(), Advance::Finish(FinalAction::SaveIncomplete));

    // the confirmation dialog shows the missing summary first
    let summary = wizard.missing_summary();
    assert!(summary.contains("Card Type"));
    assert!(!summary.contains("Full Name"));

    let mut store = MemoryStore::new();
    let snapshot = store::save_incomplete(&mut store, wizard.form(), Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(snapshot.status, ApplicationStatus::Incomplete);

    // the whole form made it into the snapshot
    let loaded = store::load(&store).unwrap().unwrap();
    assert_eq!(loaded.form_data.text(FieldKey::FullName), "A. Perera");
}

#[test]
fn completed_documents_switch_the_final_action_to_submit() {
    let mut wizard = ApplicationWizard::new();
    while let Advance::Moved(_) = wizard.advance() {}
    assert_eq!(wizard.forward_label(), "Save as Incomplete");

    wizard.update(&business_documents()).unwrap();
    assert_eq!(wizard.forward_label(), "Submit");
    assert_eq!(wizard.advance(), Advance::Finish(FinalAction::Submit));

    let mut store = MemoryStore::new();
    let snapshot = store::submit(&mut store, wizard.form()).unwrap();
    assert_eq!(snapshot.status, ApplicationStatus::Submitted);
}

#[tokio::test]
async fn resumed_form_keeps_earlier_answers() {
    let mut store = MemoryStore::new();

    let mut first_session = ApplicationWizard::new();
    first_session
        .update(
            &FormPatch::new()
                .set(FieldKey::CardType, "Visa Gold")
                .set(FieldKey::IdentityType, "NIC")
                .set(FieldKey::NicNumber, "912345678V"),
        )
        .unwrap();
    store::save_incomplete(&mut store, first_session.form(), Duration::ZERO)
        .await
        .unwrap();

    let saved = store::load(&store).unwrap().unwrap();
    let resumed = ApplicationWizard::with_form(saved.form_data);
    assert_eq!(resumed.form().text(FieldKey::CardType), "Visa Gold");
    assert_eq!(resumed.step(), WizardStep::CardSelection);

    // the resumed report no longer asks for what was answered
    let summary = resumed.missing_summary();
    assert!(!summary.contains("Card Type"));
    assert!(!summary.contains("\u{2022} NIC Number"));
}

#[test]
fn snapshot_overwrites_are_wholesale() {
    let mut store = MemoryStore::new();

    let mut wizard = ApplicationWizard::new();
    wizard
        .update(&FormPatch::new().set(FieldKey::FullName, "First Draft"))
        .unwrap();
    store::submit(&mut store, wizard.form()).unwrap();
    let first = store.get(STORE_KEY).unwrap();

    wizard
        .update(&FormPatch::new().set(FieldKey::FullName, "Second Draft"))
        .unwrap();
    store::submit(&mut store, wizard.form()).unwrap();
    let second = store.get(STORE_KEY).unwrap();

    assert_ne!(first, second);
    assert!(second.contains("Second Draft"));
    assert!(!second.contains("First Draft"));
}
