//! Wizard step state machine
//!
//! Six linear steps with back/forward navigation and no skip-ahead. The
//! final step's forward action branches on the document gate: Submit
//! when every required upload is present, otherwise Save as Incomplete
//! (which shows the missing-field summary before persisting).

use tracing::debug;

use crate::documents;
use crate::error::FormError;
use crate::form::state::{FormPatch, FormState};
use crate::validation::{format_missing_fields, validate_required_fields};

/// The six wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    CardSelection,
    PersonalAndAddress,
    Employment,
    Supplementary,
    Preferences,
    Declaration,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::CardSelection;
    pub const LAST: WizardStep = WizardStep::Declaration;

    /// 1-based step number shown in the progress bar
    pub fn number(self) -> u8 {
        match self {
            WizardStep::CardSelection => 1,
            WizardStep::PersonalAndAddress => 2,
            WizardStep::Employment => 3,
            WizardStep::Supplementary => 4,
            WizardStep::Preferences => 5,
            WizardStep::Declaration => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::CardSelection => "Card Selection",
            WizardStep::PersonalAndAddress => "Personal & Address",
            WizardStep::Employment => "Employment",
            WizardStep::Supplementary => "Supplementary",
            WizardStep::Preferences => "Preferences",
            WizardStep::Declaration => "Declaration",
        }
    }

    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::CardSelection => Some(WizardStep::PersonalAndAddress),
            WizardStep::PersonalAndAddress => Some(WizardStep::Employment),
            WizardStep::Employment => Some(WizardStep::Supplementary),
            WizardStep::Supplementary => Some(WizardStep::Preferences),
            WizardStep::Preferences => Some(WizardStep::Declaration),
            WizardStep::Declaration => None,
        }
    }

    pub fn back(self) -> Option<WizardStep> {
        match self {
            WizardStep::CardSelection => None,
            WizardStep::PersonalAndAddress => Some(WizardStep::CardSelection),
            WizardStep::Employment => Some(WizardStep::PersonalAndAddress),
            WizardStep::Supplementary => Some(WizardStep::Employment),
            WizardStep::Preferences => Some(WizardStep::Supplementary),
            WizardStep::Declaration => Some(WizardStep::Preferences),
        }
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::LAST
    }
}

/// How the final step resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalAction {
    Submit,
    SaveIncomplete,
}

/// Result of a forward navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(WizardStep),
    Finish(FinalAction),
}

/// One application session: current step plus the form snapshot
#[derive(Debug, Clone)]
pub struct ApplicationWizard {
    step: WizardStep,
    form: FormState,
}

impl ApplicationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::FIRST,
            form: FormState::new(),
        }
    }

    /// Resume from a previously saved form
    pub fn with_form(form: FormState) -> Self {
        Self {
            step: WizardStep::FIRST,
            form,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Fold user input into the session's snapshot
    pub fn update(&mut self, patch: &FormPatch) -> Result<(), FormError> {
        self.form = self.form.apply(patch)?;
        Ok(())
    }

    /// The final step's pending action, given the current uploads
    pub fn final_action(&self) -> FinalAction {
        if documents::is_complete(&self.form) {
            FinalAction::Submit
        } else {
            FinalAction::SaveIncomplete
        }
    }

    /// Label for the forward button
    pub fn forward_label(&self) -> &'static str {
        if !self.step.is_last() {
            "Next"
        } else {
            match self.final_action() {
                FinalAction::Submit => "Submit",
                FinalAction::SaveIncomplete => "Save as Incomplete",
            }
        }
    }

    /// Move forward one step, or resolve the final action
    pub fn advance(&mut self) -> Advance {
        match self.step.next() {
            Some(next) => {
                debug!(from = self.step.number(), to = next.number(), "step forward");
                self.step = next;
                Advance::Moved(next)
            }
            None => Advance::Finish(self.final_action()),
        }
    }

    /// Move back one step; stays put on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.back() {
            debug!(from = self.step.number(), to = prev.number(), "step back");
            self.step = prev;
        }
        self.step
    }

    /// The save-incomplete confirmation message: what is still missing
    pub fn missing_summary(&self) -> String {
        format_missing_fields(&validate_required_fields(&self.form))
    }
}

impl Default for ApplicationWizard {
    fn default() -> Self {
        Self::new()
    }
}
