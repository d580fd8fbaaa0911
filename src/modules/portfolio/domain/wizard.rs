//! The eight-step portfolio form.
//!
//! A wizard owns a draft [`PortfolioContent`] plus the template chosen on
//! entry. Steps move one at a time and clamp at both ends; only the last step
//! can submit, which is the one place a [`PortfolioRecord`] gets built.

use serde::Serialize;

use super::draft_edit::{DraftEdit, DraftEditError};
use super::entities::{PortfolioContent, PortfolioId, PortfolioRecord};
use super::template_catalog::TemplateKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Hero,
    About,
    Skills,
    Services,
    Portfolio,
    Testimonials,
    Blog,
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Hero,
        WizardStep::About,
        WizardStep::Skills,
        WizardStep::Services,
        WizardStep::Portfolio,
        WizardStep::Testimonials,
        WizardStep::Blog,
        WizardStep::Contact,
    ];

    pub const FIRST: WizardStep = WizardStep::Hero;
    pub const LAST: WizardStep = WizardStep::Contact;

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Hero => "Hero Section",
            WizardStep::About => "About Me",
            WizardStep::Skills => "Skills",
            WizardStep::Services => "Services",
            WizardStep::Portfolio => "Portfolio",
            WizardStep::Testimonials => "Testimonials",
            WizardStep::Blog => "Blog",
            WizardStep::Contact => "Contact",
        }
    }

    fn next(self) -> WizardStep {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    fn previous(self) -> WizardStep {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::FIRST)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    Create,
    Update,
}

/// What the wizard hands back on submit: the finished record and whether it
/// replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSubmission {
    pub record: PortfolioRecord,
    pub mode: SubmissionMode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Submit is only available on the last step (currently on {0:?})")]
    NotAtFinalStep(WizardStep),

    #[error(transparent)]
    InvalidEdit(#[from] DraftEditError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioWizard {
    template: TemplateKind,
    step: WizardStep,
    draft: PortfolioContent,
    seed_id: Option<PortfolioId>,
}

impl PortfolioWizard {
    /// A fresh wizard over the form defaults.
    pub fn start(template: TemplateKind) -> Self {
        Self {
            template,
            step: WizardStep::FIRST,
            draft: PortfolioContent::with_form_defaults(),
            seed_id: None,
        }
    }

    /// A wizard pre-filled from an existing record. Submitting it reuses the
    /// record's id.
    pub fn start_editing(template: TemplateKind, seed: &PortfolioRecord) -> Self {
        Self {
            template,
            step: WizardStep::FIRST,
            draft: seed.content.clone(),
            seed_id: Some(seed.id),
        }
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &PortfolioContent {
        &self.draft
    }

    pub fn seed_id(&self) -> Option<PortfolioId> {
        self.seed_id
    }

    pub fn is_editing(&self) -> bool {
        self.seed_id.is_some()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::LAST
    }

    pub fn next(&mut self) {
        self.step = self.step.next();
    }

    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }

    pub fn apply(&mut self, edit: DraftEdit) -> Result<(), WizardError> {
        edit.apply(&mut self.draft)?;
        Ok(())
    }

    pub fn submit(&self) -> Result<PortfolioSubmission, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotAtFinalStep(self.step));
        }

        let (id, mode) = match self.seed_id {
            Some(id) => (id, SubmissionMode::Update),
            None => (PortfolioId::generate(), SubmissionMode::Create),
        };

        Ok(PortfolioSubmission {
            record: PortfolioRecord::new(id, self.template, self.draft.clone()),
            mode,
        })
    }
}
