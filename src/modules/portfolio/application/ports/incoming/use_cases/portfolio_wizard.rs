use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::{WizardId, WizardSessionError};
use crate::portfolio::domain::{
    DraftEdit, ListSection, PortfolioId, PortfolioRecord, PortfolioWizard, TemplateKind,
    WizardError,
};

/// Navigation requested by one wizard form post. Field edits are applied
/// before the action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
    Submit,
    Add(ListSection),
    Remove(ListSection, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    InProgress(PortfolioWizard),
    Submitted(PortfolioRecord),
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioWizardError {
    #[error("Wizard session not found: {0}")]
    SessionNotFound(WizardId),

    #[error(transparent)]
    Rejected(#[from] WizardError),

    /// The record being edited disappeared before submit.
    #[error("Portfolio not found: {0}")]
    PortfolioNotFound(PortfolioId),
}

impl From<WizardSessionError> for PortfolioWizardError {
    fn from(err: WizardSessionError) -> Self {
        match err {
            WizardSessionError::NotFound(id) => PortfolioWizardError::SessionNotFound(id),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioWizardUseCase: Send + Sync {
    /// Opens a wizard for `template`, seeded from the record currently being
    /// edited when there is one.
    async fn start(&self, template: TemplateKind) -> WizardId;

    /// Opens a seeded wizard with the edited record's own template, or `None`
    /// when nothing is being edited.
    async fn resume_editing(&self) -> Option<WizardId>;

    async fn get(&self, id: WizardId) -> Result<PortfolioWizard, PortfolioWizardError>;

    /// Applies `edits` in order, then `action`. Any rejected edit aborts the
    /// whole post and leaves the session untouched.
    async fn advance(
        &self,
        id: WizardId,
        edits: Vec<DraftEdit>,
        action: WizardAction,
    ) -> Result<WizardOutcome, PortfolioWizardError>;
}
