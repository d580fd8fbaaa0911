use async_trait::async_trait;
use tracing::{debug, info};

use crate::portfolio::application::ports::incoming::use_cases::{
    PortfolioWizardError, PortfolioWizardUseCase, WizardAction, WizardOutcome,
};
use crate::portfolio::application::ports::outgoing::{
    PortfolioStore, PortfolioStoreError, WizardId, WizardSessionStore,
};
use crate::portfolio::domain::{
    DraftEdit, ListItem, PortfolioRecord, PortfolioWizard, SubmissionMode, TemplateKind,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Drives wizard sessions and writes the result to the portfolio store on
/// submit.
pub struct PortfolioWizardService<S, W>
where
    S: PortfolioStore,
    W: WizardSessionStore,
{
    store: S,
    sessions: W,
}

impl<S, W> PortfolioWizardService<S, W>
where
    S: PortfolioStore,
    W: WizardSessionStore,
{
    pub fn new(store: S, sessions: W) -> Self {
        Self { store, sessions }
    }

    async fn persist(&self, record: &PortfolioRecord, mode: SubmissionMode) -> Result<(), PortfolioWizardError> {
        match mode {
            SubmissionMode::Create => {
                self.store.add(record.clone()).await;
                info!(portfolio_id = %record.id, template = %record.template, "Portfolio created");
            }
            SubmissionMode::Update => {
                self.store
                    .update(record.id, record.clone())
                    .await
                    .map_err(|e| match e {
                        PortfolioStoreError::NotFound(id) => {
                            PortfolioWizardError::PortfolioNotFound(id)
                        }
                    })?;
                info!(portfolio_id = %record.id, template = %record.template, "Portfolio updated");
            }
        }
        Ok(())
    }

    /// Takes the session out before persisting so that concurrent submits
    /// of one wizard store a single record. Any failure puts the untouched
    /// session back.
    async fn submit(
        &self,
        id: WizardId,
        edits: Vec<DraftEdit>,
    ) -> Result<WizardOutcome, PortfolioWizardError> {
        let taken = self
            .sessions
            .remove(id)
            .await
            .ok_or(PortfolioWizardError::SessionNotFound(id))?;

        let result = self.finish(taken.clone(), edits).await;
        if result.is_err() {
            self.sessions.restore(id, taken).await;
        }
        result
    }

    async fn finish(
        &self,
        mut wizard: PortfolioWizard,
        edits: Vec<DraftEdit>,
    ) -> Result<WizardOutcome, PortfolioWizardError> {
        for edit in edits {
            wizard.apply(edit)?;
        }
        let submission = wizard.submit()?;
        self.persist(&submission.record, submission.mode).await?;
        self.store.set_current(None).await;
        Ok(WizardOutcome::Submitted(submission.record))
    }
}

#[async_trait]
impl<S, W> PortfolioWizardUseCase for PortfolioWizardService<S, W>
where
    S: PortfolioStore + Send + Sync,
    W: WizardSessionStore + Send + Sync,
{
    async fn start(&self, template: TemplateKind) -> WizardId {
        let wizard = match self.store.current().await {
            Some(seed) => PortfolioWizard::start_editing(template, &seed),
            None => PortfolioWizard::start(template),
        };
        let editing = wizard.is_editing();
        let id = self.sessions.insert(wizard).await;
        debug!(wizard_id = %id, %template, editing, "Wizard started");
        id
    }

    async fn resume_editing(&self) -> Option<WizardId> {
        let seed = self.store.current().await?;
        let id = self
            .sessions
            .insert(PortfolioWizard::start_editing(seed.template, &seed))
            .await;
        debug!(wizard_id = %id, portfolio_id = %seed.id, "Wizard resumed for editing");
        Some(id)
    }

    async fn get(&self, id: WizardId) -> Result<PortfolioWizard, PortfolioWizardError> {
        self.sessions
            .get(id)
            .await
            .ok_or(PortfolioWizardError::SessionNotFound(id))
    }

    async fn advance(
        &self,
        id: WizardId,
        edits: Vec<DraftEdit>,
        action: WizardAction,
    ) -> Result<WizardOutcome, PortfolioWizardError> {
        let mut wizard = match action {
            WizardAction::Submit => return self.submit(id, edits).await,
            _ => self.get(id).await?,
        };
        for edit in edits {
            wizard.apply(edit)?;
        }

        match action {
            WizardAction::Next => wizard.next(),
            WizardAction::Previous => wizard.previous(),
            WizardAction::Add(section) => {
                wizard.apply(DraftEdit::Append(ListItem::blank(section)))?
            }
            WizardAction::Remove(section, index) => {
                wizard.apply(DraftEdit::Remove { section, index })?
            }
            // Dispatched to `submit` above.
            WizardAction::Submit => {}
        }

        self.sessions.save(id, wizard.clone()).await?;
        Ok(WizardOutcome::InProgress(wizard))
    }
}
