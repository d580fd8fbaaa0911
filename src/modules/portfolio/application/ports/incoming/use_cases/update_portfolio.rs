use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::PortfolioStoreError;
use crate::portfolio::domain::{PortfolioContent, PortfolioId, PortfolioRecord, TemplateKind};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdatePortfolioError {
    #[error("Portfolio not found: {0}")]
    NotFound(PortfolioId),
}

impl From<PortfolioStoreError> for UpdatePortfolioError {
    fn from(err: PortfolioStoreError) -> Self {
        match err {
            PortfolioStoreError::NotFound(id) => UpdatePortfolioError::NotFound(id),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Replaces a stored portfolio wholesale. The id never changes.
#[async_trait]
pub trait UpdatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        id: PortfolioId,
        template: TemplateKind,
        content: PortfolioContent,
    ) -> Result<PortfolioRecord, UpdatePortfolioError>;
}
