use async_trait::async_trait;

use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSinglePortfolioError {
    #[error("Portfolio not found: {0}")]
    NotFound(PortfolioId),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSinglePortfolioUseCase: Send + Sync {
    async fn execute(&self, id: PortfolioId) -> Result<PortfolioRecord, GetSinglePortfolioError>;
}
