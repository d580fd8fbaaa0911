use async_trait::async_trait;

use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditSelectionError {
    #[error("Portfolio not found: {0}")]
    NotFound(PortfolioId),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Manages the "currently editing" pointer.
#[async_trait]
pub trait EditSelectionUseCase: Send + Sync {
    /// Marks the stored record `id` as the one being edited.
    async fn select(&self, id: PortfolioId) -> Result<PortfolioRecord, EditSelectionError>;

    async fn clear(&self);

    async fn current(&self) -> Option<PortfolioRecord>;
}
