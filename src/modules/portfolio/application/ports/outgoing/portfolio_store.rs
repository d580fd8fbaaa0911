use async_trait::async_trait;

use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioStoreError {
    #[error("Portfolio not found: {0}")]
    NotFound(PortfolioId),
}

/// Session-lifetime collection of portfolios plus the "currently editing"
/// pointer.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Appends the record. No deduplication, never fails.
    async fn add(&self, record: PortfolioRecord);

    /// Replaces the record stored under `id` in place, keeping its position.
    /// The stored record always keeps `id`, whatever `record.id` says.
    /// Returns `NotFound` and leaves the collection untouched when no record
    /// has that id.
    async fn update(
        &self,
        id: PortfolioId,
        record: PortfolioRecord,
    ) -> Result<PortfolioRecord, PortfolioStoreError>;

    async fn get_by_id(&self, id: PortfolioId) -> Option<PortfolioRecord>;

    /// All records in insertion order.
    async fn list(&self) -> Vec<PortfolioRecord>;

    async fn set_current(&self, record: Option<PortfolioRecord>);

    async fn current(&self) -> Option<PortfolioRecord>;
}
