use async_trait::async_trait;

use crate::portfolio::domain::{PortfolioContent, PortfolioRecord, TemplateKind};

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Stores a brand-new portfolio under a freshly generated id.
#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(&self, template: TemplateKind, content: PortfolioContent) -> PortfolioRecord;
}
