use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::CreatePortfolioUseCase;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::{PortfolioContent, PortfolioId, PortfolioRecord, TemplateKind};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> CreatePortfolioService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> CreatePortfolioUseCase for CreatePortfolioService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, template: TemplateKind, content: PortfolioContent) -> PortfolioRecord {
        let record = PortfolioRecord::new(PortfolioId::generate(), template, content);
        self.store.add(record.clone()).await;
        record
    }
}
