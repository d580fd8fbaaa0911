use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    UpdatePortfolioError, UpdatePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::{PortfolioContent, PortfolioId, PortfolioRecord, TemplateKind};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdatePortfolioService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> UpdatePortfolioService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UpdatePortfolioUseCase for UpdatePortfolioService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(
        &self,
        id: PortfolioId,
        template: TemplateKind,
        content: PortfolioContent,
    ) -> Result<PortfolioRecord, UpdatePortfolioError> {
        let record = PortfolioRecord::new(id, template, content);
        Ok(self.store.update(id, record).await?)
    }
}
