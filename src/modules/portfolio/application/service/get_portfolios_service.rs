use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfoliosUseCase, PortfolioListing,
};
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::{FilterFacets, PortfolioFilter};

pub struct GetPortfoliosService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> GetPortfoliosService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetPortfoliosUseCase for GetPortfoliosService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, filter: &PortfolioFilter) -> PortfolioListing {
        let all = self.store.list().await;
        let facets = FilterFacets::collect(&all);
        let records = filter.apply(&all).into_iter().cloned().collect();

        PortfolioListing { records, facets }
    }
}
