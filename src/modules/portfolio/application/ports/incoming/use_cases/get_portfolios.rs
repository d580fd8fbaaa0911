use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::portfolio::domain::{FilterFacets, PortfolioFilter, PortfolioRecord};

/// Filtered records plus the facet values drawn from the whole store, so the
/// dropdowns keep offering every option while a filter is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PortfolioListing {
    pub records: Vec<PortfolioRecord>,
    pub facets: FilterFacets,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPortfoliosUseCase: Send + Sync {
    async fn execute(&self, filter: &PortfolioFilter) -> PortfolioListing;
}
