use std::sync::Arc;

use crate::portfolio::adapter::outgoing::{InMemoryPortfolioStore, InMemoryWizardSessionStore};
use crate::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, EditSelectionUseCase, GetPortfoliosUseCase,
    GetSinglePortfolioUseCase, PortfolioWizardUseCase, UpdatePortfolioUseCase,
};
use crate::portfolio::application::service::{
    CreatePortfolioService, EditSelectionService, GetPortfoliosService,
    GetSinglePortfolioService, PortfolioWizardService, UpdatePortfolioService,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePortfolioUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPortfoliosUseCase + Send + Sync>,
    pub edit_selection: Arc<dyn EditSelectionUseCase + Send + Sync>,
    pub wizard: Arc<dyn PortfolioWizardUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires every use case to the same in-memory store and session store.
    pub fn in_memory(store: InMemoryPortfolioStore, sessions: InMemoryWizardSessionStore) -> Self {
        Self {
            create: Arc::new(CreatePortfolioService::new(store.clone())),
            update: Arc::new(UpdatePortfolioService::new(store.clone())),
            get_single: Arc::new(GetSinglePortfolioService::new(store.clone())),
            get_list: Arc::new(GetPortfoliosService::new(store.clone())),
            edit_selection: Arc::new(EditSelectionService::new(store.clone())),
            wizard: Arc::new(PortfolioWizardService::new(store, sessions)),
        }
    }
}
