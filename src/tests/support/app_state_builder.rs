use std::sync::Arc;

use actix_web::web;

use crate::portfolio::adapter::outgoing::{
    InMemoryPortfolioStore, InMemoryWizardSessionStore, MinijinjaPageRenderer,
};
use crate::portfolio::application::ports::incoming::use_cases::GetSinglePortfolioUseCase;
use crate::portfolio::application::ports::outgoing::PageRenderer;
use crate::portfolio::application::PortfolioUseCases;
use crate::AppState;

/// Builds an [`AppState`] backed by fresh in-memory stores and the real
/// page renderer. Tests keep handles to the stores (they share state with
/// the built app) and swap single collaborators for stubs.
pub struct TestAppStateBuilder {
    store: InMemoryPortfolioStore,
    sessions: InMemoryWizardSessionStore,
    renderer: Option<Arc<dyn PageRenderer + Send + Sync>>,
    get_single: Option<Arc<dyn GetSinglePortfolioUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: InMemoryPortfolioStore::new(),
            sessions: InMemoryWizardSessionStore::new(),
            renderer: None,
            get_single: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn store(&self) -> InMemoryPortfolioStore {
        self.store.clone()
    }

    pub fn sessions(&self) -> InMemoryWizardSessionStore {
        self.sessions.clone()
    }

    /// Replaces the session store with an empty one holding at most
    /// `capacity` wizards. Call before [`sessions`](Self::sessions).
    pub fn with_session_capacity(mut self, capacity: usize) -> Self {
        self.sessions = InMemoryWizardSessionStore::with_capacity(capacity);
        self
    }

    pub fn with_renderer(mut self, renderer: impl PageRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn with_get_single(
        mut self,
        uc: impl GetSinglePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let mut portfolio = PortfolioUseCases::in_memory(self.store, self.sessions);
        if let Some(get_single) = self.get_single {
            portfolio.get_single = get_single;
        }

        let renderer = self.renderer.unwrap_or_else(|| {
            Arc::new(MinijinjaPageRenderer::new().expect("templates should register"))
        });

        web::Data::new(AppState {
            portfolio,
            renderer,
        })
    }
}
