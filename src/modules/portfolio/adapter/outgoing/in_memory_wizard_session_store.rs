use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::portfolio::application::ports::outgoing::{
    WizardId, WizardSessionError, WizardSessionStore,
};
use crate::portfolio::domain::PortfolioWizard;

pub const DEFAULT_SESSION_CAPACITY: usize = 256;

#[derive(Debug, Default)]
struct SessionState {
    sessions: HashMap<WizardId, PortfolioWizard>,
    /// Ids oldest first; may hold ids that were already removed.
    order: VecDeque<WizardId>,
}

impl SessionState {
    fn put(&mut self, id: WizardId, wizard: PortfolioWizard, capacity: usize) {
        while !self.sessions.contains_key(&id) && self.sessions.len() >= capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if self.sessions.remove(&oldest).is_some() {
                debug!(wizard_id = %oldest, "Evicted abandoned wizard session");
            }
        }
        self.order.retain(|existing| *existing != id);
        self.order.push_back(id);
        self.sessions.insert(id, wizard);
    }
}

/// In-progress wizards keyed by the id carried in the form URL.
///
/// Holds at most `capacity` sessions; starting one more evicts the session
/// that was started (or restored) longest ago.
#[derive(Debug, Clone)]
pub struct InMemoryWizardSessionStore {
    state: Arc<RwLock<SessionState>>,
    capacity: usize,
}

impl InMemoryWizardSessionStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

impl Default for InMemoryWizardSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WizardSessionStore for InMemoryWizardSessionStore {
    async fn insert(&self, wizard: PortfolioWizard) -> WizardId {
        let id = WizardId::generate();
        self.state.write().await.put(id, wizard, self.capacity);
        id
    }

    async fn get(&self, id: WizardId) -> Option<PortfolioWizard> {
        self.state.read().await.sessions.get(&id).cloned()
    }

    async fn save(&self, id: WizardId, wizard: PortfolioWizard) -> Result<(), WizardSessionError> {
        let mut state = self.state.write().await;
        let slot = state
            .sessions
            .get_mut(&id)
            .ok_or(WizardSessionError::NotFound(id))?;
        *slot = wizard;
        Ok(())
    }

    async fn remove(&self, id: WizardId) -> Option<PortfolioWizard> {
        let mut state = self.state.write().await;
        let removed = state.sessions.remove(&id);
        if removed.is_some() {
            state.order.retain(|existing| *existing != id);
        }
        removed
    }

    async fn restore(&self, id: WizardId, wizard: PortfolioWizard) {
        self.state.write().await.put(id, wizard, self.capacity);
    }
}
