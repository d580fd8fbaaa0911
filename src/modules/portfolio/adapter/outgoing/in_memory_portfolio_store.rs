//! Process-lifetime portfolio storage.
//!
//! Records and the edit pointer share one lock, so each operation is applied
//! whole. A restart starts from an empty store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::portfolio::application::ports::outgoing::{PortfolioStore, PortfolioStoreError};
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

#[derive(Debug, Default)]
struct StoreState {
    records: Vec<PortfolioRecord>,
    current: Option<PortfolioRecord>,
}

/// Cloneable handle; clones see the same records.
#[derive(Debug, Clone)]
pub struct InMemoryPortfolioStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn add(&self, record: PortfolioRecord) {
        self.state.write().await.records.push(record);
    }

    async fn update(
        &self,
        id: PortfolioId,
        mut record: PortfolioRecord,
    ) -> Result<PortfolioRecord, PortfolioStoreError> {
        let mut state = self.state.write().await;
        let slot = state
            .records
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(PortfolioStoreError::NotFound(id))?;

        record.id = id;
        *slot = record.clone();
        Ok(record)
    }

    async fn get_by_id(&self, id: PortfolioId) -> Option<PortfolioRecord> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    async fn list(&self) -> Vec<PortfolioRecord> {
        self.state.read().await.records.clone()
    }

    async fn set_current(&self, record: Option<PortfolioRecord>) {
        self.state.write().await.current = record;
    }

    async fn current(&self) -> Option<PortfolioRecord> {
        self.state.read().await.current.clone()
    }
}
