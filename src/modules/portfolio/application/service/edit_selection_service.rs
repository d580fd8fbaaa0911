use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    EditSelectionError, EditSelectionUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

pub struct EditSelectionService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> EditSelectionService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> EditSelectionUseCase for EditSelectionService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn select(&self, id: PortfolioId) -> Result<PortfolioRecord, EditSelectionError> {
        let record = self
            .store
            .get_by_id(id)
            .await
            .ok_or(EditSelectionError::NotFound(id))?;
        self.store.set_current(Some(record.clone())).await;
        Ok(record)
    }

    async fn clear(&self) {
        self.store.set_current(None).await;
    }

    async fn current(&self) -> Option<PortfolioRecord> {
        self.store.current().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::ports::outgoing::PortfolioStoreError;
    use crate::portfolio::domain::{PortfolioContent, TemplateKind};
    use mockall::{mock, predicate::*};

    mock! {
        pub Store {}
        #[async_trait]
        impl PortfolioStore for Store {
            async fn add(&self, record: PortfolioRecord);
            async fn update(
                &self,
                id: PortfolioId,
                record: PortfolioRecord,
            ) -> Result<PortfolioRecord, PortfolioStoreError>;
            async fn get_by_id(&self, id: PortfolioId) -> Option<PortfolioRecord>;
            async fn list(&self) -> Vec<PortfolioRecord>;
            async fn set_current(&self, record: Option<PortfolioRecord>);
            async fn current(&self) -> Option<PortfolioRecord>;
        }
    }

    #[tokio::test]
    async fn test_select_sets_current_pointer() {
        // Arrange
        let record = PortfolioRecord::new(
            PortfolioId::generate(),
            TemplateKind::Classic,
            PortfolioContent::default(),
        );
        let id = record.id;
        let stored = record.clone();
        let expected = Some(record.clone());
        let mut store = MockStore::new();
        store
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Some(stored.clone()));
        store
            .expect_set_current()
            .with(eq(expected))
            .times(1)
            .returning(|_| ());
        let service = EditSelectionService::new(store);

        // Act
        let result = service.select(id).await;

        // Assert
        assert_eq!(result, Ok(record));
    }

    #[tokio::test]
    async fn test_select_unknown_id_leaves_pointer_alone() {
        // Arrange
        let id = PortfolioId::generate();
        let mut store = MockStore::new();
        store.expect_get_by_id().returning(|_| None);
        store.expect_set_current().never();
        let service = EditSelectionService::new(store);

        // Act
        let result = service.select(id).await;

        // Assert
        assert_eq!(result, Err(EditSelectionError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_clear_resets_pointer() {
        // Arrange
        let mut store = MockStore::new();
        store
            .expect_set_current()
            .with(eq(None::<PortfolioRecord>))
            .times(1)
            .returning(|_| ());
        let service = EditSelectionService::new(store);

        // Act & Assert
        service.clear().await;
    }
}
