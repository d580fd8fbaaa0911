use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetSinglePortfolioError, GetSinglePortfolioUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::portfolio::domain::{PortfolioId, PortfolioRecord};

pub struct GetSinglePortfolioService<S>
where
    S: PortfolioStore,
{
    store: S,
}

impl<S> GetSinglePortfolioService<S>
where
    S: PortfolioStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSinglePortfolioUseCase for GetSinglePortfolioService<S>
where
    S: PortfolioStore + Send + Sync,
{
    async fn execute(&self, id: PortfolioId) -> Result<PortfolioRecord, GetSinglePortfolioError> {
        self.store
            .get_by_id(id)
            .await
            .ok_or(GetSinglePortfolioError::NotFound(id))
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
    async fn test_execute_returns_stored_record() {
        // Arrange
        let record = PortfolioRecord::new(
            PortfolioId::generate(),
            TemplateKind::Modern,
            PortfolioContent::with_form_defaults(),
        );
        let id = record.id;
        let stored = record.clone();
        let mut store = MockStore::new();
        store
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Some(stored.clone()));
        let service = GetSinglePortfolioService::new(store);

        // Act
        let result = service.execute(id).await;

        // Assert
        assert_eq!(result, Ok(record));
    }

    #[tokio::test]
    async fn test_execute_missing_record_is_not_found() {
        // Arrange
        let id = PortfolioId::generate();
        let mut store = MockStore::new();
        store.expect_get_by_id().returning(|_| None);
        let service = GetSinglePortfolioService::new(store);

        // Act
        let result = service.execute(id).await;

        // Assert
        assert_eq!(result, Err(GetSinglePortfolioError::NotFound(id)));
    }
}
