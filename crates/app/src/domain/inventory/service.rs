//! Inventory service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::inventory::{
        data::{InventoryFilter, InventoryItemUpdate, NewInventoryItem},
        errors::InventoryServiceError,
        records::{InventoryItemRecord, InventoryItemUuid},
        repository::InventoryRepository,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemoryInventoryService {
    store: Store,
    repository: InventoryRepository,
}

impl MemoryInventoryService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: InventoryRepository::new(),
        }
    }
}

#[async_trait]
impl InventoryService for MemoryInventoryService {
    async fn list_items(
        &self,
        filter: InventoryFilter,
    ) -> Result<Vec<InventoryItemRecord>, InventoryServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.list_items(&tables, &filter))
    }

    async fn list_low_stock(&self) -> Result<Vec<InventoryItemRecord>, InventoryServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.list_low_stock(&tables))
    }

    async fn get_item(
        &self,
        item: InventoryItemUuid,
    ) -> Result<InventoryItemRecord, InventoryServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.get_item(&tables, item)?.clone())
    }

    async fn create_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItemRecord, InventoryServiceError> {
        item.validate()?;

        let mut tables = self.store.write().await;

        Ok(self
            .repository
            .create_item(&mut tables, item, Timestamp::now())?)
    }

    async fn update_item(
        &self,
        item: InventoryItemUuid,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItemRecord, InventoryServiceError> {
        update.validate()?;

        let mut tables = self.store.write().await;

        Ok(self
            .repository
            .update_item(&mut tables, item, update, Timestamp::now())?)
    }

    async fn delete_item(&self, item: InventoryItemUuid) -> Result<(), InventoryServiceError> {
        let mut tables = self.store.write().await;

        self.repository.delete_item(&mut tables, item)?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Lists items matching the filter, in insertion order.
    async fn list_items(
        &self,
        filter: InventoryFilter,
    ) -> Result<Vec<InventoryItemRecord>, InventoryServiceError>;

    /// Lists items at or below their minimum stock level.
    async fn list_low_stock(&self) -> Result<Vec<InventoryItemRecord>, InventoryServiceError>;

    /// Retrieve a single item.
    async fn get_item(
        &self,
        item: InventoryItemUuid,
    ) -> Result<InventoryItemRecord, InventoryServiceError>;

    /// Creates a new inventory item.
    async fn create_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<InventoryItemRecord, InventoryServiceError>;

    /// Merges the update into the item with the given UUID.
    async fn update_item(
        &self,
        item: InventoryItemUuid,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItemRecord, InventoryServiceError>;

    /// Deletes the item with the given UUID.
    async fn delete_item(&self, item: InventoryItemUuid) -> Result<(), InventoryServiceError>;
}
