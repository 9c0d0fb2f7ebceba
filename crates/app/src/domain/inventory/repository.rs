//! Inventory Repository

use jiff::Timestamp;

use crate::{
    domain::inventory::{
        data::{InventoryFilter, InventoryItemUpdate, NewInventoryItem},
        records::{InventoryItemRecord, InventoryItemUuid},
    },
    store::{StoreError, Tables},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct InventoryRepository;

impl InventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn all_items<'t>(&self, tables: &'t Tables) -> &'t [InventoryItemRecord] {
        &tables.inventory
    }

    pub(crate) fn list_items(
        &self,
        tables: &Tables,
        filter: &InventoryFilter,
    ) -> Vec<InventoryItemRecord> {
        tables
            .inventory
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    pub(crate) fn list_low_stock(&self, tables: &Tables) -> Vec<InventoryItemRecord> {
        tables
            .inventory
            .iter()
            .filter(|item| item.is_low_stock())
            .cloned()
            .collect()
    }

    pub(crate) fn get_item<'t>(
        &self,
        tables: &'t Tables,
        item: InventoryItemUuid,
    ) -> Result<&'t InventoryItemRecord, StoreError> {
        tables
            .inventory
            .iter()
            .find(|record| record.uuid == item)
            .ok_or(StoreError::NotFound)
    }

    pub(crate) fn get_item_mut<'t>(
        &self,
        tables: &'t mut Tables,
        item: InventoryItemUuid,
    ) -> Result<&'t mut InventoryItemRecord, StoreError> {
        tables
            .inventory
            .iter_mut()
            .find(|record| record.uuid == item)
            .ok_or(StoreError::NotFound)
    }

    pub(crate) fn create_item(
        &self,
        tables: &mut Tables,
        item: NewInventoryItem,
        now: Timestamp,
    ) -> Result<InventoryItemRecord, StoreError> {
        if tables.inventory.iter().any(|record| record.uuid == item.uuid) {
            return Err(StoreError::UniqueViolation("uuid"));
        }

        Self::ensure_unique_sku(tables, &item.sku, None)?;

        let record = item.into_record(now);

        tables.inventory.push(record.clone());

        Ok(record)
    }

    pub(crate) fn update_item(
        &self,
        tables: &mut Tables,
        item: InventoryItemUuid,
        update: InventoryItemUpdate,
        now: Timestamp,
    ) -> Result<InventoryItemRecord, StoreError> {
        if let Some(sku) = &update.sku {
            Self::ensure_unique_sku(tables, sku, Some(item))?;
        }

        let record = self.get_item_mut(tables, item)?;

        update.apply(record, now);

        Ok(record.clone())
    }

    pub(crate) fn delete_item(
        &self,
        tables: &mut Tables,
        item: InventoryItemUuid,
    ) -> Result<InventoryItemRecord, StoreError> {
        let index = tables
            .inventory
            .iter()
            .position(|record| record.uuid == item)
            .ok_or(StoreError::NotFound)?;

        Ok(tables.inventory.remove(index))
    }

    fn ensure_unique_sku(
        tables: &Tables,
        sku: &str,
        except: Option<InventoryItemUuid>,
    ) -> Result<(), StoreError> {
        let taken = tables
            .inventory
            .iter()
            .filter(|record| Some(record.uuid) != except)
            .any(|record| record.sku.eq_ignore_ascii_case(sku));

        if taken {
            return Err(StoreError::UniqueViolation("sku"));
        }

        Ok(())
    }
}
