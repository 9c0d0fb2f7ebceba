//! Sales Repository

use crate::{
    domain::sales::records::{SaleRecord, SaleUuid},
    store::{StoreError, Tables},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct SalesRepository;

impl SalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All sales in insertion order.
    pub(crate) fn all_sales<'t>(&self, tables: &'t Tables) -> &'t [SaleRecord] {
        &tables.sales
    }

    /// All sales, newest first.
    pub(crate) fn list_sales(&self, tables: &Tables) -> Vec<SaleRecord> {
        let mut sales = tables.sales.clone();

        sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        sales
    }

    pub(crate) fn get_sale<'t>(
        &self,
        tables: &'t Tables,
        sale: SaleUuid,
    ) -> Result<&'t SaleRecord, StoreError> {
        tables
            .sales
            .iter()
            .find(|record| record.uuid == sale)
            .ok_or(StoreError::NotFound)
    }

    pub(crate) fn append_sale(
        &self,
        tables: &mut Tables,
        sale: SaleRecord,
    ) -> Result<SaleRecord, StoreError> {
        if tables.sales.iter().any(|record| record.uuid == sale.uuid) {
            return Err(StoreError::UniqueViolation("uuid"));
        }

        tables.sales.push(sale.clone());

        Ok(sale)
    }
}
