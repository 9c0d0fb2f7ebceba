//! Sales service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::sales::{
        data::NewSale,
        errors::SalesServiceError,
        records::{SaleRecord, SaleUuid},
        repository::SalesRepository,
    },
    pricing::TaxRate,
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemorySalesService {
    store: Store,
    repository: SalesRepository,
    tax_rate: TaxRate,
}

impl MemorySalesService {
    #[must_use]
    pub fn new(store: Store, tax_rate: TaxRate) -> Self {
        Self {
            store,
            repository: SalesRepository::new(),
            tax_rate,
        }
    }
}

#[async_trait]
impl SalesService for MemorySalesService {
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.list_sales(&tables))
    }

    async fn get_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.get_sale(&tables, sale)?.clone())
    }

    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError> {
        sale.validate()?;

        let record = sale.into_record(self.tax_rate, Timestamp::now());

        let mut tables = self.store.write().await;

        Ok(self.repository.append_sale(&mut tables, record)?)
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Lists every sale, newest first.
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError>;

    /// Retrieve a single sale.
    async fn get_sale(&self, sale: SaleUuid) -> Result<SaleRecord, SalesServiceError>;

    /// Records a sale. Line and grand totals are computed here, not taken from the caller.
    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            inventory::records::InventoryItemUuid,
            sales::{data::NewSaleItem, records::Customer},
        },
        test::{TestContext, sale_at},
    };

    use super::*;

    fn new_sale(uuid: SaleUuid) -> NewSale {
        NewSale {
            uuid,
            items: vec![NewSaleItem {
                item_uuid: InventoryItemUuid::new(),
                name: "Phone Charger".to_string(),
                price: Decimal::new(1_000, 2),
                quantity: 1,
            }],
            customer: Customer {
                name: Some("Ada".to_string()),
                ..Customer::default()
            },
        }
    }

    #[tokio::test]
    async fn create_sale_computes_total() -> TestResult {
        let ctx = TestContext::new();
        let uuid = SaleUuid::new();

        let sale = ctx.sales.create_sale(new_sale(uuid)).await?;

        assert_eq!(sale.uuid, uuid);
        assert_eq!(sale.total, Decimal::new(1_080, 2));
        assert_eq!(sale.customer.name.as_deref(), Some("Ada"));

        Ok(())
    }

    #[tokio::test]
    async fn create_sale_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new();
        let uuid = SaleUuid::new();

        ctx.sales.create_sale(new_sale(uuid)).await?;

        let result = ctx.sales.create_sale(new_sale(uuid)).await;

        assert!(
            matches!(result, Err(SalesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_sale_without_items_is_rejected() {
        let ctx = TestContext::new();

        let mut sale = new_sale(SaleUuid::new());
        sale.items.clear();

        let result = ctx.sales.create_sale(sale).await;

        assert!(
            matches!(result, Err(SalesServiceError::NoItems)),
            "expected NoItems, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_sale_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.sales.get_sale(SaleUuid::new()).await;

        assert!(
            matches!(result, Err(SalesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_sales_sorts_newest_first_regardless_of_insertion_order() -> TestResult {
        let older = sale_at("2026-03-01T10:00:00Z", Decimal::ONE)?;
        let newer = sale_at("2026-03-05T10:00:00Z", Decimal::TWO)?;

        let ctx = TestContext::with_sales(vec![older.clone(), newer.clone()]);

        let sales = ctx.sales.list_sales().await?;

        assert_eq!(
            sales.iter().map(|sale| sale.uuid).collect::<Vec<_>>(),
            vec![newer.uuid, older.uuid]
        );

        Ok(())
    }
}
