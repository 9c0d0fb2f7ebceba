//! Invoices service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        invoices::{
            errors::InvoicesServiceError,
            models::{CompanyDetails, Invoice},
        },
        sales::{records::SaleUuid, repository::SalesRepository},
    },
    pricing::TaxRate,
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemoryInvoicesService {
    store: Store,
    repository: SalesRepository,
    tax_rate: TaxRate,
    company: CompanyDetails,
}

impl MemoryInvoicesService {
    #[must_use]
    pub fn new(store: Store, tax_rate: TaxRate, company: CompanyDetails) -> Self {
        Self {
            store,
            repository: SalesRepository::new(),
            tax_rate,
            company,
        }
    }
}

#[async_trait]
impl InvoicesService for MemoryInvoicesService {
    async fn get_invoice(&self, sale: SaleUuid) -> Result<Invoice, InvoicesServiceError> {
        let sale = {
            let tables = self.store.read().await;

            self.repository.get_sale(&tables, sale)?.clone()
        };

        Invoice::derive(sale, self.tax_rate, self.company.clone())
    }
}

#[automock]
#[async_trait]
pub trait InvoicesService: Send + Sync {
    /// Derive the invoice for a completed sale.
    async fn get_invoice(&self, sale: SaleUuid) -> Result<Invoice, InvoicesServiceError>;
}
