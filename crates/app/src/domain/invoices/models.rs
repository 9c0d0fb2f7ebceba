//! Invoice Models

use jiff::{SignedDuration, Timestamp};

use crate::{
    domain::{
        invoices::errors::InvoicesServiceError,
        sales::records::{SaleRecord, SaleUuid},
    },
    pricing::{CheckoutTotals, TaxRate},
};

/// Days between issue and due date.
pub const PAYMENT_TERMS_DAYS: i64 = 30;

/// Characters of the sale id carried into the invoice number.
const INVOICE_NUMBER_SUFFIX_LEN: usize = 6;

/// Seller details printed on every invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDetails {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
}

/// An invoice view over a completed sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub number: String,
    pub sale: SaleRecord,
    pub issue_date: Timestamp,
    pub due_date: Timestamp,

    /// Subtotal and tax backed out of the sale's tax-inclusive total.
    pub totals: CheckoutTotals,

    pub company: CompanyDetails,
}

impl Invoice {
    /// Derive the invoice for `sale`.
    ///
    /// # Errors
    ///
    /// Fails only if the due date or the tax split cannot be represented.
    pub fn derive(
        sale: SaleRecord,
        rate: TaxRate,
        company: CompanyDetails,
    ) -> Result<Self, InvoicesServiceError> {
        let totals = CheckoutTotals::inverse(sale.total, rate)?;

        let due_date = sale
            .created_at
            .checked_add(SignedDuration::from_hours(PAYMENT_TERMS_DAYS * 24))?;

        Ok(Self {
            number: invoice_number(sale.uuid),
            issue_date: sale.created_at,
            due_date,
            totals,
            company,
            sale,
        })
    }
}

/// `INV-` followed by the last six characters of the sale id, uppercased.
#[must_use]
pub fn invoice_number(sale: SaleUuid) -> String {
    let id = sale.to_string();
    let start = id.len().saturating_sub(INVOICE_NUMBER_SUFFIX_LEN);

    format!("INV-{}", id.get(start..).unwrap_or_default().to_uppercase())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::domain::sales::records::Customer;

    use super::*;

    fn sale(total: Decimal) -> TestResult<SaleRecord> {
        Ok(SaleRecord {
            uuid: SaleUuid::from_uuid(Uuid::parse_str("0192f1a4-7b3c-7d2e-9f10-abcdef123456")?),
            items: smallvec::SmallVec::new(),
            total,
            customer: Customer::default(),
            created_at: "2026-01-15T10:30:00Z".parse()?,
        })
    }

    #[test]
    fn invoice_number_uses_uppercased_id_suffix() -> TestResult {
        let sale = sale(Decimal::ONE)?;

        assert_eq!(invoice_number(sale.uuid), "INV-123456");

        let uuid = SaleUuid::from_uuid(Uuid::parse_str("0192f1a4-7b3c-7d2e-9f10-000000abcdef")?);

        assert_eq!(invoice_number(uuid), "INV-ABCDEF");

        Ok(())
    }

    #[test]
    fn due_date_is_thirty_days_after_issue() -> TestResult {
        let invoice = Invoice::derive(sale(Decimal::ONE)?, TaxRate::default(), CompanyDetails::default())?;

        assert_eq!(invoice.issue_date, "2026-01-15T10:30:00Z".parse::<Timestamp>()?);
        assert_eq!(invoice.due_date, "2026-02-14T10:30:00Z".parse::<Timestamp>()?);

        Ok(())
    }

    #[test]
    fn totals_are_backed_out_of_sale_total() -> TestResult {
        let invoice = Invoice::derive(
            sale(Decimal::new(2_700, 2))?,
            TaxRate::default(),
            CompanyDetails::default(),
        )?;

        assert_eq!(invoice.totals.subtotal, Decimal::new(2_500, 2));
        assert_eq!(invoice.totals.tax, Decimal::new(200, 2));
        assert_eq!(invoice.totals.total, Decimal::new(2_700, 2));

        Ok(())
    }
}
