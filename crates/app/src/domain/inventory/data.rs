//! Inventory Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::inventory::{
    errors::InventoryServiceError,
    records::{InventoryItemRecord, InventoryItemUuid},
};

/// New Inventory Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub uuid: InventoryItemUuid,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock: u32,
    pub min_stock: u32,
    pub supplier: String,
}

impl NewInventoryItem {
    /// Reject blank identifying fields and negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::InvalidData`] naming the offending field.
    pub fn validate(&self) -> Result<(), InventoryServiceError> {
        require_text("name", &self.name)?;
        require_text("sku", &self.sku)?;
        require_amount("price", self.price)?;
        require_amount("cost", self.cost)
    }

    pub(crate) fn into_record(self, now: Timestamp) -> InventoryItemRecord {
        InventoryItemRecord {
            uuid: self.uuid,
            name: self.name,
            description: self.description,
            sku: self.sku,
            category: self.category,
            price: self.price,
            cost: self.cost,
            stock: self.stock,
            min_stock: self.min_stock,
            supplier: self.supplier,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Inventory Item Update Data
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub supplier: Option<String>,
}

impl InventoryItemUpdate {
    /// Validate only the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryServiceError::InvalidData`] naming the offending field.
    pub fn validate(&self) -> Result<(), InventoryServiceError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }

        if let Some(sku) = &self.sku {
            require_text("sku", sku)?;
        }

        if let Some(price) = self.price {
            require_amount("price", price)?;
        }

        if let Some(cost) = self.cost {
            require_amount("cost", cost)?;
        }

        Ok(())
    }

    /// Merge the present fields into `item` and bump its `updated_at`.
    pub(crate) fn apply(self, item: &mut InventoryItemRecord, now: Timestamp) {
        let Self {
            name,
            description,
            sku,
            category,
            price,
            cost,
            stock,
            min_stock,
            supplier,
        } = self;

        if let Some(name) = name {
            item.name = name;
        }

        if let Some(description) = description {
            item.description = description;
        }

        if let Some(sku) = sku {
            item.sku = sku;
        }

        if let Some(category) = category {
            item.category = category;
        }

        if let Some(price) = price {
            item.price = price;
        }

        if let Some(cost) = cost {
            item.cost = cost;
        }

        if let Some(stock) = stock {
            item.stock = stock;
        }

        if let Some(min_stock) = min_stock {
            item.min_stock = min_stock;
        }

        if let Some(supplier) = supplier {
            item.supplier = supplier;
        }

        item.updated_at = now;
    }
}

/// Inventory listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    /// Matched against name, SKU and description.
    pub search: Option<String>,

    /// Exact category, case-insensitive. `"all"` disables the filter.
    pub category: Option<String>,
}

impl InventoryFilter {
    pub(crate) fn matches(&self, item: &InventoryItemRecord) -> bool {
        let search = self
            .search
            .as_deref()
            .filter(|search| !search.is_empty())
            .is_none_or(|search| item.matches_search(search));

        let category = self
            .category
            .as_deref()
            .filter(|category| !category.is_empty() && !category.eq_ignore_ascii_case("all"))
            .is_none_or(|category| item.category.to_lowercase() == category.to_lowercase());

        search && category
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), InventoryServiceError> {
    if value.trim().is_empty() {
        return Err(InventoryServiceError::InvalidData(field));
    }

    Ok(())
}

fn require_amount(field: &'static str, value: Decimal) -> Result<(), InventoryServiceError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InventoryServiceError::InvalidData(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> InventoryItemRecord {
        NewInventoryItem {
            uuid: InventoryItemUuid::new(),
            name: "Wireless Mouse".to_string(),
            description: "2.4GHz ergonomic mouse".to_string(),
            sku: "WM-001".to_string(),
            category: "Electronics".to_string(),
            price: Decimal::new(2_999, 2),
            cost: Decimal::new(1_250, 2),
            stock: 12,
            min_stock: 15,
            supplier: "Peripherals Inc".to_string(),
        }
        .into_record(Timestamp::UNIX_EPOCH)
    }

    #[test]
    fn update_only_touches_present_fields() {
        let mut record = item();
        let now = Timestamp::UNIX_EPOCH + jiff::SignedDuration::from_secs(60);

        InventoryItemUpdate {
            stock: Some(40),
            price: Some(Decimal::new(2_499, 2)),
            ..InventoryItemUpdate::default()
        }
        .apply(&mut record, now);

        assert_eq!(record.stock, 40);
        assert_eq!(record.price, Decimal::new(2_499, 2));
        assert_eq!(record.name, "Wireless Mouse");
        assert_eq!(record.created_at, Timestamp::UNIX_EPOCH);
        assert_eq!(record.updated_at, now);
    }

    #[test]
    fn update_rejects_blank_name() {
        let update = InventoryItemUpdate {
            name: Some("  ".to_string()),
            ..InventoryItemUpdate::default()
        };

        assert!(matches!(
            update.validate(),
            Err(InventoryServiceError::InvalidData("name"))
        ));
    }

    #[test]
    fn new_item_rejects_negative_cost() {
        let mut new = NewInventoryItem {
            uuid: InventoryItemUuid::new(),
            name: "Cable".to_string(),
            description: String::new(),
            sku: "C-1".to_string(),
            category: "Accessories".to_string(),
            price: Decimal::ONE,
            cost: Decimal::NEGATIVE_ONE,
            stock: 0,
            min_stock: 0,
            supplier: String::new(),
        };

        assert!(matches!(
            new.validate(),
            Err(InventoryServiceError::InvalidData("cost"))
        ));

        new.cost = Decimal::ZERO;

        assert!(new.validate().is_ok(), "zero cost should be accepted");
    }

    #[test]
    fn search_matches_sku_case_insensitively() {
        let filter = InventoryFilter {
            search: Some("wm-0".to_string()),
            category: None,
        };

        assert!(filter.matches(&item()));
    }

    #[test]
    fn search_matches_description() {
        let filter = InventoryFilter {
            search: Some("ERGONOMIC".to_string()),
            category: None,
        };

        assert!(filter.matches(&item()));
    }

    #[test]
    fn category_all_disables_category_filter() {
        let filter = InventoryFilter {
            search: None,
            category: Some("All".to_string()),
        };

        assert!(filter.matches(&item()));
    }

    #[test]
    fn category_must_match_exactly() {
        let filter = InventoryFilter {
            search: None,
            category: Some("electronic".to_string()),
        };

        assert!(!filter.matches(&item()));
    }

    #[test]
    fn low_stock_includes_threshold() {
        let mut record = item();

        assert!(record.is_low_stock());

        record.stock = record.min_stock;

        assert!(record.is_low_stock());

        record.stock += 1;

        assert!(!record.is_low_stock());
    }
}
