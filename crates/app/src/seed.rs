//! Demo data
//!
//! Builds the tables a fresh process starts with: a small catalogue and a month of sales.

use jiff::{Timestamp, ToSpan, tz::TimeZone};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rust_decimal::Decimal;

use crate::{
    domain::{
        inventory::{
            data::NewInventoryItem,
            records::{InventoryItemRecord, InventoryItemUuid},
        },
        sales::{
            data::{NewSale, NewSaleItem},
            records::{Customer, SaleRecord, SaleUuid},
        },
    },
    pricing::TaxRate,
    store::Tables,
};

/// Days of sales history to generate, counting today.
pub const SEED_DAYS: i64 = 30;

/// Name, SKU, category, price and cost in cents, stock, minimum stock, supplier.
type CatalogueEntry = (&'static str, &'static str, &'static str, i64, i64, u32, u32, &'static str);

const CATALOGUE: [CatalogueEntry; 8] = [
    ("iPhone 15 Case", "IC-15", "Accessories", 2_499, 800, 3, 10, "CaseWorks"),
    ("USB-C Cable", "UC-2M", "Accessories", 1_299, 300, 5, 20, "Cable Co"),
    ("Wireless Mouse", "WM-01", "Electronics", 2_999, 1_250, 2, 15, "Peripherals Inc"),
    ("Bluetooth Speaker", "BS-10", "Audio", 5_999, 2_800, 1, 8, "SoundHouse"),
    ("Screen Protector", "SP-15", "Accessories", 999, 150, 64, 20, "CaseWorks"),
    ("Laptop Stand", "LS-AL", "Office", 4_499, 1_900, 18, 5, "DeskPro"),
    ("Mechanical Keyboard", "MK-87", "Electronics", 8_999, 4_100, 12, 5, "Peripherals Inc"),
    ("Noise Cancelling Headphones", "NC-700", "Audio", 19_999, 11_000, 7, 4, "SoundHouse"),
];

/// Seeding parameters.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub now: Timestamp,
    pub time_zone: TimeZone,
    pub tax_rate: TaxRate,

    /// Fixed seed for reproducible data; `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

/// Build the demo tables.
///
/// Each of the last [`SEED_DAYS`] days gets one to eight sales of one to three lines, priced
/// between 10 and 110 with quantities of one to three, made between 08:00 and 20:00 local
/// time. Sales that would fall after `now` are skipped. Sales are stored oldest first.
///
/// # Errors
///
/// Returns an error if a sale time cannot be represented in the configured time zone.
pub fn demo_tables(options: &SeedOptions) -> Result<Tables, jiff::Error> {
    let mut rng = match options.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let inventory = demo_inventory(options.now);
    let today = options.now.to_zoned(options.time_zone.clone()).date();

    let mut sales = Vec::new();

    for days_ago in 0..SEED_DAYS {
        let date = today.checked_sub(days_ago.days())?;

        for _ in 0..rng.gen_range(1..=8) {
            let created_at = date
                .at(rng.gen_range(8..20), rng.gen_range(0..60), 0, 0)
                .to_zoned(options.time_zone.clone())?
                .timestamp();

            if created_at > options.now {
                continue;
            }

            sales.push(demo_sale(&mut rng, &inventory, options.tax_rate, created_at));
        }
    }

    sales.sort_by_key(|sale| sale.created_at);

    Ok(Tables {
        inventory,
        sales,
        ..Tables::default()
    })
}

fn demo_inventory(now: Timestamp) -> Vec<InventoryItemRecord> {
    CATALOGUE
        .iter()
        .map(
            |&(name, sku, category, price, cost, stock, min_stock, supplier)| {
                NewInventoryItem {
                    uuid: InventoryItemUuid::new(),
                    name: name.to_string(),
                    description: format!("{name} ({category})"),
                    sku: sku.to_string(),
                    category: category.to_string(),
                    price: Decimal::new(price, 2),
                    cost: Decimal::new(cost, 2),
                    stock,
                    min_stock,
                    supplier: supplier.to_string(),
                }
                .into_record(now)
            },
        )
        .collect()
}

fn demo_sale(
    rng: &mut StdRng,
    inventory: &[InventoryItemRecord],
    tax_rate: TaxRate,
    created_at: Timestamp,
) -> SaleRecord {
    let line_count = rng.gen_range(1..=3);

    let items = inventory
        .choose_multiple(rng, line_count)
        .map(|item| NewSaleItem {
            item_uuid: item.uuid,
            name: item.name.clone(),
            price: Decimal::new(rng.gen_range(1_000..=11_000), 2),
            quantity: rng.gen_range(1..=3),
        })
        .collect::<Vec<_>>();

    let customer = Customer {
        name: rng
            .gen_bool(0.5)
            .then(|| format!("Customer {}", rng.gen_range(1..=100))),
        ..Customer::default()
    };

    NewSale {
        uuid: SaleUuid::new(),
        items,
        customer,
    }
    .into_record(tax_rate, created_at)
}
