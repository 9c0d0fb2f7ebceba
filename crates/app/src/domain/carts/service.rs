//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    domain::{
        carts::{
            data::{CheckoutDetails, NewCart, NewCartItem},
            errors::CartsServiceError,
            models::Cart,
            records::{CartLineUuid, CartUuid},
            repository::CartsRepository,
        },
        inventory::repository::InventoryRepository,
        sales::{
            data::{NewSale, NewSaleItem},
            records::SaleRecord,
            repository::SalesRepository,
        },
    },
    pricing::TaxRate,
    store::{Store, StoreError},
};

#[derive(Debug, Clone)]
pub struct MemoryCartsService {
    store: Store,
    carts_repository: CartsRepository,
    inventory_repository: InventoryRepository,
    sales_repository: SalesRepository,
    tax_rate: TaxRate,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new(store: Store, tax_rate: TaxRate) -> Self {
        Self {
            store,
            carts_repository: CartsRepository::new(),
            inventory_repository: InventoryRepository::new(),
            sales_repository: SalesRepository::new(),
            tax_rate,
        }
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError> {
        let tables = self.store.read().await;

        let record = self.carts_repository.get_cart(&tables, cart)?;

        Ok(Cart::priced(record, self.tax_rate))
    }

    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        let mut tables = self.store.write().await;

        let record = self
            .carts_repository
            .create_cart(&mut tables, cart.uuid, Timestamp::now())?;

        Ok(Cart::priced(record, self.tax_rate))
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let mut tables = self.store.write().await;

        self.carts_repository.delete_cart(&mut tables, cart)?;

        Ok(())
    }

    async fn add_item(&self, cart: CartUuid, item: NewCartItem) -> Result<Cart, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tables = self.store.write().await;

        self.carts_repository.get_cart(&tables, cart)?;

        let inventory_item = self
            .inventory_repository
            .get_item(&tables, item.item_uuid)
            .map_err(item_error)?
            .clone();

        let record = self.carts_repository.get_cart_mut(&mut tables, cart)?;

        record.add_item(&inventory_item, item.quantity, Timestamp::now());

        Ok(Cart::priced(record, self.tax_rate))
    }

    async fn set_line_quantity(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let mut tables = self.store.write().await;

        let record = self.carts_repository.get_cart_mut(&mut tables, cart)?;

        record
            .set_quantity(line, quantity, Timestamp::now())
            .map_err(line_error)?;

        Ok(Cart::priced(record, self.tax_rate))
    }

    async fn remove_line(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tables = self.store.write().await;

        let record = self.carts_repository.get_cart_mut(&mut tables, cart)?;

        record
            .remove_line(line, Timestamp::now())
            .map_err(line_error)?;

        Ok(Cart::priced(record, self.tax_rate))
    }

    #[tracing::instrument(
        name = "carts.service.checkout",
        skip(self, details),
        fields(
            cart_uuid = %cart,
            sale_uuid = %details.sale_uuid,
            line_count = tracing::field::Empty,
            total = tracing::field::Empty
        ),
        err
    )]
    async fn checkout(
        &self,
        cart: CartUuid,
        details: CheckoutDetails,
    ) -> Result<SaleRecord, CartsServiceError> {
        let mut tables = self.store.write().await;

        let record = self.carts_repository.get_cart(&tables, cart)?;

        if record.lines.is_empty() {
            return Err(CartsServiceError::EmptyCart);
        }

        for line in &record.lines {
            let available = self
                .inventory_repository
                .get_item(&tables, line.item_uuid)
                .map_or(0, |item| item.stock);

            if available < line.quantity {
                return Err(CartsServiceError::InsufficientStock {
                    item: line.item_uuid,
                    requested: line.quantity,
                    available,
                });
            }
        }

        if self
            .sales_repository
            .get_sale(&tables, details.sale_uuid)
            .is_ok()
        {
            return Err(CartsServiceError::SaleAlreadyExists);
        }

        let now = Timestamp::now();

        let sale = NewSale {
            uuid: details.sale_uuid,
            items: record
                .lines
                .iter()
                .map(|line| NewSaleItem {
                    item_uuid: line.item_uuid,
                    name: line.name.clone(),
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            customer: details.customer,
        }
        .into_record(self.tax_rate, now);

        // Every check has passed; nothing below can leave the tables half-updated.
        for line in &sale.items {
            let item = self
                .inventory_repository
                .get_item_mut(&mut tables, line.item_uuid)
                .map_err(item_error)?;

            item.stock = item.stock.saturating_sub(line.quantity);
            item.updated_at = now;
        }

        self.carts_repository.delete_cart(&mut tables, cart)?;

        let sale = self
            .sales_repository
            .append_sale(&mut tables, sale)
            .map_err(sale_error)?;

        let span = Span::current();

        span.record("line_count", tracing::field::display(sale.items.len()));
        span.record("total", tracing::field::display(sale.total));

        info!("checked out cart");

        Ok(sale)
    }
}

fn line_error(error: StoreError) -> CartsServiceError {
    match error {
        StoreError::NotFound => CartsServiceError::LineNotFound,
        StoreError::UniqueViolation(_) => CartsServiceError::AlreadyExists,
    }
}

fn item_error(error: StoreError) -> CartsServiceError {
    match error {
        StoreError::NotFound => CartsServiceError::ItemNotFound,
        StoreError::UniqueViolation(_) => CartsServiceError::AlreadyExists,
    }
}

fn sale_error(error: StoreError) -> CartsServiceError {
    match error {
        StoreError::NotFound => CartsServiceError::NotFound,
        StoreError::UniqueViolation(_) => CartsServiceError::SaleAlreadyExists,
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a single cart with its totals.
    async fn get_cart(&self, cart: CartUuid) -> Result<Cart, CartsServiceError>;

    /// Creates a new, empty cart.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart with the given UUID.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;

    /// Add an inventory item to the given cart, merging with an existing line for the same item.
    async fn add_item(&self, cart: CartUuid, item: NewCartItem) -> Result<Cart, CartsServiceError>;

    /// Set a line's quantity. Zero or below removes the line.
    async fn set_line_quantity(
        &self,
        cart: CartUuid,
        line: CartLineUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line from the cart.
    async fn remove_line(&self, cart: CartUuid, line: CartLineUuid)
    -> Result<Cart, CartsServiceError>;

    /// Turn the cart into a sale: stock is decremented, the sale recorded and the cart removed
    /// as one step.
    async fn checkout(
        &self,
        cart: CartUuid,
        details: CheckoutDetails,
    ) -> Result<SaleRecord, CartsServiceError>;
}
