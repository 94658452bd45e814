//! # Market Store
//!
//! The single in-memory store: the product catalog and the order list,
//! both append-only. [`Market::place_order`] is the only mutation path for
//! stock, and it drives the partition step in [`crate::fulfillment`].
//!
//! ## Invariants
//! - Products and orders are appended, never removed; iteration order is
//!   insertion order.
//! - Product names are unique within the catalog.
//! - Stock is decremented exactly once per accepted order, by exactly the
//!   accepted quantity.

use chrono::Utc;

use crate::error::{MarketError, MarketResult};
use crate::fulfillment::{self, Fulfillment, OrderRequest, Receipt};
use crate::types::{Order, OrderItem, Product};
use crate::validation;

// =============================================================================
// Market
// =============================================================================

/// The market: owns the catalog and every order placed against it.
#[derive(Debug, Default)]
pub struct Market {
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Market {
    /// Creates an empty market: no products, no orders.
    pub fn new() -> Self {
        Market::default()
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Adds a product to the catalog.
    ///
    /// ## Errors
    /// - `Validation` for an empty name, negative price, or negative stock
    /// - `DuplicateProduct` when the name is already taken
    pub fn add_product(&mut self, product: Product) -> MarketResult<()> {
        validation::validate_product_name(&product.name)?;
        validation::validate_price_cents(product.price_cents)?;
        validation::validate_stock(product.stock)?;

        if self.products.iter().any(|p| p.name == product.name) {
            return Err(MarketError::DuplicateProduct { name: product.name });
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks up a catalog product by its exact name.
    pub fn find_product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Iterates the catalog in insertion order, non-destructively.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Iterates placed orders in insertion order, non-destructively.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Number of orders placed so far.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Places an order: partitions the request against current stock,
    /// records an order for the accepted items, and decrements stock.
    ///
    /// When nothing is accepted, no order is created and the order list is
    /// unchanged; the returned [`Fulfillment`] reports every requested item
    /// as unavailable.
    ///
    /// ## Errors
    /// - `EmptyOrder` for a request with no items
    /// - `Validation` for a blank customer/address, an oversized request,
    ///   or an out-of-range quantity
    pub fn place_order(&mut self, request: OrderRequest) -> MarketResult<Fulfillment> {
        validation::validate_customer_name(&request.customer)?;
        validation::validate_address(&request.address)?;
        if request.items.is_empty() {
            return Err(MarketError::EmptyOrder);
        }
        validation::validate_order_size(request.items.len())?;
        for item in &request.items {
            validation::validate_quantity(item.quantity)?;
        }

        let (accepted, unavailable) = fulfillment::partition(&self.products, &request.items);

        if accepted.is_empty() {
            return Ok(Fulfillment {
                receipt: None,
                unavailable,
            });
        }

        let order = Order::new(
            self.next_order_number(),
            request.customer,
            request.address,
            accepted,
        );
        self.update_stock(&order.items);
        let receipt = Receipt::from_order(&order);
        self.add_order(order);

        Ok(Fulfillment {
            receipt: Some(receipt),
            unavailable,
        })
    }

    /// Appends an accepted order to the order list.
    fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Subtracts each accepted line item's quantity from its product's
    /// stock. A line item whose product id is not in the catalog is
    /// skipped; `place_order` only builds line items from catalog
    /// products, so that branch is unreachable from the public API.
    fn update_stock(&mut self, items: &[OrderItem]) {
        for item in items {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == item.product_id) {
                product.stock -= item.quantity;
                product.updated_at = Utc::now();
            }
        }
    }

    /// Next order number: date prefix plus a 1-based sequence.
    fn next_order_number(&self) -> String {
        format!(
            "{}-{:04}",
            Utc::now().format("%y%m%d"),
            self.orders.len() + 1
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fulfillment::{RequestedItem, UnavailableReason};
    use crate::money::Money;

    fn market_with_rice() -> Market {
        let mut market = Market::new();
        market
            .add_product(Product::new("Rice", Money::from_cents(500), 10))
            .unwrap();
        market
    }

    fn request(items: Vec<RequestedItem>) -> OrderRequest {
        OrderRequest::new("Ana", items, "12 Harbor St")
    }

    #[test]
    fn test_add_product_appends_in_order() {
        let mut market = Market::new();
        market
            .add_product(Product::new("Rice", Money::from_cents(500), 10))
            .unwrap();
        market
            .add_product(Product::new("Beans", Money::from_cents(350), 5))
            .unwrap();

        let names: Vec<&str> = market.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Beans"]);
        assert_eq!(market.product_count(), 2);
    }

    #[test]
    fn test_add_product_rejects_duplicate_name() {
        let mut market = market_with_rice();
        let result = market.add_product(Product::new("Rice", Money::from_cents(600), 3));

        assert!(matches!(
            result,
            Err(MarketError::DuplicateProduct { name }) if name == "Rice"
        ));
        assert_eq!(market.product_count(), 1);
    }

    #[test]
    fn test_add_product_rejects_invalid_fields() {
        let mut market = Market::new();

        let blank = market.add_product(Product::new("  ", Money::from_cents(100), 1));
        assert!(matches!(blank, Err(MarketError::Validation(_))));

        let negative_price = market.add_product(Product::new("Rice", Money::from_cents(-1), 1));
        assert!(matches!(negative_price, Err(MarketError::Validation(_))));

        let negative_stock = market.add_product(Product::new("Rice", Money::from_cents(100), -1));
        assert!(matches!(negative_stock, Err(MarketError::Validation(_))));
    }

    #[test]
    fn test_place_order_accepts_and_decrements_stock() {
        // Catalog: Rice at 5.00 with 10 in stock; request 3.
        let mut market = market_with_rice();
        let outcome = market
            .place_order(request(vec![RequestedItem::new("Rice", 3)]))
            .unwrap();

        let receipt = outcome.receipt.expect("order should be accepted");
        assert_eq!(receipt.total_cents, 1500);
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].quantity, 3);
        assert!(outcome.unavailable.is_empty());

        assert_eq!(market.find_product("Rice").unwrap().stock, 7);
        assert_eq!(market.order_count(), 1);

        let order = market.orders().next().unwrap();
        assert_eq!(order.total_cents, 1500);
        assert_eq!(order.customer, "Ana");
        assert_eq!(order.address, "12 Harbor St");
    }

    #[test]
    fn test_place_order_over_stock_creates_nothing() {
        // Same catalog; request 20 of 10 in stock.
        let mut market = market_with_rice();
        let outcome = market
            .place_order(request(vec![RequestedItem::new("Rice", 20)]))
            .unwrap();

        assert!(outcome.is_fully_rejected());
        assert_eq!(
            outcome.unavailable[0].reason,
            UnavailableReason::InsufficientStock { available: 10 }
        );
        assert_eq!(market.find_product("Rice").unwrap().stock, 10);
        assert_eq!(market.order_count(), 0);
    }

    #[test]
    fn test_place_order_unknown_product_on_empty_catalog() {
        let mut market = Market::new();
        let outcome = market
            .place_order(request(vec![RequestedItem::new("Beans", 1)]))
            .unwrap();

        assert!(outcome.is_fully_rejected());
        assert_eq!(outcome.unavailable[0].name, "Beans");
        assert_eq!(outcome.unavailable[0].reason, UnavailableReason::NotFound);
        assert_eq!(market.order_count(), 0);
    }

    #[test]
    fn test_place_order_partial_acceptance() {
        let mut market = market_with_rice();
        market
            .add_product(Product::new("Beans", Money::from_cents(350), 2))
            .unwrap();

        let outcome = market
            .place_order(request(vec![
                RequestedItem::new("Rice", 4),
                RequestedItem::new("Beans", 5),
                RequestedItem::new("Coffee", 1),
            ]))
            .unwrap();

        let receipt = outcome.receipt.expect("Rice should be accepted");
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.total_cents, 2000);
        assert_eq!(outcome.unavailable.len(), 2);

        // Accepted products decrement; rejected products are untouched.
        assert_eq!(market.find_product("Rice").unwrap().stock, 6);
        assert_eq!(market.find_product("Beans").unwrap().stock, 2);
    }

    #[test]
    fn test_place_order_rejects_empty_and_invalid_requests() {
        let mut market = market_with_rice();

        let empty = market.place_order(request(vec![]));
        assert!(matches!(empty, Err(MarketError::EmptyOrder)));

        let zero_qty = market.place_order(request(vec![RequestedItem::new("Rice", 0)]));
        assert!(matches!(zero_qty, Err(MarketError::Validation(_))));

        let blank_customer = market.place_order(OrderRequest::new(
            " ",
            vec![RequestedItem::new("Rice", 1)],
            "12 Harbor St",
        ));
        assert!(matches!(blank_customer, Err(MarketError::Validation(_))));

        let blank_address = market.place_order(OrderRequest::new(
            "Ana",
            vec![RequestedItem::new("Rice", 1)],
            "",
        ));
        assert!(matches!(blank_address, Err(MarketError::Validation(_))));

        // Nothing mutated along the way.
        assert_eq!(market.find_product("Rice").unwrap().stock, 10);
        assert_eq!(market.order_count(), 0);
    }

    #[test]
    fn test_two_orders_decrement_stock_once_each() {
        let mut market = market_with_rice();
        market
            .place_order(request(vec![RequestedItem::new("Rice", 3)]))
            .unwrap();
        market
            .place_order(request(vec![RequestedItem::new("Rice", 4)]))
            .unwrap();

        assert_eq!(market.find_product("Rice").unwrap().stock, 3);
        assert_eq!(market.order_count(), 2);
    }

    #[test]
    fn test_order_numbers_are_sequential() {
        let mut market = market_with_rice();
        market
            .place_order(request(vec![RequestedItem::new("Rice", 1)]))
            .unwrap();
        market
            .place_order(request(vec![RequestedItem::new("Rice", 1)]))
            .unwrap();

        let numbers: Vec<&str> = market.orders().map(|o| o.order_number.as_str()).collect();
        assert!(numbers[0].ends_with("-0001"));
        assert!(numbers[1].ends_with("-0002"));
    }

    #[test]
    fn test_update_stock_skips_unknown_product_id() {
        let mut market = market_with_rice();
        let ghost = OrderItem {
            product_id: "no-such-id".to_string(),
            name: "Ghost".to_string(),
            unit_price_cents: 100,
            quantity: 5,
        };

        market.update_stock(&[ghost]);
        assert_eq!(market.find_product("Rice").unwrap().stock, 10);
    }
}
