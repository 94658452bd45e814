//! # Domain Types
//!
//! Core domain types for the market: products, orders, users.
//!
//! ## Dual-Key Identity
//! Entities carry two identifiers:
//! - `id`: UUID v4, immutable, for references between entities
//! - a business key: product `name`, order `order_number` - human-readable
//!
//! ## Mutability Rules
//! Fields are public; mutation rules are part of each type's contract:
//! - `Product`: only `stock` changes after creation (and `updated_at` with
//!   it), and only through fulfillment. Products are never deleted.
//! - `Order` and `OrderItem`: immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Users
// =============================================================================

/// The two roles a session can act under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages the catalog.
    Owner,
    /// Places orders against stock.
    Customer,
}

impl Role {
    /// Human-readable role name for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Customer => "Customer",
        }
    }
}

/// A named user acting under a role for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    /// Creates an owner user.
    pub fn owner(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            role: Role::Owner,
        }
    }

    /// Creates a customer user.
    pub fn customer(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            role: Role::Customer,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name; unique business key within the catalog.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Units currently in stock. Decremented only by accepted orders.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (stock changes).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new catalog product.
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price_cents: price.cents(),
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be served from stock.
    #[inline]
    pub fn in_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
///
/// Snapshot pattern: name and unit price are frozen at acceptance time, so
/// the order keeps displaying what the customer agreed to even if the
/// catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Id of the catalog product this line was accepted against.
    pub product_id: String,

    /// Product name at acceptance time (frozen).
    pub name: String,

    /// Unit price in cents at acceptance time (frozen).
    pub unit_price_cents: i64,

    /// Quantity ordered.
    pub quantity: i64,
}

impl OrderItem {
    /// Creates a line item by snapshotting a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        OrderItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total before anything else (unit price x quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order accepted by the market. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable order number (business key).
    pub order_number: String,

    /// Name of the customer who placed the order.
    pub customer: String,

    /// Delivery address.
    pub address: String,

    /// Accepted line items. Never empty: an order only exists when at
    /// least one requested item was accepted.
    pub items: Vec<OrderItem>,

    /// Order total in cents, fixed at creation: sum of line totals.
    pub total_cents: i64,

    /// When the order was accepted.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order from accepted line items, computing the total.
    pub fn new(
        order_number: impl Into<String>,
        customer: impl Into<String>,
        address: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        let total_cents = items.iter().map(OrderItem::line_total_cents).sum();
        Order {
            id: Uuid::new_v4().to_string(),
            order_number: order_number.into(),
            customer: customer.into(),
            address: address.into(),
            items,
            total_cents,
            created_at: Utc::now(),
        }
    }

    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(name, Money::from_cents(price_cents), stock)
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Owner.label(), "Owner");
        assert_eq!(Role::Customer.label(), "Customer");
        assert_eq!(User::owner("Vitor").role, Role::Owner);
        assert_eq!(User::customer("Ana").role, Role::Customer);
    }

    #[test]
    fn test_product_in_stock() {
        let p = product("Rice", 500, 10);
        assert!(p.in_stock(10));
        assert!(p.in_stock(1));
        assert!(!p.in_stock(11));
    }

    #[test]
    fn test_order_item_snapshots_product() {
        let p = product("Rice", 500, 10);
        let item = OrderItem::from_product(&p, 3);

        assert_eq!(item.product_id, p.id);
        assert_eq!(item.name, "Rice");
        assert_eq!(item.unit_price_cents, 500);
        assert_eq!(item.line_total_cents(), 1500);
        assert_eq!(item.line_total(), Money::from_cents(1500));
    }

    #[test]
    fn test_order_total_is_sum_of_line_totals() {
        let rice = product("Rice", 500, 10);
        let beans = product("Beans", 350, 8);
        let items = vec![
            OrderItem::from_product(&rice, 3),  // 15.00
            OrderItem::from_product(&beans, 2), // 7.00
        ];

        let order = Order::new("250806-0001", "Ana", "12 Harbor St", items);

        assert_eq!(order.total_cents, 2200);
        assert_eq!(order.total(), Money::from_cents(2200));
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_order_with_single_item() {
        let rice = product("Rice", 500, 10);
        let order = Order::new(
            "250806-0002",
            "Ana",
            "12 Harbor St",
            vec![OrderItem::from_product(&rice, 1)],
        );
        assert_eq!(order.total_cents, 500);
    }
}
