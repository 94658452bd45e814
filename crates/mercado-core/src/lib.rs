//! # mercado-core: Pure Business Logic for Mercado
//!
//! This crate is the heart of the market: every business rule lives here as
//! pure functions with zero I/O dependencies. The console shell in
//! `apps/console` is a thin orchestration layer on top.
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderItem, User)
//! - [`money`] - Money type with integer arithmetic (no floating point)
//! - [`market`] - The in-memory store: catalog, order list, stock updates
//! - [`fulfillment`] - Request partitioning: accepted vs unavailable items
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. Pure functions: same input, same output
//! 2. No I/O: console, file system, and network access are forbidden here
//! 3. Integer money: all monetary values are cents (i64)
//! 4. Explicit errors: typed variants, never strings or panics
//!
//! ## Example
//!
//! ```rust
//! use mercado_core::{Market, Money, OrderRequest, Product, RequestedItem};
//!
//! let mut market = Market::new();
//! market
//!     .add_product(Product::new("Rice", Money::from_cents(500), 10))
//!     .unwrap();
//!
//! let outcome = market
//!     .place_order(OrderRequest::new(
//!         "Ana",
//!         vec![RequestedItem::new("Rice", 3)],
//!         "12 Harbor St",
//!     ))
//!     .unwrap();
//!
//! let receipt = outcome.receipt.unwrap();
//! assert_eq!(receipt.total_cents, 1500);
//! assert_eq!(market.find_product("Rice").unwrap().stock, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fulfillment;
pub mod market;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mercado_core::Money` instead of
// `use mercado_core::money::Money`.

pub use error::{MarketError, MarketResult, ValidationError};
pub use fulfillment::{
    Fulfillment, OrderRequest, Receipt, ReceiptLine, RequestedItem, UnavailableItem,
    UnavailableReason,
};
pub use market::Market;
pub use money::{Money, MoneyParseError};
pub use types::{Order, OrderItem, Product, Role, User};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single order request.
///
/// Keeps a single order at a reasonable size; requests beyond this are
/// rejected before fulfillment runs.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity of a single item in an order.
///
/// Guards against obvious typos (1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
