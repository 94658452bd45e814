//! # Order Fulfillment
//!
//! The matching step at the heart of the market: a customer's requested
//! quantities are checked against the catalog and partitioned into accepted
//! line items and unavailable items. Nothing here mutates state; the stock
//! decrement and order append happen in [`crate::Market::place_order`],
//! which drives this module.
//!
//! An unavailable item is a normal outcome, not an error: the customer is
//! told what could not be served and why, while the rest of the order goes
//! through.

use serde::{Deserialize, Serialize};

use crate::types::{Order, OrderItem, Product};

// =============================================================================
// Request Types
// =============================================================================

/// One requested entry: a product name and the desired quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub name: String,
    pub quantity: i64,
}

impl RequestedItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        RequestedItem {
            name: name.into(),
            quantity,
        }
    }
}

/// A customer's order request: who, what, and where to deliver.
///
/// Entries are processed independently in the order given. Callers that
/// accept free-form input (the console shell) merge duplicate names before
/// building the request; see `apps/console`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: String,
    pub items: Vec<RequestedItem>,
    pub address: String,
}

impl OrderRequest {
    pub fn new(
        customer: impl Into<String>,
        items: Vec<RequestedItem>,
        address: impl Into<String>,
    ) -> Self {
        OrderRequest {
            customer: customer.into(),
            items,
            address: address.into(),
        }
    }
}

// =============================================================================
// Outcome Types
// =============================================================================

/// Why a requested item could not be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No catalog product with the requested name.
    NotFound,

    /// The product exists but current stock is below the requested
    /// quantity. `available` is the stock at the time of the request.
    InsufficientStock { available: i64 },
}

impl UnavailableReason {
    /// Units that could still be served: 0 for a product that does not
    /// exist, current stock otherwise.
    pub const fn available(&self) -> i64 {
        match self {
            UnavailableReason::NotFound => 0,
            UnavailableReason::InsufficientStock { available } => *available,
        }
    }
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::NotFound => write!(f, "product not found"),
            UnavailableReason::InsufficientStock { available } => {
                write!(f, "only {} in stock", available)
            }
        }
    }
}

/// A requested item that could not be served, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableItem {
    pub name: String,
    pub reason: UnavailableReason,
}

/// One line of a receipt: frozen name, unit price, quantity, line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// What the customer gets back for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_number: String,
    pub customer: String,
    pub address: String,
    pub lines: Vec<ReceiptLine>,
    pub total_cents: i64,
}

impl Receipt {
    /// Builds a receipt from an accepted order.
    pub fn from_order(order: &Order) -> Self {
        Receipt {
            order_number: order.order_number.clone(),
            customer: order.customer.clone(),
            address: order.address.clone(),
            lines: order
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    line_total_cents: item.line_total_cents(),
                })
                .collect(),
            total_cents: order.total_cents,
        }
    }
}

/// The outcome of one fulfillment run.
///
/// `receipt` is `Some` when at least one requested item was accepted and an
/// order was created; `None` means the order list was left untouched. The
/// unavailable list is reported either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub receipt: Option<Receipt>,
    pub unavailable: Vec<UnavailableItem>,
}

impl Fulfillment {
    /// True when no requested item could be served.
    pub fn is_fully_rejected(&self) -> bool {
        self.receipt.is_none()
    }
}

// =============================================================================
// Partitioning
// =============================================================================

/// Partitions requested items into accepted line items and unavailable
/// items against the given catalog.
///
/// For each requested `(name, quantity)`:
/// - no catalog product with that name -> unavailable, `NotFound`
/// - stock below the requested quantity -> unavailable,
///   `InsufficientStock` with the current stock
/// - otherwise -> accepted with the full requested quantity
///
/// Partial acceptance is per item, never per quantity: a request for 5 of
/// a product with 3 in stock is rejected whole, not trimmed to 3.
pub fn partition(catalog: &[Product], items: &[RequestedItem]) -> (Vec<OrderItem>, Vec<UnavailableItem>) {
    let mut accepted = Vec::new();
    let mut unavailable = Vec::new();

    for requested in items {
        match catalog.iter().find(|p| p.name == requested.name) {
            None => unavailable.push(UnavailableItem {
                name: requested.name.clone(),
                reason: UnavailableReason::NotFound,
            }),
            Some(product) if !product.in_stock(requested.quantity) => {
                unavailable.push(UnavailableItem {
                    name: requested.name.clone(),
                    reason: UnavailableReason::InsufficientStock {
                        available: product.stock,
                    },
                })
            }
            Some(product) => accepted.push(OrderItem::from_product(product, requested.quantity)),
        }
    }

    (accepted, unavailable)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Rice", Money::from_cents(500), 10),
            Product::new("Beans", Money::from_cents(350), 0),
        ]
    }

    #[test]
    fn test_partition_accepts_in_stock_items() {
        let catalog = catalog();
        let (accepted, unavailable) =
            partition(&catalog, &[RequestedItem::new("Rice", 3)]);

        assert_eq!(accepted.len(), 1);
        assert!(unavailable.is_empty());
        assert_eq!(accepted[0].name, "Rice");
        assert_eq!(accepted[0].quantity, 3);
        assert_eq!(accepted[0].line_total_cents(), 1500);
    }

    #[test]
    fn test_partition_rejects_unknown_product() {
        let catalog = catalog();
        let (accepted, unavailable) =
            partition(&catalog, &[RequestedItem::new("Coffee", 1)]);

        assert!(accepted.is_empty());
        assert_eq!(
            unavailable,
            vec![UnavailableItem {
                name: "Coffee".to_string(),
                reason: UnavailableReason::NotFound,
            }]
        );
        assert_eq!(unavailable[0].reason.available(), 0);
    }

    #[test]
    fn test_partition_rejects_over_stock_whole() {
        let catalog = catalog();
        let (accepted, unavailable) =
            partition(&catalog, &[RequestedItem::new("Rice", 20)]);

        assert!(accepted.is_empty());
        assert_eq!(
            unavailable[0].reason,
            UnavailableReason::InsufficientStock { available: 10 }
        );
        assert_eq!(unavailable[0].reason.available(), 10);
    }

    #[test]
    fn test_partition_zero_stock_is_insufficient_not_missing() {
        let catalog = catalog();
        let (_, unavailable) = partition(&catalog, &[RequestedItem::new("Beans", 1)]);

        assert_eq!(
            unavailable[0].reason,
            UnavailableReason::InsufficientStock { available: 0 }
        );
    }

    #[test]
    fn test_partition_mixed_request_keeps_order() {
        let catalog = catalog();
        let (accepted, unavailable) = partition(
            &catalog,
            &[
                RequestedItem::new("Rice", 2),
                RequestedItem::new("Coffee", 1),
                RequestedItem::new("Beans", 4),
            ],
        );

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].name, "Rice");
        assert_eq!(unavailable.len(), 2);
        assert_eq!(unavailable[0].name, "Coffee");
        assert_eq!(unavailable[1].name, "Beans");
    }

    #[test]
    fn test_partition_does_not_touch_stock() {
        let catalog = catalog();
        let _ = partition(&catalog, &[RequestedItem::new("Rice", 3)]);
        assert_eq!(catalog[0].stock, 10);
    }

    #[test]
    fn test_partition_requesting_exact_stock_is_accepted() {
        let catalog = catalog();
        let (accepted, unavailable) =
            partition(&catalog, &[RequestedItem::new("Rice", 10)]);

        assert_eq!(accepted.len(), 1);
        assert!(unavailable.is_empty());
    }

    #[test]
    fn test_unavailable_reason_display() {
        assert_eq!(UnavailableReason::NotFound.to_string(), "product not found");
        assert_eq!(
            UnavailableReason::InsufficientStock { available: 7 }.to_string(),
            "only 7 in stock"
        );
    }
}
