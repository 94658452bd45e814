//! # Error Types
//!
//! Domain-specific error types for mercado-core.
//!
//! Errors here are business rule violations: a duplicate catalog name, a
//! structurally invalid order request. Unavailable or not-found products
//! during fulfillment are NOT errors; they are a normal outcome reported
//! through [`crate::fulfillment::UnavailableItem`].
//!
//! Conventions:
//! 1. `thiserror` derive, never manual `Display` impls
//! 2. Variants carry context (name, limit, field), never bare strings
//! 3. Validation failures wrap via `#[from]`

use thiserror::Error;

// =============================================================================
// Market Error
// =============================================================================

/// Business logic errors raised by [`crate::Market`] operations.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The catalog already has a product with this name. Product names are
    /// the business key of the catalog, so they must be unique.
    #[error("product '{name}' already exists in the catalog")]
    DuplicateProduct { name: String },

    /// An order request arrived with no items at all.
    #[error("order request has no items")]
    EmptyOrder,

    /// Input validation failed before the operation ran.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results with MarketError.
pub type MarketResult<T> = Result<T, MarketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MarketError::DuplicateProduct {
            name: "Rice".to_string(),
        };
        assert_eq!(err.to_string(), "product 'Rice' already exists in the catalog");

        let err = MarketError::EmptyOrder;
        assert_eq!(err.to_string(), "order request has no items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_market_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let market_err: MarketError = validation_err.into();
        assert!(matches!(market_err, MarketError::Validation(_)));
    }
}
