//! # Error Types
//!
//! Error types for signquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError           - What a request handler sees                  │
//! │  ├── ConfigError        - Policy values that cannot be honoured        │
//! │  ├── LineItem { .. }    - ValidationError + line position/name         │
//! │  ├── ServiceCharge {..} - ValidationError + charge position/name       │
//! │  └── ValidationError    - Order-level range failures                   │
//! │                                                                         │
//! │  Stage functions (area, waste, tier, line, service, quotation) never   │
//! │  return errors. Only the boundary does.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Pricing Error
// =============================================================================

/// Top-level error for validating and pricing a quotation request.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The pricing policy itself is invalid.
    #[error("Invalid pricing configuration: {0}")]
    Config(#[from] ConfigError),

    /// A requested line item failed boundary validation.
    ///
    /// `index` is the zero-based position in the request, so the UI can
    /// highlight the offending row.
    #[error("Line item {index} ({name}): {source}")]
    LineItem {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },

    /// A service charge failed boundary validation.
    #[error("Service charge {index} ({name}): {source}")]
    ServiceCharge {
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },

    /// Order-level validation failure, e.g. a total above
    /// [`crate::MAX_AMOUNT`].
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Config Error
// =============================================================================

/// Pricing policy errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// VAT can only add to a total.
    #[error("VAT rate must not be negative (got {0})")]
    NegativeVatRate(Decimal),

    /// A floor below zero would never apply and signals a data entry mistake.
    #[error("Minimum charge per order must not be negative (got {0})")]
    NegativeMinimumCharge(Money),

    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidEnvValue {
        var: String,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a wire-shaped input cannot be turned into a typed
/// pricing input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Only one of width/height was supplied.
    #[error("{present} was given without {missing}; supply both dimensions or neither")]
    MixedDimensions { present: String, missing: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },

    /// Invalid format (e.g., malformed UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two tiers with the same threshold).
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },

    /// Values are not in ascending order.
    #[error("{field} must be in ascending order ({value} follows a larger value)")]
    Unordered { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
