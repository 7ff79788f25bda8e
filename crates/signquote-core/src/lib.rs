//! # signquote-core: Quotation Pricing Engine
//!
//! Turns requested sign/print line items plus order-level service charges
//! into a fully itemized, VAT-correct quotation. Every function is pure.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SignQuote Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Quotation UI / server-side request handlers            │   │
//! │  │    fetch materials + tiers ──► build QuotationRequest          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ signquote-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │  pricing  │  │   money   │  │  config   │  │   │
//! │  │   │ boundary  │─►│  stages   │  │  Decimal  │  │ VAT/round │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ QuotationResult                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       Document renderer / persistence (outside this crate)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Material, LineItem, ServiceCharge, results)
//! - [`money`] - Decimal-backed Money with half-up rounding
//! - [`config`] - Pricing policy (VAT, rounding, minimum charge)
//! - [`validation`] - Boundary validation of wire-shaped inputs
//! - [`pricing`] - Area, waste, tier, line, service and quotation stages
//! - [`error`] - Error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, to the last digit
//! 2. **No I/O**: materials and tiers are resolved by the caller
//! 3. **Decimal Money**: areas and waste factors are fractional; floats never
//!    touch a price
//! 4. **Validate Once**: the boundary resolves the area/piece basis; stages
//!    never fail
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use signquote_core::pricing::calculate_quotation;
//! use signquote_core::{LineBasis, LineItem, Material, Money, PricingConfig, ServiceCharge};
//!
//! let vinyl = Material {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     name: "Vinyl 440g".to_string(),
//!     selling_price: Money::from_major(150),
//!     cost_price: None,
//!     waste_factor: dec!(1.1),
//!     unit: "sqm".to_string(),
//!     pricing_tiers: Vec::new(),
//! };
//! let banner = LineItem {
//!     name: "Shopfront banner".to_string(),
//!     basis: LineBasis::Area { width: dec!(2), height: dec!(5) },
//!     quantity: 1,
//!     material: vinyl,
//!     pricing_tiers: None,
//!     custom_unit_price: None,
//! };
//!
//! let quote = calculate_quotation(
//!     &[banner],
//!     &[ServiceCharge::fixed("Installation", dec!(1500))],
//!     &PricingConfig::default(),
//! );
//!
//! // 2 m × 5 m × 1.1 waste × 150 = 1650, + 1500 installation
//! assert_eq!(quote.total_before_vat.amount(), dec!(3150));
//! assert_eq!(quote.vat_amount.amount(), dec!(220.5));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::PricingConfig;
pub use error::{ConfigError, PricingError, PricingResult, ValidationError};
pub use money::Money;
pub use pricing::QuotationRequest;
pub use types::*;
pub use validation::LineItemInput;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for a tier's discount percent.
pub const MAX_DISCOUNT_PERCENT: rust_decimal::Decimal = rust_decimal::Decimal::ONE_HUNDRED;

/// Largest amount a line or an order may reach (10^18 currency units).
///
/// Requests that would exceed it are rejected at the boundary, which keeps
/// every stage well inside `Decimal`'s range.
pub const MAX_AMOUNT: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);
