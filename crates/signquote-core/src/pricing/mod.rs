//! # Pricing Pipeline
//!
//! The six calculation stages, each a pure function.
//!
//! ## Data Flow (per line, then per order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  LineItem ──► area ──► waste ──► line_item ◄── tier                     │
//! │                                      │                                  │
//! │  LineItem ──► area ──► waste ──► line_item ◄── tier                     │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                 items subtotal ──► service ──► quotation                │
//! │                                    (fixed/%)   (floor, VAT, total)      │
//! │                                                                         │
//! │  No stage reads another line's result.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod area;
pub mod line_item;
pub mod quotation;
pub mod service;
pub mod tier;
pub mod waste;

pub use area::calculate_area;
pub use line_item::calculate_line_item;
pub use quotation::{calculate_quotation, calculate_vat, QuotationRequest};
pub use service::calculate_service_charges;
pub use tier::find_applicable_tier;
pub use waste::{apply_waste_factor, effective_waste_factor};
