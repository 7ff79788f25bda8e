//! # Line Item Pricer
//!
//! Prices one line independently of every other line.
//!
//! ## Algorithm
//! ```text
//! basis, quantity ──► calculate_area ──► total_area
//!                                            │  × waste factor (area goods,
//!                                            ▼    or piece goods if enabled)
//!                                       material_area
//!                                            │  × unit price (custom or catalog)
//!                                            ▼
//!                                        subtotal ─────────┐
//!                                            │             │
//!               tier(quantity) ──► discount % ──► discount_amount
//!                                            │
//!                                            ▼
//!                     total_price = round(subtotal - discount_amount)
//! ```
//!
//! Only `total_price` feeds the order totals. The rounded `subtotal` and
//! `discount_amount` fields are for the printed breakdown.
//!
//! The same discount formula applies whether the unit price came from the
//! catalog or from a manual override.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::pricing::{apply_waste_factor, calculate_area, find_applicable_tier};
use crate::types::{LineItem, LineItemResult, PriceSource};

/// Prices one line item.
///
/// With rounding enabled, `total_price` is the exact post-discount amount
/// rounded once. `subtotal` and `discount_amount` are rounded separately
/// for display, so on a half-unit boundary the printed difference can be
/// one unit away from `total_price`.
pub fn calculate_line_item(item: &LineItem, config: &PricingConfig) -> LineItemResult {
    let area = calculate_area(&item.basis, item.quantity);

    let waste_factor = if item.basis.is_area() || config.waste_on_piece_goods {
        item.material.effective_waste_factor()
    } else {
        Decimal::ONE
    };
    let material_area = apply_waste_factor(area.total_area, waste_factor);

    let (unit_price, price_source) = match item.custom_unit_price {
        Some(price) => (price, PriceSource::Custom),
        None => (item.material.selling_price, PriceSource::Catalog),
    };

    let exact_subtotal = unit_price.times(material_area);

    let applied_tier = find_applicable_tier(item.quantity, item.effective_tiers()).cloned();
    let discount_percent = applied_tier
        .as_ref()
        .map_or(Decimal::ZERO, |tier| tier.discount_percent);
    let exact_discount = exact_subtotal.percentage(discount_percent);
    let total_price = config.round(exact_subtotal - exact_discount);

    let material_cost = item
        .material
        .cost_price
        .map(|cost| cost.times(material_area));

    debug!(
        line = %item.name,
        area_basis = item.basis.is_area(),
        material_area = %material_area,
        discount_percent = %discount_percent,
        total = %total_price,
        "Priced line item"
    );

    LineItemResult {
        name: item.name.clone(),
        basis: item.basis,
        quantity: item.quantity,
        area_per_unit: area.area_per_unit,
        total_area: area.total_area,
        waste_factor,
        material_area,
        unit_price,
        price_source,
        subtotal: config.round(exact_subtotal),
        applied_tier,
        discount_percent,
        discount_amount: config.round(exact_discount),
        total_price,
        material_cost,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
