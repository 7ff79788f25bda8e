//! # Quotation Aggregator
//!
//! Sums priced lines and service charges, then applies the minimum-order
//! floor and VAT.
//!
//! ## Order Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Σ line.total_price ─────────────────────────► items_subtotal           │
//! │                                                     │                   │
//! │  service charges (fixed / % of items_subtotal) ──► + service_total      │
//! │                                                     │                   │
//! │                                          computed_total_before_vat      │
//! │                                                     │                   │
//! │  max(computed, minimum_charge_per_order) ────► total_before_vat         │
//! │                                                     │                   │
//! │  total_before_vat × vat_rate (rounded) ──────► vat_amount               │
//! │                                                     │                   │
//! │  total_before_vat + vat_amount (rounded) ────► grand_total              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::config::PricingConfig;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::pricing::{calculate_line_item, calculate_service_charges};
use crate::types::{LineItem, LineItemResult, QuotationResult, ServiceCharge, VatRate};
use crate::validation::{validate_order_amount, validate_service_charge, LineItemInput};

/// VAT on a pre-tax amount.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use signquote_core::pricing::calculate_vat;
/// use signquote_core::{Money, VatRate};
///
/// let rate = VatRate::new(dec!(0.07)).unwrap();
/// assert_eq!(calculate_vat(Money::from_major(1000), rate, false).amount(), dec!(70));
/// // 70.35 rounds to 70
/// assert_eq!(calculate_vat(Money::from_major(1005), rate, true).amount(), dec!(70));
/// ```
pub fn calculate_vat(amount: Money, vat_rate: VatRate, round_to_integer: bool) -> Money {
    let vat = amount.times(vat_rate.fraction());
    if round_to_integer {
        vat.round_half_up()
    } else {
        vat
    }
}

/// Prices a whole quotation.
///
/// Pure and deterministic: identical arguments produce an identical
/// [`QuotationResult`]. Lines are priced independently and in order.
///
/// With rounding enabled, line totals, VAT and `grand_total` are whole
/// units but `total_before_vat` is not rounded. A percentage service charge
/// can leave it fractional, and then `total_before_vat + vat_amount` differs
/// from `grand_total` by less than one unit.
pub fn calculate_quotation(
    items: &[LineItem],
    service_charges: &[ServiceCharge],
    config: &PricingConfig,
) -> QuotationResult {
    let lines: Vec<LineItemResult> = items
        .iter()
        .map(|item| calculate_line_item(item, config))
        .collect();

    let items_subtotal: Money = lines.iter().map(|line| line.total_price).sum();

    let services = calculate_service_charges(service_charges, items_subtotal);

    let computed_total_before_vat = items_subtotal + services.service_total_amount;
    let total_before_vat = config
        .minimum_charge_per_order
        .map_or(computed_total_before_vat, |minimum| {
            computed_total_before_vat.max(minimum)
        });
    let minimum_charge_adjustment = total_before_vat - computed_total_before_vat;
    if !minimum_charge_adjustment.is_zero() {
        debug!(
            computed = %computed_total_before_vat,
            minimum = %total_before_vat,
            "Minimum order charge applied"
        );
    }

    let vat_amount = calculate_vat(total_before_vat, config.vat_rate, config.round_to_integer);
    let grand_total = config.round(total_before_vat + vat_amount);

    let estimated_cost: Money = lines.iter().filter_map(|line| line.material_cost).sum();
    let estimated_margin = items_subtotal - estimated_cost;

    debug!(
        lines = lines.len(),
        service_charges = services.breakdown.len(),
        items_subtotal = %items_subtotal,
        total_before_vat = %total_before_vat,
        grand_total = %grand_total,
        "Calculated quotation"
    );

    QuotationResult {
        items: lines,
        items_subtotal,
        service_charges: services.breakdown,
        service_total_amount: services.service_total_amount,
        computed_total_before_vat,
        minimum_charge_applied: !minimum_charge_adjustment.is_zero(),
        minimum_charge_adjustment,
        total_before_vat,
        vat_rate: config.vat_rate,
        vat_amount,
        grand_total,
        estimated_cost,
        estimated_margin,
    }
}

// =============================================================================
// Request Envelope
// =============================================================================

/// A quotation request as received from UI state or a request handler.
///
/// Materials and tiers are already resolved by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuotationRequest {
    pub items: Vec<LineItemInput>,

    #[serde(default)]
    pub service_charges: Vec<ServiceCharge>,

    #[serde(default)]
    pub config: PricingConfig,
}

impl QuotationRequest {
    /// Validates config, lines and charges, reporting the first failure.
    ///
    /// A request whose order total would exceed [`crate::MAX_AMOUNT`] fails
    /// with [`PricingError::Validation`].
    pub fn validate(&self) -> PricingResult<Vec<LineItem>> {
        self.config.validate()?;

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, input)| {
                LineItem::try_from(input.clone()).map_err(|source| PricingError::LineItem {
                    index,
                    name: input.name.clone(),
                    source,
                })
            })
            .collect::<PricingResult<Vec<_>>>()?;

        for (index, charge) in self.service_charges.iter().enumerate() {
            validate_service_charge(charge).map_err(|source| PricingError::ServiceCharge {
                index,
                name: charge.name.clone(),
                source,
            })?;
        }

        validate_order_amount(&items, &self.service_charges, &self.config)?;

        Ok(items)
    }

    /// Validates the request and prices it.
    pub fn calculate(&self) -> PricingResult<QuotationResult> {
        let items = self.validate()?;
        Ok(calculate_quotation(&items, &self.service_charges, &self.config))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
