//! Service charge aggregation.

use crate::money::Money;
use crate::types::{AppliedServiceCharge, ServiceCharge, ServiceChargeKind, ServiceChargeSummary};

/// Applies every service charge against one snapshot of the items subtotal.
///
/// - `Fixed`: the amount as-is.
/// - `Percentage`: `items_subtotal × amount / 100`.
///
/// Percentage charges never compound: each one sees the same
/// `items_subtotal`, not the subtotal plus earlier charges.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use signquote_core::pricing::calculate_service_charges;
/// use signquote_core::{Money, ServiceCharge};
///
/// let charges = [
///     ServiceCharge::fixed("Installation", dec!(1500)),
///     ServiceCharge::percentage("Design", dec!(10)),
/// ];
/// let summary = calculate_service_charges(&charges, Money::from_major(3250));
/// assert_eq!(summary.service_total_amount.amount(), dec!(1825));
/// ```
pub fn calculate_service_charges(
    charges: &[ServiceCharge],
    items_subtotal: Money,
) -> ServiceChargeSummary {
    let breakdown: Vec<AppliedServiceCharge> = charges
        .iter()
        .map(|charge| {
            let applied_amount = match charge.kind {
                ServiceChargeKind::Fixed => Money::new(charge.amount),
                ServiceChargeKind::Percentage => items_subtotal.percentage(charge.amount),
            };
            AppliedServiceCharge {
                name: charge.name.clone(),
                kind: charge.kind,
                amount: charge.amount,
                applied_amount,
            }
        })
        .collect();

    let service_total_amount = breakdown.iter().map(|c| c.applied_amount).sum();

    ServiceChargeSummary {
        service_total_amount,
        breakdown,
    }
}
