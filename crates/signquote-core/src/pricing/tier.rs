//! Volume tier resolution.

use tracing::trace;

use crate::types::PricingTier;

/// Returns the tier with the largest `min_quantity` not exceeding `quantity`.
///
/// This is a "best applicable floor", not a range match: a quantity past
/// the last threshold still gets the last tier. Returns `None` when the
/// quantity is below every threshold.
///
/// The result does not depend on the order of `tiers`.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use signquote_core::pricing::find_applicable_tier;
/// use signquote_core::PricingTier;
///
/// let tiers = [
///     PricingTier::new(10, dec!(5)),
///     PricingTier::new(50, dec!(10)),
///     PricingTier::new(100, dec!(20)),
/// ];
/// assert!(find_applicable_tier(5, &tiers).is_none());
/// assert_eq!(find_applicable_tier(150, &tiers).unwrap().discount_percent, dec!(20));
/// ```
pub fn find_applicable_tier(quantity: u32, tiers: &[PricingTier]) -> Option<&PricingTier> {
    let tier = tiers
        .iter()
        .filter(|tier| tier.min_quantity <= quantity)
        .max_by_key(|tier| tier.min_quantity);

    trace!(
        quantity,
        tiers = tiers.len(),
        min_quantity = tier.map(|t| t.min_quantity),
        "Resolved pricing tier"
    );

    tier
}
