//! Waste inflation.

use rust_decimal::Decimal;

/// Normalizes a configured waste factor: anything below 1 becomes 1.
///
/// Waste can only add material, never subtract it.
#[inline]
pub fn effective_waste_factor(waste_factor: Decimal) -> Decimal {
    waste_factor.max(Decimal::ONE)
}

/// Inflates a raw area by a waste factor.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use signquote_core::pricing::apply_waste_factor;
///
/// assert_eq!(apply_waste_factor(dec!(10), dec!(1.15)), dec!(11.5));
/// assert_eq!(apply_waste_factor(dec!(10), dec!(0.5)), dec!(10));
/// ```
#[inline]
pub fn apply_waste_factor(area: Decimal, waste_factor: Decimal) -> Decimal {
    area * effective_waste_factor(waste_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_waste_factor_inflates_area() {
        assert_eq!(apply_waste_factor(dec!(10), dec!(1.15)), dec!(11.5));
        assert_eq!(apply_waste_factor(dec!(10), dec!(1.1)), dec!(11));
    }

    #[test]
    fn test_waste_factor_below_one_is_clamped() {
        for factor in [dec!(0), dec!(0.5), dec!(0.99), dec!(-2)] {
            assert_eq!(effective_waste_factor(factor), dec!(1));
            assert_eq!(apply_waste_factor(dec!(10), factor), dec!(10));
        }
    }

    #[test]
    fn test_waste_factor_of_one_is_identity() {
        assert_eq!(apply_waste_factor(dec!(7.25), dec!(1)), dec!(7.25));
    }
}
