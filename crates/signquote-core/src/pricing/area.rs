//! Dimension/area resolution.

use rust_decimal::Decimal;

use crate::types::{Area, LineBasis};

/// Converts a line's basis and quantity into the billed quantity basis.
///
/// - `Area { width, height }`: `area_per_unit = width × height`,
///   `total_area = area_per_unit × quantity` (m²).
/// - `Piece`: no per-unit area, `total_area = quantity` (pieces).
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use signquote_core::pricing::calculate_area;
/// use signquote_core::LineBasis;
///
/// let area = calculate_area(&LineBasis::Area { width: dec!(2), height: dec!(3) }, 2);
/// assert_eq!(area.area_per_unit, Some(dec!(6)));
/// assert_eq!(area.total_area, dec!(12));
/// ```
pub fn calculate_area(basis: &LineBasis, quantity: u32) -> Area {
    let quantity = Decimal::from(quantity);

    match *basis {
        LineBasis::Area { width, height } => {
            let per_unit = width * height;
            Area {
                area_per_unit: Some(per_unit),
                total_area: per_unit * quantity,
            }
        }
        LineBasis::Piece => Area {
            area_per_unit: None,
            total_area: quantity,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_area_basis() {
        let area = calculate_area(
            &LineBasis::Area {
                width: dec!(2),
                height: dec!(3),
            },
            2,
        );
        assert_eq!(area.area_per_unit, Some(dec!(6)));
        assert_eq!(area.total_area, dec!(12));
    }

    #[test]
    fn test_piece_basis() {
        let area = calculate_area(&LineBasis::Piece, 5);
        assert_eq!(area.area_per_unit, None);
        assert_eq!(area.total_area, dec!(5));
    }

    #[test]
    fn test_fractional_dimensions() {
        let area = calculate_area(
            &LineBasis::Area {
                width: dec!(1.2),
                height: dec!(0.6),
            },
            3,
        );
        assert_eq!(area.area_per_unit, Some(dec!(0.72)));
        assert_eq!(area.total_area, dec!(2.16));
    }

    #[test]
    fn test_zero_quantity() {
        let area = calculate_area(
            &LineBasis::Area {
                width: dec!(2),
                height: dec!(5),
            },
            0,
        );
        assert_eq!(area.area_per_unit, Some(dec!(10)));
        assert!(area.total_area.is_zero());
    }
}
