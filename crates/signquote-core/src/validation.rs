//! # Validation Module
//!
//! Boundary validation: wire-shaped inputs become typed pricing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Quotation UI (TypeScript)                                    │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── width/height pair → LineBasis (once)                              │
//! │  ├── quantity, prices, charges non-negative                            │
//! │  ├── tier lists strictly ascending                                     │
//! │  └── line and order amounts within MAX_AMOUNT                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing stages                                               │
//! │  └── Assume valid input, never fail                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use signquote_core::validation::resolve_basis;
//! use signquote_core::LineBasis;
//!
//! assert_eq!(resolve_basis(None, None).unwrap(), LineBasis::Piece);
//! assert!(resolve_basis(Some(dec!(2)), None).is_err());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::PricingConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LineBasis, LineItem, Material, PricingTier, ServiceCharge, ServiceChargeKind};
use crate::{MAX_AMOUNT, MAX_DISCOUNT_PERCENT};

// =============================================================================
// Line Item Input
// =============================================================================

/// A quotation line as it arrives from the UI.
///
/// Width and height are optional here; [`LineItem`] carries the resolved
/// [`LineBasis`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItemInput {
    pub name: String,

    #[serde(default)]
    #[ts(type = "string | null")]
    pub width: Option<Decimal>,

    #[serde(default)]
    #[ts(type = "string | null")]
    pub height: Option<Decimal>,

    pub quantity: i64,

    pub material: Material,

    #[serde(default)]
    pub pricing_tiers: Option<Vec<PricingTier>>,

    #[serde(default)]
    pub custom_unit_price: Option<Money>,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = ValidationError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        validate_required("name", &input.name)?;
        let basis = resolve_basis(input.width, input.height)?;
        let quantity = validate_quantity(input.quantity)?;
        validate_material(&input.material)?;

        if let Some(tiers) = &input.pricing_tiers {
            validate_tiers(tiers)?;
        }
        if let Some(price) = input.custom_unit_price {
            validate_non_negative("custom unit price", price.amount())?;
        }

        let item = LineItem {
            name: input.name,
            basis,
            quantity,
            material: input.material,
            pricing_tiers: input.pricing_tiers,
            custom_unit_price: input.custom_unit_price,
        };
        validate_line_amount(&item)?;
        Ok(item)
    }
}

// =============================================================================
// Line Validators
// =============================================================================

/// Resolves an optional width/height pair into a [`LineBasis`].
///
/// ## Rules
/// - Both present and positive → `Area`
/// - Both absent → `Piece`
/// - Only one present → `MixedDimensions`
/// - Zero or negative dimension → `MustBePositive`
pub fn resolve_basis(width: Option<Decimal>, height: Option<Decimal>) -> ValidationResult<LineBasis> {
    match (width, height) {
        (Some(width), Some(height)) => {
            validate_positive("width", width)?;
            validate_positive("height", height)?;
            Ok(LineBasis::Area { width, height })
        }
        (None, None) => Ok(LineBasis::Piece),
        (Some(_), None) => Err(ValidationError::MixedDimensions {
            present: "width".to_string(),
            missing: "height".to_string(),
        }),
        (None, Some(_)) => Err(ValidationError::MixedDimensions {
            present: "height".to_string(),
            missing: "width".to_string(),
        }),
    }
}

/// Validates a requested quantity.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (prices to zero)
/// - Must fit in `u32`
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: Decimal::ZERO,
        max: Decimal::from(u32::MAX),
    })
}

/// Validates a tier list.
///
/// ## Rules
/// - `min_quantity` strictly ascending (no duplicates)
/// - `discount_percent` between 0 and 100
pub fn validate_tiers(tiers: &[PricingTier]) -> ValidationResult<()> {
    for tier in tiers {
        if tier.discount_percent < Decimal::ZERO || tier.discount_percent > MAX_DISCOUNT_PERCENT {
            return Err(ValidationError::OutOfRange {
                field: "discount percent".to_string(),
                min: Decimal::ZERO,
                max: MAX_DISCOUNT_PERCENT,
            });
        }
    }

    for pair in tiers.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min_quantity == prev.min_quantity {
            return Err(ValidationError::Duplicate {
                field: "tier min quantity".to_string(),
                value: next.min_quantity.to_string(),
            });
        }
        if next.min_quantity < prev.min_quantity {
            return Err(ValidationError::Unordered {
                field: "tier min quantity".to_string(),
                value: next.min_quantity.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Amount Bounds
// =============================================================================

/// Checks that pricing a line stays within [`MAX_AMOUNT`].
///
/// Repeats the line pricer's multiplications with checked arithmetic and
/// returns the pre-discount amount. The material's waste factor is applied
/// whatever the basis, so the result bounds both waste policies.
pub fn validate_line_amount(item: &LineItem) -> ValidationResult<Money> {
    let quantity = Decimal::from(item.quantity);
    let total_area = match item.basis {
        LineBasis::Area { width, height } => width
            .checked_mul(height)
            .and_then(|per_unit| per_unit.checked_mul(quantity)),
        LineBasis::Piece => Some(quantity),
    };
    let material_area =
        total_area.and_then(|area| area.checked_mul(item.material.effective_waste_factor()));

    let unit_price = item
        .custom_unit_price
        .unwrap_or(item.material.selling_price);
    let amount = material_area.and_then(|area| unit_price.amount().checked_mul(area));
    let cost = match item.material.cost_price {
        Some(cost) => material_area.and_then(|area| cost.amount().checked_mul(area)),
        None => Some(Decimal::ZERO),
    };

    match (amount, cost) {
        (Some(amount), Some(cost)) if amount <= MAX_AMOUNT && cost <= MAX_AMOUNT => {
            Ok(Money::new(amount))
        }
        _ => Err(amount_out_of_range("line amount")),
    }
}

/// Checks that the order's grand total stays within [`MAX_AMOUNT`].
///
/// Expects lines that already passed [`validate_line_amount`].
pub fn validate_order_amount(
    items: &[LineItem],
    charges: &[ServiceCharge],
    config: &PricingConfig,
) -> ValidationResult<()> {
    match order_amount_bound(items, charges, config) {
        Some(total) if total <= MAX_AMOUNT => Ok(()),
        _ => Err(amount_out_of_range("order total")),
    }
}

fn order_amount_bound(
    items: &[LineItem],
    charges: &[ServiceCharge],
    config: &PricingConfig,
) -> Option<Decimal> {
    let items_subtotal = items.iter().try_fold(Decimal::ZERO, |sum, item| {
        sum.checked_add(validate_line_amount(item).ok()?.amount())
    })?;

    let services = charges.iter().try_fold(Decimal::ZERO, |sum, charge| {
        let applied = match charge.kind {
            ServiceChargeKind::Fixed => charge.amount,
            ServiceChargeKind::Percentage => {
                items_subtotal.checked_mul(charge.amount)? / Decimal::ONE_HUNDRED
            }
        };
        sum.checked_add(applied)
    })?;

    let mut total_before_vat = items_subtotal.checked_add(services)?;
    if let Some(minimum) = config.minimum_charge_per_order {
        total_before_vat = total_before_vat.max(minimum.amount());
    }
    let vat = total_before_vat.checked_mul(config.vat_rate.fraction())?;
    total_before_vat.checked_add(vat)
}

fn amount_out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: Decimal::ZERO,
        max: MAX_AMOUNT,
    }
}

// =============================================================================
// Material Validators
// =============================================================================

/// Validates a catalog material snapshot.
///
/// The waste factor is not checked: values below 1 are normalized when
/// pricing, never rejected.
pub fn validate_material(material: &Material) -> ValidationResult<()> {
    validate_material_id(&material.id)?;
    validate_non_negative("selling price", material.selling_price.amount())?;
    if let Some(cost) = material.cost_price {
        validate_non_negative("cost price", cost.amount())?;
    }
    validate_tiers(&material.pricing_tiers)
}

/// Validates a catalog material id (UUID).
///
/// ## Example
/// ```rust
/// use signquote_core::validation::validate_material_id;
///
/// assert!(validate_material_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_material_id("vinyl").is_err());
/// ```
pub fn validate_material_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "material id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "material id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Service Charge Validators
// =============================================================================

/// Validates a service charge: named, non-negative amount.
pub fn validate_service_charge(charge: &ServiceCharge) -> ValidationResult<()> {
    validate_required("service charge name", &charge.name)?;
    validate_non_negative("service charge amount", charge.amount)
}

// =============================================================================
// Primitive Validators
// =============================================================================

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn validate_positive(field: &str, value: Decimal) -> ValidationResult<()> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
