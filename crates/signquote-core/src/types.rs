//! # Domain Types
//!
//! Value types that flow through the pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS (resolved by the caller)        OUTPUTS (derived, read-only)    │
//! │  ┌─────────────────┐                    ┌─────────────────────┐        │
//! │  │    Material     │◄──┐                │   LineItemResult    │        │
//! │  │  selling_price  │   │                │  total_area         │        │
//! │  │  waste_factor   │   │                │  material_area      │        │
//! │  │  pricing_tiers ─┼─► PricingTier      │  discount_amount    │        │
//! │  └─────────────────┘   │                │  total_price        │        │
//! │  ┌─────────────────┐   │                └──────────┬──────────┘        │
//! │  │    LineItem     │───┘                           ▼                   │
//! │  │  basis: Area |  │                    ┌─────────────────────┐        │
//! │  │         Piece   │                    │   QuotationResult   │        │
//! │  └─────────────────┘                    │  items_subtotal     │        │
//! │  ┌─────────────────┐                    │  service_total      │        │
//! │  │  ServiceCharge  │───────────────────►│  total_before_vat   │        │
//! │  │  Fixed | Pct    │                    │  vat / grand_total  │        │
//! │  └─────────────────┘                    └─────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value here is constructed fresh per calculation and never mutated
//! by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::money::Money;
use crate::pricing::waste;

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate as a fraction (0.07 = 7%).
///
/// Negative rates are rejected on construction and on deserialization, so
/// every `VatRate` in a calculation can only add to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "Decimal")]
#[ts(export)]
pub struct VatRate(#[ts(type = "string")] Decimal);

impl VatRate {
    /// Creates a VAT rate from a fraction.
    pub fn new(fraction: Decimal) -> Result<Self, ConfigError> {
        if fraction < Decimal::ZERO {
            return Err(ConfigError::NegativeVatRate(fraction));
        }
        Ok(VatRate(fraction))
    }

    /// Creates a VAT rate from a percentage (7 → 0.07).
    pub fn from_percent(percent: Decimal) -> Result<Self, ConfigError> {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Zero VAT (exempt quotations).
    #[inline]
    pub const fn zero() -> Self {
        VatRate(Decimal::ZERO)
    }
}

/// Thai standard VAT, 7%.
impl Default for VatRate {
    fn default() -> Self {
        VatRate(Decimal::new(7, 2))
    }
}

impl TryFrom<Decimal> for VatRate {
    type Error = ConfigError;

    fn try_from(fraction: Decimal) -> Result<Self, Self::Error> {
        VatRate::new(fraction)
    }
}

// =============================================================================
// Pricing Tier
// =============================================================================

/// One volume-discount rule.
///
/// A quantity at or above `min_quantity` earns `discount_percent`, unless a
/// tier with a higher threshold also applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingTier {
    /// Inclusive threshold. Unique within a tier list.
    pub min_quantity: u32,

    /// Percentage points, 0 to 100.
    #[ts(type = "string")]
    pub discount_percent: Decimal,
}

impl PricingTier {
    pub fn new(min_quantity: u32, discount_percent: Decimal) -> Self {
        PricingTier {
            min_quantity,
            discount_percent,
        }
    }
}

// =============================================================================
// Material
// =============================================================================

/// Pricing-relevant projection of a catalog material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Material {
    /// Catalog id (UUID v4).
    pub id: String,

    /// Display name, e.g. "Vinyl 440g".
    pub name: String,

    /// Price per m² for area goods, per piece for piece goods.
    pub selling_price: Money,

    /// Purchase cost per unit. Informational only.
    #[serde(default)]
    pub cost_price: Option<Money>,

    /// Cutting/trimming allowance. Values below 1 behave as exactly 1.
    #[ts(type = "string")]
    pub waste_factor: Decimal,

    /// Unit label for documents ("sqm", "piece", ...).
    #[serde(default)]
    pub unit: String,

    /// Volume discounts, ascending by `min_quantity`.
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
}

impl Material {
    /// Waste factor after normalization (never below 1).
    #[inline]
    pub fn effective_waste_factor(&self) -> Decimal {
        waste::effective_waste_factor(self.waste_factor)
    }
}

// =============================================================================
// Line Basis
// =============================================================================

/// How a line is measured.
///
/// Resolved once at the boundary from the optional width/height pair, so no
/// stage has to re-infer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum LineBasis {
    /// Priced per m²: each unit is `width × height`.
    Area {
        #[ts(type = "string")]
        width: Decimal,
        #[ts(type = "string")]
        height: Decimal,
    },
    /// Priced per piece: the quantity is the billed unit count.
    Piece,
}

impl LineBasis {
    #[inline]
    pub fn is_area(&self) -> bool {
        matches!(self, LineBasis::Area { .. })
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A validated quotation line.
///
/// Built from [`crate::validation::LineItemInput`] at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub basis: LineBasis,
    pub quantity: u32,
    pub material: Material,
    /// Replaces the material's tiers for this line when present.
    pub pricing_tiers: Option<Vec<PricingTier>>,
    /// Replaces the material's selling price when present. Zero is a
    /// legitimate free item, distinct from `None`.
    pub custom_unit_price: Option<Money>,
}

impl LineItem {
    /// Tiers that govern this line: the override list, else the material's.
    pub fn effective_tiers(&self) -> &[PricingTier] {
        self.pricing_tiers
            .as_deref()
            .unwrap_or(&self.material.pricing_tiers)
    }
}

// =============================================================================
// Service Charge
// =============================================================================

/// How a service charge's `amount` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ServiceChargeKind {
    /// `amount` is currency.
    Fixed,
    /// `amount` is percentage points of the items subtotal.
    Percentage,
}

/// An order-level add-on such as installation, design or delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ServiceCharge {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ServiceChargeKind,

    #[ts(type = "string")]
    pub amount: Decimal,
}

impl ServiceCharge {
    pub fn fixed(name: impl Into<String>, amount: Decimal) -> Self {
        ServiceCharge {
            name: name.into(),
            kind: ServiceChargeKind::Fixed,
            amount,
        }
    }

    pub fn percentage(name: impl Into<String>, percent: Decimal) -> Self {
        ServiceCharge {
            name: name.into(),
            kind: ServiceChargeKind::Percentage,
            amount: percent,
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Area/quantity basis of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Area {
    /// `width × height`; `None` for piece goods.
    #[ts(type = "string | null")]
    pub area_per_unit: Option<Decimal>,

    /// m² for area goods, piece count for piece goods.
    #[ts(type = "string")]
    pub total_area: Decimal,
}

/// Where a line's unit price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PriceSource {
    /// The material's catalog selling price.
    Catalog,
    /// A manual per-line override.
    Custom,
}

/// One priced line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItemResult {
    pub name: String,
    pub basis: LineBasis,
    pub quantity: u32,

    #[ts(type = "string | null")]
    pub area_per_unit: Option<Decimal>,
    #[ts(type = "string")]
    pub total_area: Decimal,

    /// Waste factor actually applied (1 when waste was not applied).
    #[ts(type = "string")]
    pub waste_factor: Decimal,
    /// Billed material quantity after waste.
    #[ts(type = "string")]
    pub material_area: Decimal,

    pub unit_price: Money,
    pub price_source: PriceSource,

    /// Before discount.
    pub subtotal: Money,
    pub applied_tier: Option<PricingTier>,
    #[ts(type = "string")]
    pub discount_percent: Decimal,
    pub discount_amount: Money,
    /// After discount, before VAT.
    pub total_price: Money,

    /// `material_area × cost_price` when the material has a cost.
    pub material_cost: Option<Money>,
}

/// A service charge as applied to one quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppliedServiceCharge {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ServiceChargeKind,
    /// The configured amount (currency or percentage points).
    #[ts(type = "string")]
    pub amount: Decimal,
    pub applied_amount: Money,
}

/// Output of the service charge stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ServiceChargeSummary {
    pub service_total_amount: Money,
    pub breakdown: Vec<AppliedServiceCharge>,
}

/// The fully itemized quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuotationResult {
    pub items: Vec<LineItemResult>,
    pub items_subtotal: Money,

    pub service_charges: Vec<AppliedServiceCharge>,
    pub service_total_amount: Money,

    /// `items_subtotal + service_total_amount`, before the minimum floor.
    pub computed_total_before_vat: Money,
    pub minimum_charge_applied: bool,
    /// Amount the floor added (zero when it did not apply).
    pub minimum_charge_adjustment: Money,
    pub total_before_vat: Money,

    pub vat_rate: VatRate,
    pub vat_amount: Money,
    pub grand_total: Money,

    /// Sum of known line material costs.
    pub estimated_cost: Money,
    /// `items_subtotal - estimated_cost`.
    pub estimated_margin: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn material(waste_factor: Decimal) -> Material {
        Material {
            id: "6f1c2d9e-3b4a-4c5d-8e7f-0a1b2c3d4e5f".to_string(),
            name: "Vinyl 440g".to_string(),
            selling_price: Money::from_major(150),
            cost_price: None,
            waste_factor,
            unit: "sqm".to_string(),
            pricing_tiers: vec![PricingTier::new(10, dec!(5))],
        }
    }

    #[test]
    fn test_vat_rate_default_is_seven_percent() {
        let rate = VatRate::default();
        assert_eq!(rate.fraction(), dec!(0.07));
        assert_eq!(rate.percent(), dec!(7));
    }

    #[test]
    fn test_vat_rate_rejects_negative() {
        assert!(VatRate::new(dec!(-0.01)).is_err());
        assert!(VatRate::new(dec!(0)).is_ok());
        assert_eq!(VatRate::from_percent(dec!(10)).unwrap().fraction(), dec!(0.1));
    }

    #[test]
    fn test_effective_waste_factor() {
        assert_eq!(material(dec!(1.15)).effective_waste_factor(), dec!(1.15));
        assert_eq!(material(dec!(0.5)).effective_waste_factor(), dec!(1));
    }

    #[test]
    fn test_line_tiers_override_material_tiers() {
        let mut item = LineItem {
            name: "Banner".to_string(),
            basis: LineBasis::Piece,
            quantity: 1,
            material: material(dec!(1)),
            pricing_tiers: None,
            custom_unit_price: None,
        };
        assert_eq!(item.effective_tiers()[0].min_quantity, 10);

        item.pricing_tiers = Some(vec![PricingTier::new(50, dec!(10))]);
        assert_eq!(item.effective_tiers()[0].min_quantity, 50);

        item.pricing_tiers = Some(Vec::new());
        assert!(item.effective_tiers().is_empty());
    }

    #[test]
    fn test_service_charge_constructors() {
        let fixed = ServiceCharge::fixed("Installation", dec!(1500));
        assert_eq!(fixed.kind, ServiceChargeKind::Fixed);

        let pct = ServiceCharge::percentage("Design", dec!(10));
        assert_eq!(pct.kind, ServiceChargeKind::Percentage);
        assert_eq!(pct.amount, dec!(10));
    }
}
