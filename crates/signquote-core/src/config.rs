//! # Pricing Configuration
//!
//! Global pricing policy, passed by reference to every stage that needs it.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit values from the caller (per-quotation request payload)
//! 2. Environment variables (`SIGNQUOTE_*`) via [`PricingConfig::from_env`]
//! 3. Defaults (this file)
//!
//! A `PricingConfig` value is never mutated during a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ConfigError;
use crate::money::Money;
use crate::types::VatRate;

/// VAT rate as a percentage, e.g. "7".
pub const ENV_VAT_RATE: &str = "SIGNQUOTE_VAT_RATE";
/// "true"/"false" (also "1"/"0", "yes"/"no").
pub const ENV_ROUND_TO_INTEGER: &str = "SIGNQUOTE_ROUND_TO_INTEGER";
/// Decimal amount; empty means no floor.
pub const ENV_MINIMUM_CHARGE: &str = "SIGNQUOTE_MINIMUM_CHARGE";

/// Pricing policy for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct PricingConfig {
    /// Default: 7%.
    pub vat_rate: VatRate,

    /// Round line totals, VAT and the grand total to whole currency units.
    pub round_to_integer: bool,

    /// Floor for the pre-VAT total.
    pub minimum_charge_per_order: Option<Money>,

    /// Also inflate piece-based lines by the material's waste factor.
    pub waste_on_piece_goods: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            vat_rate: VatRate::default(),
            round_to_integer: false,
            minimum_charge_per_order: None,
            waste_on_piece_goods: false,
        }
    }
}

impl PricingConfig {
    pub fn with_vat_rate(mut self, vat_rate: VatRate) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    pub fn with_rounding(mut self, round_to_integer: bool) -> Self {
        self.round_to_integer = round_to_integer;
        self
    }

    pub fn with_minimum_charge(mut self, minimum: Money) -> Self {
        self.minimum_charge_per_order = Some(minimum);
        self
    }

    pub fn with_waste_on_piece_goods(mut self, enabled: bool) -> Self {
        self.waste_on_piece_goods = enabled;
        self
    }

    /// The single rounding policy used by every stage.
    ///
    /// Half-up to whole units when `round_to_integer` is set, identity
    /// otherwise.
    #[inline]
    pub fn round(&self, amount: Money) -> Money {
        if self.round_to_integer {
            amount.round_half_up()
        } else {
            amount
        }
    }

    /// Checks invariants the type system does not already enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(minimum) = self.minimum_charge_per_order {
            if minimum.is_negative() {
                return Err(ConfigError::NegativeMinimumCharge(minimum));
            }
        }
        Ok(())
    }

    /// Builds a config from `SIGNQUOTE_*` environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SIGNQUOTE_VAT_RATE`: VAT percentage (e.g., "7")
    /// - `SIGNQUOTE_ROUND_TO_INTEGER`: whole-unit rounding on/off
    /// - `SIGNQUOTE_MINIMUM_CHARGE`: minimum pre-VAT order total
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PricingConfig::default();

        if let Some(raw) = lookup(ENV_VAT_RATE) {
            let percent = parse_decimal(ENV_VAT_RATE, &raw)?;
            config.vat_rate = VatRate::from_percent(percent)?;
        }

        if let Some(raw) = lookup(ENV_ROUND_TO_INTEGER) {
            config.round_to_integer = parse_bool(ENV_ROUND_TO_INTEGER, &raw)?;
        }

        if let Some(raw) = lookup(ENV_MINIMUM_CHARGE) {
            config.minimum_charge_per_order = if raw.trim().is_empty() {
                None
            } else {
                Some(Money::new(parse_decimal(ENV_MINIMUM_CHARGE, &raw)?))
            };
        }

        config.validate()?;
        debug!(
            vat_percent = %config.vat_rate.percent(),
            round_to_integer = config.round_to_integer,
            minimum_charge = ?config.minimum_charge_per_order.map(|m| m.to_string()),
            "Loaded pricing config"
        );
        Ok(config)
    }
}

fn parse_decimal(var: &str, raw: &str) -> Result<Decimal, ConfigError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
