//! End-to-end quotation scenarios, driven through the JSON request envelope
//! a server-side handler would receive.

use rust_decimal_macros::dec;
use serde_json::json;
use signquote_core::pricing::{apply_waste_factor, calculate_area, calculate_quotation};
use signquote_core::validation::resolve_basis;
use signquote_core::{
    LineItem, Money, PriceSource, PricingError, QuotationRequest, ValidationError,
};

const VINYL_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const ACRYLIC_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn vinyl() -> serde_json::Value {
    json!({
        "id": VINYL_ID,
        "name": "Vinyl 440g",
        "sellingPrice": "150",
        "costPrice": "60",
        "wasteFactor": "1.1",
        "unit": "sqm",
        "pricingTiers": [
            { "minQuantity": 10, "discountPercent": "5" },
            { "minQuantity": 50, "discountPercent": "10" },
            { "minQuantity": 100, "discountPercent": "20" }
        ]
    })
}

fn acrylic() -> serde_json::Value {
    json!({
        "id": ACRYLIC_ID,
        "name": "Acrylic 3mm",
        "sellingPrice": "200",
        "wasteFactor": "0.9",
        "unit": "sqm"
    })
}

fn request(value: serde_json::Value) -> QuotationRequest {
    serde_json::from_value(value).expect("request should deserialize")
}

#[test]
fn test_full_quotation_from_json() {
    init_tracing();

    let req = request(json!({
        "items": [
            { "name": "Shopfront banner", "width": "2", "height": "5", "quantity": 1, "material": vinyl() },
            { "name": "Acrylic panel", "width": "2", "height": "4", "quantity": 1, "material": acrylic() }
        ],
        "serviceCharges": [
            { "name": "Installation", "type": "fixed", "amount": "1500" }
        ]
    }));

    let quote = req.calculate().unwrap();

    assert_eq!(quote.items[0].total_price.amount(), dec!(1650));
    // waste factor 0.9 is normalized to 1
    assert_eq!(quote.items[1].waste_factor, dec!(1));
    assert_eq!(quote.items[1].total_price.amount(), dec!(1600));

    assert_eq!(quote.items_subtotal.amount(), dec!(3250));
    assert_eq!(quote.service_total_amount.amount(), dec!(1500));
    assert_eq!(quote.total_before_vat.amount(), dec!(4750));
    assert_eq!(quote.vat_amount.amount(), dec!(332.5));
    assert_eq!(quote.grand_total.amount(), dec!(5082.5));

    // 11 m² × 60 cost on the vinyl line only
    assert_eq!(quote.estimated_cost.amount(), dec!(660));
    assert_eq!(quote.estimated_margin.amount(), dec!(2590));
}

#[test]
fn test_tiered_volume_line() {
    init_tracing();

    let req = request(json!({
        "items": [
            { "name": "Stickers", "width": "1", "height": "1", "quantity": 100, "material": vinyl() }
        ]
    }));
    let quote = req.calculate().unwrap();
    let line = &quote.items[0];

    assert_eq!(line.subtotal.amount(), dec!(16500));
    assert_eq!(line.discount_percent, dec!(20));
    assert_eq!(line.discount_amount.amount(), dec!(3300));
    assert_eq!(line.total_price.amount(), dec!(13200));
}

#[test]
fn test_custom_unit_price_and_piece_lines() {
    init_tracing();

    let req = request(json!({
        "items": [
            { "name": "Special print", "width": "2", "height": "2", "quantity": 1,
              "material": vinyl(), "customUnitPrice": "100" },
            { "name": "Stand-offs", "quantity": 8, "material": acrylic(),
              "pricingTiers": [] }
        ]
    }));
    let quote = req.calculate().unwrap();

    assert_eq!(quote.items[0].price_source, PriceSource::Custom);
    assert_eq!(quote.items[0].total_price.amount(), dec!(440));

    assert_eq!(quote.items[1].area_per_unit, None);
    assert_eq!(quote.items[1].total_area, dec!(8));
    assert_eq!(quote.items[1].total_price.amount(), dec!(1600));
}

#[test]
fn test_minimum_charge_with_rounding() {
    init_tracing();

    let req = request(json!({
        "items": [
            { "name": "Sample", "width": "1", "height": "1", "quantity": 1, "material": vinyl() }
        ],
        "config": { "roundToInteger": true, "minimumChargePerOrder": "500" }
    }));
    let quote = req.calculate().unwrap();

    assert_eq!(quote.items_subtotal.amount(), dec!(165));
    assert_eq!(quote.total_before_vat.amount(), dec!(500));
    assert!(quote.minimum_charge_applied);
    assert_eq!(quote.vat_amount.amount(), dec!(35));
    assert_eq!(quote.grand_total.amount(), dec!(535));
}

#[test]
fn test_percentage_service_charge_and_custom_vat() {
    let req = request(json!({
        "items": [
            { "name": "Shopfront banner", "width": "2", "height": "5", "quantity": 1, "material": vinyl() }
        ],
        "serviceCharges": [
            { "name": "Design", "type": "percentage", "amount": "10" },
            { "name": "Delivery", "type": "fixed", "amount": "300" }
        ],
        "config": { "vatRate": "0.1" }
    }));
    let quote = req.calculate().unwrap();

    assert_eq!(quote.service_charges[0].applied_amount.amount(), dec!(165));
    assert_eq!(quote.service_total_amount.amount(), dec!(465));
    assert_eq!(quote.total_before_vat.amount(), dec!(2115));
    assert_eq!(quote.vat_amount.amount(), dec!(211.5));
    assert_eq!(quote.grand_total.amount(), dec!(2326.5));
}

#[test]
fn test_mixed_dimensions_rejected_with_position() {
    let req = request(json!({
        "items": [
            { "name": "Good", "width": "1", "height": "1", "quantity": 1, "material": vinyl() },
            { "name": "Half measured", "width": "2", "quantity": 1, "material": vinyl() }
        ]
    }));

    match req.calculate() {
        Err(PricingError::LineItem { index, name, source }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "Half measured");
            assert!(matches!(source, ValidationError::MixedDimensions { .. }));
        }
        other => panic!("expected line item error, got {other:?}"),
    }
}

#[test]
fn test_negative_quantity_rejected() {
    let req = request(json!({
        "items": [
            { "name": "Oops", "quantity": -2, "material": vinyl() }
        ]
    }));
    assert!(matches!(
        req.calculate(),
        Err(PricingError::LineItem {
            source: ValidationError::Negative { .. },
            ..
        })
    ));
}

#[test]
fn test_invalid_service_charge_rejected() {
    let req = request(json!({
        "items": [],
        "serviceCharges": [
            { "name": "Installation", "type": "fixed", "amount": "-100" }
        ]
    }));
    assert!(matches!(
        req.calculate(),
        Err(PricingError::ServiceCharge { index: 0, .. })
    ));
}

#[test]
fn test_oversized_dimensions_rejected_instead_of_overflowing() {
    let req = request(json!({
        "items": [
            { "name": "Billboard", "width": "100000000000000000000", "height": "100000000000000000000",
              "quantity": 1, "material": vinyl() }
        ]
    }));
    match req.calculate() {
        Err(PricingError::LineItem { index, source, .. }) => {
            assert_eq!(index, 0);
            assert!(matches!(source, ValidationError::OutOfRange { ref field, .. } if field == "line amount"));
        }
        other => panic!("expected line item error, got {other:?}"),
    }
}

#[test]
fn test_oversized_order_total_rejected() {
    let req = request(json!({
        "items": [
            { "name": "Shopfront banner", "width": "2", "height": "5", "quantity": 1, "material": vinyl() }
        ],
        "config": { "minimumChargePerOrder": "5000000000000000000" }
    }));
    assert!(matches!(
        req.calculate(),
        Err(PricingError::Validation(ValidationError::OutOfRange { .. }))
    ));
}

#[test]
fn test_rounded_line_total_rounds_after_discount() {
    let req = request(json!({
        "items": [
            { "name": "Offcut", "width": "1.4", "height": "1", "quantity": 1,
              "material": acrylic(), "customUnitPrice": "1",
              "pricingTiers": [ { "minQuantity": 1, "discountPercent": "50" } ] }
        ],
        "config": { "roundToInteger": true }
    }));
    let quote = req.calculate().unwrap();

    assert_eq!(quote.items[0].total_price.amount(), dec!(1));
    assert_eq!(quote.items_subtotal.amount(), dec!(1));
}

#[test]
fn test_negative_minimum_charge_rejected() {
    let req = request(json!({
        "items": [],
        "config": { "minimumChargePerOrder": "-1" }
    }));
    assert!(matches!(req.calculate(), Err(PricingError::Config(_))));
}

#[test]
fn test_negative_vat_rate_fails_to_deserialize() {
    let result: Result<QuotationRequest, _> = serde_json::from_value(json!({
        "items": [],
        "config": { "vatRate": "-0.07" }
    }));
    assert!(result.is_err());
}

#[test]
fn test_result_serializes_camel_case() {
    let req = request(json!({
        "items": [
            { "name": "Shopfront banner", "width": "2", "height": "5", "quantity": 1, "material": vinyl() }
        ]
    }));
    let quote = req.calculate().unwrap();
    let value = serde_json::to_value(&quote).unwrap();

    assert!(value.get("itemsSubtotal").is_some());
    assert!(value.get("grandTotal").is_some());
    assert_eq!(value["items"][0]["basis"]["kind"], "area");
    assert_eq!(value["items"][0]["priceSource"], "catalog");
}

#[test]
fn test_stage_functions_match_documented_values() {
    let basis = resolve_basis(Some(dec!(2)), Some(dec!(3))).unwrap();
    let area = calculate_area(&basis, 2);
    assert_eq!(area.area_per_unit, Some(dec!(6)));
    assert_eq!(area.total_area, dec!(12));

    let area = calculate_area(&resolve_basis(None, None).unwrap(), 5);
    assert_eq!(area.area_per_unit, None);
    assert_eq!(area.total_area, dec!(5));

    assert_eq!(apply_waste_factor(dec!(10), dec!(1.15)), dec!(11.5));
    assert_eq!(apply_waste_factor(dec!(10), dec!(0.5)), dec!(10));
}

#[test]
fn test_repeated_calculation_is_identical() {
    let req = request(json!({
        "items": [
            { "name": "Stickers", "width": "0.3", "height": "0.3", "quantity": 75, "material": vinyl() },
            { "name": "Panel", "width": "1.2", "height": "2.4", "quantity": 2, "material": acrylic() }
        ],
        "serviceCharges": [
            { "name": "Design", "type": "percentage", "amount": "7.5" }
        ],
        "config": { "roundToInteger": true }
    }));

    let items: Vec<LineItem> = req.validate().unwrap();
    let first = calculate_quotation(&items, &req.service_charges, &req.config);
    let second = calculate_quotation(&items, &req.service_charges, &req.config);
    assert_eq!(first, second);
    assert_eq!(first, req.calculate().unwrap());
}

#[test]
fn test_zero_custom_price_line_is_free() {
    let req = request(json!({
        "items": [
            { "name": "Courtesy sample", "width": "1", "height": "1", "quantity": 1,
              "material": vinyl(), "customUnitPrice": "0" }
        ],
        "config": { "minimumChargePerOrder": "0" }
    }));
    let quote = req.calculate().unwrap();

    assert!(quote.items[0].total_price.is_zero());
    assert!(quote.grand_total.is_zero());
    assert_eq!(quote.items[0].unit_price, Money::zero());
    assert!(!quote.minimum_charge_applied);
}
