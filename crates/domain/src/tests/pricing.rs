// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, PriceFields, is_price_linked, reprice_suggested, suggested_price_for,
    validate_price,
};

fn assert_price(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < f64::EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_suggested_price_is_half_rounded_up() {
    assert_price(suggested_price_for(200.0), 100.0);
    assert_price(suggested_price_for(199.0), 100.0);
    assert_price(suggested_price_for(1.0), 1.0);
    assert_price(suggested_price_for(0.0), 0.0);
    assert_price(suggested_price_for(99.5), 50.0);
}

#[test]
fn test_price_link_detection() {
    assert!(is_price_linked(200.0, 100.0));
    assert!(!is_price_linked(200.0, 80.0));
}

#[test]
fn test_reprice_follows_linked_suggestion() {
    assert_price(reprice_suggested(200.0, 100.0, 300.0), 150.0);
}

#[test]
fn test_reprice_keeps_overridden_suggestion() {
    assert_price(reprice_suggested(200.0, 80.0, 300.0), 80.0);
}

#[test]
fn test_validate_price() {
    assert!(validate_price("original_price", 0.0).is_ok());
    assert!(validate_price("original_price", 125.5).is_ok());
    assert!(matches!(
        validate_price("original_price", -1.0),
        Err(DomainError::InvalidPrice {
            field: "original_price",
            ..
        })
    ));
    assert!(validate_price("final_price", f64::NAN).is_err());
    assert!(validate_price("final_price", f64::INFINITY).is_err());
}

#[test]
fn test_price_fields_stay_linked_across_original_edits() {
    let mut fields = PriceFields::new(200.0);
    assert_price(fields.suggested_price(), 100.0);

    for original in [150.0, 99.0, 1000.0, 3.0] {
        fields.set_original_price(original);
        assert_price(fields.suggested_price(), suggested_price_for(original));
        assert!(fields.is_linked());
    }
}

#[test]
fn test_price_fields_unlink_after_direct_edit() {
    let mut fields = PriceFields::new(200.0);
    fields.set_suggested_price(75.0);
    assert!(!fields.is_linked());

    for original in [300.0, 10.0, 500.0] {
        fields.set_original_price(original);
        assert_price(fields.original_price(), original);
        assert_price(fields.suggested_price(), 75.0);
    }
}

#[test]
fn test_price_fields_unlink_even_when_edit_matches_derived_value() {
    let mut fields = PriceFields::new(200.0);
    fields.set_suggested_price(100.0);
    fields.set_original_price(400.0);

    assert_price(fields.suggested_price(), 100.0);
}
