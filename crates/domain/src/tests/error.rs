// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidCategory(String::from("garden"));
    assert_eq!(format!("{err}"), "Unknown category: 'garden'");

    let err: DomainError = DomainError::InvalidQuantity {
        quantity: 7,
        reason: String::from("only 5 available"),
    };
    assert_eq!(format!("{err}"), "Invalid quantity 7: only 5 available");

    let err: DomainError = DomainError::InvalidPrice {
        field: "original_price",
        reason: String::from("must not be negative, got -1"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid original_price: must not be negative, got -1"
    );

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("sold"),
        to: String::from("available"),
        reason: String::from("item has already been dispositioned"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition item from 'sold' to 'available': item has already been dispositioned"
    );

    let err: DomainError = DomainError::EmptyReservation;
    assert_eq!(
        format!("{err}"),
        "A reservation must include at least one item"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::EmptyDonationBatch);
    assert_eq!(err.to_string(), "A donation must include at least one item");
}
