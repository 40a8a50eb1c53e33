// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{ItemStatus, Role};
use loppis_persistence::ItemRepository;

use crate::{ApiError, DonationRequest, submit_donation};

use super::helpers::{
    FlakyRepository, create_draft_request, create_test_admin, create_test_bucket,
    create_test_buyer, create_test_donor, setup_test_persistence,
};

#[test]
fn test_donor_submission_is_pending_with_derived_price() {
    let mut persistence = setup_test_persistence();
    let donor = create_test_donor();
    let request = DonationRequest {
        items: vec![create_draft_request("Dinner plates", 6, 99.0)],
    };

    let response = submit_donation(&mut persistence, &donor, request, &create_test_bucket())
        .expect("Donation should succeed");

    assert_eq!(response.persisted, 1);
    let item = &response.items[0];
    assert_eq!(item.status, ItemStatus::PendingApproval);
    assert!((item.suggested_price - 50.0).abs() < f64::EPSILON);
    assert_eq!(item.donor_name.as_deref(), Some("Dana Donor"));
    assert_eq!(item.created_by, "donor-1");
    assert!(item.photos.is_empty());
    assert_eq!(persistence.list().unwrap().len(), 1);
}

#[test]
fn test_admin_submission_is_available_immediately() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin();
    let request = DonationRequest {
        items: vec![
            create_draft_request("Dinner plates", 6, 99.0),
            create_draft_request("Glasses", 4, 40.0),
        ],
    };

    let response = submit_donation(&mut persistence, &admin, request, &create_test_bucket())
        .expect("Donation should succeed");

    assert_eq!(response.persisted, 2);
    assert!(
        response
            .items
            .iter()
            .all(|item| item.status == ItemStatus::Available)
    );
}

#[test]
fn test_buyer_submission_is_treated_as_donor() {
    let mut persistence = setup_test_persistence();
    let buyer = create_test_buyer();
    assert_eq!(buyer.role, Role::Buyer);
    let request = DonationRequest {
        items: vec![create_draft_request("Kettle", 1, 120.0)],
    };

    let response = submit_donation(&mut persistence, &buyer, request, &create_test_bucket())
        .expect("Donation should succeed");

    assert_eq!(response.items[0].status, ItemStatus::PendingApproval);
}

#[test]
fn test_explicit_suggested_price_is_kept() {
    let mut persistence = setup_test_persistence();
    let mut draft = create_draft_request("Lamp", 1, 300.0);
    draft.suggested_price = Some(75.0);

    let response = submit_donation(
        &mut persistence,
        &create_test_donor(),
        DonationRequest { items: vec![draft] },
        &create_test_bucket(),
    )
    .expect("Donation should succeed");

    assert!((response.items[0].suggested_price - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_draft_names_field_and_index_and_stores_nothing() {
    let mut persistence = setup_test_persistence();
    let mut bad = create_draft_request("   ", 1, 10.0);
    bad.subcategory = String::from("plates");
    let request = DonationRequest {
        items: vec![create_draft_request("Plates", 2, 10.0), bad],
    };

    let result = submit_donation(
        &mut persistence,
        &create_test_donor(),
        request,
        &create_test_bucket(),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "items[1].name"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
    assert!(persistence.list().unwrap().is_empty());
}

#[test]
fn test_unknown_category_names_field_and_index() {
    let mut persistence = setup_test_persistence();
    let mut draft = create_draft_request("Plates", 2, 10.0);
    draft.category = String::from("garden");

    let result = submit_donation(
        &mut persistence,
        &create_test_donor(),
        DonationRequest { items: vec![draft] },
        &create_test_bucket(),
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "items[0].category"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_zero_and_negative_quantities_are_rejected() {
    let mut persistence = setup_test_persistence();

    for quantity in [0, -3] {
        let result = submit_donation(
            &mut persistence,
            &create_test_donor(),
            DonationRequest {
                items: vec![create_draft_request("Plates", quantity, 10.0)],
            },
            &create_test_bucket(),
        );
        match result {
            Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "items[0].quantity"),
            other => panic!("Expected InvalidInput for {quantity}, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_batch_is_rejected() {
    let mut persistence = setup_test_persistence();

    let result = submit_donation(
        &mut persistence,
        &create_test_donor(),
        DonationRequest { items: Vec::new() },
        &create_test_bucket(),
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "items"));
}

#[test]
fn test_storage_failure_on_first_create_is_storage_unavailable() {
    let mut repo = FlakyRepository::new(setup_test_persistence());
    repo.creates_before_failure = Some(0);

    let result = submit_donation(
        &mut repo,
        &create_test_donor(),
        DonationRequest {
            items: vec![create_draft_request("Plates", 2, 10.0)],
        },
        &create_test_bucket(),
    );

    assert!(matches!(result, Err(ApiError::StorageUnavailable { .. })));
    assert!(repo.inner.list().unwrap().is_empty());
}

#[test]
fn test_storage_failure_mid_batch_reports_partial_failure() {
    let mut repo = FlakyRepository::new(setup_test_persistence());
    repo.creates_before_failure = Some(2);
    let request = DonationRequest {
        items: vec![
            create_draft_request("Plates", 2, 10.0),
            create_draft_request("Glasses", 4, 20.0),
            create_draft_request("Cutlery", 12, 30.0),
        ],
    };

    let result = submit_donation(&mut repo, &create_test_donor(), request, &create_test_bucket());

    match result {
        Err(ApiError::PartialCompositeFailure { operation, message }) => {
            assert_eq!(operation, "submit_donation");
            assert!(message.starts_with("2 of 3 items"));
        }
        other => panic!("Expected PartialCompositeFailure, got {other:?}"),
    }
    assert_eq!(repo.inner.list().unwrap().len(), 2);
}
