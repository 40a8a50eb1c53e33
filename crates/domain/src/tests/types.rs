// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{Category, Condition, DomainError, ItemId, ItemStatus};

#[test]
fn test_category_round_trips_through_str() {
    for category in Category::ALL {
        assert_eq!(Category::from_str(category.as_str()), Ok(category));
    }
}

#[test]
fn test_category_rejects_unknown_value() {
    let result = Category::from_str("garden");
    assert_eq!(result, Err(DomainError::InvalidCategory(String::from("garden"))));
}

#[test]
fn test_category_serializes_as_snake_case() {
    let json = serde_json::to_string(&Category::OtherRoomInventory).unwrap();
    assert_eq!(json, "\"other_room_inventory\"");

    let parsed: Category = serde_json::from_str("\"bike_sports\"").unwrap();
    assert_eq!(parsed, Category::BikeSports);
}

#[test]
fn test_condition_parse() {
    assert_eq!("new".parse::<Condition>(), Ok(Condition::New));
    assert_eq!("lightly_used".parse::<Condition>(), Ok(Condition::LightlyUsed));
    assert_eq!("worn".parse::<Condition>(), Ok(Condition::Worn));
    assert!(matches!(
        "broken".parse::<Condition>(),
        Err(DomainError::InvalidCondition(_))
    ));
}

#[test]
fn test_item_status_parse_and_display() {
    let status: ItemStatus = "pending_approval".parse().unwrap();
    assert_eq!(status, ItemStatus::PendingApproval);
    assert_eq!(status.to_string(), "pending_approval");
    assert!(matches!(
        "lost".parse::<ItemStatus>(),
        Err(DomainError::InvalidStatus(_))
    ));
}

#[test]
fn test_item_status_valid_transitions() {
    assert!(ItemStatus::PendingApproval.can_transition_to(ItemStatus::Available));
    assert!(ItemStatus::Available.can_transition_to(ItemStatus::Reserved));
    assert!(ItemStatus::Reserved.can_transition_to(ItemStatus::Available));
    assert!(ItemStatus::Available.can_transition_to(ItemStatus::Sold));
    assert!(ItemStatus::Reserved.can_transition_to(ItemStatus::Sold));
    assert!(ItemStatus::Available.can_transition_to(ItemStatus::Donated));
    assert!(ItemStatus::Reserved.can_transition_to(ItemStatus::Donated));
}

#[test]
fn test_item_status_invalid_transitions() {
    assert!(!ItemStatus::PendingApproval.can_transition_to(ItemStatus::Sold));
    assert!(!ItemStatus::PendingApproval.can_transition_to(ItemStatus::Reserved));
    assert!(!ItemStatus::Reserved.can_transition_to(ItemStatus::Reserved));
    assert!(!ItemStatus::Sold.can_transition_to(ItemStatus::Available));
    assert!(!ItemStatus::Donated.can_transition_to(ItemStatus::Available));
    assert!(!ItemStatus::Available.can_transition_to(ItemStatus::PendingApproval));
}

#[test]
fn test_validate_transition_reports_reason_for_dispositioned_items() {
    let err = ItemStatus::Sold
        .validate_transition(ItemStatus::Reserved)
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidStatusTransition {
            from: String::from("sold"),
            to: String::from("reserved"),
            reason: String::from("item has already been dispositioned"),
        }
    );
}

#[test]
fn test_only_available_and_reserved_are_disposable() {
    assert!(ItemStatus::Available.is_disposable());
    assert!(ItemStatus::Reserved.is_disposable());
    assert!(!ItemStatus::PendingApproval.is_disposable());
    assert!(!ItemStatus::Sold.is_disposable());
    assert!(!ItemStatus::Donated.is_disposable());
}

#[test]
fn test_generated_item_ids_are_unique() {
    let first = ItemId::generate();
    let second = ItemId::generate();
    assert_ne!(first, second);
    assert!(!first.as_str().is_empty());
}

#[test]
fn test_item_id_serializes_transparently() {
    let id = ItemId::new("abc-123");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    assert_eq!(id.to_string(), "abc-123");
}
