// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{Item, ItemStatus, Role};
use loppis_persistence::ItemRepository;

use crate::{
    AuthError, AuthorizationService, Capability, authenticate_identity,
    compute_global_capabilities, compute_item_capabilities,
};

use super::helpers::{
    create_test_admin, create_test_buyer, create_test_donor, donate_one, setup_test_persistence,
};

fn sample_item(status: ItemStatus) -> Item {
    let mut persistence = setup_test_persistence();
    let response = donate_one(&mut persistence, &create_test_admin(), "Lamp", 2);
    let mut item = persistence.get(&response.id).unwrap().unwrap();
    item.status = status;
    item.created_by = String::from("donor-1");
    item
}

#[test]
fn test_authenticate_identity_accepts_donator_alias() {
    let actor = authenticate_identity(Some("u-1"), Some("Donator"), Some("Uma")).unwrap();
    assert_eq!(actor.role, Role::Donor);
    assert_eq!(actor.display_name, "Uma");
}

#[test]
fn test_authenticate_identity_defaults_display_name_to_id() {
    let actor = authenticate_identity(Some(" u-1 "), Some("buyer"), Some("  ")).unwrap();
    assert_eq!(actor.id, "u-1");
    assert_eq!(actor.display_name, "u-1");
}

#[test]
fn test_authenticate_identity_rejects_missing_or_unknown_values() {
    assert!(matches!(
        authenticate_identity(None, Some("admin"), None),
        Err(AuthError::AuthenticationFailed { .. })
    ));
    assert!(matches!(
        authenticate_identity(Some("u-1"), None, None),
        Err(AuthError::AuthenticationFailed { .. })
    ));
    assert!(matches!(
        authenticate_identity(Some("u-1"), Some("superuser"), None),
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_only_admins_manage_reservations() {
    assert!(AuthorizationService::authorize_manage_reservations(&create_test_admin()).is_ok());
    assert!(matches!(
        AuthorizationService::authorize_manage_reservations(&create_test_buyer()),
        Err(AuthError::Unauthorized { action, .. }) if action == "manage_reservations"
    ));
}

#[test]
fn test_capability_serializes_as_bool() {
    assert_eq!(
        serde_json::to_value(Capability::Allowed).unwrap(),
        serde_json::json!(true)
    );
    let parsed: Capability = serde_json::from_str("false").unwrap();
    assert_eq!(parsed, Capability::Denied);
}

#[test]
fn test_item_capabilities_follow_status() {
    let admin = create_test_admin();

    let pending = compute_item_capabilities(&admin, &sample_item(ItemStatus::PendingApproval));
    assert!(pending.can_approve.is_allowed());
    assert!(!pending.can_sell.is_allowed());

    let reserved = compute_item_capabilities(&admin, &sample_item(ItemStatus::Reserved));
    assert!(reserved.can_release.is_allowed());
    assert!(!reserved.can_reserve.is_allowed());
    assert!(reserved.can_dispose.is_allowed());

    let sold = compute_item_capabilities(&admin, &sample_item(ItemStatus::Sold));
    assert!(!sold.can_dispose.is_allowed());
    assert!(sold.can_delete.is_allowed());
}

#[test]
fn test_donor_capabilities_on_own_pending_item() {
    let donor = create_test_donor();
    let item = sample_item(ItemStatus::PendingApproval);
    let capabilities = compute_item_capabilities(&donor, &item);

    assert!(capabilities.can_attach_photos.is_allowed());
    assert!(!capabilities.can_approve.is_allowed());
    assert!(!capabilities.can_edit.is_allowed());

    let global = compute_global_capabilities(&donor);
    assert!(global.can_submit_donations.is_allowed());
    assert!(!global.can_see_pending.is_allowed());
}
