// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, DomainError, ItemStatus, Role};

#[test]
fn test_role_parse_accepts_aliases_and_case() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("donor".parse::<Role>(), Ok(Role::Donor));
    assert_eq!("donator".parse::<Role>(), Ok(Role::Donor));
    assert_eq!(" buyer ".parse::<Role>(), Ok(Role::Buyer));
}

#[test]
fn test_role_parse_rejects_unknown() {
    assert_eq!(
        "superuser".parse::<Role>(),
        Err(DomainError::InvalidRole(String::from("superuser")))
    );
}

#[test]
fn test_admin_capabilities() {
    let role = Role::Admin;
    assert!(role.can_approve());
    assert!(role.can_manage_inventory());
    assert!(role.can_see_internal_fields());
    assert!(role.can_see_pending());
    assert!(role.can_manage_reservations());
    assert!(role.can_submit_donations());
}

#[test]
fn test_non_admin_capabilities() {
    for role in [Role::Donor, Role::Buyer] {
        assert!(!role.can_approve());
        assert!(!role.can_manage_inventory());
        assert!(!role.can_see_internal_fields());
        assert!(!role.can_see_pending());
        assert!(!role.can_manage_reservations());
        assert!(role.can_submit_donations());
    }
}

#[test]
fn test_intake_status_by_role() {
    assert_eq!(Role::Admin.intake_status(), ItemStatus::Available);
    assert_eq!(Role::Donor.intake_status(), ItemStatus::PendingApproval);
    assert_eq!(Role::Buyer.intake_status(), ItemStatus::PendingApproval);
}

#[test]
fn test_actor_is_admin() {
    let admin = Actor::new(String::from("a-1"), Role::Admin, String::from("Admin"));
    let donor = Actor::new(String::from("d-1"), Role::Donor, String::from("Donor"));
    assert!(admin.is_admin());
    assert!(!donor.is_admin());
}
