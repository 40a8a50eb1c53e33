// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell a client which actions to offer for an item. They are
//! advisory only; every command is authorized again when it is applied.

use loppis_domain::{Actor, Item, ItemStatus};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::from_bool)
    }
}

/// Actor-level capabilities, independent of any item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalCapabilities {
    pub can_submit_donations: Capability,
    pub can_see_pending: Capability,
    pub can_manage_inventory: Capability,
    pub can_manage_reservations: Capability,
    pub can_view_export: Capability,
}

/// Actions an actor may take on one item in its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCapabilities {
    pub can_approve: Capability,
    pub can_reject: Capability,
    pub can_reserve: Capability,
    pub can_release: Capability,
    pub can_sell: Capability,
    pub can_donate: Capability,
    pub can_dispose: Capability,
    pub can_edit: Capability,
    pub can_delete: Capability,
    pub can_attach_photos: Capability,
}

/// Computes the actor-level capabilities.
#[must_use]
pub const fn compute_global_capabilities(actor: &Actor) -> GlobalCapabilities {
    let role = actor.role;
    GlobalCapabilities {
        can_submit_donations: Capability::from_bool(role.can_submit_donations()),
        can_see_pending: Capability::from_bool(role.can_see_pending()),
        can_manage_inventory: Capability::from_bool(role.can_manage_inventory()),
        can_manage_reservations: Capability::from_bool(role.can_manage_reservations()),
        can_view_export: Capability::from_bool(role.can_manage_inventory()),
    }
}

/// Computes what an actor may do with an item.
///
/// Mirrors the checks the lifecycle engine applies, so an allowed action
/// only fails on input validation.
#[must_use]
pub fn compute_item_capabilities(actor: &Actor, item: &Item) -> ItemCapabilities {
    let manage: bool = actor.role.can_manage_inventory();
    let pending: bool = item.status == ItemStatus::PendingApproval;
    let approve: bool = actor.role.can_approve() && pending;
    let own_pending: bool = pending && item.created_by == actor.id;

    ItemCapabilities {
        can_approve: Capability::from_bool(approve),
        can_reject: Capability::from_bool(approve),
        can_reserve: Capability::from_bool(
            manage && item.status.can_transition_to(ItemStatus::Reserved),
        ),
        can_release: Capability::from_bool(manage && item.status == ItemStatus::Reserved),
        can_sell: Capability::from_bool(manage && item.status.can_transition_to(ItemStatus::Sold)),
        can_donate: Capability::from_bool(
            manage && item.status.can_transition_to(ItemStatus::Donated),
        ),
        can_dispose: Capability::from_bool(manage && item.status.is_disposable()),
        can_edit: Capability::from_bool(manage),
        can_delete: Capability::from_bool(manage),
        can_attach_photos: Capability::from_bool(manage || own_pending),
    }
}
