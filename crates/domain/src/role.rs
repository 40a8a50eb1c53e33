// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roles, the acting identity, and the capability checks derived from them.
//!
//! Every permission decision in the system goes through the methods on
//! [`Role`]. Callers never compare role strings themselves.

use crate::error::DomainError;
use crate::types::ItemStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Roles assigned by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Staff with full inventory authority.
    ///
    /// Admins may:
    /// - approve or reject pending donations
    /// - reserve, sell, donate and split items
    /// - edit and delete any item
    /// - see final prices and internal notes
    /// - manage reservation tickets
    Admin,
    /// A contributor submitting items. Their submissions await approval.
    Donor,
    /// A browsing customer. Sees only listed items and public fields.
    Buyer,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Donor => "donor",
            Self::Buyer => "buyer",
        }
    }

    /// Whether this role may approve or reject pending donations.
    #[must_use]
    pub const fn can_approve(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may change item status, quantity, or fields.
    #[must_use]
    pub const fn can_manage_inventory(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may see `final_price` and `internal_notes`.
    #[must_use]
    pub const fn can_see_internal_fields(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may see items still awaiting approval.
    #[must_use]
    pub const fn can_see_pending(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may create and update reservation tickets.
    #[must_use]
    pub const fn can_manage_reservations(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may submit donations.
    ///
    /// Any authenticated identity may donate; non-admins act as donators.
    #[must_use]
    pub const fn can_submit_donations(&self) -> bool {
        true
    }

    /// The status given to items this role submits.
    #[must_use]
    pub const fn intake_status(&self) -> ItemStatus {
        match self {
            Self::Admin => ItemStatus::Available,
            Self::Donor | Self::Buyer => ItemStatus::PendingApproval,
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Parses a role as supplied by the identity provider.
    ///
    /// `donator` is accepted as an alias of `donor`. Matching is
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "donor" | "donator" => Ok(Self::Donor),
            "buyer" => Ok(Self::Buyer),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity performing an operation.
///
/// The actor is passed explicitly into every operation; nothing reads the
/// current session from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identifier from the identity provider.
    pub id: String,
    /// The role governing visibility and permitted mutations.
    pub role: Role,
    /// Human-readable name, used as the default donor name.
    pub display_name: String,
}

impl Actor {
    /// Creates a new actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The identity provider's identifier for this actor
    /// * `role` - The actor's role
    /// * `display_name` - The name shown for this actor
    #[must_use]
    pub const fn new(id: String, role: Role, display_name: String) -> Self {
        Self {
            id,
            role,
            display_name,
        }
    }

    /// Returns whether this actor is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
