// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity intake and authorization checks.
//!
//! Identity is established by an external provider and forwarded with each
//! request. This module only turns the forwarded values into an [`Actor`].

use loppis::is_visible_to;
use loppis_domain::{Actor, Item, Role};

use crate::error::AuthError;

/// Builds an actor from a forwarded identity.
///
/// The display name falls back to the actor id when absent or blank.
///
/// # Arguments
///
/// * `id` - The forwarded actor id
/// * `role` - The forwarded role name (`admin`, `donor`/`donator`, `buyer`)
/// * `display_name` - The forwarded display name, if any
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the id is missing or blank,
/// or the role is missing or unknown.
pub fn authenticate_identity(
    id: Option<&str>,
    role: Option<&str>,
    display_name: Option<&str>,
) -> Result<Actor, AuthError> {
    let id: &str = id.map(str::trim).filter(|id| !id.is_empty()).ok_or_else(|| {
        AuthError::AuthenticationFailed {
            reason: String::from("missing actor id"),
        }
    })?;

    let role: Role = role
        .ok_or_else(|| AuthError::AuthenticationFailed {
            reason: String::from("missing actor role"),
        })?
        .parse()
        .map_err(|err| AuthError::AuthenticationFailed {
            reason: format!("{err}"),
        })?;

    let display_name: String = display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(id)
        .to_string();

    Ok(Actor::new(id.to_string(), role, display_name))
}

/// Authorization service for checks that live outside the lifecycle engine.
///
/// Item commands are authorized by the engine itself; this covers the
/// surrounding reads and the reservation ledger.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may manage reservation tickets.
    ///
    /// Only Admin actors may list, create, flag or delete tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_manage_reservations(actor: &Actor) -> Result<(), AuthError> {
        if actor.role.can_manage_reservations() {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("manage_reservations"),
            required_role: String::from("admin"),
        })
    }

    /// Returns whether an actor may see a single item.
    ///
    /// Pending items are visible to admins and to the donor who submitted
    /// them.
    #[must_use]
    pub fn can_view_item(actor: &Actor, item: &Item) -> bool {
        is_visible_to(item, actor.role) || item.created_by == actor.id
    }
}
