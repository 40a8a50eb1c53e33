// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque unique identifier of an item record.
///
/// Identifiers are assigned at creation and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps an existing identifier (e.g., one loaded from storage).
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The fixed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bedding,
    Bathroom,
    Decoration,
    OtherRoomInventory,
    Kitchen,
    BikeSports,
    Electronics,
    Other,
}

impl Category {
    /// Every category, in browsing order.
    pub const ALL: [Self; 8] = [
        Self::Bedding,
        Self::Bathroom,
        Self::Decoration,
        Self::OtherRoomInventory,
        Self::Kitchen,
        Self::BikeSports,
        Self::Electronics,
        Self::Other,
    ];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bedding => "bedding",
            Self::Bathroom => "bathroom",
            Self::Decoration => "decoration",
            Self::OtherRoomInventory => "other_room_inventory",
            Self::Kitchen => "kitchen",
            Self::BikeSports => "bike_sports",
            Self::Electronics => "electronics",
            Self::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::InvalidCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical condition of a donated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LightlyUsed,
    Worn,
}

impl Condition {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LightlyUsed => "lightly_used",
            Self::Worn => "worn",
        }
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "lightly_used" => Ok(Self::LightlyUsed),
            "worn" => Ok(Self::Worn),
            _ => Err(DomainError::InvalidCondition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an item record.
///
/// Removal (reject or delete) is terminal by deletion of the record and is
/// therefore not a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Submitted by a donor and waiting for an admin decision.
    PendingApproval,
    /// Listed and open for reservation or sale.
    Available,
    /// Held for a named customer.
    Reserved,
    /// Sold to a customer.
    Sold,
    /// Given away rather than sold.
    Donated,
}

impl ItemStatus {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "pending_approval",
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Donated => "donated",
        }
    }

    /// Returns whether quantity may still be sold, reserved or split off.
    #[must_use]
    pub const fn is_disposable(&self) -> bool {
        matches!(self, Self::Available | Self::Reserved)
    }

    /// Checks if a whole-record transition to another status is valid.
    ///
    /// Valid transitions are:
    /// - `PendingApproval` → `Available` (approve)
    /// - `Available` → `Reserved` (reserve)
    /// - `Reserved` → `Available` (release)
    /// - `Available` / `Reserved` → `Sold`
    /// - `Available` / `Reserved` → `Donated`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::PendingApproval | Self::Reserved, Self::Available)
                | (Self::Available, Self::Reserved)
                | (Self::Available | Self::Reserved, Self::Sold | Self::Donated)
        )
    }

    /// Validates a whole-record transition.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not permitted by the item lifecycle.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            return Ok(());
        }

        let reason: &str = match self {
            Self::PendingApproval => "item has not been approved yet",
            Self::Sold | Self::Donated => "item has already been dispositioned",
            Self::Available | Self::Reserved => "transition not permitted by the item lifecycle",
        };

        Err(DomainError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: target.as_str().to_string(),
            reason: reason.to_string(),
        })
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_approval" => Ok(Self::PendingApproval),
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "sold" => Ok(Self::Sold),
            "donated" => Ok(Self::Donated),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
