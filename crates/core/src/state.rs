// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{Item, ItemId};

/// The outcome of applying a command to one item.
///
/// Transitions are computed purely; the caller is responsible for writing
/// them to the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The record was changed in place.
    Updated(Item),
    /// The record must be removed.
    Removed(ItemId),
    /// Part of the record was split off into a new record.
    Split(SplitPlan),
}

/// The two records produced by a quantity split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    /// The original record with its quantity reduced. Keeps its id and status.
    pub remaining: Item,
    /// The new record holding the disposed units.
    pub disposed: Item,
}

impl SplitPlan {
    /// Total units across both records.
    #[must_use]
    pub const fn total_quantity(&self) -> u32 {
        self.remaining.quantity.saturating_add(self.disposed.quantity)
    }
}
