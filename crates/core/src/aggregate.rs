// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views derived from the full item collection.
//!
//! Nothing here is cached. Every function is a pass over the collection it
//! is given, so results always reflect the latest load.

use std::collections::HashMap;

use crate::error::CoreError;
use loppis_domain::{Actor, Category, Condition, GroupKey, Item, ItemId, ItemStatus, Role};

/// Returns whether a viewer with this role may see the item at all.
#[must_use]
pub fn is_visible_to(item: &Item, role: Role) -> bool {
    role.can_see_pending() || item.status != ItemStatus::PendingApproval
}

/// Iterates over the items a viewer with this role may see.
pub fn visible_items(items: &[Item], role: Role) -> impl Iterator<Item = &Item> {
    items.iter().filter(move |item| is_visible_to(item, role))
}

/// Number of visible items in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Counts visible items per category, in the fixed category order.
///
/// Categories without items are included with a zero count.
#[must_use]
pub fn category_counts(items: &[Item], role: Role) -> Vec<CategoryCount> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for item in visible_items(items, role) {
        *counts.entry(item.category).or_insert(0) += 1;
    }

    Category::ALL
        .iter()
        .map(|category| CategoryCount {
            category: *category,
            count: counts.get(category).copied().unwrap_or(0),
        })
        .collect()
}

#[derive(Default)]
struct GroupTotals {
    original: u64,
    sold: u64,
}

/// Computes "X/Y sold" annotations for items whose group has been partly
/// sold.
///
/// Visible items are grouped by name, category and subcategory. A member is
/// annotated when the group's original total exceeds its own quantity and
/// at least one unit of the group is sold. The map is keyed by item id and
/// is never written back to the records.
///
/// The group total sums every member's `original_quantity`, and split
/// records each carry the pre-split size. A 5-unit item split 3 + 2 with
/// the 2 sold therefore reads "2/10 sold" on both records.
#[must_use]
pub fn quantity_annotations(items: &[Item], role: Role) -> HashMap<ItemId, String> {
    let mut groups: HashMap<GroupKey, GroupTotals> = HashMap::new();
    for item in visible_items(items, role) {
        let totals = groups.entry(item.group_key()).or_default();
        totals.original += u64::from(item.group_quantity());
        if item.status == ItemStatus::Sold {
            totals.sold += u64::from(item.quantity);
        }
    }

    visible_items(items, role)
        .filter_map(|item| {
            let totals = groups.get(&item.group_key())?;
            (totals.sold > 0 && totals.original > u64::from(item.quantity)).then(|| {
                (
                    item.id.clone(),
                    format!("{}/{} sold", totals.sold, totals.original),
                )
            })
        })
        .collect()
}

/// Search and equality constraints for listing items.
///
/// `None` means "all" for the enumerated filters; an empty search term
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub search_term: String,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub condition: Option<Condition>,
}

impl ItemFilter {
    /// Returns whether an item satisfies every constraint of the filter.
    ///
    /// Visibility is not considered here; see [`filter_items`].
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item)
            && self.category.is_none_or(|category| item.category == category)
            && self.status.is_none_or(|status| item.status == status)
            && self.condition.is_none_or(|condition| item.condition == condition)
    }

    fn matches_search(&self, item: &Item) -> bool {
        let needle: String = self.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        item.name.to_lowercase().contains(&needle)
            || item.subcategory.to_lowercase().contains(&needle)
            || item
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}

/// Returns the visible items matching the filter, in collection order.
///
/// Viewers who may not see pending items never get them, whatever status the
/// filter asks for.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter, role: Role) -> Vec<&'a Item> {
    visible_items(items, role)
        .filter(|item| filter.matches(item))
        .collect()
}

/// Inventory-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryStats {
    pub total_items: usize,
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
    pub donated: usize,
    /// Always zero for viewers who cannot see pending items.
    pub pending: usize,
    pub total_sold_quantity: u64,
    /// Sum of settled prices, falling back to the suggestion.
    pub total_value: f64,
}

/// Reduces the visible items to inventory totals.
#[must_use]
pub fn inventory_stats(items: &[Item], role: Role) -> InventoryStats {
    visible_items(items, role).fold(InventoryStats::default(), |mut stats, item| {
        stats.total_items += 1;
        match item.status {
            ItemStatus::Available => stats.available += 1,
            ItemStatus::Reserved => stats.reserved += 1,
            ItemStatus::Sold => {
                stats.sold += 1;
                stats.total_sold_quantity += u64::from(item.quantity);
            }
            ItemStatus::Donated => stats.donated += 1,
            ItemStatus::PendingApproval => stats.pending += 1,
        }
        stats.total_value += item.effective_price();
        stats
    })
}

/// The figures of the summary row written above an inventory export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub total_items: usize,
    pub sold_items: usize,
    pub available: usize,
    pub reserved: usize,
    pub total_sold_quantity: u64,
}

/// Computes the export summary over every record.
///
/// # Errors
///
/// Returns `CoreError::PermissionDenied` unless the actor manages the
/// inventory.
pub fn export_summary(items: &[Item], actor: &Actor) -> Result<ExportSummary, CoreError> {
    if !actor.role.can_manage_inventory() {
        return Err(CoreError::PermissionDenied {
            action: String::from("export_summary"),
            required_role: Role::Admin.as_str().to_string(),
        });
    }

    let stats: InventoryStats = inventory_stats(items, actor.role);
    Ok(ExportSummary {
        total_items: stats.total_items,
        sold_items: stats.sold,
        available: stats.available,
        reserved: stats.reserved,
        total_sold_quantity: stats.total_sold_quantity,
    })
}

/// Returns the items the actor submitted, including their own pending ones.
#[must_use]
pub fn donor_items<'a>(items: &'a [Item], actor: &Actor) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.created_by == actor.id)
        .collect()
}
