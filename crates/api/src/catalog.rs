// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Last-good cache of the item collection.
//!
//! Every read of the collection goes through [`ItemCatalog::load`]. When the
//! store cannot be listed, the most recent successful listing is served
//! instead and marked stale.

use loppis_domain::Item;
use loppis_persistence::ItemRepository;
use tracing::{debug, warn};

/// A loaded item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub items: Vec<Item>,
    /// `true` when `items` came from the cache after a failed listing.
    pub stale: bool,
}

/// Holds the last successfully listed item collection.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    last_good: Option<Vec<Item>>,
}

impl ItemCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_good: None }
    }

    /// Lists the items, falling back to the cached collection on failure.
    ///
    /// With nothing cached the fallback is an empty, stale collection.
    pub fn load<R>(&mut self, repo: &mut R) -> CatalogSnapshot
    where
        R: ItemRepository + ?Sized,
    {
        match repo.list() {
            Ok(items) => {
                debug!(count = items.len(), "Loaded item collection");
                self.last_good = Some(items.clone());
                CatalogSnapshot {
                    items,
                    stale: false,
                }
            }
            Err(err) => {
                let items: Vec<Item> = self.last_good.clone().unwrap_or_default();
                warn!(
                    error = %err,
                    cached = items.len(),
                    "Item listing failed, serving last loaded collection"
                );
                CatalogSnapshot { items, stale: true }
            }
        }
    }

    /// Whether a successful listing has been cached.
    #[must_use]
    pub const fn has_snapshot(&self) -> bool {
        self.last_good.is_some()
    }
}
