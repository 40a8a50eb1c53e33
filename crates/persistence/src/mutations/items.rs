// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use loppis_domain::{Item, ItemPatch};
use tracing::{debug, info};

use crate::data_models::{ItemChangeset, ItemRow};
use crate::diesel_schema::items;
use crate::error::PersistenceError;
use crate::queries::items::get_item;

/// Inserts a new item and returns the stored record.
///
/// # Errors
///
/// Returns an error if the row cannot be encoded or inserted, including when
/// the id is already taken.
pub fn insert_item(conn: &mut SqliteConnection, item: &Item) -> Result<Item, PersistenceError> {
    let row: ItemRow = ItemRow::from_item(item)?;

    info!(item_id = %item.id, status = %item.status, "Creating item");

    diesel::insert_into(items::table)
        .values(&row)
        .returning(ItemRow::as_returning())
        .get_result::<ItemRow>(conn)?
        .into_item()
}

/// Applies a partial update and returns the updated record.
///
/// An empty patch writes nothing and returns the current record.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist, or
/// another error if the update fails.
pub fn update_item(
    conn: &mut SqliteConnection,
    item_id: &str,
    patch: &ItemPatch,
) -> Result<Item, PersistenceError> {
    if patch.is_empty() {
        return get_item(conn, item_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Item '{item_id}'")));
    }

    let changeset: ItemChangeset = ItemChangeset::from_patch(patch)?;

    debug!(item_id, "Updating item");

    diesel::update(items::table.find(item_id))
        .set(&changeset)
        .returning(ItemRow::as_returning())
        .get_result::<ItemRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("Item '{item_id}'")))?
        .into_item()
}

/// Removes an item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist, or
/// another error if the delete fails.
pub fn delete_item(conn: &mut SqliteConnection, item_id: &str) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(items::table.find(item_id)).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("Item '{item_id}'")));
    }

    info!(item_id, "Deleted item");
    Ok(())
}
