// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use loppis_domain::Item;
use tracing::debug;

use crate::data_models::ItemRow;
use crate::diesel_schema::items;
use crate::error::PersistenceError;

/// Retrieves every item, newest first.
///
/// Rows are ordered by their parsed creation time so that timestamps with
/// and without fractional seconds sort correctly.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_items(conn: &mut SqliteConnection) -> Result<Vec<Item>, PersistenceError> {
    let rows: Vec<ItemRow> = items::table
        .select(ItemRow::as_select())
        .order(items::created_at.desc())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded item rows");

    let mut loaded: Vec<Item> = rows
        .into_iter()
        .map(ItemRow::into_item)
        .collect::<Result<_, _>>()?;
    loaded.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(loaded)
}

/// Retrieves one item by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if the item does not exist.
pub fn get_item(
    conn: &mut SqliteConnection,
    item_id: &str,
) -> Result<Option<Item>, PersistenceError> {
    debug!(item_id, "Looking up item");

    items::table
        .find(item_id)
        .select(ItemRow::as_select())
        .first::<ItemRow>(conn)
        .optional()?
        .map(ItemRow::into_item)
        .transpose()
}
