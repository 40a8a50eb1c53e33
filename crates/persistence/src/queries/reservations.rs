// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use loppis_domain::ReservationTicket;

use crate::data_models::ReservationRow;
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;

/// Retrieves every reservation ticket, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_reservations(
    conn: &mut SqliteConnection,
) -> Result<Vec<ReservationTicket>, PersistenceError> {
    let rows: Vec<ReservationRow> = reservations::table
        .select(ReservationRow::as_select())
        .load(conn)?;

    let mut tickets: Vec<ReservationTicket> = rows
        .into_iter()
        .map(ReservationRow::into_ticket)
        .collect::<Result<_, _>>()?;
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(tickets)
}

/// Retrieves one reservation ticket by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if the ticket does not exist.
pub fn get_reservation(
    conn: &mut SqliteConnection,
    reservation_id: &str,
) -> Result<Option<ReservationTicket>, PersistenceError> {
    reservations::table
        .find(reservation_id)
        .select(ReservationRow::as_select())
        .first::<ReservationRow>(conn)
        .optional()?
        .map(ReservationRow::into_ticket)
        .transpose()
}
