// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use loppis_domain::ReservationTicket;
use tracing::info;

use crate::data_models::{ReservationFlags, ReservationRow};
use crate::diesel_schema::reservations;
use crate::error::PersistenceError;
use crate::queries::reservations::get_reservation;

/// Inserts a reservation ticket and returns the stored ticket.
///
/// # Errors
///
/// Returns an error if the ticket cannot be encoded or inserted.
pub fn insert_reservation(
    conn: &mut SqliteConnection,
    ticket: &ReservationTicket,
) -> Result<ReservationTicket, PersistenceError> {
    let row: ReservationRow = ReservationRow::from_ticket(ticket)?;

    info!(reservation_id = %ticket.id, lines = ticket.items.len(), "Creating reservation");

    diesel::insert_into(reservations::table)
        .values(&row)
        .returning(ReservationRow::as_returning())
        .get_result::<ReservationRow>(conn)?
        .into_ticket()
}

/// Updates the paid and picked-up flags of a ticket.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the ticket does not exist.
pub fn update_reservation_flags(
    conn: &mut SqliteConnection,
    reservation_id: &str,
    flags: ReservationFlags,
) -> Result<ReservationTicket, PersistenceError> {
    if flags.is_empty() {
        return get_reservation(conn, reservation_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Reservation '{reservation_id}'"))
        });
    }

    diesel::update(reservations::table.find(reservation_id))
        .set(&flags)
        .returning(ReservationRow::as_returning())
        .get_result::<ReservationRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("Reservation '{reservation_id}'")))?
        .into_ticket()
}

/// Removes a reservation ticket.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the ticket does not exist.
pub fn delete_reservation(
    conn: &mut SqliteConnection,
    reservation_id: &str,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(reservations::table.find(reservation_id)).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Reservation '{reservation_id}'"
        )));
    }

    info!(reservation_id, "Deleted reservation");
    Ok(())
}
