// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage contracts consumed by the API layer.
//!
//! Each call is independent: no transaction spans two calls, so composite
//! operations must define their own partial-failure handling.

use loppis_domain::{Item, ItemId, ItemPatch, ReservationTicket};

use crate::error::PersistenceError;

/// Access to persisted item records.
pub trait ItemRepository {
    /// Returns all items, newest `created_at` first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list(&mut self) -> Result<Vec<Item>, PersistenceError>;

    /// Returns one item, or `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&mut self, id: &ItemId) -> Result<Option<Item>, PersistenceError>;

    /// Stores a new record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn create(&mut self, item: &Item) -> Result<Item, PersistenceError>;

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the record does not exist.
    fn update(&mut self, id: &ItemId, patch: &ItemPatch) -> Result<Item, PersistenceError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the record does not exist.
    fn delete(&mut self, id: &ItemId) -> Result<(), PersistenceError>;
}

/// Access to persisted reservation tickets.
pub trait ReservationRepository {
    /// Returns all tickets, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_reservations(&mut self) -> Result<Vec<ReservationTicket>, PersistenceError>;

    /// Stores a new ticket and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket cannot be written.
    fn create_reservation(
        &mut self,
        ticket: &ReservationTicket,
    ) -> Result<ReservationTicket, PersistenceError>;

    /// Sets the paid and picked-up flags. `None` leaves a flag unchanged.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the ticket does not exist.
    fn set_reservation_flags(
        &mut self,
        id: &str,
        is_paid: Option<bool>,
        is_picked_up: Option<bool>,
    ) -> Result<ReservationTicket, PersistenceError>;

    /// Removes a ticket.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the ticket does not exist.
    fn delete_reservation(&mut self, id: &str) -> Result<(), PersistenceError>;
}
