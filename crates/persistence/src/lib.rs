// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Loppis donation marketplace.
//!
//! This crate defines the repository contracts the API layer works against
//! and implements them with Diesel over `SQLite`.
//!
//! ## Storage
//!
//! - In-memory databases are isolated per instance and used by tests.
//! - File databases run in WAL mode.
//! - The schema is applied by embedded migrations at construction.
//!
//! Photo paths and reservation lines are stored as JSON text columns.
//! Timestamps are stored as RFC 3339 text in UTC.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use loppis_domain::{Item, ItemId, ItemPatch, ReservationTicket};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use repository::{ItemRepository, ReservationRepository};

use data_models::ReservationFlags;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` implementation of the item and reservation repositories.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_loppis_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }
}

impl ItemRepository for Persistence {
    fn list(&mut self) -> Result<Vec<Item>, PersistenceError> {
        queries::items::list_items(&mut self.conn)
    }

    fn get(&mut self, id: &ItemId) -> Result<Option<Item>, PersistenceError> {
        queries::items::get_item(&mut self.conn, id.as_str())
    }

    fn create(&mut self, item: &Item) -> Result<Item, PersistenceError> {
        mutations::items::insert_item(&mut self.conn, item)
    }

    fn update(&mut self, id: &ItemId, patch: &ItemPatch) -> Result<Item, PersistenceError> {
        mutations::items::update_item(&mut self.conn, id.as_str(), patch)
    }

    fn delete(&mut self, id: &ItemId) -> Result<(), PersistenceError> {
        mutations::items::delete_item(&mut self.conn, id.as_str())
    }
}

impl ReservationRepository for Persistence {
    fn list_reservations(&mut self) -> Result<Vec<ReservationTicket>, PersistenceError> {
        queries::reservations::list_reservations(&mut self.conn)
    }

    fn create_reservation(
        &mut self,
        ticket: &ReservationTicket,
    ) -> Result<ReservationTicket, PersistenceError> {
        mutations::reservations::insert_reservation(&mut self.conn, ticket)
    }

    fn set_reservation_flags(
        &mut self,
        id: &str,
        is_paid: Option<bool>,
        is_picked_up: Option<bool>,
    ) -> Result<ReservationTicket, PersistenceError> {
        mutations::reservations::update_reservation_flags(
            &mut self.conn,
            id,
            ReservationFlags::new(is_paid, is_picked_up),
        )
    }

    fn delete_reservation(&mut self, id: &str) -> Result<(), PersistenceError> {
        mutations::reservations::delete_reservation(&mut self.conn, id)
    }
}
