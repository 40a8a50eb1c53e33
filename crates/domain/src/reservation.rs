// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer reservation tickets.
//!
//! Tickets are staff bookkeeping for in-person pickups. They reference items
//! by id and name but never change item status themselves.

use crate::error::DomainError;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One line of a reservation ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedLine {
    pub item_id: ItemId,
    /// Item name at the time the ticket was written.
    pub item_name: String,
    pub quantity: u32,
}

/// A customer reservation ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationTicket {
    pub id: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Vec<ReservedLine>,
    #[serde(with = "iso_date")]
    pub reserved_date: Date,
    pub is_paid: bool,
    pub is_picked_up: bool,
    pub notes: Option<String>,
    pub created_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ReservationTicket {
    /// Total number of units on the ticket.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Validates the customer and lines of a reservation ticket.
///
/// # Errors
///
/// Returns an error if:
/// - The customer name is empty after trimming
/// - The ticket has no lines
/// - A line has a zero quantity
pub fn validate_reservation(
    customer_name: &str,
    items: &[ReservedLine],
) -> Result<(), DomainError> {
    if customer_name.trim().is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Customer name cannot be empty",
        )));
    }

    if items.is_empty() {
        return Err(DomainError::EmptyReservation);
    }

    if let Some(line) = items.iter().find(|line| line.quantity == 0) {
        return Err(DomainError::InvalidQuantity {
            quantity: 0,
            reason: format!(
                "reserved quantity of '{}' must be greater than 0",
                line.item_name
            ),
        });
    }

    Ok(())
}
