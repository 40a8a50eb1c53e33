// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Item name is empty or invalid.
    InvalidName(String),
    /// Subcategory is empty or invalid.
    InvalidSubcategory(String),
    /// Category string is not one of the fixed categories.
    InvalidCategory(String),
    /// Condition string is not one of the fixed conditions.
    InvalidCondition(String),
    /// Status string is not one of the lifecycle states.
    InvalidStatus(String),
    /// Role string is not one of the known roles.
    InvalidRole(String),
    /// A quantity is out of range for the requested operation.
    InvalidQuantity {
        /// The offending quantity.
        quantity: i64,
        /// Why the quantity was rejected.
        reason: String,
    },
    /// A price is negative or not a finite number.
    InvalidPrice {
        /// The price field that was rejected.
        field: &'static str,
        /// Why the price was rejected.
        reason: String,
    },
    /// The item cannot move from its current status as requested.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status or event.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// A reservation name is required but missing.
    InvalidReservedBy(String),
    /// A reservation ticket has no customer name.
    InvalidCustomerName(String),
    /// A reservation ticket lists no items.
    EmptyReservation,
    /// A donation batch contains no drafts.
    EmptyDonationBatch,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidSubcategory(msg) => write!(f, "Invalid subcategory: {msg}"),
            Self::InvalidCategory(value) => write!(f, "Unknown category: '{value}'"),
            Self::InvalidCondition(value) => write!(f, "Unknown condition: '{value}'"),
            Self::InvalidStatus(value) => write!(f, "Unknown item status: '{value}'"),
            Self::InvalidRole(value) => write!(f, "Unknown role: '{value}'"),
            Self::InvalidQuantity { quantity, reason } => {
                write!(f, "Invalid quantity {quantity}: {reason}")
            }
            Self::InvalidPrice { field, reason } => write!(f, "Invalid {field}: {reason}"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition item from '{from}' to '{to}': {reason}")
            }
            Self::InvalidReservedBy(msg) => write!(f, "Invalid reservation holder: {msg}"),
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::EmptyReservation => write!(f, "A reservation must include at least one item"),
            Self::EmptyDonationBatch => {
                write!(f, "A donation must include at least one item")
            }
        }
    }
}

impl std::error::Error for DomainError {}
