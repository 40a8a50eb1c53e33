// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use loppis_domain::{Category, Condition};

/// A command represents actor intent against a single item, as data only.
///
/// Commands are the only way to request item state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Accept a pending donation and list it.
    Approve,
    /// Refuse a pending donation. The record is removed.
    Reject,
    /// Hold the whole record for a customer.
    Reserve {
        /// Name of the customer holding the item.
        reserved_by: String,
    },
    /// Return a reserved record to the listing.
    Release,
    /// Sell the whole record.
    MarkSold {
        /// Settlement price, if known.
        final_price: Option<f64>,
    },
    /// Give the whole record away.
    Donate,
    /// Sell or reserve part of the record, splitting it when needed.
    Dispose {
        /// Number of units to dispose of.
        quantity: u32,
        /// Status the disposed units end up in.
        target: DisposalTarget,
        /// Settlement price of the disposed units.
        final_price: Option<f64>,
    },
    /// Change descriptive or pricing fields.
    Edit(ItemEdit),
    /// Append uploaded photo paths.
    AttachPhotos {
        /// Storage paths returned by the upload.
        paths: Vec<String>,
    },
    /// Remove the record entirely.
    Delete,
}

impl Command {
    /// Short name of the command, used in permission errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Reserve { .. } => "reserve",
            Self::Release => "release",
            Self::MarkSold { .. } => "sell",
            Self::Donate => "donate",
            Self::Dispose { .. } => "dispose",
            Self::Edit(_) => "edit",
            Self::AttachPhotos { .. } => "attach_photos",
            Self::Delete => "delete",
        }
    }
}

/// Where units split off by [`Command::Dispose`] go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisposalTarget {
    Sold,
    Reserved {
        /// Name of the customer holding the units.
        by: String,
    },
}

/// A field-level edit of an item.
///
/// Status only changes through lifecycle commands. Nullable fields use
/// `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub condition: Option<Condition>,
    pub quantity: Option<u32>,
    pub original_price: Option<f64>,
    /// An explicit suggestion. Overrides the linked suggestion.
    pub suggested_price: Option<f64>,
    pub final_price: Option<Option<f64>>,
    pub location: Option<Option<String>>,
    pub internal_notes: Option<Option<String>>,
    pub donor_name: Option<Option<String>>,
}
