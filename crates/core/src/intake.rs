// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donation intake: turning a batch of drafts into item records.

use crate::error::CoreError;
use loppis_domain::{
    Actor, DomainError, Item, ItemDraft, ItemId, Role, suggested_price_for, validate_draft,
};
use time::OffsetDateTime;

/// Builds item records from a donation batch.
///
/// Validation is all-or-nothing: when any draft is invalid no record is
/// produced. Records are returned in draft order.
///
/// # Arguments
///
/// * `drafts` - The submitted drafts (1..N)
/// * `actor` - The submitting actor
/// * `now` - Creation timestamp for every record
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not submit donations
/// - The batch is empty
/// - Any draft fails validation (`CoreError::BatchRejected` names it)
pub fn prepare_intake(
    drafts: Vec<ItemDraft>,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<Vec<Item>, CoreError> {
    if !actor.role.can_submit_donations() {
        return Err(CoreError::PermissionDenied {
            action: String::from("submit_donation"),
            required_role: Role::Donor.as_str().to_string(),
        });
    }

    if drafts.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::EmptyDonationBatch));
    }

    for (index, draft) in drafts.iter().enumerate() {
        validate_draft(draft).map_err(|error| CoreError::BatchRejected { index, error })?;
    }

    Ok(drafts
        .into_iter()
        .map(|draft| build_item(draft, actor, now))
        .collect())
}

fn build_item(draft: ItemDraft, actor: &Actor, now: OffsetDateTime) -> Item {
    let suggested_price: f64 = draft
        .suggested_price
        .unwrap_or_else(|| suggested_price_for(draft.original_price));

    let donor_name: String = match draft.donor_name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => actor.display_name.clone(),
    };

    Item {
        id: ItemId::generate(),
        name: draft.name.trim().to_string(),
        description: draft.description.filter(|text| !text.trim().is_empty()),
        category: draft.category,
        subcategory: draft.subcategory.trim().to_string(),
        condition: draft.condition,
        quantity: draft.quantity,
        original_quantity: None,
        original_price: draft.original_price,
        suggested_price,
        final_price: None,
        status: actor.role.intake_status(),
        reserved_by: None,
        location: draft.location.filter(|text| !text.trim().is_empty()),
        photos: Vec::new(),
        internal_notes: None,
        donor_name: Some(donor_name),
        created_by: actor.id.clone(),
        updated_by: actor.id.clone(),
        created_at: now,
        updated_at: now,
    }
}
