// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler authorizes the actor, runs the pure core operation and
//! writes the outcome through the repository. Handlers are transport
//! agnostic; the server crate maps them onto HTTP routes.

use std::collections::HashMap;

use loppis::{
    Command, ItemView, SplitPlan, Transition, apply, category_counts, donor_items, export_summary,
    filter_items, inventory_stats, prepare_intake, quantity_annotations,
};
use loppis_domain::{
    Actor, Category, Item, ItemDraft, ItemId, ItemPatch, ReservationTicket, ReservedLine,
    suggested_subcategories, validate_reservation,
};
use loppis_persistence::{ItemRepository, ReservationRepository};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{error, info, warn};

use crate::auth::AuthorizationService;
use crate::capabilities::{compute_global_capabilities, compute_item_capabilities};
use crate::catalog::{CatalogSnapshot, ItemCatalog};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::photos::PhotoUrlResolver;
use crate::request_response::{
    AttachPhotosRequest, CreateReservationRequest, DeletedResponse, DisposeRequest,
    DisposeResponse, DonationRequest, DonationResponse, EditItemRequest, ExportSummaryResponse,
    ItemListResponse, ItemResponse, ListItemsQuery, OverviewResponse, ReservationListResponse,
    ReservationResponse, ReserveRequest, SellRequest, SubcategoriesResponse,
};

const ITEM: &str = "Item";
const RESERVATION: &str = "Reservation";

/// Builds the response for one item as seen by the actor.
fn item_response<P>(
    item: &Item,
    actor: &Actor,
    quantity_display: Option<String>,
    photos: &P,
) -> ItemResponse
where
    P: PhotoUrlResolver + ?Sized,
{
    ItemResponse::from_view(
        ItemView::new(item, actor.role),
        quantity_display,
        compute_item_capabilities(actor, item),
        photos,
    )
}

/// Builds responses for a list of items, attaching sold-quantity annotations.
fn item_responses<P>(
    items: &[&Item],
    annotations: &HashMap<ItemId, String>,
    actor: &Actor,
    photos: &P,
) -> Vec<ItemResponse>
where
    P: PhotoUrlResolver + ?Sized,
{
    items
        .iter()
        .map(|item| item_response(item, actor, annotations.get(&item.id).cloned(), photos))
        .collect()
}

/// Loads an item or reports it as not found.
fn load_item<R>(repo: &mut R, id: &str) -> Result<Item, ApiError>
where
    R: ItemRepository + ?Sized,
{
    let item_id: ItemId = ItemId::new(id.trim());
    repo.get(&item_id)
        .map_err(|err| translate_persistence_error(err, ITEM))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from(ITEM),
            message: format!("Item '{item_id}' does not exist"),
        })
}

/// What a command left behind in the repository.
enum Outcome {
    Updated(Item),
    Removed(ItemId),
    Split { remaining: Item, disposed: Item },
}

/// Applies a command to a stored item and persists the resulting transition.
fn run_command<R>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    command: Command,
) -> Result<Outcome, ApiError>
where
    R: ItemRepository + ?Sized,
{
    let item: Item = load_item(repo, id)?;
    let action: &'static str = command.name();
    let transition: Transition = apply(&item, command, actor, OffsetDateTime::now_utc())
        .map_err(translate_core_error)?;

    let outcome: Outcome = match transition {
        Transition::Updated(updated) => {
            let patch: ItemPatch = ItemPatch::diff(&item, &updated);
            let stored: Item = repo
                .update(&item.id, &patch)
                .map_err(|err| translate_persistence_error(err, ITEM))?;
            Outcome::Updated(stored)
        }
        Transition::Removed(item_id) => {
            repo.delete(&item_id)
                .map_err(|err| translate_persistence_error(err, ITEM))?;
            Outcome::Removed(item_id)
        }
        Transition::Split(plan) => {
            let (remaining, disposed) = persist_split(repo, &item, plan)?;
            Outcome::Split {
                remaining,
                disposed,
            }
        }
    };

    info!(item_id = %item.id, actor = %actor.id, action, "Item command applied");
    Ok(outcome)
}

/// Persists a split as a two-step saga.
///
/// The new record is created first, then the original is updated. If the
/// update fails the new record is deleted again. `PartialCompositeFailure`
/// is reported only when that compensating delete fails too, leaving both
/// records stored with the units counted twice.
fn persist_split<R>(
    repo: &mut R,
    original: &Item,
    plan: SplitPlan,
) -> Result<(Item, Item), ApiError>
where
    R: ItemRepository + ?Sized,
{
    let SplitPlan {
        remaining,
        disposed,
    } = plan;

    let disposed: Item = repo
        .create(&disposed)
        .map_err(|err| translate_persistence_error(err, ITEM))?;

    let patch: ItemPatch = ItemPatch::diff(original, &remaining);
    match repo.update(&original.id, &patch) {
        Ok(remaining) => Ok((remaining, disposed)),
        Err(update_err) => {
            warn!(
                item_id = %original.id,
                split_id = %disposed.id,
                error = %update_err,
                "Split could not update the original record, removing the split record"
            );
            match repo.delete(&disposed.id) {
                Ok(()) => {
                    info!(split_id = %disposed.id, "Split compensated");
                    Err(translate_persistence_error(update_err, ITEM))
                }
                Err(compensation_err) => {
                    error!(
                        item_id = %original.id,
                        split_id = %disposed.id,
                        error = %compensation_err,
                        "Split compensation failed"
                    );
                    Err(ApiError::PartialCompositeFailure {
                        operation: String::from("dispose"),
                        message: format!(
                            "record '{}' holding {} units was stored, but item '{}' could not be \
                             reduced ({update_err}) and removing the new record failed \
                             ({compensation_err})",
                            disposed.id, disposed.quantity, original.id
                        ),
                    })
                }
            }
        }
    }
}

/// Runs a command that must leave an updated record behind.
fn update_with<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    command: Command,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    match run_command(repo, actor, id, command)? {
        Outcome::Updated(item) | Outcome::Split {
            remaining: item, ..
        } => Ok(item_response(&item, actor, None, photos)),
        Outcome::Removed(item_id) => Err(ApiError::Internal {
            message: format!("Item '{item_id}' was removed by an update command"),
        }),
    }
}

/// Runs a command that must remove the record.
fn remove_with<R>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    command: Command,
) -> Result<DeletedResponse, ApiError>
where
    R: ItemRepository + ?Sized,
{
    let verb: &'static str = if matches!(command, Command::Reject) {
        "rejected"
    } else {
        "deleted"
    };
    match run_command(repo, actor, id, command)? {
        Outcome::Removed(item_id) => Ok(DeletedResponse {
            message: format!("Item '{item_id}' {verb}"),
            id: item_id.to_string(),
        }),
        Outcome::Updated(item) | Outcome::Split {
            remaining: item, ..
        } => Err(ApiError::Internal {
            message: format!("Item '{}' was not removed", item.id),
        }),
    }
}

// ========================================================================
// Donation intake
// ========================================================================

/// Submits a batch of donated items.
///
/// The batch is validated as a whole before anything is stored. Records are
/// then created one by one; a storage failure part-way leaves the earlier
/// records in place.
///
/// # Errors
///
/// Returns an error if:
/// - Any draft is invalid (nothing is stored)
/// - The first create fails (`StorageUnavailable`)
/// - A later create fails (`PartialCompositeFailure`, naming how many
///   records were stored)
pub fn submit_donation<R, P>(
    repo: &mut R,
    actor: &Actor,
    request: DonationRequest,
    photos: &P,
) -> Result<DonationResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let drafts: Vec<ItemDraft> = request
        .items
        .into_iter()
        .enumerate()
        .map(|(index, draft)| draft.into_draft(index))
        .collect::<Result<_, _>>()?;

    let items: Vec<Item> = prepare_intake(drafts, actor, OffsetDateTime::now_utc())
        .map_err(translate_core_error)?;
    let requested: usize = items.len();

    let mut stored: Vec<Item> = Vec::with_capacity(requested);
    for item in &items {
        match repo.create(item) {
            Ok(record) => stored.push(record),
            Err(err) => {
                warn!(
                    actor = %actor.id,
                    stored = stored.len(),
                    requested,
                    error = %err,
                    "Donation batch interrupted by a storage failure"
                );
                if stored.is_empty() {
                    return Err(translate_persistence_error(err, ITEM));
                }
                return Err(ApiError::PartialCompositeFailure {
                    operation: String::from("submit_donation"),
                    message: format!(
                        "{} of {requested} items were stored before the store failed: {err}",
                        stored.len()
                    ),
                });
            }
        }
    }

    info!(actor = %actor.id, count = requested, "Donation submitted");

    Ok(DonationResponse {
        items: stored
            .iter()
            .map(|item| item_response(item, actor, None, photos))
            .collect(),
        persisted: stored.len(),
        message: format!("{requested} items submitted"),
    })
}

/// Attaches uploaded photo paths to an item.
///
/// Admins may attach to any item; donors only to their own pending items.
///
/// # Errors
///
/// Returns an error if the item does not exist, the actor may not attach
/// photos to it, or the store fails.
pub fn attach_photos<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    request: AttachPhotosRequest,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let command: Command = Command::AttachPhotos {
        paths: request.paths,
    };
    update_with(repo, actor, id, command, photos)
}

// ========================================================================
// Lifecycle
// ========================================================================

/// Approves a pending item.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the item is not pending,
/// the item does not exist, or the store fails.
pub fn approve_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    update_with(repo, actor, id, Command::Approve, photos)
}

/// Rejects a pending item, removing it.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the item is not pending,
/// the item does not exist, or the store fails.
pub fn reject_item<R>(repo: &mut R, actor: &Actor, id: &str) -> Result<DeletedResponse, ApiError>
where
    R: ItemRepository + ?Sized,
{
    remove_with(repo, actor, id, Command::Reject)
}

/// Reserves a whole item for a customer.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, the item is not
/// available, the holder name is blank, or the store fails.
pub fn reserve_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    request: ReserveRequest,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let command: Command = Command::Reserve {
        reserved_by: request.reserved_by,
    };
    update_with(repo, actor, id, command, photos)
}

/// Releases a reservation, making the item available again.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, the item is not
/// reserved, or the store fails.
pub fn release_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    update_with(repo, actor, id, Command::Release, photos)
}

/// Marks a whole item as sold.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, the item is not
/// available or reserved, the price is invalid, or the store fails.
pub fn sell_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    request: SellRequest,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let command: Command = Command::MarkSold {
        final_price: request.final_price,
    };
    update_with(repo, actor, id, command, photos)
}

/// Marks a whole item as donated onward.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, the item is not
/// available or reserved, or the store fails.
pub fn donate_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    update_with(repo, actor, id, Command::Donate, photos)
}

/// Sells or reserves part of an item.
///
/// Disposing fewer units than the record holds splits it; disposing all of
/// them transitions the whole record.
///
/// # Errors
///
/// Returns an error if:
/// - The actor may not manage inventory
/// - The quantity is zero or exceeds the record's quantity
/// - The item is not available or reserved
/// - The store fails; a failed split is compensated and only reported as
///   `PartialCompositeFailure` when the compensation fails too
pub fn dispose_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    request: DisposeRequest,
    photos: &P,
) -> Result<DisposeResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let command: Command = request.into_command()?;
    match run_command(repo, actor, id, command)? {
        Outcome::Updated(item) => Ok(DisposeResponse {
            item: item_response(&item, actor, None, photos),
            disposed: None,
        }),
        Outcome::Split {
            remaining,
            disposed,
        } => Ok(DisposeResponse {
            item: item_response(&remaining, actor, None, photos),
            disposed: Some(item_response(&disposed, actor, None, photos)),
        }),
        Outcome::Removed(item_id) => Err(ApiError::Internal {
            message: format!("Item '{item_id}' was removed by a dispose"),
        }),
    }
}

/// Edits item fields.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, a field value is
/// invalid, the item does not exist, or the store fails.
pub fn edit_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    request: EditItemRequest,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let command: Command = Command::Edit(request.into_edit()?);
    update_with(repo, actor, id, command, photos)
}

/// Deletes an item in any status.
///
/// # Errors
///
/// Returns an error if the actor may not manage inventory, the item does
/// not exist, or the store fails.
pub fn delete_item<R>(repo: &mut R, actor: &Actor, id: &str) -> Result<DeletedResponse, ApiError>
where
    R: ItemRepository + ?Sized,
{
    remove_with(repo, actor, id, Command::Delete)
}

// ========================================================================
// Reads
// ========================================================================

/// Lists the items visible to the actor that match the query.
///
/// Storage failures never fail the call: the last loaded collection is
/// served instead, flagged stale.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a query parameter does not parse.
pub fn list_items<R, P>(
    repo: &mut R,
    catalog: &mut ItemCatalog,
    actor: &Actor,
    query: ListItemsQuery,
    photos: &P,
) -> Result<ItemListResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let filter = query.into_filter()?;
    let snapshot: CatalogSnapshot = catalog.load(repo);
    let annotations: HashMap<ItemId, String> = quantity_annotations(&snapshot.items, actor.role);
    let matched: Vec<&Item> = filter_items(&snapshot.items, &filter, actor.role);

    Ok(ItemListResponse {
        total: matched.len(),
        items: item_responses(&matched, &annotations, actor, photos),
        stale: snapshot.stale,
    })
}

/// Lists the items the actor submitted, pending ones included.
#[must_use]
pub fn list_my_items<R, P>(
    repo: &mut R,
    catalog: &mut ItemCatalog,
    actor: &Actor,
    photos: &P,
) -> ItemListResponse
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let snapshot: CatalogSnapshot = catalog.load(repo);
    let annotations: HashMap<ItemId, String> = quantity_annotations(&snapshot.items, actor.role);
    let mine: Vec<&Item> = donor_items(&snapshot.items, actor);

    ItemListResponse {
        total: mine.len(),
        items: item_responses(&mine, &annotations, actor, photos),
        stale: snapshot.stale,
    }
}

/// Returns one item.
///
/// Items the actor may not see are reported as not found.
///
/// # Errors
///
/// Returns an error if the item does not exist or is hidden from the actor,
/// or the store fails.
pub fn get_item<R, P>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    photos: &P,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + ?Sized,
    P: PhotoUrlResolver + ?Sized,
{
    let item: Item = load_item(repo, id)?;
    if !AuthorizationService::can_view_item(actor, &item) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from(ITEM),
            message: format!("Item '{}' does not exist", item.id),
        });
    }
    Ok(item_response(&item, actor, None, photos))
}

/// Returns category counts, global figures and the actor's capabilities.
#[must_use]
pub fn inventory_overview<R>(
    repo: &mut R,
    catalog: &mut ItemCatalog,
    actor: &Actor,
) -> OverviewResponse
where
    R: ItemRepository + ?Sized,
{
    let snapshot: CatalogSnapshot = catalog.load(repo);
    OverviewResponse {
        categories: category_counts(&snapshot.items, actor.role)
            .into_iter()
            .map(Into::into)
            .collect(),
        stats: inventory_stats(&snapshot.items, actor.role).into(),
        capabilities: compute_global_capabilities(actor),
        stale: snapshot.stale,
    }
}

/// Returns the export summary figures.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` unless the actor is an admin.
pub fn export_summary_figures<R>(
    repo: &mut R,
    catalog: &mut ItemCatalog,
    actor: &Actor,
) -> Result<ExportSummaryResponse, ApiError>
where
    R: ItemRepository + ?Sized,
{
    let snapshot: CatalogSnapshot = catalog.load(repo);
    let summary = export_summary(&snapshot.items, actor).map_err(translate_core_error)?;
    Ok(ExportSummaryResponse::new(summary, snapshot.stale))
}

/// Returns the suggested subcategories of a category.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the category is unknown.
pub fn subcategory_suggestions(category: &str) -> Result<SubcategoriesResponse, ApiError> {
    let category: Category = category.trim().parse().map_err(|err| ApiError::InvalidInput {
        field: String::from("category"),
        message: format!("{err}"),
    })?;
    Ok(SubcategoriesResponse {
        category,
        subcategories: suggested_subcategories(category)
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

// ========================================================================
// Reservation tickets
// ========================================================================

/// Lists reservation tickets, newest first.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the store fails.
pub fn list_reservations<R>(
    repo: &mut R,
    actor: &Actor,
) -> Result<ReservationListResponse, ApiError>
where
    R: ReservationRepository + ?Sized,
{
    AuthorizationService::authorize_manage_reservations(actor)?;
    let reservations: Vec<ReservationResponse> = repo
        .list_reservations()
        .map_err(|err| translate_persistence_error(err, RESERVATION))?
        .into_iter()
        .map(ReservationResponse::from)
        .collect();

    Ok(ReservationListResponse {
        total: reservations.len(),
        reservations,
    })
}

/// Records a reservation ticket.
///
/// Every line must reference an existing item. Item status is not changed.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an admin
/// - The customer name is blank, there are no lines, or a line quantity is
///   not positive
/// - The reserved date is not `YYYY-MM-DD`
/// - A referenced item does not exist
/// - The store fails
pub fn create_reservation<R>(
    repo: &mut R,
    actor: &Actor,
    request: CreateReservationRequest,
) -> Result<ReservationResponse, ApiError>
where
    R: ItemRepository + ReservationRepository + ?Sized,
{
    AuthorizationService::authorize_manage_reservations(actor)?;

    let lines: Vec<ReservedLine> = request.lines()?;
    validate_reservation(&request.customer_name, &lines)
        .map_err(translate_domain_error)?;

    for line in &lines {
        load_item(repo, line.item_id.as_str())?;
    }

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let reserved_date: Date = match request.reserved_date.as_deref().map(str::trim) {
        None | Some("") => now.date(),
        Some(value) => Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(
            |err| ApiError::InvalidInput {
                field: String::from("reserved_date"),
                message: format!("Expected YYYY-MM-DD: {err}"),
            },
        )?,
    };

    let ticket = ReservationTicket {
        id: uuid::Uuid::new_v4().to_string(),
        customer_name: request.customer_name.trim().to_string(),
        customer_email: non_blank(request.customer_email),
        customer_phone: non_blank(request.customer_phone),
        items: lines,
        reserved_date,
        is_paid: false,
        is_picked_up: false,
        notes: non_blank(request.notes),
        created_by: actor.id.clone(),
        created_at: now,
    };

    let stored: ReservationTicket = repo
        .create_reservation(&ticket)
        .map_err(|err| translate_persistence_error(err, RESERVATION))?;
    info!(reservation_id = %stored.id, actor = %actor.id, "Reservation recorded");
    Ok(stored.into())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Sets the paid flag of a ticket.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the ticket does not
/// exist, or the store fails.
pub fn mark_reservation_paid<R>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    value: bool,
) -> Result<ReservationResponse, ApiError>
where
    R: ReservationRepository + ?Sized,
{
    AuthorizationService::authorize_manage_reservations(actor)?;
    repo.set_reservation_flags(id.trim(), Some(value), None)
        .map(ReservationResponse::from)
        .map_err(|err| translate_persistence_error(err, RESERVATION))
}

/// Sets the picked-up flag of a ticket.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the ticket does not
/// exist, or the store fails.
pub fn mark_reservation_picked_up<R>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
    value: bool,
) -> Result<ReservationResponse, ApiError>
where
    R: ReservationRepository + ?Sized,
{
    AuthorizationService::authorize_manage_reservations(actor)?;
    repo.set_reservation_flags(id.trim(), None, Some(value))
        .map(ReservationResponse::from)
        .map_err(|err| translate_persistence_error(err, RESERVATION))
}

/// Deletes a ticket.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the ticket does not
/// exist, or the store fails.
pub fn delete_reservation<R>(
    repo: &mut R,
    actor: &Actor,
    id: &str,
) -> Result<DeletedResponse, ApiError>
where
    R: ReservationRepository + ?Sized,
{
    AuthorizationService::authorize_manage_reservations(actor)?;
    let id: &str = id.trim();
    repo.delete_reservation(id)
        .map_err(|err| translate_persistence_error(err, RESERVATION))?;
    info!(reservation_id = %id, actor = %actor.id, "Reservation deleted");
    Ok(DeletedResponse {
        id: id.to_string(),
        message: format!("Reservation '{id}' deleted"),
    })
}
