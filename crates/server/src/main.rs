// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod identity;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use loppis_api::{
    ApiError, AttachPhotosRequest, CreateReservationRequest, DeletedResponse, DisposeRequest,
    DisposeResponse, DonationRequest, DonationResponse, EditItemRequest, ExportSummaryResponse,
    ItemCatalog, ItemListResponse, ItemResponse, ListItemsQuery, OverviewResponse,
    PhotoUrlResolver, PublicBucket, ReservationFlagRequest, ReservationListResponse,
    ReservationResponse, ReserveRequest, SellRequest, SubcategoriesResponse, approve_item,
    attach_photos, create_reservation, delete_item, delete_reservation, dispose_item, donate_item,
    edit_item, export_summary_figures, get_item, inventory_overview, list_items, list_my_items,
    list_reservations, mark_reservation_paid, mark_reservation_picked_up, reject_item,
    release_item, reserve_item, sell_item, submit_donation, subcategory_suggestions,
};
use loppis_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::identity::CallerIdentity;

/// Loppis Server - HTTP server for the Loppis donation marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Public base URL of the photo bucket; photo URLs are `{base}/{path}`
    #[arg(long, default_value = "/photos")]
    photo_base_url: String,
}

/// The repository and its list cache, guarded together.
struct Store {
    persistence: Persistence,
    catalog: ItemCatalog,
}

/// Application state shared across handlers.
///
/// One api operation holds the store lock from its first read to its last
/// write.
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<Store>>,
    photos: Arc<dyn PhotoUrlResolver>,
}

impl AppState {
    fn new(persistence: Persistence, photos: Arc<dyn PhotoUrlResolver>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store {
                persistence,
                catalog: ItemCatalog::new(),
            })),
            photos,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PartialCompositeFailure { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            error!(error = %err, "Request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

type HttpResult<T> = Result<Json<T>, HttpError>;

// ========================================================================
// Items
// ========================================================================

async fn handle_submit_donation(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Json(request): Json<DonationRequest>,
) -> Result<(StatusCode, Json<DonationResponse>), HttpError> {
    let mut store = app_state.store.lock().await;
    let response: DonationResponse = submit_donation(
        &mut store.persistence,
        &actor,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_list_items(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Query(query): Query<ListItemsQuery>,
) -> HttpResult<ItemListResponse> {
    let mut store = app_state.store.lock().await;
    let Store {
        persistence,
        catalog,
    } = &mut *store;
    let response: ItemListResponse = list_items(
        persistence,
        catalog,
        &actor,
        query,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_list_my_items(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
) -> Json<ItemListResponse> {
    let mut store = app_state.store.lock().await;
    let Store {
        persistence,
        catalog,
    } = &mut *store;
    Json(list_my_items(
        persistence,
        catalog,
        &actor,
        app_state.photos.as_ref(),
    ))
}

async fn handle_overview(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
) -> Json<OverviewResponse> {
    let mut store = app_state.store.lock().await;
    let Store {
        persistence,
        catalog,
    } = &mut *store;
    Json(inventory_overview(persistence, catalog, &actor))
}

async fn handle_export_summary(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
) -> HttpResult<ExportSummaryResponse> {
    let mut store = app_state.store.lock().await;
    let Store {
        persistence,
        catalog,
    } = &mut *store;
    Ok(Json(export_summary_figures(persistence, catalog, &actor)?))
}

async fn handle_get_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = get_item(
        &mut store.persistence,
        &actor,
        &id,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_edit_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<EditItemRequest>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = edit_item(
        &mut store.persistence,
        &actor,
        &id,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_delete_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<DeletedResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(delete_item(&mut store.persistence, &actor, &id)?))
}

async fn handle_approve_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = approve_item(
        &mut store.persistence,
        &actor,
        &id,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_reject_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<DeletedResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(reject_item(&mut store.persistence, &actor, &id)?))
}

async fn handle_reserve_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<ReserveRequest>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = reserve_item(
        &mut store.persistence,
        &actor,
        &id,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_release_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = release_item(
        &mut store.persistence,
        &actor,
        &id,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_sell_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<SellRequest>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = sell_item(
        &mut store.persistence,
        &actor,
        &id,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_donate_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = donate_item(
        &mut store.persistence,
        &actor,
        &id,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_dispose_item(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<DisposeRequest>,
) -> HttpResult<DisposeResponse> {
    let mut store = app_state.store.lock().await;
    let response: DisposeResponse = dispose_item(
        &mut store.persistence,
        &actor,
        &id,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_attach_photos(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<AttachPhotosRequest>,
) -> HttpResult<ItemResponse> {
    let mut store = app_state.store.lock().await;
    let response: ItemResponse = attach_photos(
        &mut store.persistence,
        &actor,
        &id,
        request,
        app_state.photos.as_ref(),
    )?;
    Ok(Json(response))
}

async fn handle_subcategories(Path(category): Path<String>) -> HttpResult<SubcategoriesResponse> {
    Ok(Json(subcategory_suggestions(&category)?))
}

// ========================================================================
// Reservation tickets
// ========================================================================

async fn handle_list_reservations(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
) -> HttpResult<ReservationListResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(list_reservations(&mut store.persistence, &actor)?))
}

async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), HttpError> {
    let mut store = app_state.store.lock().await;
    let response: ReservationResponse =
        create_reservation(&mut store.persistence, &actor, request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_mark_paid(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<ReservationFlagRequest>,
) -> HttpResult<ReservationResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(mark_reservation_paid(
        &mut store.persistence,
        &actor,
        &id,
        request.value,
    )?))
}

async fn handle_mark_picked_up(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
    Json(request): Json<ReservationFlagRequest>,
) -> HttpResult<ReservationResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(mark_reservation_picked_up(
        &mut store.persistence,
        &actor,
        &id,
        request.value,
    )?))
}

async fn handle_delete_reservation(
    AxumState(app_state): AxumState<AppState>,
    CallerIdentity(actor): CallerIdentity,
    Path(id): Path<String>,
) -> HttpResult<DeletedResponse> {
    let mut store = app_state.store.lock().await;
    Ok(Json(delete_reservation(&mut store.persistence, &actor, &id)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/items", get(handle_list_items))
        .route("/items/donations", post(handle_submit_donation))
        .route("/items/mine", get(handle_list_my_items))
        .route("/items/overview", get(handle_overview))
        .route("/items/export-summary", get(handle_export_summary))
        .route(
            "/items/{id}",
            get(handle_get_item)
                .patch(handle_edit_item)
                .delete(handle_delete_item),
        )
        .route("/items/{id}/approve", post(handle_approve_item))
        .route("/items/{id}/reject", post(handle_reject_item))
        .route("/items/{id}/reserve", post(handle_reserve_item))
        .route("/items/{id}/release", post(handle_release_item))
        .route("/items/{id}/sell", post(handle_sell_item))
        .route("/items/{id}/donate", post(handle_donate_item))
        .route("/items/{id}/dispose", post(handle_dispose_item))
        .route("/items/{id}/photos", post(handle_attach_photos))
        .route("/subcategories/{category}", get(handle_subcategories))
        .route(
            "/reservations",
            get(handle_list_reservations).post(handle_create_reservation),
        )
        .route("/reservations/{id}", delete(handle_delete_reservation))
        .route("/reservations/{id}/paid", post(handle_mark_paid))
        .route("/reservations/{id}/picked-up", post(handle_mark_picked_up))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Loppis Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let bucket: PublicBucket = PublicBucket::new(&args.photo_base_url);
    info!(base_url = bucket.base_url(), "Resolving photos against bucket");

    let app: Router = build_router(AppState::new(persistence, Arc::new(bucket)));

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState::new(
            persistence,
            Arc::new(PublicBucket::new("https://photos.example.com/items")),
        )
    }

    fn request(
        method: &str,
        uri: &str,
        role: Option<&str>,
        body: Option<&Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(role) = role {
            builder = builder
                .header(identity::ACTOR_ID_HEADER, format!("{role}-1"))
                .header(identity::ACTOR_ROLE_HEADER, role)
                .header(identity::ACTOR_NAME_HEADER, format!("Test {role}"));
        }
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (HttpStatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };
        (status, value)
    }

    fn donation(name: &str, quantity: i64) -> Value {
        json!({
            "items": [{
                "name": name,
                "category": "bedding",
                "subcategory": "duvet",
                "condition": "new",
                "quantity": quantity,
                "original_price": 200.0,
            }]
        })
    }

    async fn donate(app: &Router, role: &str, name: &str, quantity: i64) -> String {
        let (status, body) = send(
            app,
            request(
                "POST",
                "/items/donations",
                Some(role),
                Some(&donation(name, quantity)),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        body["items"][0]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, request("GET", "/items", None, None)).await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
        assert!(body["error"].as_str().unwrap().contains("missing actor id"));
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(&app, request("GET", "/items", Some("wizard"), None)).await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_donation_approval_flow() {
        let app: Router = build_router(create_test_app_state());
        let id: String = donate(&app, "donor", "Duvet", 1).await;

        let (_, listed) = send(&app, request("GET", "/items", Some("buyer"), None)).await;
        assert_eq!(listed["total"], json!(0));

        let (status, _) = send(
            &app,
            request("POST", &format!("/items/{id}/approve"), Some("donor"), None),
        )
        .await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, approved) = send(
            &app,
            request("POST", &format!("/items/{id}/approve"), Some("admin"), None),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(approved["status"], json!("available"));

        let (_, listed) = send(&app, request("GET", "/items", Some("buyer"), None)).await;
        assert_eq!(listed["total"], json!(1));
        assert!(listed["items"][0].get("final_price").is_none());
    }

    #[tokio::test]
    async fn test_partial_sale_over_http() {
        let app: Router = build_router(create_test_app_state());
        let id: String = donate(&app, "admin", "Duvet", 5).await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                &format!("/items/{id}/dispose"),
                Some("admin"),
                Some(&json!({ "quantity": 2, "target": "sold", "final_price": 90.0 })),
            ),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["item"]["quantity"], json!(3));
        assert_eq!(body["disposed"]["quantity"], json!(2));
        assert_eq!(body["disposed"]["status"], json!("sold"));

        let (status, _) = send(
            &app,
            request(
                "POST",
                &format!("/items/{id}/dispose"),
                Some("admin"),
                Some(&json!({ "quantity": 4, "target": "sold" })),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_transition_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        let id: String = donate(&app, "admin", "Duvet", 1).await;

        let (status, _) = send(
            &app,
            request("POST", &format!("/items/{id}/release"), Some("admin"), None),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(&app, request("GET", "/items/nope", Some("admin"), None)).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_donation_names_field() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/items/donations",
                Some("donor"),
                Some(&donation("   ", 1)),
            ),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("items[0].name"));
    }

    #[tokio::test]
    async fn test_overview_and_export_summary() {
        let app: Router = build_router(create_test_app_state());
        donate(&app, "admin", "Duvet", 2).await;

        let (status, overview) =
            send(&app, request("GET", "/items/overview", Some("buyer"), None)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(overview["stats"]["available"], json!(1));
        assert_eq!(overview["capabilities"]["can_manage_inventory"], json!(false));

        let (status, _) = send(
            &app,
            request("GET", "/items/export-summary", Some("buyer"), None),
        )
        .await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, summary) = send(
            &app,
            request("GET", "/items/export-summary", Some("admin"), None),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(summary["total_items"], json!(1));
    }

    #[tokio::test]
    async fn test_my_items_lists_own_pending_submission() {
        let app: Router = build_router(create_test_app_state());
        donate(&app, "donor", "Duvet", 1).await;

        let (status, body) = send(&app, request("GET", "/items/mine", Some("donor"), None)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["total"], json!(1));
        assert_eq!(body["items"][0]["status"], json!("pending_approval"));
    }

    #[tokio::test]
    async fn test_subcategories_route() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            &app,
            request("GET", "/subcategories/bedding", Some("buyer"), None),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["subcategories"][0], json!("duvet"));
    }

    #[tokio::test]
    async fn test_reservation_ticket_routes() {
        let app: Router = build_router(create_test_app_state());
        let id: String = donate(&app, "admin", "Duvet", 1).await;
        let ticket = json!({
            "customer_name": "Bob",
            "items": [{ "item_id": id, "item_name": "Duvet", "quantity": 1 }],
            "reserved_date": "2026-05-02",
        });

        let (status, created) = send(
            &app,
            request("POST", "/reservations", Some("admin"), Some(&ticket)),
        )
        .await;
        assert_eq!(status, HttpStatusCode::CREATED);
        let ticket_id: String = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["total_quantity"], json!(1));

        let (status, paid) = send(
            &app,
            request(
                "POST",
                &format!("/reservations/{ticket_id}/paid"),
                Some("admin"),
                Some(&json!({})),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(paid["is_paid"], json!(true));

        let (status, _) = send(&app, request("GET", "/reservations", Some("donor"), None)).await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, _) = send(
            &app,
            request(
                "DELETE",
                &format!("/reservations/{ticket_id}"),
                Some("admin"),
                None,
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
    }
}
