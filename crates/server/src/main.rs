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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use promo_tracker::{IdAssignment, ItemStore, RegisterSeed, StoreConfig, SystemClock, seed_items};
use promo_tracker_api::{
    ApiError, AuditLogResponse, CreateItemRequest, CredentialCheck, CsvImportResult,
    CsvPreviewResult, DEFAULT_PASSCODE, ItemListResponse, ItemResponse, LoginRequest,
    LoginResponse, RosterCredentials, StaffListResponse, ToggleStageResponse, audit_log,
    awaiting_shipment, create_item, get_item, import_csv_items, in_progress, list_items,
    list_staff, login, preview_csv_items, recent_shipments, toggle_stage,
};
use promo_tracker_audit::Cause;
use promo_tracker_domain::{Item, StaffDirectory, default_roster};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Promo Tracker Server - HTTP server for the promotional production tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Load the demonstration orders P001 to P003 on startup
    #[arg(long)]
    seed: bool,

    /// How new item ids are derived (last-inserted, max-suffix)
    #[arg(long, default_value_t = IdAssignment::LastInserted)]
    id_assignment: IdAssignment,

    /// How the recent-shipments register is seeded (store-order, shipped-date-desc)
    #[arg(long, default_value_t = RegisterSeed::StoreOrder)]
    register_seed: RegisterSeed,

    /// Shared login passcode
    #[arg(long, default_value = DEFAULT_PASSCODE)]
    passcode: String,
}

/// Application state shared across handlers.
///
/// One mutex guards the whole store, so each request sees and leaves a
/// consistent item list, register, and audit log.
#[derive(Clone)]
struct AppState {
    /// The item store.
    store: Arc<Mutex<ItemStore>>,
    /// Login credential check.
    credentials: Arc<dyn CredentialCheck>,
}

/// API request for creating an item.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateItemApiRequest {
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The order details.
    #[serde(flatten)]
    item: CreateItemRequest,
}

/// API request for toggling a stage.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ToggleStageApiRequest {
    /// Staff id of the person performing the toggle.
    actor_id: u32,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
}

/// API request for previewing a CSV upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CsvPreviewApiRequest {
    /// Raw CSV content.
    csv_content: String,
}

/// API request for importing a CSV upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CsvImportApiRequest {
    /// Staff id of the importer.
    actor_id: u32,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// Raw CSV content.
    csv_content: String,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
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
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        };
        warn!(status = %status, error = %err, "Request rejected");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");
    let response: LoginResponse = login(app_state.credentials.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for GET `/staff` endpoint.
async fn handle_list_staff(AxumState(app_state): AxumState<AppState>) -> Json<StaffListResponse> {
    info!("Handling list_staff request");
    let store = app_state.store.lock().await;
    Json(list_staff(store.directory()))
}

/// Handler for GET `/items` endpoint.
async fn handle_list_items(AxumState(app_state): AxumState<AppState>) -> Json<ItemListResponse> {
    info!("Handling list_items request");
    let store = app_state.store.lock().await;
    Json(list_items(&store))
}

/// Handler for POST `/items` endpoint.
async fn handle_create_item(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateItemApiRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), HttpError> {
    info!(
        cause_id = %req.cause_id,
        name = %req.item.name,
        client = %req.item.client,
        manager_id = req.item.manager_id,
        "Handling create_item request"
    );
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut store = app_state.store.lock().await;
    let response: ItemResponse = create_item(&mut store, req.item, cause)?;
    drop(store);

    info!(item_id = %response.id, "Successfully created item");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/items/{id}` endpoint.
async fn handle_get_item(
    AxumState(app_state): AxumState<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, HttpError> {
    info!(item_id = %item_id, "Handling get_item request");
    let store = app_state.store.lock().await;
    Ok(Json(get_item(&store, &item_id)?))
}

/// Handler for POST `/items/{id}/stages/{index}/toggle` endpoint.
async fn handle_toggle_stage(
    AxumState(app_state): AxumState<AppState>,
    Path((item_id, stage_index)): Path<(String, usize)>,
    Json(req): Json<ToggleStageApiRequest>,
) -> Result<Json<ToggleStageResponse>, HttpError> {
    info!(
        item_id = %item_id,
        stage_index,
        actor_id = req.actor_id,
        "Handling toggle_stage request"
    );
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut store = app_state.store.lock().await;
    let response: ToggleStageResponse =
        toggle_stage(&mut store, &item_id, stage_index, req.actor_id, cause)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/views/in_progress` endpoint.
async fn handle_in_progress(AxumState(app_state): AxumState<AppState>) -> Json<ItemListResponse> {
    let store = app_state.store.lock().await;
    Json(in_progress(&store))
}

/// Handler for GET `/views/awaiting_shipment` endpoint.
async fn handle_awaiting_shipment(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ItemListResponse> {
    let store = app_state.store.lock().await;
    Json(awaiting_shipment(&store))
}

/// Handler for GET `/views/recent_shipments` endpoint.
async fn handle_recent_shipments(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ItemListResponse> {
    let store = app_state.store.lock().await;
    Json(recent_shipments(&store))
}

/// Handler for GET `/audit` endpoint.
async fn handle_audit_log(AxumState(app_state): AxumState<AppState>) -> Json<AuditLogResponse> {
    info!("Handling audit_log request");
    let store = app_state.store.lock().await;
    Json(audit_log(&store))
}

/// Handler for POST `/import/preview` endpoint.
///
/// Validates an upload without creating anything.
async fn handle_import_preview(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CsvPreviewApiRequest>,
) -> Result<Json<CsvPreviewResult>, HttpError> {
    info!(bytes = req.csv_content.len(), "Handling import_preview request");
    let store = app_state.store.lock().await;
    let preview: CsvPreviewResult = preview_csv_items(&req.csv_content, store.directory())?;
    Ok(Json(preview))
}

/// Handler for POST `/import` endpoint.
async fn handle_import(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CsvImportApiRequest>,
) -> Result<Json<CsvImportResult>, HttpError> {
    info!(
        actor_id = req.actor_id,
        cause_id = %req.cause_id,
        bytes = req.csv_content.len(),
        "Handling import request"
    );
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut store = app_state.store.lock().await;
    let result: CsvImportResult =
        import_csv_items(&mut store, &req.csv_content, req.actor_id, &cause)?;
    drop(store);

    Ok(Json(result))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/staff", get(handle_list_staff))
        .route("/items", get(handle_list_items).post(handle_create_item))
        .route("/items/{id}", get(handle_get_item))
        .route(
            "/items/{id}/stages/{index}/toggle",
            post(handle_toggle_stage),
        )
        .route("/views/in_progress", get(handle_in_progress))
        .route("/views/awaiting_shipment", get(handle_awaiting_shipment))
        .route("/views/recent_shipments", get(handle_recent_shipments))
        .route("/audit", get(handle_audit_log))
        .route("/import/preview", post(handle_import_preview))
        .route("/import", post(handle_import))
        .with_state(app_state)
}

/// Builds the item store described by the command-line arguments.
fn build_store(
    args: &Args,
    directory: StaffDirectory,
) -> Result<ItemStore, Box<dyn std::error::Error>> {
    let config: StoreConfig = StoreConfig {
        id_assignment: args.id_assignment,
        register_seed: args.register_seed,
    };
    if args.seed {
        let items: Vec<Item> = seed_items(&directory)?;
        info!(count = items.len(), "Loading demonstration orders");
        Ok(ItemStore::with_items(
            directory,
            Arc::new(SystemClock),
            config,
            items,
        )?)
    } else {
        Ok(ItemStore::with_config(
            directory,
            Arc::new(SystemClock),
            config,
        ))
    }
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

    info!(
        id_assignment = %args.id_assignment,
        register_seed = %args.register_seed,
        "Initializing Promo Tracker Server"
    );

    let directory: StaffDirectory = default_roster();
    let credentials: RosterCredentials =
        RosterCredentials::with_passcode(directory.clone(), &args.passcode);
    let store: ItemStore = build_store(&args, directory)?;

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        credentials: Arc::new(credentials),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use promo_tracker::FixedClock;
    use time::macros::date;
    use tower::ServiceExt;

    /// Helper to create test app state with the demonstration orders loaded.
    fn create_test_app_state() -> AppState {
        let directory: StaffDirectory = default_roster();
        let items: Vec<Item> = seed_items(&directory).expect("seed data should build");
        let store: ItemStore = ItemStore::with_items(
            directory.clone(),
            Arc::new(FixedClock::new(date!(2026 - 03 - 09))),
            StoreConfig::default(),
            items,
        )
        .expect("seed ids are unique");
        AppState {
            store: Arc::new(Mutex::new(store)),
            credentials: Arc::new(RosterCredentials::new(directory)),
        }
    }

    fn json_request(method: &str, uri: &str, body: &impl Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn toggle_body(actor_id: u32) -> ToggleStageApiRequest {
        ToggleStageApiRequest {
            actor_id,
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test toggle"),
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_succeeds_with_shared_passcode() {
        let app: Router = build_router(create_test_app_state());
        let body: LoginRequest = LoginRequest {
            username: String::from("조재호"),
            password: String::from("1234"),
        };

        let response = app
            .oneshot(json_request("POST", "/login", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let login: LoginResponse = read_json(response).await;
        assert_eq!(login.staff.id, 4);
    }

    #[tokio::test]
    async fn test_login_failure_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());
        let body: LoginRequest = LoginRequest {
            username: String::from("조재호"),
            password: String::from("0000"),
        };

        let response = app
            .oneshot(json_request("POST", "/login", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("Authentication failed"));
    }

    #[tokio::test]
    async fn test_list_staff() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/staff")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let staff: StaffListResponse = read_json(response).await;
        assert_eq!(staff.staff.len(), 7);
    }

    #[tokio::test]
    async fn test_create_item_returns_created() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let body: serde_json::Value = serde_json::json!({
            "cause_id": "form-1",
            "cause_description": "Order form",
            "name": "Tote Bag",
            "client": "Acme",
            "manager_id": 3
        });

        let response = app
            .oneshot(json_request("POST", "/items", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let item: ItemResponse = read_json(response).await;
        assert_eq!(item.id, "P004");
        assert_eq!(item.stages[0].completed_on.as_deref(), Some("2026-03-09"));
        assert_eq!(app_state.store.lock().await.len(), 4);
    }

    #[tokio::test]
    async fn test_create_item_blank_client_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let body: serde_json::Value = serde_json::json!({
            "cause_id": "form-1",
            "cause_description": "Order form",
            "name": "Tote Bag",
            "client": "",
            "manager_id": 3
        });

        let response = app
            .oneshot(json_request("POST", "/items", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert_eq!(app_state.store.lock().await.len(), 3);
    }

    #[tokio::test]
    async fn test_get_unknown_item_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/items/P999")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_packaged_then_shipped_moves_item_to_register() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let packaged = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/items/P003/stages/3/toggle",
                &toggle_body(6),
            ))
            .await
            .unwrap();
        assert_eq!(packaged.status(), HttpStatusCode::OK);

        let awaiting: ItemListResponse = read_json(
            app.clone()
                .oneshot(get_request("/views/awaiting_shipment"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(awaiting.count, 1);

        let shipped = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/items/P003/stages/4/toggle",
                &toggle_body(7),
            ))
            .await
            .unwrap();
        let toggle: ToggleStageResponse = read_json(shipped).await;
        assert!(toggle.item.shipped);

        let register: ItemListResponse = read_json(
            app.clone()
                .oneshot(get_request("/views/recent_shipments"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(register.items[0].id, "P003");

        let progressing: ItemListResponse = read_json(
            app.oneshot(get_request("/views/in_progress"))
                .await
                .unwrap(),
        )
        .await;
        assert!(progressing.items.iter().all(|item| item.id != "P003"));
    }

    #[tokio::test]
    async fn test_toggle_out_of_range_is_bad_request_and_unchanged() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = app
            .oneshot(json_request(
                "POST",
                "/items/P002/stages/7/toggle",
                &toggle_body(1),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert!(app_state.store.lock().await.audit_log().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_unknown_actor_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(json_request(
                "POST",
                "/items/P002/stages/2/toggle",
                &toggle_body(42),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_audit_log_records_toggles() {
        let app: Router = build_router(create_test_app_state());
        app.clone()
            .oneshot(json_request(
                "POST",
                "/items/P002/stages/2/toggle",
                &toggle_body(4),
            ))
            .await
            .unwrap();

        let audit: AuditLogResponse =
            read_json(app.oneshot(get_request("/audit")).await.unwrap()).await;

        assert_eq!(audit.events.len(), 1);
        assert_eq!(audit.events[0].item_id, "P002");
        assert_eq!(audit.events[0].cause_id, "test-cause");
    }

    #[tokio::test]
    async fn test_import_preview_and_import() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let csv: &str = "name,client\nTote Bag,Acme\n,Missing\n";

        let preview: CsvPreviewResult = read_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/import/preview",
                    &CsvPreviewApiRequest {
                        csv_content: csv.to_string(),
                    },
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(preview.valid_count, 1);
        assert_eq!(preview.invalid_count, 1);
        assert_eq!(app_state.store.lock().await.len(), 3);

        let imported: CsvImportResult = read_json(
            app.oneshot(json_request(
                "POST",
                "/import",
                &CsvImportApiRequest {
                    actor_id: 5,
                    cause_id: String::from("upload-1"),
                    cause_description: String::from("CSV upload"),
                    csv_content: csv.to_string(),
                },
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(imported.created, vec![String::from("P004")]);
        assert_eq!(imported.failures.len(), 1);
    }

    #[tokio::test]
    async fn test_import_bad_header_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(json_request(
                "POST",
                "/import/preview",
                &CsvPreviewApiRequest {
                    csv_content: String::from("product,customer\nA,B\n"),
                },
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_args_parse_store_options() {
        let args: Args = Args::parse_from([
            "promo-tracker-server",
            "--seed",
            "--id-assignment",
            "max-suffix",
            "--register-seed",
            "shipped-date-desc",
        ]);

        assert!(args.seed);
        assert_eq!(args.port, 3000);
        assert_eq!(args.id_assignment, IdAssignment::MaxSuffix);
        assert_eq!(args.register_seed, RegisterSeed::ShippedDateDesc);
        assert_eq!(args.passcode, "1234");

        let store: ItemStore = build_store(&args, default_roster()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.config().id_assignment, IdAssignment::MaxSuffix);
    }
}
