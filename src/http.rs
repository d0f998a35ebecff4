use crate::activity::{ActivityEntry, Operation};
use crate::backend::SlotBackend;
use crate::configuration::Configuration;
use crate::error::SlotError;
use crate::types::{RawSlotNumber, Slot, Stats};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, Response};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum::{
    routing::{get, post},
    Router,
};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

const TITLE_PLACEHOLDER: &str = "{{website_title}}";

#[derive(Clone)]
pub struct AppState<T: SlotBackend, C: Configuration> {
    pub backend: T,
    pub configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddSlotRequest {
    slot_number: RawSlotNumber,
    #[serde(default)]
    covered: bool,
    #[serde(default)]
    ev_charging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ParkVehicleRequest {
    #[serde(default)]
    needs_ev: bool,
    #[serde(default)]
    needs_cover: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RemoveVehicleRequest {
    slot_number: RawSlotNumber,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub message: String,
    pub slot: Slot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for SlotError {
    fn into_response(self) -> Response {
        let status = match self {
            SlotError::InvalidNumber => StatusCode::BAD_REQUEST,
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::DuplicateNumber(_)
            | SlotError::EmptyRegistry
            | SlotError::NoMatch
            | SlotError::AlreadyFree(_) => StatusCode::CONFLICT,
        };
        let body = ErrorResponse {
            error: self.kind().into(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn operation_response(operation: Operation, slot: Slot) -> Json<OperationResponse> {
    Json(OperationResponse {
        message: operation.success_message(&slot),
        slot,
    })
}

pub fn create_app<T: SlotBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        backend,
        configuration,
    };

    Router::new()
        .route("/", get(get_frontend))
        .route("/frontend", get(get_frontend))
        .route("/slots", get(get_slots))
        .route("/stats", get(get_stats))
        .route("/activity", get(get_activity))
        .route("/events", get(get_events))
        .route("/add", post(add_slot))
        .route("/park", post(park_vehicle))
        .route("/remove", post(remove_vehicle))
        .with_state(state)
        .layer(cors)
}

async fn get_slots<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Json<Vec<Slot>> {
    Json(state.backend.slots())
}

async fn get_stats<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Json<Stats> {
    Json(state.backend.stats())
}

async fn get_activity<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Json<Vec<ActivityEntry>> {
    Json(state.backend.activity())
}

async fn get_events<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let events = state
        .backend
        .slot_stream()
        .map(|snapshot| Event::default().event("snapshot").json_data(snapshot));
    Sse::new(events).keep_alive(KeepAlive::default())
}

async fn add_slot<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<AddSlotRequest>,
) -> Result<Json<OperationResponse>, SlotError> {
    let slot = state
        .backend
        .add_slot(request.slot_number, request.covered, request.ev_charging)?;
    Ok(operation_response(Operation::AddSlot, slot))
}

async fn park_vehicle<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<ParkVehicleRequest>,
) -> Result<Json<OperationResponse>, SlotError> {
    let slot = state
        .backend
        .park_vehicle(request.needs_ev, request.needs_cover)?;
    Ok(operation_response(Operation::ParkVehicle, slot))
}

async fn remove_vehicle<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<RemoveVehicleRequest>,
) -> Result<Json<OperationResponse>, SlotError> {
    let slot = state.backend.remove_vehicle(request.slot_number)?;
    Ok(operation_response(Operation::RemoveVehicle, slot))
}

async fn get_frontend<T: SlotBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.configuration.frontend_path();

    match fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents.replace(
            TITLE_PLACEHOLDER,
            &state.configuration.website_title(),
        ))),
        Err(err) => {
            error!(%err, path = %path.display(), "Failed to read frontend file");
            let error_message = format!("Failed to read frontend file: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_message))
        }
    }
}
