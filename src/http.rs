use crate::configuration::Configuration;
use crate::error::Error;
use crate::store::SlotStore;
use crate::types::{AppointmentDraft, TIME_RE};
use crate::AppState;
use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_valid::Valid;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
struct HoursQuery {
    date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct BookRequest {
    #[validate(length(min = 1))]
    name: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    phone: String,
    date: NaiveDate,
    #[validate(regex(path = *TIME_RE, message = "time must be a full hour in HH:00 form"))]
    time: String,
    notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct AvailabilityRequest {
    date: NaiveDate,
    hours: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookResponse {
    id: Uuid,
}

pub async fn start_server<T: SlotStore, C: Configuration>(state: AppState<T, C>) {
    let address = format!("127.0.0.1:{}", state.config.port());
    let listener = TcpListener::bind(&address).await.unwrap();
    tracing::info!(%address, "listening");
    serve(state, listener).await;
}

/// Split from [`start_server`] so tests can bind an ephemeral port.
pub async fn serve<T: SlotStore, C: Configuration>(state: AppState<T, C>, listener: TcpListener) {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/hours", get(get_hours))
        .route("/book", post(book));

    let admin = Router::new()
        .route("/availability", post(set_availability))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth));

    let app = Router::new()
        .merge(public)
        .merge(admin)
        .with_state(state)
        .layer(cors);

    axum::serve(listener, app).await.unwrap();
}

async fn admin_auth<T: SlotStore, C: Configuration>(
    State(state): State<AppState<T, C>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let provided = request
        .headers()
        .get("x-admin-password")
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(password) if password == state.config.admin_password() => Ok(next.run(request).await),
        Some(_) => Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string())),
        None => Err((StatusCode::UNAUTHORIZED, "Missing credentials".to_string())),
    }
}

fn error_response(err: Error) -> (StatusCode, String) {
    if err.is_validation() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else {
        tracing::error!(%err, "storage failure");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

async fn get_hours<T: SlotStore, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<HoursQuery>,
) -> Result<Json<Vec<u32>>, (StatusCode, String)> {
    state
        .booking
        .list_bookable_hours(query.date)
        .map(Json)
        .map_err(error_response)
}

async fn book<T: SlotStore, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Valid(Json(request)): Valid<Json<BookRequest>>,
) -> Result<Json<BookResponse>, (StatusCode, String)> {
    let draft = AppointmentDraft {
        name: request.name,
        email: request.email,
        phone: request.phone,
        date: request.date,
        time: request.time,
        notes: request.notes,
    };
    state
        .booking
        .book(draft)
        .map(|id| Json(BookResponse { id }))
        .map_err(error_response)
}

async fn set_availability<T: SlotStore, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Valid(Json(request)): Valid<Json<AvailabilityRequest>>,
) -> Result<(StatusCode, String), (StatusCode, String)> {
    state
        .availability
        .reconcile(request.date, &request.hours)
        .map(|()| (StatusCode::OK, "Availability updated successfully".to_string()))
        .map_err(error_response)
}
