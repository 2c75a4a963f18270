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

use adsales::{Clock, SystemClock, VolumeCalendarService};
use adsales_api::{
    AdDetailsPreview, AdDetailsRequest, ApiError, ChangeLogResponse, ClearChangeLogResponse,
    ContractOverviewResponse, ContractWindowRequest, CurrentVolumeResponse, CustomerSheetResponse,
    ListScheduleResponse, PublishingCycleResponse, ScheduleEditRequest, ScheduleEditResponse,
    ScheduleExportResponse, VolumeRangeResponse, clear_change_log, edit_schedule,
    evaluate_customer, export_ad_import, export_schedule, get_change_log, get_contract_overview,
    get_current_volume, get_publishing_cycle, get_volume_range, list_schedule, preview_ad_import,
};
use adsales_domain::{AccountReport, AdRow, CalendarConfig};
use adsales_persistence::Persistence;
use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

/// Ad-sales volume calendar server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA timezone that decides what "today" is
    #[arg(short, long, default_value = "UTC")]
    timezone: String,

    /// Volume reported as current when nothing is published yet
    #[arg(long, default_value_t = adsales_domain::DEFAULT_FALLBACK_VOLUME)]
    fallback_volume: u32,

    /// Longest gap in days still counted as a regular cycle
    #[arg(long, default_value_t = adsales_domain::DEFAULT_IRREGULAR_CYCLE_THRESHOLD_DAYS)]
    cycle_threshold_days: i64,
}

type CalendarService<C> = VolumeCalendarService<Persistence, C>;

/// Application state shared across handlers.
///
/// The calendar service owns the database connection and is serialised
/// behind a Mutex.
struct AppState<C: Clock> {
    service: Arc<Mutex<CalendarService<C>>>,
    next_request_id: Arc<AtomicU64>,
}

impl<C: Clock> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            next_request_id: Arc::clone(&self.next_request_id),
        }
    }
}

impl<C: Clock> AppState<C> {
    fn new(service: CalendarService<C>) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
            next_request_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn request_id(&self) -> String {
        format!("http-{}", self.next_request_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Locks the service and re-reads overrides other writers may have committed.
    async fn fresh_service(&self) -> Result<MutexGuard<'_, CalendarService<C>>, HttpError> {
        let mut service = self.service.lock().await;
        service.reload().map_err(ApiError::from)?;
        Ok(service)
    }
}

/// Query parameters naming a contract window.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContractWindowQuery {
    start_volume: Option<u32>,
    end_volume: Option<u32>,
}

impl From<ContractWindowQuery> for ContractWindowRequest {
    fn from(query: ContractWindowQuery) -> Self {
        Self {
            start_volume: query.start_volume,
            end_volume: query.end_volume,
        }
    }
}

/// Query parameters for the change log.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ChangeLogQuery {
    limit: Option<usize>,
}

/// API response for errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/schedule` endpoint.
async fn handle_list_schedule<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Result<Json<ListScheduleResponse>, HttpError> {
    info!("Handling list_schedule request");
    let service = app_state.fresh_service().await?;
    Ok(Json(list_schedule(&service)))
}

/// Handler for GET `/schedule/current` endpoint.
async fn handle_current_volume<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Result<Json<CurrentVolumeResponse>, HttpError> {
    let response: CurrentVolumeResponse = get_current_volume(&*app_state.fresh_service().await?);
    info!(current_volume = response.current_volume, "Handling current_volume request");
    Ok(Json(response))
}

/// Handler for GET `/schedule/range` endpoint.
async fn handle_volume_range<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Query(query): Query<ContractWindowQuery>,
) -> Result<Json<VolumeRangeResponse>, HttpError> {
    info!(?query, "Handling volume_range request");
    let service = app_state.fresh_service().await?;
    Ok(Json(get_volume_range(service.calendar(), &query.into())?))
}

/// Handler for GET `/schedule/cycle/{volume}` endpoint.
async fn handle_publishing_cycle<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Path(volume): Path<u32>,
) -> Result<Json<PublishingCycleResponse>, HttpError> {
    info!(volume, "Handling publishing_cycle request");
    let service = app_state.fresh_service().await?;
    Ok(Json(get_publishing_cycle(service.calendar(), volume)?))
}

/// Handler for GET `/contracts/overview` endpoint.
async fn handle_contract_overview<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Query(query): Query<ContractWindowQuery>,
) -> Result<Json<ContractOverviewResponse>, HttpError> {
    info!(?query, "Handling contract_overview request");
    let service = app_state.fresh_service().await?;
    Ok(Json(get_contract_overview(&service, &query.into())?))
}

/// Handler for POST `/schedule/edits` endpoint.
async fn handle_edit_schedule<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(req): Json<ScheduleEditRequest>,
) -> Result<Json<ScheduleEditResponse>, HttpError> {
    let request_id: String = app_state.request_id();
    info!(
        editor = %req.editor,
        request_id = %request_id,
        edit = ?req.edit,
        "Handling edit_schedule request"
    );
    let mut service = app_state.service.lock().await;
    Ok(Json(edit_schedule(&mut service, &req, &request_id)?))
}

/// Handler for GET `/schedule/changes` endpoint.
async fn handle_change_log<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Query(query): Query<ChangeLogQuery>,
) -> Result<Json<ChangeLogResponse>, HttpError> {
    info!(limit = ?query.limit, "Handling change_log request");
    let mut service = app_state.service.lock().await;
    Ok(Json(get_change_log(&mut service, query.limit)?))
}

/// Handler for DELETE `/schedule/changes` endpoint.
async fn handle_clear_change_log<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Result<Json<ClearChangeLogResponse>, HttpError> {
    info!("Handling clear_change_log request");
    let mut service = app_state.service.lock().await;
    Ok(Json(clear_change_log(&mut service)?))
}

/// Handler for GET `/schedule/export` endpoint.
async fn handle_export_schedule<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Result<Json<ScheduleExportResponse>, HttpError> {
    info!("Handling export_schedule request");
    let mut service = app_state.fresh_service().await?;
    Ok(Json(export_schedule(&mut service)?))
}

/// Handler for POST `/customers/evaluate` endpoint.
async fn handle_evaluate_customer<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(row): Json<AdRow>,
) -> Result<Json<AccountReport>, HttpError> {
    info!(customer = %row.customer, "Handling evaluate_customer request");
    let service = app_state.fresh_service().await?;
    Ok(Json(evaluate_customer(&service, &row)))
}

/// Handler for POST `/ad-details/preview` endpoint.
async fn handle_preview_ad_details<C: Clock>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(req): Json<AdDetailsRequest>,
) -> Result<Json<AdDetailsPreview>, HttpError> {
    info!(bytes = req.csv.len(), "Handling preview_ad_details request");
    let service = app_state.fresh_service().await?;
    Ok(Json(preview_ad_import(&service, &req)?))
}

/// Handler for POST `/ad-details/export` endpoint.
///
/// Responds with the sheet itself rather than JSON.
#[allow(clippy::unused_async)]
async fn handle_export_ad_details(
    Json(req): Json<AdDetailsRequest>,
) -> Result<Response, HttpError> {
    info!(format = ?req.format, "Handling export_ad_details request");
    let sheet: CustomerSheetResponse = export_ad_import(&req)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, sheet.content_type)],
        sheet.body,
    )
        .into_response())
}

/// Builds the application router.
fn build_router<C: Clock + Send + 'static>(app_state: AppState<C>) -> Router {
    Router::new()
        .route("/schedule", get(handle_list_schedule::<C>))
        .route("/schedule/current", get(handle_current_volume::<C>))
        .route("/schedule/range", get(handle_volume_range::<C>))
        .route("/schedule/cycle/{volume}", get(handle_publishing_cycle::<C>))
        .route("/schedule/edits", post(handle_edit_schedule::<C>))
        .route(
            "/schedule/changes",
            get(handle_change_log::<C>).delete(handle_clear_change_log::<C>),
        )
        .route("/schedule/export", get(handle_export_schedule::<C>))
        .route("/contracts/overview", get(handle_contract_overview::<C>))
        .route("/customers/evaluate", post(handle_evaluate_customer::<C>))
        .route("/ad-details/preview", post(handle_preview_ad_details::<C>))
        .route("/ad-details/export", post(handle_export_ad_details))
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

    info!("Initializing ad-sales calendar server");

    let config: CalendarConfig = CalendarConfig::new(args.fallback_volume, args.cycle_threshold_days)?;
    let clock: SystemClock = SystemClock::from_name(&args.timezone)?;
    info!(timezone = %clock.timezone(), ?config, "Calendar configured");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let service: CalendarService<SystemClock> = VolumeCalendarService::new(persistence, clock, config)?;
    info!(current_volume = service.current_volume(), "Volume calendar ready");

    let app: Router = build_router(AppState::new(service));

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
