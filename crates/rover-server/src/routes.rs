//! HTTP route handlers.
//!
//! Handlers decode the request, call into the fleet, and encode the
//! result. Unknown commands and obstacle aborts are ordinary 200
//! responses; only transport-level problems (missing keys, unknown rover)
//! are client errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use rover_core::{Rover, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use rover_fleet::{FleetError, RoverHandle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::AppState;

/// Build the router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/available_rovers", get(available_rovers))
        .route("/send_commands", post(send_commands))
        .route("/rovers", post(create_rover))
        .route("/rovers/{name}", get(get_rover))
}

/// A handler failure rendered as a plain-text body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Plain-text response body.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<FleetError> for ApiError {
    fn from(err: FleetError) -> Self {
        let status = match err {
            FleetError::NotFound { .. } => StatusCode::NOT_FOUND,
            FleetError::DuplicateName { .. } => StatusCode::CONFLICT,
            FleetError::EmptyName => StatusCode::BAD_REQUEST,
            FleetError::Poisoned { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RoverView {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub orientation: String,
    pub grid_width: u32,
    pub grid_height: u32,
    pub obstacle_probability: f64,
}

fn view(handle: &RoverHandle) -> Result<RoverView, ApiError> {
    let rover = handle.lock()?;
    Ok(RoverView {
        name: handle.name().to_string(),
        x: rover.x(),
        y: rover.y(),
        orientation: rover.orientation().to_string(),
        grid_width: rover.grid_width(),
        grid_height: rover.grid_height(),
        obstacle_probability: rover.obstacle_probability(),
    })
}

/// GET /available_rovers - every rover, in registration order.
pub async fn available_rovers(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoverView>>, ApiError> {
    let rovers = state
        .fleet
        .names()
        .iter()
        .filter_map(|name| state.fleet.find(name))
        .map(|handle| view(&handle))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(rovers))
}

/// Form body for `POST /send_commands`. Both keys are optional at the
/// decoding stage so a missing one gets its own message.
#[derive(Debug, Deserialize)]
pub struct SendCommandsForm {
    pub rover_name: Option<String>,
    pub command_string: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse {
    pub result: String,
    pub details: String,
    pub x: u32,
    pub y: u32,
    pub orientation: String,
}

/// POST /send_commands - run a command string on a named rover.
pub async fn send_commands(
    State(state): State<AppState>,
    Form(form): Form<SendCommandsForm>,
) -> Result<Json<CommandResponse>, ApiError> {
    let Some(rover_name) = form.rover_name else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "'rover_name' key not found.",
        ));
    };
    let Some(command_string) = form.command_string else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "'command_string' key-value not found.",
        ));
    };
    let Some(handle) = state.fleet.find(&rover_name) else {
        warn!(rover = %rover_name, "command for unknown rover");
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Rover name not found in managed rovers list.",
        ));
    };

    let report = handle.execute(&command_string)?;
    info!(
        rover = %rover_name,
        commands = %command_string,
        result = report.outcome.result_message(),
        x = report.state.x,
        y = report.state.y,
        orientation = %report.state.orientation,
        "executed command string"
    );
    Ok(Json(CommandResponse {
        result: report.outcome.result_message().to_string(),
        details: report.outcome.details(),
        x: report.state.x,
        y: report.state.y,
        orientation: report.state.orientation.to_string(),
    }))
}

/// JSON body for `POST /rovers`. Omitted fields take the rover defaults.
#[derive(Debug, Deserialize)]
pub struct CreateRover {
    pub name: String,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub orientation: Option<String>,
    pub obstacle_probability: Option<f64>,
    pub grid_width: Option<i64>,
    pub grid_height: Option<i64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RoverCreated {
    pub rover: RoverView,
    /// Inputs that were corrected during construction.
    pub corrections: Vec<String>,
}

/// POST /rovers - register a new rover.
pub async fn create_rover(
    State(state): State<AppState>,
    Json(req): Json<CreateRover>,
) -> Result<(StatusCode, Json<RoverCreated>), ApiError> {
    let width = req.grid_width.unwrap_or(i64::from(DEFAULT_GRID_WIDTH));
    let height = req.grid_height.unwrap_or(i64::from(DEFAULT_GRID_HEIGHT));
    let mut builder = Rover::builder()
        .position(req.x.unwrap_or(0), req.y.unwrap_or(0))
        .grid(width, height)
        .obstacle_probability(req.obstacle_probability.unwrap_or(0.0));
    if let Some(orientation) = req.orientation {
        builder = builder.orientation(orientation);
    }
    if let Some(seed) = req.seed.or_else(|| state.next_seed()) {
        builder = builder.seed(seed);
    }

    let handle = state.fleet.create(req.name, builder)?;
    let corrections = handle.lock()?.diagnostics().warnings();
    Ok((
        StatusCode::CREATED,
        Json(RoverCreated {
            rover: view(&handle)?,
            corrections,
        }),
    ))
}

/// GET /rovers/{name} - one rover's state.
pub async fn get_rover(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoverView>, ApiError> {
    let handle = state
        .fleet
        .find(&name)
        .ok_or(FleetError::NotFound { name })?;
    Ok(Json(view(&handle)?))
}
