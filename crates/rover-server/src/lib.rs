//! HTTP front end for a rover fleet.
//!
//! The binary loads a TOML config, registers its rovers, and serves the
//! router built by [`app`]. The library half exists so the routes can be
//! driven in-process from tests.

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;

use axum::Router;

pub use state::AppState;

/// The complete application with its state attached.
pub fn app(state: AppState) -> Router {
    routes::router().with_state(state)
}
