//! HTTP API module.
//!
//! REST endpoints for the support-bot chat surface.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{ChatRequest, ChatResponse, HealthResponse};
pub use routes::create_router;
pub use state::AppState;
