//! HTTP adapter for decision model endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApiResponse, CreateModelRequest, ErrorResponse, HealthResponse};
pub use handlers::{health, route_not_found, ModelAppState, IMPORT_FIELD};
pub use routes::model_routes;
