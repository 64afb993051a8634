//! HTTP API module for the shift attendance engine.
//!
//! This module provides the REST API endpoints for evaluating attendance,
//! managing shift settings and listing attendance records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluateRequest, RecordQueryRequest};
pub use response::{ApiError, CheckInAccepted, CheckOutAccepted, RecordListing};
pub use state::AppState;
