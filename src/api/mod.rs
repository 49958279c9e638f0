//! HTTP API module for the payslip engine.
//!
//! This module provides the document request boundary: payslip PDFs and
//! seniority certificates generated on demand from the record store.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
