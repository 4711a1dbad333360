//! Handler errors and their HTML responses.
//!
//! - [`ApiError`]: Error type returned by page handlers

pub mod api_error;

pub use api_error::ApiError;
