/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod tasks;

pub use api::TaskApi;
pub use error::{Result, TaskAppError};

pub use client::{ClientConfig, TaskAppClient};
