//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response: process liveness plus storage connectivity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub uptime: String,
    pub db: DbStatus,
}

/// Storage probe outcome.
#[derive(Debug, Serialize)]
pub struct DbStatus {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
