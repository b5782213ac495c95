//! HTTP middleware for request processing.
//!
//! Provides request/response observability middleware.

pub mod tracing;
