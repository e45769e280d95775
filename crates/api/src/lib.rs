//! HTTP API handlers and routes for the CercoOffro login service

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::AppState;
