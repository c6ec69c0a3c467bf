/// API error types and the central error handler
pub mod errors;
/// Person route handlers
pub mod handlers;
/// Request logging middleware
pub mod logging;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
