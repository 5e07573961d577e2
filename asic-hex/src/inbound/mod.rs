//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that applies the resolved settings: host
//! validation, HTTPS redirect, hardening headers, CORS, and static/media
//! file serving.

mod handlers;
mod hosts;
mod security;
mod server;

pub use handlers::AppState;
pub use hosts::HostPolicy;
pub use server::HttpServer;
