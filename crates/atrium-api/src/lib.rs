//! HTTP API for Atrium.
//!
//! Thin request/response mapping over the application services: axum
//! handlers deserialize the JSON contract, hand raw payloads to the
//! services, and map the domain failure taxonomy onto status codes
//! (400 invalid input, 404 missing reference, 409 uniqueness collision,
//! 401 unauthorized, 503 storage fault).
//!
//! The routes are generic over the store and door-checker types, so the
//! same router serves the in-memory store in tests and whatever a
//! deployment wires in.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::ServerConfig;
pub use state::AppState;
