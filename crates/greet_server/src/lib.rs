//! Static JSON responder with a permissive cross-origin policy.

pub mod api;
pub mod config;

pub use api::create_router;
pub use config::ServerConfig;
