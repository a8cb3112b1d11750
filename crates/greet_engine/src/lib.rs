//! Greet engine: transport execution for the client session.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, MessagePayload};
