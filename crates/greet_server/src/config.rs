//! Server configuration, read once at startup.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 4000;

/// Listener configuration; immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Load from the `PORT` environment variable, falling back to 4000.
    ///
    /// A set-but-unparseable value is an error rather than a silent
    /// fallback; the caller treats it as fatal.
    pub fn load() -> Result<Self> {
        let port = resolve_port(env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

fn resolve_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid PORT value {raw:?}")),
        _ => Ok(DEFAULT_PORT),
    }
}
