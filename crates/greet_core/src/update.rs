use url::Url;

use crate::state::{Outcome, SessionState};
use crate::{Effect, Msg};

/// Fixed sub-path the client appends to the backend base address.
pub const MESSAGE_PATH: &str = "/message";

const STEP_PREPARING: &str = "Preparing to fetch data...";
const STEP_ATTEMPTING: &str = "Attempting to fetch data from the backend...";
const STEP_FETCHED: &str = "Data fetched successfully.";
const STEP_FETCH_FAILED: &str = "Error: Failed to fetch data from the backend.";
const STEP_CONFIG_MISSING: &str = "Error: Backend URL is not configured.";
const STEP_CONFIG_INVALID: &str = "Error: Backend URL is not valid.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { backend_url } => {
            // Mount happens once; a re-render must not restart the sequence.
            if !state.steps().is_empty() {
                return (state, Vec::new());
            }
            state.push_step(STEP_PREPARING);
            match resolve_base(backend_url.as_deref()) {
                BaseUrl::Missing => {
                    state.push_step(STEP_CONFIG_MISSING);
                    state.settle(Outcome::ConfigError);
                    Vec::new()
                }
                BaseUrl::Invalid => {
                    state.push_step(STEP_CONFIG_INVALID);
                    state.settle(Outcome::ConfigError);
                    Vec::new()
                }
                BaseUrl::Usable(base) => {
                    state.push_step(format!("Using this backend URL: {base}"));
                    let url = format!("{}{MESSAGE_PATH}", base.trim_end_matches('/'));
                    state.push_step(format!("Full API URL constructed: {url}"));
                    state.push_step(STEP_ATTEMPTING);
                    vec![Effect::FetchMessage { url }]
                }
            }
        }
        Msg::FetchSucceeded { message } => {
            // A reply landing after the session settled is dropped.
            if state.is_settled() {
                return (state, Vec::new());
            }
            state.push_step(STEP_FETCHED);
            state.settle(Outcome::Success { message });
            Vec::new()
        }
        Msg::FetchFailed { detail } => {
            if state.is_settled() {
                return (state, Vec::new());
            }
            state.push_step(STEP_FETCH_FAILED);
            state.settle(Outcome::TransportError { detail });
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

enum BaseUrl {
    Missing,
    Invalid,
    Usable(String),
}

fn resolve_base(raw: Option<&str>) -> BaseUrl {
    let Some(raw) = raw else {
        return BaseUrl::Missing;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BaseUrl::Missing;
    }
    if Url::parse(trimmed).is_err() {
        return BaseUrl::Invalid;
    }
    BaseUrl::Usable(trimmed.to_string())
}
