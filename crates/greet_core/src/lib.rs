//! Greet core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{Outcome, SessionState};
pub use update::{update, MESSAGE_PATH};
pub use view_model::{SessionViewModel, MISSING_CONFIG_MESSAGE, NO_MESSAGE_YET};
