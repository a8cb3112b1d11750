/// Placeholder shown while no payload has arrived.
pub const NO_MESSAGE_YET: &str = "No message received yet.";

/// Fixed text shown when the backend address was never configured.
pub const MISSING_CONFIG_MESSAGE: &str = "Backend URL is not configured.";

/// Render-ready projection of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub steps: Vec<String>,
    pub message_line: String,
    pub error_line: Option<String>,
    pub settled: bool,
}
