#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page mounted; carries the backend base URL resolved at build time.
    Mounted { backend_url: Option<String> },
    /// The backend replied and the payload's message field was extracted.
    FetchSucceeded { message: String },
    /// The request failed in transport; carries a human-readable description.
    FetchFailed { detail: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
