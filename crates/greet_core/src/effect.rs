#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET against the fully constructed message URL.
    FetchMessage { url: String },
}
