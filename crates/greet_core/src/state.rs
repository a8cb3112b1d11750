use crate::view_model::{SessionViewModel, MISSING_CONFIG_MESSAGE, NO_MESSAGE_YET};

/// How the session's single fetch ended up, as one tagged value.
/// A message and an error can never be recorded at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// No reply yet; the request may still be in flight, or not yet issued.
    #[default]
    Pending,
    /// The backend answered and the payload carried a message.
    Success { message: String },
    /// No usable backend address was configured; no request was issued.
    ConfigError,
    /// The request was issued but failed in transport or decoding.
    TransportError { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    steps: Vec<String>,
    outcome: Outcome,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append-only progress log; insertion order is display order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// True once a terminal outcome has been recorded.
    pub fn is_settled(&self) -> bool {
        !matches!(self.outcome, Outcome::Pending)
    }

    pub fn view(&self) -> SessionViewModel {
        let (message_line, error_line) = match &self.outcome {
            Outcome::Pending => (NO_MESSAGE_YET.to_string(), None),
            Outcome::Success { message } => (message.clone(), None),
            Outcome::ConfigError => (MISSING_CONFIG_MESSAGE.to_string(), None),
            Outcome::TransportError { detail } => {
                (NO_MESSAGE_YET.to_string(), Some(detail.clone()))
            }
        };
        SessionViewModel {
            steps: self.steps.clone(),
            message_line,
            error_line,
            settled: self.is_settled(),
        }
    }

    pub(crate) fn push_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Records the terminal outcome. Callers must check `is_settled` first;
    /// a settled session never transitions again.
    pub(crate) fn settle(&mut self, outcome: Outcome) {
        debug_assert!(!self.is_settled());
        self.outcome = outcome;
    }
}
