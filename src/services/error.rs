//! Poll error types

use thiserror::Error;

/// Why a response body could not be turned into a timer snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing field '{field}' at position {position}")]
    MissingField { field: &'static str, position: usize },

    #[error("field '{field}' is not an integer: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Outcome of a failed poll
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Parse(#[from] ParseError),

    #[error("snapshot not stored: {0}")]
    State(String),
}

impl PollError {
    /// Short category name for logs and the status endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Transport(_) => "transport",
            PollError::Status(_) => "status",
            PollError::Parse(_) => "parse",
            PollError::State(_) => "state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let missing = ParseError::MissingField { field: "pause", position: 3 };
        assert_eq!(missing.to_string(), "missing field 'pause' at position 3");

        let poll: PollError = ParseError::InvalidField {
            field: "hints",
            value: "x".to_string(),
        }
        .into();
        assert_eq!(poll.kind(), "parse");
        assert_eq!(
            poll.to_string(),
            "malformed payload: field 'hints' is not an integer: \"x\""
        );

        assert_eq!(PollError::Status(404).to_string(), "endpoint answered with status 404");

        let state = PollError::State("Failed to lock timer state: poisoned".to_string());
        assert_eq!(state.kind(), "state");
        assert_eq!(state.to_string(), "snapshot not stored: Failed to lock timer state: poisoned");
    }
}
