//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid invocation state: {0}")]
    InvalidInvocationState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_display() {
        let error = DomainError::InvalidInvocationState("finished".to_string());
        assert_eq!(error.to_string(), "Invalid invocation state: finished");
    }
}
