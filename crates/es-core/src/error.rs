//! Error types for Esscher variates

use thiserror::Error;

/// Esscher error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tilt (or other evaluation argument) outside the variate's valid region
    #[error("Domain violation: {0}")]
    DomainViolation(String),

    /// Invalid construction parameter
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let e = Error::DomainViolation("tilt must lie in (-1, 1), got 1.5".into());
        assert_eq!(e.to_string(), "Domain violation: tilt must lie in (-1, 1), got 1.5");

        let e = Error::Validation("sigma must be finite and > 0, got 0".into());
        assert!(e.to_string().starts_with("Validation error:"));
    }
}
