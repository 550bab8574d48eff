//! Server error types.
//!
//! [`ServerError`] covers the failures that stop the process: bad
//! configuration and listener I/O. Per-connection WebSocket errors never
//! surface here; they are logged and end only the affected connection.

/// Errors returned by the library API.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid configuration for {key}: {reason}")]
    Config {
        /// Environment variable name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Binding or serving the TCP listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_key() {
        let err = ServerError::Config {
            key: "LISTEN_ADDR",
            reason: "invalid socket address syntax".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration for LISTEN_ADDR: invalid socket address syntax"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ServerError = io.into();
        assert!(matches!(err, ServerError::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }
}
