use std::io;

/// Why a connection could not be established.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// The host name did not resolve to any address.
    #[error("Unknown host: {host}")]
    UnknownHost { host: String },

    /// Any failure after resolution, including a connect timeout.
    #[error("No I/O")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn diagnostics_are_distinct() {
        let unknown = ConnectError::UnknownHost { host: "kq6py".to_string() };
        let io_err = ConnectError::from(io::Error::from(io::ErrorKind::ConnectionRefused));

        assert_eq!(unknown.to_string(), "Unknown host: kq6py");
        assert_eq!(io_err.to_string(), "No I/O");
        assert!(unknown.source().is_none());
        assert!(io_err.source().is_some());
    }
}
