use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "kq6py";
pub const DEFAULT_PORT: u16 = 4321;

/// The remote address a `Connection` is opened to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// Upper bound on the TCP handshake. `None` waits as long as the OS does.
    pub connect_timeout: Option<Duration>,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Endpoint {
            host: host.into(),
            port,
            connect_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_fixed_host() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.host, "kq6py");
        assert_eq!(endpoint.port, 4321);
        assert_eq!(endpoint.connect_timeout, None);
        assert_eq!(endpoint.to_string(), "kq6py:4321");
    }

    #[test]
    fn timeout_is_opt_in() {
        let endpoint = Endpoint::new("127.0.0.1", 80).with_timeout(Duration::from_secs(2));
        assert_eq!(endpoint.connect_timeout, Some(Duration::from_secs(2)));
    }
}
