/// Represents a connection target (PLC endpoint) as host + port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    /// Cached "host:port" form handed to protocol clients.
    pub addr: String,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 80;

impl Endpoint {
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.addr = format!(
            "{self_host}:{self_port}",
            self_host = self.host,
            self_port = self.port
        );
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self.addr = format!(
            "{self_host}:{self_port}",
            self_host = self.host,
            self_port = self.port
        );
        self
    }

    /// Shorthand for an endpoint from known host and port.
    #[must_use]
    pub fn of(host: impl Into<String>, port: u16) -> Self {
        Self::new().with_host(host).with_port(port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_tracks_builder() {
        let ep = Endpoint::new().with_host("192.168.1.40").with_port(5007);
        assert_eq!(ep.addr, "192.168.1.40:5007");
        assert_eq!(Endpoint::of("10.0.0.2", 102).addr, "10.0.0.2:102");
    }
}
