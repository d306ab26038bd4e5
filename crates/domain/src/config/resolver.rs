use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::dns_protocol::{ResolverEndpoint, DEFAULT_DNS_PORT};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Resolver IP address, optionally with a port.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds to wait for each send and receive. 0 waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Receive buffer size for the reply datagram.
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl ResolverConfig {
    /// Resolves `server` and `port` into an endpoint.
    ///
    /// An explicit port inside `server` wins over `port`.
    pub fn endpoint(&self) -> Result<ResolverEndpoint, String> {
        let endpoint: ResolverEndpoint = self.server.parse()?;
        if server_has_port(&self.server) {
            Ok(endpoint)
        } else {
            Ok(endpoint.with_port(self.port))
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_response_size: default_max_response_size(),
        }
    }
}

fn server_has_port(server: &str) -> bool {
    let addr = server.strip_prefix("udp://").unwrap_or(server);
    addr.parse::<std::net::SocketAddr>().is_ok()
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_response_size() -> usize {
    512
}
