use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// The recursive resolver a query is sent to.
///
/// Accepts `IP`, `IP:PORT`, `[IPv6]:PORT` and the same forms prefixed with
/// `udp://`. Hostnames are rejected since resolving them would need DNS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverEndpoint {
    addr: SocketAddr,
}

impl ResolverEndpoint {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::new(ip, port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn with_port(self, port: u16) -> Self {
        Self::from_ip(self.addr.ip(), port)
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "udp://{}", self.addr)
    }
}

impl From<SocketAddr> for ResolverEndpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr)
    }
}

impl FromStr for ResolverEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr_str = s.strip_prefix("udp://").unwrap_or(s);

        if let Ok(addr) = addr_str.parse::<SocketAddr>() {
            return Ok(Self::new(addr));
        }
        let bare = addr_str
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(addr_str);
        if let Ok(ip) = bare.parse::<IpAddr>() {
            return Ok(Self::from_ip(ip, DEFAULT_DNS_PORT));
        }

        Err(format!(
            "Invalid resolver endpoint: '{}'. Expected: IP, IP:PORT or udp://IP:PORT",
            s
        ))
    }
}
