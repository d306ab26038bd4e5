//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing), one datagram each way. There is no
//! TCP fallback: a reply with the TC bit set is returned as received.
//!
//! The socket is connected to the server, so datagrams from any other
//! source address or port are dropped before they reach the decoder.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::future::Future;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};
use stubdns_domain::{DomainError, ResolverEndpoint};
use tokio::net::UdpSocket;
use tracing::debug;

/// Classic DNS-over-UDP message limit without EDNS(0).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 512;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(endpoint: ResolverEndpoint) -> Self {
        Self::with_max_response_size(endpoint, DEFAULT_MAX_RESPONSE_SIZE)
    }

    pub fn with_max_response_size(endpoint: ResolverEndpoint, max_response_size: usize) -> Self {
        Self {
            server_addr: endpoint.socket_addr(),
            max_response_size,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        // Bind to ephemeral port (0 = OS assigns)
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn transport_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: format!("{}: {}", action, e),
        }
    }
}

async fn with_timeout<F, T>(
    timeout: Option<Duration>,
    server: SocketAddr,
    fut: F,
) -> Result<T, DomainError>
where
    F: Future<Output = T>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        None => Ok(fut.await),
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.transport_error("Failed to bind UDP socket", e))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.transport_error("Failed to connect UDP socket", e))?;

        let started = Instant::now();

        // Send query
        let bytes_sent = with_timeout(timeout, self.server_addr, socket.send(message_bytes))
            .await?
            .map_err(|e| self.transport_error("Failed to send UDP query", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        // Receive response
        let mut recv_buf = vec![0u8; self.max_response_size];

        let bytes_received = with_timeout(timeout, self.server_addr, socket.recv(&mut recv_buf))
            .await?
            .map_err(|e| self.transport_error("Failed to receive UDP response", e))?;

        let elapsed = started.elapsed();
        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            elapsed_ms = elapsed.as_millis() as u64,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            elapsed,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let endpoint: ResolverEndpoint = "8.8.8.8:53".parse().unwrap();
        let transport = UdpTransport::new(endpoint);
        assert_eq!(transport.server_addr(), endpoint.socket_addr());
        assert_eq!(transport.max_response_size, DEFAULT_MAX_RESPONSE_SIZE);
        assert_eq!(transport.protocol_name(), "UDP");
    }

    #[test]
    fn test_udp_transport_ipv6_binds_ipv6() {
        let endpoint: ResolverEndpoint = "[2001:4860:4860::8888]:53".parse().unwrap();
        let transport = UdpTransport::new(endpoint);
        assert!(transport.bind_addr().is_ipv6());
    }
}
