pub mod udp;

use async_trait::async_trait;
use std::time::Duration;
use stubdns_domain::DomainError;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// Time from sending the query to receiving the reply.
    pub elapsed: Duration,
}

/// Sends one raw DNS message and returns one raw reply.
///
/// `timeout` bounds each blocking step; `None` waits indefinitely.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
