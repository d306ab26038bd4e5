use super::transport::{DnsTransport, UdpTransport};
use super::wire::{decode_response_with, encode_query, TracingObserver};
use std::net::Ipv4Addr;
use std::time::Duration;
use stubdns_domain::config::ResolverConfig;
use stubdns_domain::{DomainError, ResolverEndpoint, ResponseCode};
use tracing::{debug, info, warn};

/// Result of a single A lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// A/IN answers in answer order, duplicates preserved.
    pub addresses: Vec<Ipv4Addr>,
    pub response_code: ResponseCode,
    pub elapsed: Duration,
}

impl LookupResult {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(|a| a.to_string()).collect()
    }
}

/// Stub resolver: one query, one reply, no retries.
pub struct StubResolver<T: DnsTransport> {
    transport: T,
    timeout: Option<Duration>,
}

impl StubResolver<UdpTransport> {
    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let endpoint = config.endpoint().map_err(DomainError::InvalidEndpoint)?;
        let transport = UdpTransport::with_max_response_size(endpoint, config.max_response_size);
        Ok(Self::new(transport, config.timeout()))
    }
}

impl<T: DnsTransport> StubResolver<T> {
    pub fn new(transport: T, timeout: Option<Duration>) -> Self {
        Self { transport, timeout }
    }

    /// Looks up the A records of `domain` with a fresh random transaction id.
    pub async fn lookup(&self, domain: &str) -> Result<LookupResult, DomainError> {
        self.lookup_with_id(domain, fastrand::u16(..)).await
    }

    /// Looks up the A records of `domain` using the given transaction id.
    ///
    /// A reply whose id differs from `transaction_id` is rejected with
    /// [`DomainError::ResponseIdMismatch`] and none of its content is used.
    pub async fn lookup_with_id(
        &self,
        domain: &str,
        transaction_id: u16,
    ) -> Result<LookupResult, DomainError> {
        let query = encode_query(domain, transaction_id)?;

        debug!(
            domain = %domain,
            id = transaction_id,
            bytes = query.len(),
            protocol = self.transport.protocol_name(),
            "Sending A query"
        );

        let response = self.transport.send(&query, self.timeout).await?;

        let message = decode_response_with(&response.bytes, transaction_id, &mut TracingObserver)?;

        if message.header.id != transaction_id {
            warn!(
                domain = %domain,
                expected = transaction_id,
                received = message.header.id,
                "Discarding response with unexpected transaction id"
            );
            return Err(DomainError::ResponseIdMismatch {
                expected: transaction_id,
                received: message.header.id,
            });
        }

        let response_code = message.header.response_code();
        if message.header.truncated() {
            warn!(domain = %domain, "Response has TC bit set, answers may be incomplete");
        }

        let addresses = message.ipv4_answers();

        info!(
            domain = %domain,
            rcode = response_code.as_str(),
            addresses = addresses.len(),
            elapsed_ms = response.elapsed.as_millis() as u64,
            "Lookup complete"
        );

        Ok(LookupResult {
            addresses,
            response_code,
            elapsed: response.elapsed,
        })
    }
}

/// One-shot A lookup against `server` over UDP with the default 5 second timeout.
pub async fn lookup_ipv4(
    domain: &str,
    server: ResolverEndpoint,
) -> Result<LookupResult, DomainError> {
    let resolver = StubResolver::new(
        UdpTransport::new(server),
        ResolverConfig::default().timeout(),
    );
    resolver.lookup(domain).await
}
