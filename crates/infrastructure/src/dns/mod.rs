pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::{lookup_ipv4, LookupResult, StubResolver};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::{decode_response, encode_query, extract_ipv4_addresses};
