//! stubdns Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_protocol;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{Header, ParsedMessage, Question, ResponseCode, HEADER_LEN};
pub use dns_protocol::{ResolverEndpoint, DEFAULT_DNS_PORT};
pub use dns_record::{RecordClass, RecordType, ResourceRecord};
pub use errors::{DomainError, WireError};
