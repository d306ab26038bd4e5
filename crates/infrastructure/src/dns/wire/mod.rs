//! DNS wire-format codec (RFC 1035 §4): query encoding and defensive
//! response decoding with bounded name decompression.

pub mod name;
pub mod observer;
pub mod query;
mod reader;
pub mod response;

pub use name::{decode_name, encode_name, DecodedName, MAX_NAME_LEN, MAX_POINTER_HOPS};
pub use observer::{DecodeObserver, NoopObserver, RecordDisposition, Section, TracingObserver};
pub use query::encode_query;
pub use response::{decode_response, decode_response_with, extract_ipv4_addresses};
