#![allow(dead_code, unused_imports)]
pub mod builders;
pub mod dns_server_mock;

pub use builders::{pointer_chain_response, ResponseBuilder};
pub use dns_server_mock::MockDnsServer;
