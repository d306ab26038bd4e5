use stubdns_domain::{Header, ResourceRecord};
use tracing::debug;

/// Message section a decoded record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

/// How the decoder classified a resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDisposition {
    /// A/IN with 4 bytes of RDATA, surfaced as an IPv4 address.
    Ipv4Address,
    /// Kept in the message, not surfaced as an address.
    Retained,
}

/// Hooks invoked at fixed checkpoints of a response decode.
///
/// Every method defaults to a no-op, so implementors override only what
/// they care about. Observers cannot influence parsing.
pub trait DecodeObserver {
    fn header_parsed(&mut self, _header: &Header, _expected_id: u16) {}

    fn name_resolved(
        &mut self,
        _section: Section,
        _offset: usize,
        _name: &str,
        _pointer_hops: usize,
    ) {
    }

    fn record_classified(
        &mut self,
        _section: Section,
        _record: &ResourceRecord,
        _disposition: RecordDisposition,
    ) {
    }
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {}

/// Forwards decode checkpoints to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn header_parsed(&mut self, header: &Header, expected_id: u16) {
        debug!(
            id = header.id,
            id_matches = header.id == expected_id,
            flags = header.flags,
            rcode = header.response_code().as_str(),
            qdcount = header.question_count,
            ancount = header.answer_count,
            nscount = header.authority_count,
            arcount = header.additional_count,
            "DNS header parsed"
        );
    }

    fn name_resolved(&mut self, section: Section, offset: usize, name: &str, pointer_hops: usize) {
        debug!(
            section = section.as_str(),
            offset = offset,
            name = name,
            pointer_hops = pointer_hops,
            "Name resolved"
        );
    }

    fn record_classified(
        &mut self,
        section: Section,
        record: &ResourceRecord,
        disposition: RecordDisposition,
    ) {
        debug!(
            section = section.as_str(),
            name = %record.name,
            record_type = %record.record_type,
            class = %record.class,
            ttl = record.ttl,
            rdlength = record.rdlength(),
            disposition = ?disposition,
            "Record classified"
        );
    }
}
