use crate::dns_record::{RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub const HEADER_LEN: usize = 12;

const FLAG_QR: u16 = 0x8000;
const FLAG_TC: u16 = 0x0200;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

/// Flags for a standard query with recursion desired (QR=0, OPCODE=0, RD=1).
pub const STANDARD_QUERY_FLAGS: u16 = FLAG_RD;

/// RCODE values from the low 4 bits of the header flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn from_flags(flags: u16) -> Self {
        match (flags & 0x000F) as u8 {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "RCODE?",
        }
    }
}

/// The fixed 12-byte message header, all fields in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: STANDARD_QUERY_FLAGS,
            question_count: 1,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0F) as u8
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_flags(self.flags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn a(name: &str) -> Self {
        Self {
            name: name.to_string(),
            qtype: RecordType::A,
            qclass: RecordClass::IN,
        }
    }
}

/// A fully decoded response. Built once per decode call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl ParsedMessage {
    /// IPv4 addresses of the A/IN answers, in answer order, duplicates kept.
    pub fn ipv4_answers(&self) -> Vec<Ipv4Addr> {
        self.answers.iter().filter_map(ResourceRecord::ipv4).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_header_flags() {
        let header = Header::query(0xBEEF);
        assert_eq!(header.flags, 0x0100);
        assert_eq!(header.question_count, 1);
        assert_eq!(header.answer_count, 0);
        assert!(!header.is_response());
        assert!(header.recursion_desired());
        assert_eq!(header.opcode(), 0);
        assert_eq!(header.response_code(), ResponseCode::NoError);
    }

    #[test]
    fn test_response_flags() {
        let header = Header {
            flags: 0x8183,
            ..Header::default()
        };
        assert!(header.is_response());
        assert!(header.recursion_desired());
        assert!(header.recursion_available());
        assert!(!header.truncated());
        assert_eq!(header.response_code(), ResponseCode::NameError);
        assert_eq!(header.response_code().as_str(), "NXDOMAIN");
    }

    #[test]
    fn test_unknown_rcode() {
        assert_eq!(ResponseCode::from_flags(0x000B), ResponseCode::Other(11));
    }
}
