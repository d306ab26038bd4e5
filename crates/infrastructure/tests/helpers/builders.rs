#![allow(dead_code)]
use std::net::Ipv4Addr;

/// Offset of the first question name in any message.
pub const QUESTION_NAME_OFFSET: u16 = 12;

fn encode_labels(domain: &str, buf: &mut Vec<u8>) {
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
}

/// Builds synthetic response messages. Answer names default to a
/// compression pointer to the first question name.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<u8>,
    question_count: u16,
    answers: Vec<u8>,
    answer_count: u16,
    authority_count: u16,
    additional_count: u16,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            question_count: 0,
            answers: Vec::new(),
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, domain: &str) -> Self {
        encode_labels(domain, &mut self.questions);
        self.questions.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        self.question_count += 1;
        self
    }

    pub fn answer_a(self, addr: Ipv4Addr) -> Self {
        self.answer_record(1, 1, &addr.octets())
    }

    /// Answer named by a pointer to the first question.
    pub fn answer_record(mut self, rtype: u16, class: u16, rdata: &[u8]) -> Self {
        self.answers
            .extend_from_slice(&(0xC000 | QUESTION_NAME_OFFSET).to_be_bytes());
        self.push_record_body(rtype, class, rdata.len() as u16, rdata);
        self
    }

    /// Answer with an uncompressed owner name.
    pub fn answer_named(mut self, name: &str, rtype: u16, class: u16, rdata: &[u8]) -> Self {
        encode_labels(name, &mut self.answers);
        self.push_record_body(rtype, class, rdata.len() as u16, rdata);
        self
    }

    /// Answer whose RDLENGTH disagrees with the RDATA actually written.
    pub fn answer_with_rdlength(mut self, rdlength: u16, rdata: &[u8]) -> Self {
        self.answers
            .extend_from_slice(&(0xC000 | QUESTION_NAME_OFFSET).to_be_bytes());
        self.push_record_body(1, 1, rdlength, rdata);
        self
    }

    pub fn authority_count(mut self, count: u16) -> Self {
        self.authority_count = count;
        self
    }

    pub fn additional_count(mut self, count: u16) -> Self {
        self.additional_count = count;
        self
    }

    fn push_record_body(&mut self, rtype: u16, class: u16, rdlength: u16, rdata: &[u8]) {
        self.answers.extend_from_slice(&rtype.to_be_bytes());
        self.answers.extend_from_slice(&class.to_be_bytes());
        self.answers.extend_from_slice(&300u32.to_be_bytes());
        self.answers.extend_from_slice(&rdlength.to_be_bytes());
        self.answers.extend_from_slice(rdata);
        self.answer_count += 1;
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.questions.len() + self.answers.len());
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&self.question_count.to_be_bytes());
        buf.extend_from_slice(&self.answer_count.to_be_bytes());
        buf.extend_from_slice(&self.authority_count.to_be_bytes());
        buf.extend_from_slice(&self.additional_count.to_be_bytes());
        buf.extend_from_slice(&self.questions);
        buf.extend_from_slice(&self.answers);
        buf
    }
}

/// Response with one A answer whose owner name takes exactly `hops`
/// pointer follows to reach the question name.
///
/// The first pointer sits in the answer; the remaining `hops - 1` pointers
/// are chained in trailing bytes after the last record.
pub fn pointer_chain_response(id: u16, domain: &str, hops: usize, addr: Ipv4Addr) -> Vec<u8> {
    assert!(hops >= 1);
    let mut buf = ResponseBuilder::new(id).question(domain).build();
    buf[7] = 1; // ANCOUNT = 1

    let answer_at = buf.len();
    let record_len = 2 + 10 + 4;
    let chain_start = answer_at + record_len;

    let first_target = if hops == 1 {
        QUESTION_NAME_OFFSET as usize
    } else {
        chain_start
    };
    buf.extend_from_slice(&(0xC000 | first_target as u16).to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    buf.extend_from_slice(&60u32.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x04]);
    buf.extend_from_slice(&addr.octets());

    for i in 1..hops {
        let target = if i == hops - 1 {
            QUESTION_NAME_OFFSET as usize
        } else {
            buf.len() + 2
        };
        buf.extend_from_slice(&(0xC000 | target as u16).to_be_bytes());
    }
    buf
}
