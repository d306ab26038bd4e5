use super::name::encode_name;
use stubdns_domain::{Header, Question, WireError, HEADER_LEN};

/// Builds a standard recursive query for the A/IN records of `domain`.
///
/// The header carries `transaction_id` unchanged, QDCOUNT=1, all other
/// counts zero and flags `0x0100` (RD set, everything else clear).
pub fn encode_query(domain: &str, transaction_id: u16) -> Result<Vec<u8>, WireError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + domain.len() + 6);
    encode_header(&Header::query(transaction_id), &mut buf);
    encode_question(&Question::a(domain), &mut buf)?;
    Ok(buf)
}

pub fn encode_header(header: &Header, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&header.id.to_be_bytes());
    buf.extend_from_slice(&header.flags.to_be_bytes());
    buf.extend_from_slice(&header.question_count.to_be_bytes());
    buf.extend_from_slice(&header.answer_count.to_be_bytes());
    buf.extend_from_slice(&header.authority_count.to_be_bytes());
    buf.extend_from_slice(&header.additional_count.to_be_bytes());
}

pub fn encode_question(question: &Question, buf: &mut Vec<u8>) -> Result<(), WireError> {
    encode_name(&question.name, buf)?;
    buf.extend_from_slice(&question.qtype.code().to_be_bytes());
    buf.extend_from_slice(&question.qclass.code().to_be_bytes());
    Ok(())
}
