use super::name::decode_name;
use super::observer::{DecodeObserver, NoopObserver, RecordDisposition, Section};
use super::reader::WireReader;
use stubdns_domain::{
    Header, ParsedMessage, Question, RecordClass, RecordType, ResourceRecord, WireError,
    HEADER_LEN,
};

/// Smallest possible question: root name + QTYPE + QCLASS.
const MIN_QUESTION_LEN: usize = 5;

/// Smallest possible resource record: root name + TYPE, CLASS, TTL, RDLENGTH.
const MIN_RECORD_LEN: usize = 11;

/// Decodes an untrusted response buffer.
///
/// The transaction id is not checked here: a mismatch still yields a fully
/// parsed message and it is up to the caller to discard it.
pub fn decode_response(
    buf: &[u8],
    expected_transaction_id: u16,
) -> Result<ParsedMessage, WireError> {
    decode_response_with(buf, expected_transaction_id, &mut NoopObserver)
}

/// Like [`decode_response`], reporting each checkpoint to `observer`.
pub fn decode_response_with<O>(
    buf: &[u8],
    expected_transaction_id: u16,
    observer: &mut O,
) -> Result<ParsedMessage, WireError>
where
    O: DecodeObserver + ?Sized,
{
    let mut reader = WireReader::new(buf);

    let header = read_header(&mut reader)?;
    observer.header_parsed(&header, expected_transaction_id);

    ensure_capacity(&reader, header.question_count, MIN_QUESTION_LEN)?;
    let mut questions = Vec::with_capacity(header.question_count as usize);
    for _ in 0..header.question_count {
        questions.push(read_question(&mut reader, observer)?);
    }

    let answers = read_section(&mut reader, header.answer_count, Section::Answer, observer)?;
    let authorities = read_section(
        &mut reader,
        header.authority_count,
        Section::Authority,
        observer,
    )?;
    let additionals = read_section(
        &mut reader,
        header.additional_count,
        Section::Additional,
        observer,
    )?;

    Ok(ParsedMessage {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// IPv4 addresses of the A/IN answers in dotted-decimal, answer order,
/// duplicates preserved.
pub fn extract_ipv4_addresses(message: &ParsedMessage) -> Vec<String> {
    message
        .ipv4_answers()
        .iter()
        .map(|addr| addr.to_string())
        .collect()
}

fn read_header(reader: &mut WireReader<'_>) -> Result<Header, WireError> {
    if reader.remaining() < HEADER_LEN {
        return Err(WireError::truncated(0, HEADER_LEN, reader.remaining()));
    }
    Ok(Header {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        question_count: reader.read_u16()?,
        answer_count: reader.read_u16()?,
        authority_count: reader.read_u16()?,
        additional_count: reader.read_u16()?,
    })
}

/// Rejects counts that the rest of the buffer cannot possibly hold.
fn ensure_capacity(reader: &WireReader<'_>, count: u16, min_len: usize) -> Result<(), WireError> {
    let needed = count as usize * min_len;
    if needed > reader.remaining() {
        return Err(WireError::truncated(
            reader.position(),
            needed,
            reader.buffer().len(),
        ));
    }
    Ok(())
}

fn read_name<O>(
    reader: &mut WireReader<'_>,
    section: Section,
    observer: &mut O,
) -> Result<String, WireError>
where
    O: DecodeObserver + ?Sized,
{
    let offset = reader.position();
    let decoded = decode_name(reader.buffer(), offset)?;
    reader.skip(decoded.consumed)?;
    observer.name_resolved(section, offset, &decoded.name, decoded.pointer_hops);
    Ok(decoded.name)
}

fn read_question<O>(reader: &mut WireReader<'_>, observer: &mut O) -> Result<Question, WireError>
where
    O: DecodeObserver + ?Sized,
{
    let name = read_name(reader, Section::Question, observer)?;
    let qtype = RecordType::from_code(reader.read_u16()?);
    let qclass = RecordClass::from_code(reader.read_u16()?);
    Ok(Question {
        name,
        qtype,
        qclass,
    })
}

fn read_section<O>(
    reader: &mut WireReader<'_>,
    count: u16,
    section: Section,
    observer: &mut O,
) -> Result<Vec<ResourceRecord>, WireError>
where
    O: DecodeObserver + ?Sized,
{
    ensure_capacity(reader, count, MIN_RECORD_LEN)?;
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let record = read_record(reader, section, observer)?;
        let disposition = match record.ipv4() {
            Some(_) => RecordDisposition::Ipv4Address,
            None => RecordDisposition::Retained,
        };
        observer.record_classified(section, &record, disposition);
        records.push(record);
    }
    Ok(records)
}

fn read_record<O>(
    reader: &mut WireReader<'_>,
    section: Section,
    observer: &mut O,
) -> Result<ResourceRecord, WireError>
where
    O: DecodeObserver + ?Sized,
{
    let name = read_name(reader, section, observer)?;
    let record_type = RecordType::from_code(reader.read_u16()?);
    let class = RecordClass::from_code(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()? as usize;
    let rdata = reader.read_bytes(rdlength)?.to_vec();

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        rdata,
    })
}
