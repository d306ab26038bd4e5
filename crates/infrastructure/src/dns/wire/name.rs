//! Domain name wire form (RFC 1035 §3.1, §4.1.4).
//!
//! Decoding follows compression pointers as plain cursor jumps inside the
//! message buffer, bounded by a hop counter, so adversarial input can never
//! recurse or loop forever.

use stubdns_domain::WireError;

/// Maximum wire length of a name, length octets and root label included.
pub const MAX_NAME_LEN: usize = 255;

pub const MAX_LABEL_LEN: usize = 63;

/// Maximum compression pointers followed while decoding a single name.
pub const MAX_POINTER_HOPS: usize = 16;

const POINTER_MASK: u8 = 0xC0;

/// Outcome of decoding one name at a given offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    /// Dot-separated name without trailing dot. The root name is `""`.
    pub name: String,
    /// Bytes consumed at the starting offset. A pointer counts as exactly 2
    /// bytes no matter how much is read after following it.
    pub consumed: usize,
    pub pointer_hops: usize,
}

/// Appends the uncompressed wire form of `domain` to `out`.
///
/// `domain` must be labels of printable ASCII (no `\`) separated by single
/// dots, each 1-63 bytes, with no leading or trailing dot. Anything else would
/// come back escaped from [`decode_name`]. On error `out` is left unchanged.
pub fn encode_name(domain: &str, out: &mut Vec<u8>) -> Result<(), WireError> {
    if !domain.is_ascii() {
        return Err(WireError::Encoding(format!(
            "domain '{}' contains non-ASCII characters",
            domain
        )));
    }

    let start = out.len();
    for label in domain.split('.') {
        if label.is_empty() {
            out.truncate(start);
            return Err(WireError::Encoding(format!(
                "domain '{}' contains an empty label",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            out.truncate(start);
            return Err(WireError::Encoding(format!(
                "label '{}' is {} bytes, maximum is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        if let Some(b) = label.bytes().find(|&b| !is_hostname_byte(b)) {
            out.truncate(start);
            return Err(WireError::Encoding(format!(
                "label '{}' contains disallowed byte {:#04x}",
                label.escape_default(),
                b
            )));
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    let encoded_len = out.len() - start;
    if encoded_len > MAX_NAME_LEN {
        out.truncate(start);
        return Err(WireError::Encoding(format!(
            "domain encodes to {} bytes, maximum is {}",
            encoded_len, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Decodes the name starting at `offset` within the full message `msg`.
pub fn decode_name(msg: &[u8], offset: usize) -> Result<DecodedName, WireError> {
    let mut pos = offset;
    let mut consumed: Option<usize> = None;
    let mut hops = 0usize;
    let mut wire_len = 0usize;
    let mut name = String::new();

    loop {
        let len_byte = *msg
            .get(pos)
            .ok_or_else(|| WireError::truncated(pos, 1, msg.len()))?;

        if len_byte == 0 {
            if consumed.is_none() {
                consumed = Some(pos + 1 - offset);
            }
            break;
        }

        if len_byte & POINTER_MASK == POINTER_MASK {
            let low = *msg
                .get(pos + 1)
                .ok_or_else(|| WireError::truncated(pos, 2, msg.len()))?;
            if consumed.is_none() {
                consumed = Some(pos + 2 - offset);
            }

            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(WireError::CompressionLoop {
                    offset,
                    hops: MAX_POINTER_HOPS,
                });
            }

            let target = (((len_byte & !POINTER_MASK) as usize) << 8) | low as usize;
            if target >= msg.len() {
                return Err(WireError::truncated(target, 1, msg.len()));
            }
            pos = target;
            continue;
        }

        if len_byte & POINTER_MASK != 0 {
            return Err(WireError::MalformedName(format!(
                "unsupported label type {:#04x} at offset {}",
                len_byte, pos
            )));
        }

        let len = len_byte as usize;
        let label = msg
            .get(pos + 1..pos + 1 + len)
            .ok_or_else(|| WireError::truncated(pos + 1, len, msg.len()))?;

        // +1 for the root label that must still follow
        wire_len += 1 + len;
        if wire_len + 1 > MAX_NAME_LEN {
            return Err(WireError::MalformedName(format!(
                "name at offset {} exceeds {} bytes",
                offset, MAX_NAME_LEN
            )));
        }

        if !name.is_empty() {
            name.push('.');
        }
        push_label(&mut name, label);
        if name.len() > MAX_NAME_LEN {
            return Err(WireError::MalformedName(format!(
                "decoded name at offset {} exceeds {} bytes",
                offset, MAX_NAME_LEN
            )));
        }
        pos += 1 + len;
    }

    Ok(DecodedName {
        name,
        consumed: consumed.unwrap_or(1),
        pointer_hops: hops,
    })
}

/// Bytes a label may carry unescaped, `\` excluded.
fn is_hostname_byte(b: u8) -> bool {
    (0x21..=0x7E).contains(&b) && b != b'\\'
}

fn push_label(name: &mut String, label: &[u8]) {
    for &b in label {
        match b {
            b'.' | b'\\' => {
                name.push('\\');
                name.push(b as char);
            }
            0x21..=0x7E => name.push(b as char),
            _ => name.push_str(&format!("\\{:03}", b)),
        }
    }
}
