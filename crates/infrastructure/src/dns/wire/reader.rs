use stubdns_domain::WireError;

/// Bounds-checked big-endian cursor over an immutable message buffer.
///
/// Every read that would run past the end fails with
/// [`WireError::TruncatedMessage`] and leaves the position untouched.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| WireError::truncated(self.pos, n, self.buf.len()))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.read_bytes(n).map(|_| ())
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, WireError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, WireError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian() {
        let data = [0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF];
        let mut reader = WireReader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xDEADBEEF);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_short_read_keeps_position() {
        let data = [0x00, 0x01, 0x02];
        let mut reader = WireReader::new(&data);
        reader.skip(2).unwrap();

        let err = reader.read_u16().unwrap_err();
        assert_eq!(err, WireError::truncated(2, 2, 3));
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_huge_skip_does_not_overflow() {
        let data = [0u8; 4];
        let mut reader = WireReader::new(&data);
        reader.skip(1).unwrap();
        assert!(reader.skip(usize::MAX).unwrap_err().is_truncated());
    }
}
