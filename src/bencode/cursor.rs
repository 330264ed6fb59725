use super::error::DecodeError;

/// Position-tracking view over an immutable byte buffer.
///
/// The decoder threads a single cursor through its recursive calls; the
/// position only ever moves forward, and only through the methods below.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// True once every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns the next unconsumed byte without advancing.
    pub fn peek(&self) -> Result<u8, DecodeError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::BufferExhausted(1))
    }

    /// Returns and consumes exactly `n` bytes.
    ///
    /// Fails without advancing when fewer than `n` bytes remain; the error
    /// carries the shortfall.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.buf.len() - self.pos;
        if n > remaining {
            return Err(DecodeError::BufferExhausted(n - remaining));
        }
        let segment = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(segment)
    }

    /// Consumes and returns everything up to the first `delimiter`,
    /// exclusive. The delimiter itself is consumed but not returned.
    pub fn take_until(&mut self, delimiter: u8) -> Result<&'a [u8], DecodeError> {
        match self.buf[self.pos..].iter().position(|&b| b == delimiter) {
            Some(offset) => {
                let segment = &self.buf[self.pos..self.pos + offset];
                self.pos += offset + 1;
                Ok(segment)
            }
            None => Err(DecodeError::DelimiterNotFound(delimiter as char)),
        }
    }
}
