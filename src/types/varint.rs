//! Variable-length integers as used by the vote sign-bytes encoding.
//!
//! The "signed" flavour doubles the value before encoding instead of
//! zigzag-mapping it, so negative inputs have no representation and are
//! rejected. Decoding is deliberately not provided: this crate only ever
//! produces varints to rebuild the bytes validators signed.

use crate::types::safe_int::MAX_SAFE_INTEGER;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VarintError {
    #[error("varint value {value} is out of bounds")]
    OutOfBounds { value: i64 },
    #[error("varint decoding is not supported")]
    DecodeUnsupported,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarInt {
    signed: bool,
}

impl VarInt {
    pub const SIGNED: VarInt = VarInt { signed: true };
    pub const UNSIGNED: VarInt = VarInt { signed: false };

    pub const fn new(signed: bool) -> Self {
        Self { signed }
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// The value actually written: `n`, or `2n` in signed mode.
    fn magnitude(&self, n: i64) -> Result<u64, VarintError> {
        let out_of_bounds = VarintError::OutOfBounds { value: n };
        if n < 0 {
            return Err(out_of_bounds);
        }
        let m = if self.signed {
            (n as u64).checked_mul(2).ok_or(out_of_bounds.clone())?
        } else {
            n as u64
        };
        if m > MAX_SAFE_INTEGER {
            return Err(out_of_bounds);
        }
        Ok(m)
    }

    /// Number of bytes [`Self::encode`] produces for `n`:
    /// `max(1, ceil(log2(m + 1) / 7))`, computed on the bit length so it
    /// stays exact near powers of two.
    pub fn encoding_length(&self, n: i64) -> Result<usize, VarintError> {
        let m = self.magnitude(n)?;
        let bits = (u64::BITS - m.leading_zeros()) as usize;
        Ok(bits.div_ceil(7).max(1))
    }

    pub fn encode(&self, n: i64) -> Result<Vec<u8>, VarintError> {
        let mut buf = Vec::with_capacity(self.encoding_length(n)?);
        self.encode_into(n, &mut buf)?;
        Ok(buf)
    }

    /// Appends the encoding of `n` to `buf`, returning the bytes written.
    pub fn encode_into(&self, n: i64, buf: &mut Vec<u8>) -> Result<usize, VarintError> {
        let mut m = self.magnitude(n)?;
        let start = buf.len();
        while m >= 0x80 {
            buf.push((m & 0x7f) as u8 | 0x80);
            m >>= 7;
        }
        buf.push(m as u8);
        Ok(buf.len() - start)
    }

    pub fn decode(&self, _bytes: &[u8]) -> Result<(i64, usize), VarintError> {
        Err(VarintError::DecodeUnsupported)
    }
}

/// Length-prefixed byte string: an unsigned varint length, then the bytes.
pub struct VarBuffer;

impl VarBuffer {
    pub fn encode(bytes: &[u8]) -> Result<Vec<u8>, VarintError> {
        let mut buf = Vec::with_capacity(Self::encoding_length(bytes)?);
        Self::encode_into(bytes, &mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(bytes: &[u8], buf: &mut Vec<u8>) -> Result<usize, VarintError> {
        let prefix = VarInt::UNSIGNED.encode_into(len_as_i64(bytes)?, buf)?;
        buf.extend_from_slice(bytes);
        Ok(prefix + bytes.len())
    }

    pub fn encoding_length(bytes: &[u8]) -> Result<usize, VarintError> {
        Ok(VarInt::UNSIGNED.encoding_length(len_as_i64(bytes)?)? + bytes.len())
    }

    pub fn decode(_bytes: &[u8]) -> Result<(Vec<u8>, usize), VarintError> {
        Err(VarintError::DecodeUnsupported)
    }
}

fn len_as_i64(bytes: &[u8]) -> Result<i64, VarintError> {
    i64::try_from(bytes.len()).map_err(|_| VarintError::OutOfBounds { value: i64::MAX })
}
