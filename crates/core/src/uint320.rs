//! Numeric and display views of a 40-byte digest
//!
//! The digest itself is opaque; consumers read it either as a 320-bit
//! little-endian integer or as a byte-reversed hex "block hash".

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt::{self, Write};

use crate::params::DIGEST_SIZE;

/// Number of 32-bit words in a 320-bit integer
pub const WORDS: usize = DIGEST_SIZE / 4;

/// 320-bit unsigned integer as ten little-endian 32-bit words
///
/// `value = sum(words[i] * 2^(32 * i))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uint320 {
    words: [u32; WORDS],
}

impl Uint320 {
    pub const ZERO: Self = Self { words: [0; WORDS] };

    pub fn from_le_bytes(bytes: &[u8; DIGEST_SIZE]) -> Self {
        let mut words = [0u32; WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    pub fn to_le_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    pub fn words(&self) -> &[u32; WORDS] {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Divide in place by a small divisor and return the remainder.
    fn div_rem_small(&mut self, divisor: u32) -> u32 {
        let mut rem = 0u64;
        for word in self.words.iter_mut().rev() {
            let cur = (rem << 32) | u64::from(*word);
            *word = (cur / u64::from(divisor)) as u32;
            rem = cur % u64::from(divisor);
        }
        rem as u32
    }
}

impl From<[u8; DIGEST_SIZE]> for Uint320 {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_le_bytes(&bytes)
    }
}

/// Decimal rendering
impl fmt::Display for Uint320 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CHUNK: u32 = 1_000_000_000;
        // 2^320 < 10^97, so eleven base-1e9 chunks suffice
        let mut chunks = [0u32; 11];
        let mut n = 0;
        let mut value = *self;
        loop {
            chunks[n] = value.div_rem_small(CHUNK);
            n += 1;
            if value.is_zero() {
                break;
            }
        }

        let mut out = String::with_capacity(n * 9);
        write!(out, "{}", chunks[n - 1])?;
        for chunk in chunks[..n - 1].iter().rev() {
            write!(out, "{:09}", chunk)?;
        }
        f.pad_integral(true, "", &out)
    }
}

/// Big-endian hex without leading zeros
impl fmt::LowerHex for Uint320 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.words.iter().rposition(|w| *w != 0).unwrap_or(0);
        let mut out = String::with_capacity((top + 1) * 8);
        write!(out, "{:x}", self.words[top])?;
        for word in self.words[..top].iter().rev() {
            write!(out, "{:08x}", word)?;
        }
        f.pad_integral(true, "0x", &out)
    }
}

/// Byte-reversed lowercase hex of a digest (80 characters)
pub fn display_hex(digest: &[u8; DIGEST_SIZE]) -> String {
    let mut reversed = *digest;
    reversed.reverse();
    hex::encode(reversed)
}
