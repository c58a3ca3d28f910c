//! KSHAKE320 proof-of-work hash
//!
//! A header is hashed in two SHAKE320 passes:
//!
//! ```text
//! scratchpad = SHAKE320(header, 546 * 120 bytes)
//! digest     = SHAKE320(scratchpad, 40 bytes)
//! ```
//!
//! Version 2 headers feed the scratchpad's rate blocks to the second pass
//! in reverse block order. Only the first [`POW_HEADER_SIZE`] bytes of a
//! header take part in the hash.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::instance::digest_into;
use crate::params::*;
use crate::sponge::Sponge;

/// Scratchpad ordering for the second pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowVersion {
    /// Blocks in squeeze order
    V1,
    /// Blocks in reverse squeeze order
    V2,
}

impl PowVersion {
    /// Select the variant from a header's leading little-endian `i32`.
    ///
    /// Missing bytes of a short header read as zero.
    pub fn from_header(header: &[u8]) -> Self {
        let mut word = [0u8; 4];
        let n = header.len().min(4);
        word[..n].copy_from_slice(&header[..n]);

        if i32::from_le_bytes(word) <= 1 {
            PowVersion::V1
        } else {
            PowVersion::V2
        }
    }
}

/// Reusable KSHAKE320 hasher
///
/// Keeps the 64 KB scratchpad allocated across calls. The V1 path never
/// touches it: scratchpad blocks are streamed from the first sponge into
/// the second as they are squeezed.
pub struct PowHasher {
    scratchpad: Vec<u8>,
}

impl PowHasher {
    pub fn new() -> Self {
        Self {
            scratchpad: vec![0u8; SCRATCHPAD_SIZE],
        }
    }

    /// Hash a serialized header, choosing the variant from its version.
    pub fn hash(&mut self, header: &[u8]) -> [u8; DIGEST_SIZE] {
        let window = &header[..header.len().min(POW_HEADER_SIZE)];
        self.hash_with(window, PowVersion::from_header(window))
    }

    /// Hash an arbitrary buffer with an explicit variant.
    pub fn hash_with(&mut self, input: &[u8], version: PowVersion) -> [u8; DIGEST_SIZE] {
        match version {
            PowVersion::V1 => krypto_hash(input),
            PowVersion::V2 => self.hash_reversed(input),
        }
    }

    fn hash_reversed(&mut self, input: &[u8]) -> [u8; DIGEST_SIZE] {
        digest_into(SHAKE320, input, &mut self.scratchpad);

        let mut second = Sponge::for_params(&SHAKE320);
        for block in self.scratchpad.chunks_exact(SHAKE320_RATE).rev() {
            second.absorb_raw(block);
        }
        finish_shake320(second)
    }
}

impl Default for PowHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// KSHAKE320 proof-of-work hash of a serialized header
///
/// Total over every input length, including the empty header. Both passes
/// drive the sponge directly instead of going through [`HashInstance`],
/// whose checked phase transitions cannot fail here.
///
/// [`HashInstance`]: crate::HashInstance
pub fn pow_hash(header: &[u8]) -> [u8; DIGEST_SIZE] {
    let window = &header[..header.len().min(POW_HEADER_SIZE)];
    match PowVersion::from_header(window) {
        PowVersion::V1 => krypto_hash(window),
        PowVersion::V2 => PowHasher::new().hash_with(window, PowVersion::V2),
    }
}

/// First-generation two-pass hash over the whole of `input`
pub fn krypto_hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut first = Sponge::for_params(&SHAKE320);
    first.absorb_raw(input);
    first.pad_raw(SHAKE320.suffix());

    let mut second = Sponge::for_params(&SHAKE320);
    let mut block = [0u8; SHAKE320_RATE];
    for _ in 0..POW_MUL {
        first.squeeze_raw(&mut block);
        second.absorb_raw(&block);
    }
    finish_shake320(second)
}

/// Second-generation two-pass hash over the whole of `input`
pub fn krypto_hash_v2(input: &[u8]) -> [u8; DIGEST_SIZE] {
    PowHasher::new().hash_with(input, PowVersion::V2)
}

/// Single-pass SHAKE320 with a 40-byte output
pub fn hash320(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    digest_into(SHAKE320, data, &mut out);
    out
}

/// Double SHA3-256
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let mut inner = [0u8; 32];
    digest_into(SHA3_256, data, &mut inner);
    let mut outer = [0u8; 32];
    digest_into(SHA3_256, &inner, &mut outer);
    outer
}

/// Hash many headers, preserving input order
#[cfg(feature = "parallel")]
pub fn pow_hash_batch(headers: &[&[u8]]) -> Vec<[u8; DIGEST_SIZE]> {
    headers
        .par_iter()
        .map_init(PowHasher::new, |hasher, header| hasher.hash(header))
        .collect()
}

/// Hash many headers, preserving input order (sequential fallback)
#[cfg(not(feature = "parallel"))]
pub fn pow_hash_batch(headers: &[&[u8]]) -> Vec<[u8; DIGEST_SIZE]> {
    let mut hasher = PowHasher::new();
    headers.iter().map(|header| hasher.hash(header)).collect()
}

#[inline(always)]
fn finish_shake320(mut sponge: Sponge) -> [u8; DIGEST_SIZE] {
    sponge.pad_raw(SHAKE320.suffix());
    let mut digest = [0u8; DIGEST_SIZE];
    sponge.squeeze_raw(&mut digest);
    digest
}
