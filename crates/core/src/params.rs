//! KSHAKE320 Algorithm Parameters
//!
//! Sponge sizes are in bytes. Every parameter set shares the same
//! 1600-bit Keccak-f state and differs only in rate, output length and
//! domain-separation suffix.

use crate::error::Error;

/// Keccak-f permutation width in bits
pub const KECCAK_F_WIDTH: usize = 1600;

/// Permutation state size in bytes
pub const STATE_SIZE: usize = KECCAK_F_WIDTH / 8;

/// Number of 64-bit lanes in the state (5 x 5)
pub const LANES: usize = 25;

/// Rounds of Keccak-f[1600]
pub const ROUNDS: usize = 24;

/// Suffix for SHA3 fixed-output hashes (`01` + first pad bit)
pub const SHA3_SUFFIX: u8 = 0x06;

/// Suffix for SHAKE extendable-output functions (`1111` + first pad bit)
pub const SHAKE_SUFFIX: u8 = 0x1F;

/// Plain Keccak padding, no domain separation
pub const KECCAK_SUFFIX: u8 = 0x01;

/// KSHAKE320 digest size (320 bits)
pub const DIGEST_SIZE: usize = 40;

/// SHAKE320 rate (960 bits)
pub const SHAKE320_RATE: usize = 120;

/// Number of rate blocks in the proof-of-work scratchpad
pub const POW_MUL: usize = 546;

/// Scratchpad size in bytes, always a multiple of the SHAKE320 rate
pub const SCRATCHPAD_SIZE: usize = SHAKE320_RATE * POW_MUL;

/// Bytes of a serialized header covered by the proof-of-work hash
pub const POW_HEADER_SIZE: usize = 120;

/// Upper bound for one-shot XOF output (1 Mbit)
pub const MAX_XOF_OUTPUT: usize = 128 * 1024;

/// Algorithm version
pub const VERSION: u8 = 2;

/// A named sponge configuration
///
/// `rate + capacity` always equals [`STATE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    name: &'static str,
    rate: usize,
    output_len: usize,
    suffix: u8,
}

impl HashParams {
    /// Build a custom parameter set.
    pub fn new(rate: usize, capacity: usize, output_len: usize, suffix: u8) -> Result<Self, Error> {
        if rate == 0 || rate >= STATE_SIZE || rate + capacity != STATE_SIZE || suffix == 0 {
            return Err(Error::InvalidParams { rate, capacity });
        }
        Ok(Self {
            name: "custom",
            rate,
            output_len,
            suffix,
        })
    }

    const fn named(name: &'static str, capacity: usize, output_len: usize, suffix: u8) -> Self {
        Self {
            name,
            rate: STATE_SIZE - capacity,
            output_len,
            suffix,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Bytes absorbed or squeezed per permutation call
    pub const fn rate(&self) -> usize {
        self.rate
    }

    pub const fn capacity(&self) -> usize {
        STATE_SIZE - self.rate
    }

    /// Default digest length in bytes
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    pub const fn suffix(&self) -> u8 {
        self.suffix
    }
}

pub const SHA3_224: HashParams = HashParams::named("SHA3-224", 56, 28, SHA3_SUFFIX);
pub const SHA3_256: HashParams = HashParams::named("SHA3-256", 64, 32, SHA3_SUFFIX);
pub const SHA3_384: HashParams = HashParams::named("SHA3-384", 96, 48, SHA3_SUFFIX);
pub const SHA3_512: HashParams = HashParams::named("SHA3-512", 128, 64, SHA3_SUFFIX);
pub const SHA3_320: HashParams = HashParams::named("SHA3-320", 80, 40, SHA3_SUFFIX);
pub const SHAKE128: HashParams = HashParams::named("SHAKE128", 32, 32, SHAKE_SUFFIX);
pub const SHAKE256: HashParams = HashParams::named("SHAKE256", 64, 64, SHAKE_SUFFIX);
pub const SHAKE320: HashParams = HashParams::named("SHAKE320", 80, DIGEST_SIZE, SHAKE_SUFFIX);
pub const SHAKE160: HashParams = HashParams::named("SHAKE160", 40, 20, SHAKE_SUFFIX);
pub const SHAKE80: HashParams = HashParams::named("SHAKE80", 20, 10, SHAKE_SUFFIX);

/// Keccak[r=1152, c=448], used by the PRNG
pub const KECCAK_RND_224: HashParams = HashParams::named("Keccak-RND224", 56, 28, KECCAK_SUFFIX);

/// Every built-in parameter set
pub const CATALOGUE: [HashParams; 11] = [
    SHA3_224,
    SHA3_256,
    SHA3_384,
    SHA3_512,
    SHA3_320,
    SHAKE128,
    SHAKE256,
    SHAKE320,
    SHAKE160,
    SHAKE80,
    KECCAK_RND_224,
];
