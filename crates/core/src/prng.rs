//! Keccak-based pseudo-random byte generator
//!
//! Not a CSPRNG. The generator keeps a 224-bit big-endian counter. Seeding
//! adds `Keccak[c=448](seed)` to the counter; each refill outputs
//! `Keccak[c=448](counter)` and then steps the counter with
//! [`step_counter`].

use crate::error::Error;
use crate::instance::digest_into;
use crate::params::KECCAK_RND_224;

/// Counter and output block size in bytes
pub const PRNG_STATE_SIZE: usize = 28;

/// Seed bytes required before output is available
pub const PRNG_SEED_THRESHOLD: usize = 40;

#[derive(Clone)]
pub struct KeccakPrng {
    counter: [u8; PRNG_STATE_SIZE],
    output: [u8; PRNG_STATE_SIZE],
    /// Unread bytes at the tail of `output`
    available: usize,
    /// Remaining seed bytes before output is allowed
    seed_needed: usize,
}

impl KeccakPrng {
    pub fn new() -> Self {
        Self {
            counter: [0u8; PRNG_STATE_SIZE],
            output: [0u8; PRNG_STATE_SIZE],
            available: 0,
            seed_needed: PRNG_SEED_THRESHOLD,
        }
    }

    /// Mix `data` into the counter.
    ///
    /// Returns how many more seed bytes are needed before output.
    pub fn seed(&mut self, data: &[u8]) -> Result<usize, Error> {
        if data.is_empty() {
            return Err(Error::EmptySeed);
        }

        let mut squeezed = [0u8; PRNG_STATE_SIZE];
        digest_into(KECCAK_RND_224, data, &mut squeezed);

        let mut carry = 0u16;
        for (c, s) in self.counter.iter_mut().zip(squeezed.iter()).rev() {
            carry += u16::from(*c) + u16::from(*s);
            *c = carry as u8;
            carry >>= 8;
        }

        self.seed_needed = self.seed_needed.saturating_sub(data.len());
        Ok(self.seed_needed)
    }

    /// Seed bytes still required
    pub fn seed_needed(&self) -> usize {
        self.seed_needed
    }

    /// Fill `out` with pseudo-random bytes.
    pub fn fill(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if self.seed_needed > 0 {
            return Err(Error::SeedRequired);
        }

        let mut out = out;
        while out.len() > self.available {
            let (head, tail) = out.split_at_mut(self.available);
            head.copy_from_slice(&self.output[PRNG_STATE_SIZE - self.available..]);
            out = tail;
            self.refill();
        }

        let start = PRNG_STATE_SIZE - self.available;
        out.copy_from_slice(&self.output[start..start + out.len()]);
        self.available -= out.len();
        Ok(())
    }

    fn refill(&mut self) {
        digest_into(KECCAK_RND_224, &self.counter, &mut self.output);

        step_counter(&mut self.counter);
        self.available = PRNG_STATE_SIZE;
    }
}

/// Increment the counter from its last byte.
///
/// The carry moves to the next byte when the old byte was `0x00` and stops
/// otherwise, so a byte wrapping from `0xFF` to `0x00` does not carry.
pub(crate) fn step_counter(counter: &mut [u8; PRNG_STATE_SIZE]) {
    for byte in counter.iter_mut().rev() {
        let old = *byte;
        *byte = old.wrapping_add(1);
        if old != 0 {
            break;
        }
    }
}

impl Default for KeccakPrng {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KeccakPrng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakPrng")
            .field("available", &self.available)
            .field("seed_needed", &self.seed_needed)
            .finish_non_exhaustive()
    }
}
