//! Byte-level access to the permutation state

use crate::error::Error;
use crate::keccak;
use crate::params::STATE_SIZE;

/// The 200-byte Keccak state
///
/// Never resized; mutated only by [`KeccakState::xor_in`] and
/// [`KeccakState::permute`].
#[derive(Clone, PartialEq, Eq)]
pub struct KeccakState {
    bytes: [u8; STATE_SIZE],
}

impl KeccakState {
    /// A zeroed state
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; STATE_SIZE],
        }
    }

    /// XOR `data` into the state starting at byte `offset`.
    pub fn xor_in(&mut self, data: &[u8], offset: usize) -> Result<(), Error> {
        check_range(offset, data.len())?;
        self.xor_at(data, offset);
        Ok(())
    }

    /// Copy `dest.len()` bytes out of the state starting at `offset`.
    pub fn extract(&self, dest: &mut [u8], offset: usize) -> Result<(), Error> {
        check_range(offset, dest.len())?;
        self.copy_at(dest, offset);
        Ok(())
    }

    /// Run Keccak-f[1600] over the state.
    #[inline]
    pub fn permute(&mut self) {
        keccak::permute(&mut self.bytes);
    }

    /// Zero the state.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.bytes
    }

    /// Unchecked [`KeccakState::xor_in`]; panics past the end of the state.
    #[inline(always)]
    pub(crate) fn xor_at(&mut self, data: &[u8], offset: usize) {
        for (dst, src) in self.bytes[offset..offset + data.len()].iter_mut().zip(data) {
            *dst ^= *src;
        }
    }

    /// Unchecked [`KeccakState::extract`]; panics past the end of the state.
    #[inline(always)]
    pub(crate) fn copy_at(&self, dest: &mut [u8], offset: usize) {
        dest.copy_from_slice(&self.bytes[offset..offset + dest.len()]);
    }
}

#[inline(always)]
fn check_range(offset: usize, len: usize) -> Result<(), Error> {
    match offset.checked_add(len) {
        Some(end) if end <= STATE_SIZE => Ok(()),
        _ => Err(Error::OutOfRange { offset, len }),
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hides the state contents
impl core::fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("KeccakState").field(&"<redacted>").finish()
    }
}
