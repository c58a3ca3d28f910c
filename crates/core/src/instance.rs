//! Hash instances bound to a named parameter set

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Error;
use crate::params::{HashParams, MAX_XOF_OUTPUT};
use crate::sponge::{Phase, Sponge};

/// One digest computation: `new -> update* -> finalize`
///
/// Each instance owns its own state, so instances can be driven from
/// different threads without coordination. Call [`HashInstance::reset`]
/// before hashing an unrelated input.
#[derive(Debug, Clone)]
pub struct HashInstance {
    params: HashParams,
    sponge: Sponge,
}

impl HashInstance {
    pub fn new(params: HashParams) -> Self {
        Self {
            params,
            sponge: Sponge::for_params(&params),
        }
    }

    pub fn params(&self) -> &HashParams {
        &self.params
    }

    /// Absorb more input. Can be called any number of times before finalizing.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        match self.sponge.phase() {
            Phase::Absorbing => self.sponge.absorb(data),
            _ => Err(Error::AlreadyFinalized),
        }
    }

    /// Pad, then squeeze exactly `digest.len()` bytes.
    ///
    /// A second call fails with [`Error::AlreadyFinalized`].
    pub fn finalize_into(&mut self, digest: &mut [u8]) -> Result<(), Error> {
        self.pad()?;
        self.sponge.squeeze(digest)?;
        self.sponge.finish()
    }

    /// Consume the instance and return a digest of the default length.
    pub fn finalize(mut self) -> Result<Vec<u8>, Error> {
        let mut digest = vec![0u8; self.params.output_len()];
        self.finalize_into(&mut digest)?;
        Ok(digest)
    }

    /// Consume the instance and return a reader over the unbounded output.
    pub fn finalize_xof(mut self) -> Result<XofReader, Error> {
        self.pad()?;
        Ok(XofReader {
            sponge: self.sponge,
        })
    }

    /// Discard absorbed input and go back to a fresh state.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    fn pad(&mut self) -> Result<(), Error> {
        if self.sponge.phase() != Phase::Absorbing {
            return Err(Error::AlreadyFinalized);
        }
        self.sponge.pad(self.params.suffix())
    }
}

/// Squeezing half of an extendable-output function
#[derive(Debug, Clone)]
pub struct XofReader {
    sponge: Sponge,
}

impl XofReader {
    /// Read the next `out.len()` output bytes.
    pub fn read(&mut self, out: &mut [u8]) {
        self.sponge.squeeze_raw(out);
    }
}

/// One-shot hash with the default output length.
pub fn digest(params: HashParams, data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; params.output_len()];
    digest_into(params, data, &mut out);
    out
}

/// One-shot hash filling `out`.
pub fn digest_into(params: HashParams, data: &[u8], out: &mut [u8]) {
    let mut sponge = Sponge::for_params(&params);
    sponge.absorb_raw(data);
    sponge.pad_raw(params.suffix());
    sponge.squeeze_raw(out);
}

/// One-shot XOF output, clamped to [`MAX_XOF_OUTPUT`] bytes.
///
/// Returns the number of bytes written.
pub fn shake(params: HashParams, data: &[u8], out: &mut [u8]) -> usize {
    let len = out.len().min(MAX_XOF_OUTPUT);
    digest_into(params, data, &mut out[..len]);
    len
}
