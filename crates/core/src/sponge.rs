//! Sponge engine over [`KeccakState`]
//!
//! The sponge is an explicit three-phase machine:
//!
//! ```text
//! Absorbing --pad--> Squeezing --finish--> Done
//! ```
//!
//! Input is XORed directly into the leading `rate` bytes of the state; a
//! partially filled block simply stays in the state until the next absorb
//! or the final pad.

use core::cmp::min;

use crate::error::Error;
use crate::params::{HashParams, STATE_SIZE};
use crate::state::KeccakState;

/// Lifecycle phase of a sponge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Absorbing,
    Squeezing,
    Done,
}

/// Keccak sponge with a configurable rate
///
/// Invariant: `0 < rate < 200` and `pos <= rate`, so every state access
/// stays inside the 200-byte state.
#[derive(Debug, Clone)]
pub struct Sponge {
    state: KeccakState,
    rate: usize,
    /// Absorb or squeeze position inside the current rate window
    pos: usize,
    phase: Phase,
}

impl Sponge {
    /// Fresh sponge in the absorbing phase. `capacity = 200 - rate`.
    pub fn new(rate: usize) -> Result<Self, Error> {
        if rate == 0 || rate >= STATE_SIZE {
            return Err(Error::InvalidParams {
                rate,
                capacity: STATE_SIZE.saturating_sub(rate),
            });
        }
        Ok(Self::with_rate(rate))
    }

    /// Sponge sized for `params`, whose rate is already validated.
    pub fn for_params(params: &HashParams) -> Self {
        Self::with_rate(params.rate())
    }

    const fn with_rate(rate: usize) -> Self {
        Self {
            state: KeccakState::new(),
            rate,
            pos: 0,
            phase: Phase::Absorbing,
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Absorb `data`, permuting each time a full rate block is filled.
    pub fn absorb(&mut self, data: &[u8]) -> Result<(), Error> {
        self.expect_phase(Phase::Absorbing)?;
        self.absorb_raw(data);
        Ok(())
    }

    /// Apply the padding rule and switch to squeezing.
    ///
    /// `suffix` carries the domain-separation bits followed by the first
    /// padding bit; the terminal padding bit is set at byte `rate - 1`.
    pub fn pad(&mut self, suffix: u8) -> Result<(), Error> {
        self.expect_phase(Phase::Absorbing)?;
        self.pad_raw(suffix);
        Ok(())
    }

    /// Fill `out` from the rate window, permuting between windows.
    ///
    /// Allowed after [`Sponge::finish`] as well; output continues where the
    /// previous squeeze stopped.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if self.phase == Phase::Absorbing {
            return Err(Error::InvalidState {
                phase: Phase::Absorbing,
            });
        }
        self.squeeze_raw(out);
        Ok(())
    }

    /// Stop producing output.
    pub fn finish(&mut self) -> Result<(), Error> {
        self.expect_phase(Phase::Squeezing)?;
        self.phase = Phase::Done;
        Ok(())
    }

    /// Return to a zeroed absorbing sponge with the same rate.
    pub fn reset(&mut self) {
        self.state.clear();
        self.pos = 0;
        self.phase = Phase::Absorbing;
    }

    pub(crate) fn absorb_raw(&mut self, data: &[u8]) {
        let mut data = data;
        while !data.is_empty() {
            let take = min(self.rate - self.pos, data.len());
            self.state.xor_at(&data[..take], self.pos);
            self.pos += take;
            data = &data[take..];

            if self.pos == self.rate {
                self.state.permute();
                self.pos = 0;
            }
        }
    }

    pub(crate) fn pad_raw(&mut self, suffix: u8) {
        self.state.xor_at(&[suffix], self.pos);
        // A suffix with its top bit set in the last rate byte leaves no room
        // for the terminal padding bit
        if suffix & 0x80 != 0 && self.pos == self.rate - 1 {
            self.state.permute();
        }
        self.state.xor_at(&[0x80], self.rate - 1);
        self.state.permute();

        self.pos = 0;
        self.phase = Phase::Squeezing;
    }

    pub(crate) fn squeeze_raw(&mut self, out: &mut [u8]) {
        let mut out = out;
        while !out.is_empty() {
            if self.pos == self.rate {
                self.state.permute();
                self.pos = 0;
            }
            let take = min(self.rate - self.pos, out.len());
            let (head, tail) = out.split_at_mut(take);
            self.state.copy_at(head, self.pos);
            self.pos += take;
            out = tail;
        }
    }

    #[inline(always)]
    fn expect_phase(&self, phase: Phase) -> Result<(), Error> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(Error::InvalidState { phase: self.phase })
        }
    }
}
