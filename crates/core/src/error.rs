//! Error type shared by the sponge layers
//!
//! None of these are reachable through [`crate::pow_hash`]; they signal
//! misuse of the lower-level state, sponge and instance APIs.

use thiserror::Error;

use crate::sponge::Phase;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("state access out of range: offset {offset} + len {len} exceeds 200 bytes")]
    OutOfRange { offset: usize, len: usize },

    #[error("operation not valid while sponge is {phase:?}")]
    InvalidState { phase: Phase },

    #[error("hash instance already finalized")]
    AlreadyFinalized,

    #[error("invalid sponge parameters: rate {rate}, capacity {capacity}")]
    InvalidParams { rate: usize, capacity: usize },

    #[error("PRNG must be seeded before producing output")]
    SeedRequired,

    #[error("PRNG seed must not be empty")]
    EmptySeed,
}
