//! # KSHAKE320 Core Algorithm
//!
//! A Keccak-based 320-bit proof-of-work hash.
//!
//! The crate is layered leaf-first:
//!
//! - [`keccak`]: the Keccak-f[1600] permutation (24 rounds over 25 lanes)
//! - [`KeccakState`]: the 200-byte state with bounds-checked byte access
//! - [`Sponge`]: absorb / pad / squeeze with an explicit phase
//! - [`HashInstance`]: a sponge bound to a named [`HashParams`] set
//! - [`pow_hash`]: the KSHAKE320 proof-of-work hash of a block header
//!
//! ## Algorithm Parameters
//!
//! - SHAKE320: rate 120 bytes, capacity 80 bytes, suffix `0x1F`
//! - 546-block (65,520 byte) scratchpad between the two passes
//! - 40-byte digest
//!
//! ## Example
//!
//! ```rust
//! use kshake320_core::{Uint320, display_hex, pow_hash};
//!
//! let header = [0u8; 120];
//! let digest = pow_hash(&header);
//! assert_eq!(digest.len(), 40);
//!
//! // Numeric view for difficulty comparison
//! let value = Uint320::from_le_bytes(&digest);
//! println!("{}", value);
//!
//! // Display block hash
//! assert_eq!(display_hex(&digest).len(), 80);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use kshake320_core::{HashInstance, SHAKE320, hash320};
//!
//! let mut h = HashInstance::new(SHAKE320);
//! h.update(b"hello ").unwrap();
//! h.update(b"world").unwrap();
//! assert_eq!(h.finalize().unwrap(), hash320(b"hello world"));
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! kshake320-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod error;
mod instance;
pub mod keccak;
mod kshake;
mod params;
mod prng;
mod sponge;
mod state;
mod uint320;

#[cfg(feature = "std")]
mod ffi;

pub use error::Error;
pub use instance::{HashInstance, XofReader, digest, digest_into, shake};
pub use kshake::{
    PowHasher, PowVersion, hash256, hash320, krypto_hash, krypto_hash_v2, pow_hash,
    pow_hash_batch,
};
pub use params::*;
pub use prng::{KeccakPrng, PRNG_SEED_THRESHOLD, PRNG_STATE_SIZE};
pub use sponge::{Phase, Sponge};
pub use state::KeccakState;
pub use uint320::{Uint320, WORDS, display_hex};
