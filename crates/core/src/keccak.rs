//! Keccak-f[1600] permutation
//!
//! The state is 25 lanes of 64 bits, lane `(x, y)` stored at index
//! `x + 5 * y`. Byte-level views load lanes in little-endian order, so
//! byte `8 * i` is the least significant byte of lane `i`.
//!
//! Each of the 24 rounds applies theta, rho, pi, chi and iota in that order.

use crate::params::{LANES, ROUNDS, STATE_SIZE};

/// Iota round constants
pub(crate) const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, indexed by lane `x + 5 * y`
#[rustfmt::skip]
pub(crate) const RHO_OFFSETS: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

/// Apply the full 24-round permutation to a lane array in place.
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for rc in ROUND_CONSTANTS {
        theta(lanes);
        rho(lanes);
        pi(lanes);
        chi(lanes);
        iota(lanes, rc);
    }
}

/// Apply the permutation to a 200-byte state.
///
/// Lanes are assembled little-endian from consecutive 8-byte groups and
/// written back the same way.
pub fn permute(state: &mut [u8; STATE_SIZE]) {
    let mut lanes = [0u64; LANES];
    for (lane, chunk) in lanes.iter_mut().zip(state.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(bytes);
    }

    keccak_f1600(&mut lanes);

    for (chunk, lane) in state.chunks_exact_mut(8).zip(lanes.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

/// Column parity mixing
#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    for (x, p) in parity.iter_mut().enumerate() {
        *p = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }
}

/// Per-lane rotation
#[inline(always)]
fn rho(a: &mut [u64; LANES]) {
    for (lane, offset) in a.iter_mut().zip(RHO_OFFSETS) {
        *lane = lane.rotate_left(offset);
    }
}

/// Lane transposition: `(x, y)` moves to `(y, 2x + 3y)`
#[inline(always)]
fn pi(a: &mut [u64; LANES]) {
    let src = *a;
    for x in 0..5 {
        for y in 0..5 {
            a[y + 5 * ((2 * x + 3 * y) % 5)] = src[x + 5 * y];
        }
    }
}

/// Non-linear row step
#[inline(always)]
fn chi(a: &mut [u64; LANES]) {
    for y in 0..5 {
        let base = 5 * y;
        let row = [a[base], a[base + 1], a[base + 2], a[base + 3], a[base + 4]];
        for x in 0..5 {
            a[base + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut [u64; LANES], rc: u64) {
    a[0] ^= rc;
}
