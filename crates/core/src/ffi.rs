//! C FFI bindings for native callers

use crate::{DIGEST_SIZE, PowHasher, hash256, hash320, pow_hash};
use core::slice;

/// Opaque hasher handle for FFI
pub struct KHasher {
    inner: PowHasher,
}

/// Create a new hasher instance
/// Returns a pointer to the hasher (caller must free with kshake320_free)
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_new() -> *mut KHasher {
    let hasher = Box::new(KHasher {
        inner: PowHasher::new(),
    });
    Box::into_raw(hasher)
}

/// Free a hasher instance
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_free(hasher: *mut KHasher) {
    if !hasher.is_null() {
        unsafe {
            drop(Box::from_raw(hasher));
        }
    }
}

/// Compute the PoW hash of a header with a reusable hasher
/// - hasher: pointer from kshake320_new()
/// - input: pointer to header bytes
/// - input_len: length of header
/// - output: pointer to 40-byte buffer for result
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_hash(
    hasher: *mut KHasher,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) {
    if hasher.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let hasher = &mut *hasher;
        let result = hasher.inner.hash(input_slice(input, input_len));
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&result);
    }
}

/// One-shot PoW hash; writes 40 bytes to `output`
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_pow_hash(input: *const u8, input_len: usize, output: *mut u8) {
    if output.is_null() {
        return;
    }
    unsafe {
        let result = pow_hash(input_slice(input, input_len));
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&result);
    }
}

/// Single-pass SHAKE320; writes 40 bytes to `output`
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_hash320(input: *const u8, input_len: usize, output: *mut u8) {
    if output.is_null() {
        return;
    }
    unsafe {
        let result = hash320(input_slice(input, input_len));
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&result);
    }
}

/// Double SHA3-256; writes 32 bytes to `output`
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_hash256(input: *const u8, input_len: usize, output: *mut u8) {
    if output.is_null() {
        return;
    }
    unsafe {
        let result = hash256(input_slice(input, input_len));
        slice::from_raw_parts_mut(output, 32).copy_from_slice(&result);
    }
}

/// Benchmark: compute N hashes and return total microseconds
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_benchmark(iterations: u32) -> u64 {
    use std::time::Instant;

    let mut hasher = PowHasher::new();
    let mut header = [0u8; crate::POW_HEADER_SIZE];
    header[0] = 1;

    let start = Instant::now();
    for i in 0..iterations {
        header[116..].copy_from_slice(&i.to_le_bytes());
        let _ = hasher.hash(&header);
    }
    let elapsed = start.elapsed();

    elapsed.as_micros() as u64
}

/// Get hash rate (hashes per second) from a benchmark run
#[unsafe(no_mangle)]
pub extern "C" fn kshake320_hashrate(iterations: u32, microseconds: u64) -> f64 {
    if microseconds == 0 {
        return 0.0;
    }
    (iterations as f64) / (microseconds as f64 / 1_000_000.0)
}

/// A null input is treated as the empty header.
unsafe fn input_slice<'a>(input: *const u8, input_len: usize) -> &'a [u8] {
    if input.is_null() {
        &[]
    } else {
        unsafe { slice::from_raw_parts(input, input_len) }
    }
}
