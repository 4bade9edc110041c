//! Shared utilities and reference implementations for the benchmarks
//!
//! This module provides:
//! - Random buffer generators
//! - A naive bit-by-bit reference copy
//! - A byte-per-bit reference copy (unpack, move, repack)
//!
//! All benchmarks use these utilities to ensure consistency
//! and eliminate code duplication.
#![allow(dead_code)]

use rand::{thread_rng, Rng};

/// Generate a buffer of random bytes.
#[inline]
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Read one bit, little-endian bit order.
#[inline]
fn get_bit(buf: &[u8], pos: u64) -> bool {
    (buf[(pos >> 3) as usize] >> (pos & 7)) & 1 != 0
}

/// Write one bit, little-endian bit order.
#[inline]
fn set_bit(buf: &mut [u8], pos: u64, value: bool) {
    let idx = (pos >> 3) as usize;
    let mask = 1u8 << (pos & 7);
    if value {
        buf[idx] |= mask;
    } else {
        buf[idx] &= !mask;
    }
}

/// Reference implementation: move one bit per iteration.
///
/// This is the obvious implementation the engine is measured against.
pub fn naive_copy_bits(dest: &mut [u8], dest_bit: u64, src: &[u8], src_bit: u64, len: u64) {
    for i in 0..len {
        set_bit(dest, dest_bit + i, get_bit(src, src_bit + i));
    }
}

/// Reference implementation: unpack every bit into its own byte, then repack.
///
/// Trades memory for simplicity; a common first cut in codec prototypes.
pub fn unpacked_copy_bits(dest: &mut [u8], dest_bit: u64, src: &[u8], src_bit: u64, len: u64) {
    let mut bits = vec![0u8; len as usize];
    for (i, slot) in bits.iter_mut().enumerate() {
        *slot = u8::from(get_bit(src, src_bit + i as u64));
    }
    for (i, slot) in bits.iter().enumerate() {
        set_bit(dest, dest_bit + i as u64, *slot != 0);
    }
}
