//! BitCraft: bit-granularity memory copy primitives for Rust.
//!
//! BitCraft copies runs of bits between byte buffers at arbitrary bit-level
//! offsets, preserving every bit outside the copied range. It is the
//! bit-addressable analogue of a byte-oriented block copy, built for
//! bitfield packing, binary serialization codecs, and compact
//! binary-protocol encoders and decoders whose fields are not byte-aligned.
//!
//! # Quick Start
//!
//! ```
//! use bitcraft::copy_bits;
//!
//! // Pack a 10-bit field starting at bit 3 of a frame.
//! let field = [0xFF, 0x00, 0xFF];
//! let mut frame = [0u8; 2];
//!
//! copy_bits(&mut frame, 3, &field, 1, 10).unwrap();
//! assert_eq!(frame, [0xF8, 0x03]);
//! ```
//!
//! # Bit Order
//!
//! Bit `i` of a buffer lives in byte `i / 8`, at position `i % 8` counted
//! from the least significant bit (bit 0 = LSB, bit 7 = MSB). This
//! little-endian bit numbering is a behavioral contract: protocol encoders
//! depend on it for field placement, so it will not change.
//!
//! ```text
//! Byte 0: [bit 7][bit 6]...[bit 1][bit 0]
//! Byte 1: [bit 15][bit 14]...[bit 9][bit 8]
//! ```
//!
//! # Two Variants
//!
//! | Operation | Bounds checks | Failure mode | Use when |
//! |-----------|---------------|--------------|----------|
//! | [`copy_bits`] | Validated at entry and per stage | `Err(BitCraftError)` | Default choice |
//! | [`copy_bits_unchecked`] | None (caller contract, `unsafe`) | Undefined behavior | Extents already proven, check overhead matters |
//!
//! The two exist specifically to offer a speed/safety trade-off: the
//! unchecked variant does not quietly reintroduce the checks the caller
//! opted out of.
//!
//! # What the Copy Guarantees
//!
//! - **Bit fidelity**: after a successful call, destination bit
//!   `dest_first_bit + i` equals source bit `src_first_bit + i` for every
//!   `i` in `0..len`
//! - **Non-interference**: destination bits outside the written range are
//!   bit-for-bit unchanged
//! - **Aligned fast path**: byte-aligned offsets with a whole-byte `len`
//!   degenerate to a plain byte-range copy
//!
//! Overlapping source and destination regions are not supported; Rust's
//! borrow rules already prevent the two slices from aliasing.
//!
//! # Unsafe Code Policy
//!
//! Unsafe code is confined to [`copy_bits_unchecked`], whose entire purpose
//! is unchecked access. Every unsafe block carries an explicit safety
//! comment tying the access to the documented caller contract, and debug
//! builds assert that contract. [`copy_bits`] and everything else in the
//! crate are safe code with zero `unsafe`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/bitcraft/0.1.0")]

/// Core copy engine (checked and unchecked variants)
pub mod core;

/// Error types and result aliases
pub mod error;

/// Utility functions and helpers
pub mod util;

// Re-export commonly used types at crate root
pub use error::{BitCraftError, Result};

// Re-export the two copy operations at the crate root
pub use crate::core::{copy_bits, copy_bits_unchecked};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bitcraft::prelude::*;
///
/// let mut dest = [0u8; 2];
/// copy_bits(&mut dest, 0, &[0xAB, 0xCD], 0, 16).unwrap();
/// assert_eq!(dest, [0xAB, 0xCD]);
/// ```
pub mod prelude {
    pub use crate::core::{copy_bits, copy_bits_unchecked};
    pub use crate::error::{BitCraftError, Result};
    pub use crate::util::bitops::{bits_to_bytes, get_bit, set_bit};
}
