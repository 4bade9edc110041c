//! Core copy engine for bitcraft.
//!
//! This module contains the two shapes of the bit copy primitive:
//!
//! - **Checked**: [`copy_bits`] validates every buffer extent and reports
//!   failures through [`crate::error::BitCraftError`]
//! - **Unchecked**: [`copy_bits_unchecked`] trusts caller-supplied
//!   guarantees and is an `unsafe fn`
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── copy.rs      - bounds-checked multi-stage engine
//! ├── unchecked.rs - unchecked fast variant
//! └── mod.rs       - this file (public API)
//! ```
//!
//! # Design Principles
//!
//! 1. **One algorithm, two contracts**: both variants run the same stage
//!    sequence; only the bounds handling differs
//! 2. **Safe by default**: the checked variant is the entry point; the
//!    unchecked one is an explicit opt-in carrying a `# Safety` contract
//! 3. **Read-modify-write at the edges**: partial bytes are merged through
//!    mask tables so untouched destination bits survive byte-for-byte

pub mod copy;
pub mod unchecked;

pub use copy::copy_bits;
pub use unchecked::copy_bits_unchecked;
