//! Instruction-set records consumed by the generators.
//!
//! An ISA description is a list of [`Opcode`]s. Each opcode owns one or more
//! encoding [`Variant`]s, and each variant lists its operand [`Arg`]s together
//! with the instruction-word bit positions they occupy.

pub mod bits;
pub mod error;
pub mod flags;
pub mod opcode;

pub use bits::{BitMask, bits_from_mask, format_mask, mask_from_bits};
pub use error::{Error, Result};
pub use flags::ArgFlags;
pub use opcode::{Arg, Direction, IsaDescription, Opcode, Variant};
