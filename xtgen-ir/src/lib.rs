//! Intermediate representation between ISA records and generated text.
//!
//! Generators build these values; renderers turn them into a concrete output
//! dialect. Nothing here knows about TableGen syntax.

pub mod class;
pub mod pattern;

pub use class::{Constraint, Encoding, FieldDecl, InstrClass, InstrDef, InstrUnit, Operand, Tie};
pub use pattern::{IntrinsicCall, Pattern};
