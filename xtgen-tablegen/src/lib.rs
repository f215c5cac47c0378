//! TableGen back end: turns merged opcode records into instruction classes,
//! definitions and intrinsic selection patterns, one output per feature
//! subset.

pub mod emit;
pub mod error;
pub mod generate;
pub mod pattern;
pub mod render;

pub use emit::{emit_subset, write_subsets};
pub use error::{Error, Result};
pub use generate::generate;
pub use pattern::synthesize;

use xtgen_isa::Opcode;

/// Generate and render the class and definition for one opcode.
pub fn generate_text(opcode: &Opcode, feature: &str) -> Result<String> {
    Ok(render::render_unit(&generate(opcode, feature)?))
}
