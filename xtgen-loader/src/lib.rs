//! Loading side of the generator: per-CPU ISA descriptions in, feature
//! subsets, merged opcode maps and the flat audit table out.

pub mod dump;
pub mod error;
pub mod features;
pub mod merge;
pub mod source;
pub mod table;

pub use error::{Error, Result};
pub use features::FeatureSubsets;
pub use merge::{MergedSubsets, OpcodeMap, merge_sources};
pub use source::{IsaSource, load_sources};
