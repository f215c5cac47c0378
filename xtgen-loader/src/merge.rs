//! Per-subset merge of opcode records across CPU descriptions.
//!
//! Sources are folded in the order given. Whenever a source defines an opcode
//! listed in a subset, its record replaces whatever an earlier source put
//! there: the last source to define an opcode wins outright, fields are never
//! combined. A replaced entry keeps its original position in the map.

use indexmap::IndexMap;
use xtgen_isa::Opcode;

use crate::features::FeatureSubsets;
use crate::source::IsaSource;

/// Opcode name -> record, in first-insertion order.
pub type OpcodeMap = IndexMap<String, Opcode>;

/// Merged opcode maps, one per declared subset (declaration order).
#[derive(Debug, Clone, Default)]
pub struct MergedSubsets {
    subsets: IndexMap<String, OpcodeMap>,
}

impl MergedSubsets {
    /// One empty map per declared subset.
    fn empty(features: &FeatureSubsets) -> Self {
        Self {
            subsets: features
                .names()
                .map(|name| (name.to_string(), OpcodeMap::new()))
                .collect(),
        }
    }

    /// Fold one source in, overwriting earlier records of the same name.
    fn absorb(&mut self, source: &IsaSource, features: &FeatureSubsets) {
        for op in &source.isa.opcodes {
            for subset in features.subsets_of(&op.name) {
                let map = self.subsets.entry(subset.to_string()).or_default();
                overwrite(map, op, &source.cpu, subset);
            }
        }
    }

    pub fn get(&self, subset: &str) -> Option<&OpcodeMap> {
        self.subsets.get(subset)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpcodeMap)> {
        self.subsets.iter().map(|(name, map)| (name.as_str(), map))
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }
}

fn overwrite(map: &mut OpcodeMap, op: &Opcode, cpu: &str, subset: &str) {
    if map.insert(op.name.clone(), op.clone()).is_some() {
        log::trace!("{subset}: {} replaced by the {cpu} record", op.name);
    }
}

/// Merge `sources` (in order) into one opcode map per feature subset.
pub fn merge_sources(sources: &[IsaSource], features: &FeatureSubsets) -> MergedSubsets {
    let merged = sources
        .iter()
        .fold(MergedSubsets::empty(features), |mut merged, source| {
            merged.absorb(source, features);
            merged
        });

    for (subset, map) in merged.iter() {
        if map.is_empty() {
            log::warn!("feature subset {subset} resolved to no opcodes");
        } else {
            log::debug!("feature subset {subset}: {} opcodes", map.len());
        }
    }
    merged
}
