//! Merged per-subset opcode dumps (`<subset>.json`).

use std::fs;
use std::path::{Path, PathBuf};

use xtgen_isa::Opcode;

use crate::error::{Error, Result};
use crate::features::file_stem;
use crate::merge::{MergedSubsets, OpcodeMap};

/// Pretty-printed JSON array of the subset's records, in map order.
pub fn dump_to_string(opcodes: &OpcodeMap) -> serde_json::Result<String> {
    let records: Vec<&Opcode> = opcodes.values().collect();
    serde_json::to_string_pretty(&records)
}

/// Write one `<subset>.json` per subset into `dir`. Returns the written paths.
pub fn write_dumps(dir: &Path, merged: &MergedSubsets) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(merged.len());
    for (subset, opcodes) in merged.iter() {
        let path = dir.join(format!("{}.json", file_stem(subset)));
        let mut text = dump_to_string(opcodes).map_err(|source| Error::Serialize {
            path: path.clone(),
            source,
        })?;
        text.push('\n');
        fs::write(&path, text).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {} {subset} opcodes to {}", opcodes.len(), path.display());
        written.push(path);
    }
    Ok(written)
}
