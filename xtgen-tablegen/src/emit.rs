//! Routes generated text to one destination per feature subset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use xtgen_loader::features::file_stem;
use xtgen_loader::{MergedSubsets, OpcodeMap};

use crate::error::{Error, Result};
use crate::generate_text;

/// Write the class and definition of every opcode in `opcodes`, in map order,
/// each unit followed by a blank line. Returns the number of opcodes written.
///
/// `destination` only labels write errors.
pub fn emit_subset<W: Write>(
    mut out: W,
    destination: &str,
    feature: &str,
    opcodes: &OpcodeMap,
) -> Result<usize> {
    let write_err = |source| Error::Write {
        destination: destination.to_string(),
        source,
    };
    for opcode in opcodes.values() {
        let text = generate_text(opcode, feature)?;
        writeln!(out, "{text}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(opcodes.len())
}

/// Write `<subset>.td` into `dir` for every subset, in declaration order.
///
/// Stops at the first failing destination; files already written stay.
pub fn write_subsets(dir: &Path, merged: &MergedSubsets) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(merged.len());
    for (feature, opcodes) in merged.iter() {
        let path = dir.join(format!("{}.td", file_stem(feature)));
        let destination = path.display().to_string();
        let file = File::create(&path).map_err(|source| Error::Write {
            destination: destination.clone(),
            source,
        })?;
        let count = emit_subset(BufWriter::new(file), &destination, feature, opcodes)?;
        log::info!("wrote {count} {feature} instructions to {destination}");
        written.push(path);
    }
    Ok(written)
}
