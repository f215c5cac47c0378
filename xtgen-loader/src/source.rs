use std::fs;
use std::path::Path;

use xtgen_isa::IsaDescription;

use crate::error::{Error, Result};

/// File-name prefix shared by the extractor's output files.
const CPU_PREFIX: &str = "xtensa_";

/// One parsed ISA description, tagged with the CPU it describes.
#[derive(Debug, Clone)]
pub struct IsaSource {
    pub cpu: String,
    pub isa: IsaDescription,
}

impl IsaSource {
    pub fn new(cpu: impl Into<String>, isa: IsaDescription) -> Self {
        Self {
            cpu: cpu.into(),
            isa,
        }
    }

    /// Read and parse a description file. The CPU name comes from the path.
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let isa: IsaDescription = serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let cpu = cpu_name(path);
        log::debug!(
            "loaded {} ({cpu}): {} opcodes",
            path.display(),
            isa.opcodes.len()
        );
        Ok(Self::new(cpu, isa))
    }

    /// Total number of (opcode, variant, arg) tuples in this source.
    pub fn arg_count(&self) -> usize {
        self.isa
            .opcodes
            .iter()
            .flat_map(|op| &op.variants)
            .map(|v| v.args.len())
            .sum()
    }
}

/// CPU identifier for a description path: the file stem without the
/// `xtensa_` prefix (`cfg/xtensa_hifi4.json` -> `hifi4`).
pub fn cpu_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.strip_prefix(CPU_PREFIX).unwrap_or(&stem).to_string()
}

/// Load every path in order. Fails on the first unreadable or malformed file.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<IsaSource>> {
    paths.iter().map(|p| IsaSource::open(p.as_ref())).collect()
}
