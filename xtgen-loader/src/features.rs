//! Feature subsets: named partitions of the opcode universe.
//!
//! Each subset is defined by a list of opcode names, normally kept in a
//! row-oriented list file whose first column is the opcode name. Subsets are
//! declared in a YAML config, on the command line, or directly in code.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Subset name -> opcode names, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSubsets {
    subsets: IndexMap<String, HashSet<String>>,
}

impl FeatureSubsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a subset. Declaring the same name twice is an error.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, opcodes: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.subsets.contains_key(&name) {
            return Err(Error::DuplicateFeature(name));
        }
        let opcodes: HashSet<String> = opcodes.into_iter().map(Into::into).collect();
        log::debug!("feature subset {name}: {} opcode names", opcodes.len());
        self.subsets.insert(name, opcodes);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<I, S>(mut self, name: impl Into<String>, opcodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, opcodes)?;
        Ok(self)
    }

    /// Load subsets from a YAML config file.
    ///
    /// ```yaml
    /// features:
    ///   - name: HIFI3
    ///     opcodes: hf3list.csv     # relative to the config file
    ///   - name: HIFI4
    ///     opcodes: [ae_abs64, ae_add64]
    /// ```
    pub fn from_config(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FeatureConfig = serde_yaml::from_str(&text).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or(Path::new(""));

        let mut features = Self::new();
        for entry in config.features {
            let names = match entry.opcodes {
                OpcodeSource::Names(names) => names,
                OpcodeSource::List(list) => read_opcode_list(&base.join(list))?,
            };
            features.insert(entry.name, names)?;
        }
        Ok(features)
    }

    /// Build subsets from `NAME=PATH` specs, each naming an opcode list file.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let mut features = Self::new();
        for spec in specs {
            let spec = spec.as_ref();
            let (name, path) = spec
                .split_once('=')
                .filter(|(name, path)| !name.is_empty() && !path.is_empty())
                .ok_or_else(|| Error::FeatureSpec(spec.to_string()))?;
            features.insert(name, read_opcode_list(Path::new(path))?)?;
        }
        Ok(features)
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subsets.keys().map(String::as_str)
    }

    /// Subsets the opcode is listed in, in declaration order.
    pub fn subsets_of<'a>(&'a self, opcode: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.subsets
            .iter()
            .filter(move |(_, names)| names.contains(opcode))
            .map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, subset: &str, opcode: &str) -> bool {
        self.subsets
            .get(subset)
            .is_some_and(|names| names.contains(opcode))
    }
}

/// Output file stem for a subset (`HIFI3` -> `hifi3`).
pub fn file_stem(subset: &str) -> String {
    subset.to_lowercase()
}

/// Opcode names from list text: first column of every non-blank row.
pub fn parse_opcode_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|row| row.split(',').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_opcode_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_opcode_list(&text))
}

#[derive(Debug, Deserialize)]
struct FeatureConfig {
    features: Vec<FeatureEntry>,
}

#[derive(Debug, Deserialize)]
struct FeatureEntry {
    name: String,
    opcodes: OpcodeSource,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpcodeSource {
    Names(Vec<String>),
    List(PathBuf),
}
