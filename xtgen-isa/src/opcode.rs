use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::{BitMask, mask_from_bits};
use crate::flags::ArgFlags;

/// One per-CPU ISA description: `{ "opcodes": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsaDescription {
    pub opcodes: Vec<Opcode>,
}

/// A named instruction mnemonic and its encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    #[serde(rename = "opcode")]
    pub name: String,
    pub variants: Vec<Variant>,
}

impl Opcode {
    /// The encoding used for code generation; the remaining variants are
    /// ignored there.
    pub fn primary_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }
}

/// One concrete encoding of an opcode inside a format slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub format: String,
    pub slot: u32,
    /// Format length in bytes.
    pub length: u32,
    pub format_bits: Vec<u32>,
    pub opcode_bits: Vec<u32>,
    pub args: Vec<Arg>,
}

impl Variant {
    /// Instruction-word width in bits.
    pub fn word_bits(&self) -> u32 {
        self.length * 8
    }

    pub fn format_mask(&self) -> BitMask {
        mask_from_bits(&self.format_bits)
    }

    pub fn opcode_mask(&self) -> BitMask {
        mask_from_bits(&self.opcode_bits)
    }
}

/// Data-flow direction of an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "i")]
    Input,
    #[serde(rename = "o")]
    Output,
    /// Read and written by the same instruction.
    #[serde(rename = "m")]
    Modify,
}

impl Direction {
    pub const fn as_char(self) -> char {
        match self {
            Direction::Input => 'i',
            Direction::Output => 'o',
            Direction::Modify => 'm',
        }
    }

    pub const fn is_read(self) -> bool {
        matches!(self, Direction::Input | Direction::Modify)
    }

    pub const fn is_written(self) -> bool {
        matches!(self, Direction::Output | Direction::Modify)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One operand slot of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    #[serde(rename = "arg")]
    pub name: String,
    #[serde(rename = "dir")]
    pub direction: Direction,
    /// Register file name; empty for immediates.
    #[serde(rename = "reg")]
    pub reg_class: String,
    #[serde(with = "num_regs")]
    pub num_regs: u32,
    pub flags: ArgFlags,
    /// `field_bits[i]` is the instruction-word bit holding bit `i` of the
    /// operand value.
    pub field_bits: Vec<u32>,
}

impl Arg {
    pub fn field_mask(&self) -> BitMask {
        mask_from_bits(&self.field_bits)
    }

    /// Operand type used in generated operand lists: the register class, or
    /// the operand's own name for immediates.
    pub fn operand_type(&self) -> &str {
        if self.reg_class.is_empty() {
            &self.name
        } else {
            &self.reg_class
        }
    }
}

/// `num_regs` is written by the extractor as a decimal string; plain integers
/// are accepted too.
mod num_regs {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Int(n) => Ok(n),
            Repr::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| de::Error::custom(format!("invalid num_regs {s:?}: {e}"))),
        }
    }
}
