//! Operand flag set.
//!
//! The description stores flags as a fixed positional string, one character
//! per flag and a blank for an absent flag: `"r i "` is a register operand
//! that is hidden from the assembly syntax.

use bitflags::bitflags;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ArgFlags: u8 {
        /// Operand names a register.
        const REGISTER = 0b0001;
        /// Operand value is PC-relative.
        const PC_RELATIVE = 0b0010;
        /// Operand does not appear in the assembly syntax.
        const INVISIBLE = 0b0100;
        /// Operand kind could not be classified by the extractor.
        const UNKNOWN = 0b1000;
    }
}

/// Flag character for each position of the positional code.
const POSITIONS: [(char, ArgFlags); 4] = [
    ('r', ArgFlags::REGISTER),
    ('p', ArgFlags::PC_RELATIVE),
    ('i', ArgFlags::INVISIBLE),
    ('u', ArgFlags::UNKNOWN),
];

impl ArgFlags {
    /// Parse the positional flag code (`"r   "`, `"  i "`, ...).
    ///
    /// Short codes are treated as blank-padded.
    pub fn from_code(code: &str) -> Result<Self> {
        if code.chars().count() > POSITIONS.len() {
            return Err(Error::FlagsTooLong(code.to_string()));
        }
        let mut flags = ArgFlags::empty();
        for (position, (ch, (expected, flag))) in code.chars().zip(POSITIONS).enumerate() {
            if ch == expected {
                flags |= flag;
            } else if ch != ' ' {
                return Err(Error::InvalidFlag {
                    code: code.to_string(),
                    position,
                    flag: ch,
                });
            }
        }
        Ok(flags)
    }

    /// Positional code, always four characters.
    pub fn to_code(self) -> String {
        POSITIONS
            .iter()
            .map(|&(ch, flag)| if self.contains(flag) { ch } else { ' ' })
            .collect()
    }

    /// Whether the operand is left out of the generated mnemonic.
    pub fn is_suppressed(self) -> bool {
        self.contains(ArgFlags::INVISIBLE)
    }
}

impl Serialize for ArgFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_code())
    }
}

impl<'de> Deserialize<'de> for ArgFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        ArgFlags::from_code(&code).map_err(de::Error::custom)
    }
}
