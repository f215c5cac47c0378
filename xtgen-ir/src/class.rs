use crate::pattern::Pattern;

/// A typed operand reference, `TYPE:$NAME` in most dialects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    /// Register class, or the operand name itself for immediates.
    pub ty: String,
    pub name: String,
}

impl Operand {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Declaration of an operand's encoded bit field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub width: usize,
}

/// One assignment into the instruction word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// Bit forced to 1 by the instruction format.
    FormatBit(u32),
    /// Bit forced to 1 by the opcode within its format.
    OpcodeBit(u32),
    /// Word bit `bit` carries bit `index` of `operand`.
    FieldBit {
        bit: u32,
        operand: String,
        index: usize,
    },
}

/// A read-modify-write operand: `input` and `output` share a register, and
/// `output` is early-clobber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tie {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub ties: Vec<Tie>,
}

/// A parametrized instruction class: everything about an instruction except
/// its selection pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrClass {
    pub name: String,
    /// Feature subset the instruction is predicated on.
    pub feature: String,
    /// Width of the instruction word in bits.
    pub word_bits: u32,
    pub outs: Vec<Operand>,
    pub ins: Vec<Operand>,
    /// Assembly string: mnemonic plus visible operand references.
    pub asm: String,
    pub fields: Vec<FieldDecl>,
    /// Format bits first, then opcode bits, then operand field bits.
    pub encoding: Vec<Encoding>,
    pub constraint: Option<Constraint>,
}

/// Instantiation of an [`InstrClass`] with a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrDef {
    pub name: String,
    pub class: String,
    pub pattern: Pattern,
}

/// Everything generated for one opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrUnit {
    pub class: InstrClass,
    pub def: InstrDef,
}
