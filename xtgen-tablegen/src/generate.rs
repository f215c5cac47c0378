//! Instruction-class generation.
//!
//! Only the first encoding variant of an opcode is used. Operands are split by
//! direction: written operands (`o`, `m`) go to the output list and read
//! operands (`i`, `m`) to the input list, so a modify operand appears twice,
//! under its own name as an input and with an `_out` suffix as an output. The
//! two are then tied together by an early-clobber constraint, and such
//! instructions get no selection pattern.

use xtgen_ir::{
    Constraint, Encoding, FieldDecl, InstrClass, InstrDef, InstrUnit, Operand, Pattern, Tie,
};
use xtgen_isa::{Arg, Direction, Opcode, Variant};

use crate::error::{Error, Result};
use crate::pattern::synthesize;

/// Suffix of the output-side name of a modify operand.
pub const OUT_SUFFIX: &str = "_out";

/// Build the class and definition for `opcode` in feature subset `feature`.
pub fn generate(opcode: &Opcode, feature: &str) -> Result<InstrUnit> {
    let variant = opcode
        .primary_variant()
        .ok_or_else(|| Error::NoVariant(opcode.name.clone()))?;
    if opcode.variants.len() > 1 {
        log::warn!(
            "{}: {} encodings, generating {} only",
            opcode.name,
            opcode.variants.len(),
            variant.format
        );
    }

    let class = build_class(opcode, variant, feature);
    let pattern = if class.constraint.is_some() {
        Pattern::Empty
    } else {
        synthesize(opcode, variant)
    };
    log::debug!("{feature}: generated {}", class.name);

    let def = InstrDef {
        name: symbol(&opcode.name),
        class: class.name.clone(),
        pattern,
    };
    Ok(InstrUnit { class, def })
}

fn build_class(opcode: &Opcode, variant: &Variant, feature: &str) -> InstrClass {
    InstrClass {
        name: class_name(&opcode.name, &variant.format),
        feature: feature.to_string(),
        word_bits: variant.word_bits(),
        outs: variant
            .args
            .iter()
            .filter(|a| a.direction.is_written())
            .map(write_operand)
            .collect(),
        ins: variant
            .args
            .iter()
            .filter(|a| a.direction.is_read())
            .map(read_operand)
            .collect(),
        asm: mnemonic(opcode, variant),
        fields: variant
            .args
            .iter()
            .filter(|a| !a.field_bits.is_empty())
            .map(|a| FieldDecl {
                name: a.name.clone(),
                width: a.field_bits.len(),
            })
            .collect(),
        encoding: encoding(variant),
        constraint: constraint(variant),
    }
}

/// Valid identifier from an ISA name: upper case, `.` -> `_`.
pub fn symbol(name: &str) -> String {
    name.to_uppercase().replace('.', "_")
}

pub fn class_name(opcode: &str, format: &str) -> String {
    symbol(&format!("{opcode}_{format}"))
}

pub fn read_operand(arg: &Arg) -> Operand {
    Operand::new(arg.operand_type(), arg.name.as_str())
}

pub fn write_operand(arg: &Arg) -> Operand {
    let name = match arg.direction {
        Direction::Modify => format!("{}{OUT_SUFFIX}", arg.name),
        Direction::Input | Direction::Output => arg.name.clone(),
    };
    Operand::new(arg.operand_type(), name)
}

/// Mnemonic followed by references to every operand not flagged invisible.
fn mnemonic(opcode: &Opcode, variant: &Variant) -> String {
    let refs: Vec<String> = variant
        .args
        .iter()
        .filter(|a| !a.flags.is_suppressed())
        .map(|a| format!("${}", a.name))
        .collect();
    if refs.is_empty() {
        opcode.name.clone()
    } else {
        format!("{} {}", opcode.name, refs.join(" "))
    }
}

fn encoding(variant: &Variant) -> Vec<Encoding> {
    let format = variant.format_bits.iter().map(|&b| Encoding::FormatBit(b));
    let opcode = variant.opcode_bits.iter().map(|&b| Encoding::OpcodeBit(b));
    let fields = variant.args.iter().flat_map(|arg| {
        arg.field_bits
            .iter()
            .enumerate()
            .map(move |(index, &bit)| Encoding::FieldBit {
                bit,
                operand: arg.name.clone(),
                index,
            })
    });
    format.chain(opcode).chain(fields).collect()
}

fn constraint(variant: &Variant) -> Option<Constraint> {
    let ties: Vec<Tie> = variant
        .args
        .iter()
        .filter(|a| a.direction == Direction::Modify)
        .map(|a| Tie {
            input: a.name.clone(),
            output: format!("{}{OUT_SUFFIX}", a.name),
        })
        .collect();
    (!ties.is_empty()).then_some(Constraint { ties })
}
