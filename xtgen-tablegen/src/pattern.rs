//! Intrinsic selection patterns.
//!
//! Each instruction is bound to an intrinsic named after its opcode and
//! called with the instruction's input operands. The pattern shape depends on
//! how many pure outputs the instruction has: none gives a bare call, one
//! binds the call's result to that operand, and more than one cannot be
//! expressed, so no pattern is produced.

use xtgen_ir::{IntrinsicCall, Pattern};
use xtgen_isa::{Direction, Opcode, Variant};

use crate::generate::read_operand;

/// Namespace prefix of the target intrinsics.
pub const INTRINSIC_PREFIX: &str = "int_xtensa_";

/// Intrinsic name for an opcode (`ae_mul.h` -> `int_xtensa_ae_mul_h`).
pub fn intrinsic_name(opcode: &str) -> String {
    format!("{INTRINSIC_PREFIX}{}", opcode.replace('.', "_"))
}

/// Selection pattern for `variant` of `opcode`.
pub fn synthesize(opcode: &Opcode, variant: &Variant) -> Pattern {
    let call = IntrinsicCall {
        intrinsic: intrinsic_name(&opcode.name),
        args: variant
            .args
            .iter()
            .filter(|a| a.direction.is_read())
            .map(read_operand)
            .collect(),
    };

    let mut outputs = variant
        .args
        .iter()
        .filter(|a| a.direction == Direction::Output);
    match (outputs.next(), outputs.next()) {
        (None, _) => Pattern::Call(call),
        (Some(out), None) => Pattern::Bind {
            result: read_operand(out),
            call,
        },
        (Some(_), Some(_)) => {
            log::debug!("{}: several results, no pattern", opcode.name);
            Pattern::Empty
        }
    }
}
