#![allow(dead_code)]

use xtgen_isa::{Arg, ArgFlags, Direction, Opcode, Variant};

pub fn reg(name: &str, direction: Direction, field_bits: &[u32]) -> Arg {
    Arg {
        name: name.to_string(),
        direction,
        reg_class: "AE_DR".to_string(),
        num_regs: 1,
        flags: ArgFlags::REGISTER,
        field_bits: field_bits.to_vec(),
    }
}

pub fn imm(name: &str, field_bits: &[u32]) -> Arg {
    Arg {
        name: name.to_string(),
        direction: Direction::Input,
        reg_class: String::new(),
        num_regs: 0,
        flags: ArgFlags::empty(),
        field_bits: field_bits.to_vec(),
    }
}

pub fn hidden(mut arg: Arg) -> Arg {
    arg.flags |= ArgFlags::INVISIBLE;
    arg
}

pub fn variant(format: &str, args: Vec<Arg>) -> Variant {
    Variant {
        format: format.to_string(),
        slot: 4,
        length: 3,
        format_bits: vec![1, 2],
        opcode_bits: vec![16, 23],
        args,
    }
}

pub fn opcode(name: &str, variants: Vec<Variant>) -> Opcode {
    Opcode {
        name: name.to_string(),
        variants,
    }
}
