use std::fmt::Write;

use xtgen_ir::{Constraint, Encoding, InstrClass, InstrDef, InstrUnit, IntrinsicCall, Operand, Pattern};

/// Namespace prefix of the base instruction-word classes (`XtensaInst24`).
const BASE_CLASS: &str = "XtensaInst";

/// Render the class followed by its definition.
pub fn render_unit(unit: &InstrUnit) -> String {
    let mut out = render_class(&unit.class);
    out.push('\n');
    out.push_str(&render_def(&unit.def));
    out
}

pub fn render_class(class: &InstrClass) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "class {}<list<dag> pattern>", class.name);
    let _ = writeln!(
        out,
        "    : {BASE_CLASS}{}<(outs {}), (ins {}),",
        class.word_bits,
        operand_list(&class.outs),
        operand_list(&class.ins)
    );
    let _ = writeln!(
        out,
        "      \"{}\", pattern>, Requires<[Has{}]> {{",
        class.asm, class.feature
    );

    for field in &class.fields {
        let _ = writeln!(out, "  bits<{}> {};", field.width, field.name);
    }
    if !class.fields.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "  let DecoderNamespace = \"{}\";", class.feature);
    if let Some(constraint) = &class.constraint {
        let _ = writeln!(out, "  let Constraints = \"{}\";", render_constraint(constraint));
    }

    let mut section = "";
    for enc in &class.encoding {
        let (name, line) = match enc {
            Encoding::FormatBit(bit) => ("format", format!("let Inst{{{bit}}} = 1;")),
            Encoding::OpcodeBit(bit) => ("opcode", format!("let Inst{{{bit}}} = 1;")),
            Encoding::FieldBit {
                bit,
                operand,
                index,
            } => ("operands", format!("let Inst{{{bit}}} = {operand}{{{index}}};")),
        };
        if name != section {
            let _ = writeln!(out, "\n  // {name}");
            section = name;
        }
        let _ = writeln!(out, "  {line}");
    }
    out.push_str("}\n");
    out
}

pub fn render_def(def: &InstrDef) -> String {
    format!(
        "def {} : {}<[{}]>;\n",
        def.name,
        def.class,
        render_pattern(&def.pattern)
    )
}

/// Pattern body without the surrounding list brackets; empty for
/// [`Pattern::Empty`].
pub fn render_pattern(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Empty => String::new(),
        Pattern::Call(call) => render_call(call),
        Pattern::Bind { result, call } => {
            format!("(set {}, {})", render_operand(result), render_call(call))
        }
    }
}

/// `$in = $in_out,@earlyclobber $in_out` for each tie, comma separated.
pub fn render_constraint(constraint: &Constraint) -> String {
    constraint
        .ties
        .iter()
        .map(|tie| format!("${} = ${},@earlyclobber ${}", tie.input, tie.output, tie.output))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_call(call: &IntrinsicCall) -> String {
    if call.args.is_empty() {
        format!("({})", call.intrinsic)
    } else {
        format!("({} {})", call.intrinsic, operand_list(&call.args))
    }
}

fn render_operand(op: &Operand) -> String {
    format!("{}:${}", op.ty, op.name)
}

fn operand_list(ops: &[Operand]) -> String {
    ops.iter().map(render_operand).collect::<Vec<_>>().join(", ")
}
