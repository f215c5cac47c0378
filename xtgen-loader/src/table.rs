//! Flat audit table of every (cpu, opcode, variant, arg) tuple.
//!
//! One CSV row per argument, with no filtering and no deduplication: the same
//! opcode defined by two CPUs shows up twice.
//!
//! Cells are rendered from the parsed records, not copied from the source
//! text, so `num_regs` comes out in canonical decimal (`"01"` -> `1`) and
//! flags as the fixed four-character code.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use xtgen_isa::{Arg, Opcode, Variant, format_mask};

use crate::error::{Error, Result};
use crate::source::IsaSource;

pub const HEADER: [&str; 12] = [
    "cpu",
    "opcode",
    "format",
    "slot",
    "format_bits",
    "opcode_bits",
    "arg",
    "dir",
    "reg",
    "num_regs",
    "flags",
    "field_bits",
];

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub cpu: &'a str,
    pub opcode: &'a Opcode,
    pub variant: &'a Variant,
    pub arg: &'a Arg,
}

impl Row<'_> {
    /// Rendered cells, in [`HEADER`] order.
    pub fn cells(&self) -> [String; 12] {
        [
            self.cpu.to_string(),
            self.opcode.name.clone(),
            self.variant.format.clone(),
            self.variant.slot.to_string(),
            format_mask(self.variant.format_mask()),
            format_mask(self.variant.opcode_mask()),
            self.arg.name.clone(),
            self.arg.direction.to_string(),
            self.arg.reg_class.clone(),
            self.arg.num_regs.to_string(),
            self.arg.flags.to_code(),
            format_mask(self.arg.field_mask()),
        ]
    }
}

/// All rows in source, opcode, variant, arg order.
pub fn rows(sources: &[IsaSource]) -> impl Iterator<Item = Row<'_>> {
    sources.iter().flat_map(|source| {
        source.isa.opcodes.iter().flat_map(move |opcode| {
            opcode.variants.iter().flat_map(move |variant| {
                variant.args.iter().map(move |arg| Row {
                    cpu: &source.cpu,
                    opcode,
                    variant,
                    arg,
                })
            })
        })
    })
}

/// Write the header and every row as CSV. Returns the number of data rows.
pub fn write_table<W: Write>(mut out: W, sources: &[IsaSource]) -> io::Result<usize> {
    write_record(&mut out, HEADER)?;
    let mut count = 0;
    for row in rows(sources) {
        write_record(&mut out, row.cells())?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// [`write_table`] into a file, replacing it.
pub fn write_table_file(path: &Path, sources: &[IsaSource]) -> Result<usize> {
    let write = || -> io::Result<usize> {
        let file = File::create(path)?;
        write_table(BufWriter::new(file), sources)
    };
    let count = write().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {count} rows to {}", path.display());
    Ok(count)
}

fn write_record<W, I, S>(out: &mut W, cells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, cell) in cells.into_iter().enumerate() {
        if i != 0 {
            out.write_all(b",")?;
        }
        write_cell(out, cell.as_ref())?;
    }
    out.write_all(b"\r\n")
}

fn write_cell<W: Write>(out: &mut W, cell: &str) -> io::Result<()> {
    if cell.contains([',', '"', '\r', '\n']) {
        write!(out, "\"{}\"", cell.replace('"', "\"\""))
    } else {
        out.write_all(cell.as_bytes())
    }
}
