use std::fs;
use std::path::{Path, PathBuf};

/// JSON for one opcode with a single `x24` variant and two args.
pub fn opcode_json(name: &str, format: &str, slot: u32) -> String {
    format!(
        r#"{{ "opcode": "{name}", "variants": [
          {{ "format": "{format}", "slot": {slot}, "length": 3,
            "format_bits": [0, 1, 2], "opcode_bits": [16, 20],
            "args": [
              {{ "arg": "arr", "dir": "o", "reg": "AR", "num_regs": "1",
                "flags": "r   ", "field_bits": [12, 13, 14, 15] }},
              {{ "arg": "ars", "dir": "i", "reg": "AR", "num_regs": "1",
                "flags": "r   ", "field_bits": [8, 9, 10, 11] }} ] }} ] }}"#
    )
}

/// Write `xtensa_<cpu>.json` holding the given opcode JSON snippets.
pub fn write_source(dir: &Path, cpu: &str, opcodes: &[String]) -> PathBuf {
    let path = dir.join(format!("xtensa_{cpu}.json"));
    fs::write(&path, format!("{{ \"opcodes\": [{}] }}", opcodes.join(","))).unwrap();
    path
}
