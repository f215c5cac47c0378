use std::fs;
use std::path::Path;
use std::process::Command;

const HIFI3: &str = r#"{ "opcodes": [
 { "opcode": "ae_add32", "variants": [
   { "format": "x24", "slot": 0, "length": 3, "format_bits": [0],
     "opcode_bits": [16], "args": [
       { "arg": "v", "dir": "o", "reg": "AE_DR", "num_regs": "1", "flags": "r   ", "field_bits": [12] },
       { "arg": "v0", "dir": "i", "reg": "AE_DR", "num_regs": "1", "flags": "r   ", "field_bits": [8] } ] } ] },
 { "opcode": "ae_abs64", "variants": [
   { "format": "x24", "slot": 0, "length": 3, "format_bits": [0],
     "opcode_bits": [17], "args": [
       { "arg": "v", "dir": "o", "reg": "AE_DR", "num_regs": "1", "flags": "r   ", "field_bits": [12] } ] } ] } ] }"#;

const HIFI4: &str = r#"{ "opcodes": [
 { "opcode": "ae_add32", "variants": [
   { "format": "ae_format", "slot": 3, "length": 8, "format_bits": [1],
     "opcode_bits": [40], "args": [
       { "arg": "v", "dir": "m", "reg": "AE_DR", "num_regs": "1", "flags": "r   ", "field_bits": [44] } ] } ] } ] }"#;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

#[test]
fn all_writes_table_dumps_and_tablegen() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    write(d, "xtensa_hifi3.json", HIFI3);
    write(d, "xtensa_hifi4.json", HIFI4);
    write(d, "hf3list.csv", "ae_add32\n");
    write(d, "hf4list.csv", "ae_abs64,x\n");
    write(
        d,
        "features.yaml",
        "features:\n  - name: HIFI3\n    opcodes: hf3list.csv\n  - name: HIFI4\n    opcodes: hf4list.csv\n",
    );
    let out = d.join("out");

    let status = Command::new(env!("CARGO_BIN_EXE_xtgen"))
        .arg("all")
        .arg(d.join("xtensa_hifi3.json"))
        .arg(d.join("xtensa_hifi4.json"))
        .arg("--config")
        .arg(d.join("features.yaml"))
        .arg("-d")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let table = fs::read_to_string(out.join("all.csv")).unwrap();
    assert_eq!(table.lines().count(), 1 + 3 + 1);
    assert!(table.lines().any(|l| l.starts_with("hifi4,ae_add32,ae_format,3,0x2,")));

    let hifi3 = fs::read_to_string(out.join("hifi3.td")).unwrap();
    assert!(hifi3.contains("class AE_ADD32_AE_FORMAT<list<dag> pattern>"), "{hifi3}");
    assert!(hifi3.contains("@earlyclobber $v_out"));

    let hifi4 = fs::read_to_string(out.join("hifi4.td")).unwrap();
    assert!(hifi4.contains("def AE_ABS64 : AE_ABS64_X24<[(set AE_DR:$v, (int_xtensa_ae_abs64))]>;"), "{hifi4}");

    let dump = fs::read_to_string(out.join("hifi3.json")).unwrap();
    assert!(dump.contains("\"format\": \"ae_format\""));
}

#[test]
fn malformed_source_fails_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    write(d, "xtensa_bad.json", "{ \"opcodes\": 3 }");

    let output = Command::new(env!("CARGO_BIN_EXE_xtgen"))
        .arg("table")
        .arg(d.join("xtensa_bad.json"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtensa_bad.json"), "{stderr}");
}

#[test]
fn generation_needs_feature_subsets() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    write(d, "xtensa_hifi3.json", HIFI3);

    let output = Command::new(env!("CARGO_BIN_EXE_xtgen"))
        .arg("gen")
        .arg(d.join("xtensa_hifi3.json"))
        .arg("-d")
        .arg(d)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no feature subsets"));
}
