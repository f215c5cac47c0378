mod common;

use std::fs;

use common::{opcode_json, write_source};
use xtgen_isa::{BitMask, mask_from_bits};
use xtgen_loader::{FeatureSubsets, load_sources, merge_sources, table};

#[test]
fn later_file_wins_per_subset() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_source(
        dir.path(),
        "hifi3",
        &[opcode_json("ae_add32", "ae_format", 3), opcode_json("ae_sub32", "x24", 0)],
    );
    let second = write_source(dir.path(), "hifi4", &[opcode_json("ae_add32", "ae_format48", 7)]);

    let features = FeatureSubsets::new()
        .with("HIFI3", ["ae_add32", "ae_sub32"])
        .unwrap();

    let forward = merge_sources(&load_sources(&[&first, &second]).unwrap(), &features);
    let add = &forward.get("HIFI3").unwrap()["ae_add32"].variants[0];
    assert_eq!((add.format.as_str(), add.slot), ("ae_format48", 7));

    let reverse = merge_sources(&load_sources(&[&second, &first]).unwrap(), &features);
    let add = &reverse.get("HIFI3").unwrap()["ae_add32"].variants[0];
    assert_eq!((add.format.as_str(), add.slot), ("ae_format", 3));
}

#[test]
fn table_covers_every_tuple() {
    let dir = tempfile::tempdir().unwrap();
    let ops = |cpu: &str| {
        let opcodes: Vec<String> = ["a", "b", "c"]
            .iter()
            .map(|n| opcode_json(n, "x24", 0))
            .collect();
        write_source(dir.path(), cpu, &opcodes)
    };
    let paths = [ops("hifi3"), ops("hifi4")];
    let sources = load_sources(&paths).unwrap();

    let out = dir.path().join("all.csv");
    assert_eq!(table::write_table_file(&out, &sources).unwrap(), 12);

    let text = fs::read_to_string(&out).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows.iter().filter(|r| r.starts_with("hifi3,")).count(), 6);
    assert_eq!(rows.iter().filter(|r| r.starts_with("hifi4,")).count(), 6);
}

#[test]
fn table_masks_parse_back_to_codec_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "hifi3", &[opcode_json("ae_add32", "x24", 0)]);
    let sources = load_sources(&[path]).unwrap();

    let mut buf = Vec::new();
    table::write_table(&mut buf, &sources).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let first: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();

    let parse = |cell: &str| BitMask::from_str_radix(cell.trim_start_matches("0x"), 16).unwrap();
    assert_eq!(parse(first[4]), mask_from_bits(&[0u32, 1, 2]));
    assert_eq!(parse(first[5]), mask_from_bits(&[16u32, 20]));
    assert_eq!(parse(first[11]), mask_from_bits(&[12u32, 13, 14, 15]));
}

#[test]
fn malformed_source_aborts_loading() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_source(dir.path(), "hifi3", &[opcode_json("ae_add32", "x24", 0)]);
    let bad = dir.path().join("xtensa_bad.json");
    fs::write(&bad, "{ \"opcodes\": [ { \"opcode\": \"x\" } ] }").unwrap();

    let err = load_sources(&[good, bad]).unwrap_err();
    assert!(err.to_string().contains("xtensa_bad.json"), "{err}");
}
