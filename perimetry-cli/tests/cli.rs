// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use assert_cmd::Command;
use predicates::prelude::*;

fn perimetry() -> Command {
    Command::cargo_bin("perimetry").unwrap()
}

#[test]
fn shape_prints_measurements() {
    perimetry()
        .args(["shape", "--seed", "3", "--pixels", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("area\t"))
        .stdout(predicate::str::contains("boundary_pixels_order2\t"))
        .stdout(predicate::str::contains("ratio_order1\t"));
}

#[test]
fn shape_is_reproducible_with_seed() {
    let run = || {
        perimetry()
            .args(["shape", "--seed", "21", "--pixels", "40", "--order", "5"])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn shape_writes_grid() {
    let path = std::env::temp_dir().join("perimetry_cli_shape_grid.npy");

    perimetry()
        .args(["shape", "--seed", "1", "--pixels", "16", "--grid"])
        .arg(&path)
        .assert()
        .success();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(bytes.starts_with(b"\x93NUMPY"));
}

#[test]
fn ratios_writes_table() {
    let path = std::env::temp_dir().join("perimetry_cli_ratios.csv");

    perimetry()
        .args(["ratios", "--seed", "5", "--pixels", "32", "--samples", "6", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("order\tfinite\tnon_finite\tmean\tstd"))
        .stdout(predicate::str::contains("order2\t"));

    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(contents.lines().count(), 7);
    assert!(contents.lines().next().unwrap().ends_with("ratio_order2"));
}

#[test]
fn ratios_reads_config() {
    let path = std::env::temp_dir().join("perimetry_cli_config.json");
    std::fs::write(&path, r#"{"pixel_dimension": 24, "samples": 3, "seed": 8}"#).unwrap();

    perimetry()
        .args(["ratios", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("order0\t"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn ratios_rejects_invalid_arguments() {
    perimetry()
        .args(["ratios", "--points", "1", "--samples", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[perimetry::ratios] ERROR"));

    perimetry()
        .args(["ratios", "--pixels", "0"])
        .assert()
        .failure();

    perimetry()
        .args(["ratios", "--samples", "2", "-o", "ratios.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output path"));
}

#[test]
fn shape_rejects_invalid_grid_path() {
    perimetry()
        .args(["shape", "--grid", "grid.png"])
        .assert()
        .failure();
}
