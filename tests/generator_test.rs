mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_generate_simple_csv() {
    let output_path = std::path::PathBuf::from("test_generated.csv");
    common::generate_csv(&output_path, 5).expect("Failed to generate CSV");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 5 rows = 6 lines
    assert_eq!(content.lines().count(), 6);

    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_generated_portfolio_allocates() {
    let output_path = std::path::PathBuf::from("test_gen_portfolio.csv");
    common::generate_csv(&output_path, 500).expect("Failed to generate CSV");

    let mut cmd = Command::new(cargo_bin!("paysplit"));
    cmd.arg(&output_path).arg("25000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id,amount,percentage"));

    std::fs::remove_file(output_path).ok();
}
