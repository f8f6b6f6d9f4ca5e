use assert_cmd::Command;
use predicates::prelude::*;

fn rozklad() -> Command {
    let mut cmd = Command::cargo_bin("rozklad").unwrap();
    cmd.args([
        "--pairs",
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/pairs.json"),
        "--info",
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/pair_info.json"),
    ]);
    cmd
}

// ============================================================
// Markdown output
// ============================================================

#[test]
fn markdown_for_odd_week() {
    // 2024-09-30 resolves to week 3 (odd).
    rozklad()
        .arg("2024-09-30")
        .assert()
        .success()
        .stdout(predicate::str::contains("Розклад на тиждень з 2024-09-30"))
        .stdout(predicate::str::contains("# Понеділок:"))
        .stdout(predicate::str::contains("Теорія ймовірностей"))
        .stdout(predicate::str::contains("# Середа:").not());
}

#[test]
fn markdown_for_even_week() {
    // 2024-10-07 resolves to week 4 (even): the odd practice drops out, the
    // even lab appears.
    rozklad()
        .arg("2024-10-07")
        .assert()
        .success()
        .stdout(predicate::str::contains("Фізика"))
        .stdout(predicate::str::contains("Теорія ймовірностей").not());
}

#[test]
fn note_appears_in_markdown() {
    rozklad()
        .arg("2024-09-30")
        .assert()
        .success()
        .stdout(predicate::str::contains("ауд. 301, корпус 2"));
}

// ============================================================
// Alternate outputs
// ============================================================

#[test]
fn json_output_is_parseable() {
    let output = rozklad().args(["2024-10-07", "--json"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["wednesday"][0]["name"], "Фізика");
    assert_eq!(v["wednesday"][0]["kind_label"], "лабораторна");
}

#[test]
fn week_flag_prints_index_and_oddity() {
    rozklad()
        .args(["2024-09-30", "--week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week 3 (odd)"));

    rozklad()
        .args(["2024-10-07", "--week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week 4 (even)"));
}

#[test]
fn output_flag_writes_file() {
    let path = std::env::temp_dir().join("rozklad-cli-test-output.md");
    let _ = std::fs::remove_file(&path);

    rozklad()
        .args(["2024-09-30", "-o"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# Понеділок:"));
    let _ = std::fs::remove_file(&path);
}

// ============================================================
// Errors
// ============================================================

#[test]
fn invalid_date_fails() {
    rozklad()
        .arg("not-a-date")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn date_before_semester_fails() {
    rozklad()
        .arg("2024-05-01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("precedes the semester start"));
}

#[test]
fn missing_catalog_file_fails() {
    Command::cargo_bin("rozklad")
        .unwrap()
        .args(["2024-09-30", "--pairs", "no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn custom_semester_start_rebases_weeks() {
    rozklad()
        .args(["2024-09-30", "--week", "--semester-start", "2024-09-23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week 2 (even)"));
}
