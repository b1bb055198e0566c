use std::os::unix::fs::MetadataExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use super::common::{TempDir, output_rows};

fn lsdir(args: &[&str], dir: &Path) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_lsdir"))
        .args(args)
        .arg(dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

fn aged_fixture() -> TempDir {
    let temp = TempDir::new("aged", "lsdir_cli");
    temp.write_file_aged("today.txt", 0);
    temp.write_file_aged("last_week.txt", 7);
    temp.write_file_aged("last_month.txt", 30);
    temp
}

#[test]
fn prints_path_then_header_then_rows() {
    let temp = TempDir::new("layout", "lsdir_cli");
    temp.write_file("a.rs", "fn main() {}\n");
    temp.create_dir("nested");

    let stdout = lsdir(&[], temp.path());
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines[0], format!("{}/", temp.path().display()));
    assert!(lines[1].starts_with("inode"));
    assert!(lines[1].ends_with("Last Modified"));

    let rows = output_rows(&stdout);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().any(|r| r.name == "a.rs" && r.kind == "REG" && r.size == 13));
    assert!(rows.iter().any(|r| r.name == "nested" && r.kind == "DIR"));
    assert!(rows.iter().any(|r| r.name == "." && r.kind == "DIR"));
    assert!(rows.iter().any(|r| r.name == ".." && r.kind == "DIR"));

    for row in &rows {
        let meta = std::fs::metadata(temp.path().join(&row.name)).unwrap();
        assert_eq!(row.inode, meta.ino(), "inode of {}", row.name);
    }
}

#[test]
fn trailing_separator_is_not_doubled() {
    let temp = TempDir::new("slash", "lsdir_cli");
    let with_slash = format!("{}/", temp.path().display());

    Command::new(env!("CARGO_BIN_EXE_lsdir"))
        .arg(&with_slash)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{with_slash}\n")));
}

#[test]
fn max_age_drops_older_entries() {
    let temp = aged_fixture();
    let rows = output_rows(&lsdir(&["-s", "10"], temp.path()));

    assert!(rows.iter().all(|r| r.age_days() <= 10));
    assert!(rows.iter().any(|r| r.name == "today.txt"));
    assert!(rows.iter().any(|r| r.name == "last_week.txt"));
    assert!(!rows.iter().any(|r| r.name == "last_month.txt"));
}

#[test]
fn min_age_drops_newer_entries() {
    let temp = aged_fixture();
    let rows = output_rows(&lsdir(&["-b", "5"], temp.path()));

    assert!(rows.iter().all(|r| r.age_days() >= 5));
    assert!(!rows.iter().any(|r| r.name == "today.txt"));
    assert!(rows.iter().any(|r| r.name == "last_week.txt"));
    assert!(rows.iter().any(|r| r.name == "last_month.txt"));
}

#[test]
fn both_flags_form_a_band() {
    let temp = aged_fixture();
    let rows = output_rows(&lsdir(&["-s", "10", "-b", "5"], temp.path()));

    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["last_week.txt"]);
}

#[test]
fn non_numeric_age_disables_filter() {
    let temp = aged_fixture();
    let unfiltered = output_rows(&lsdir(&[], temp.path()));
    let lenient = output_rows(&lsdir(&["-s", "soon", "-b", "0"], temp.path()));

    assert_eq!(lenient.len(), unfiltered.len());
    assert_eq!(unfiltered.len(), 5);
}
