use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn attendance(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("attendance").unwrap();
    cmd.env("ATTENDANCE_CLI_DATA_DIR", data_dir.path())
        .env("LC_ALL", "en_US.UTF-8")
        .env_remove("ATTENDANCE_LOG");
    cmd
}

#[test]
fn days_counts_leap_february() {
    let data_dir = TempDir::new().unwrap();
    attendance(&data_dir)
        .args(["days", "--month", "2", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024: 29 days"));
}

#[test]
fn days_rolls_over_out_of_range_month() {
    let data_dir = TempDir::new().unwrap();
    attendance(&data_dir)
        .args(["--month", "14", "--year", "2023", "days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February").and(predicate::str::contains("29 days")));
}

#[test]
fn show_prints_totals() {
    let data_dir = TempDir::new().unwrap();
    let values = data_dir.path().join("values.csv");
    std::fs::write(&values, "1,4,1\n2,6\n").unwrap();

    attendance(&data_dir)
        .args(["show", "-m", "2", "-y", "2024", "--values"])
        .arg(&values)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Attendance Report - February 2024")
                .and(predicate::str::contains("Total"))
                .and(predicate::str::contains("10")),
        );
}

#[test]
fn export_csv_writes_named_file() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    attendance(&data_dir)
        .args(["export", "--month", "2", "--year", "2024", "--format", "csv", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("attendance_report_February_2024.csv"));

    let written = out_dir.path().join("attendance_report_February_2024.csv");
    let contents = std::fs::read_to_string(written).unwrap();
    assert_eq!(contents.lines().count(), 31);
    assert!(contents.lines().last().unwrap().starts_with("Total"));
}

#[test]
fn export_defaults_to_pdf() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    attendance(&data_dir)
        .args(["export", "-m", "12", "-y", "2023", "--output"])
        .arg(out_dir.path())
        .assert()
        .success();

    let bytes = std::fs::read(out_dir.path().join("attendance_report_December_2023.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn export_rejects_day_outside_month() {
    let data_dir = TempDir::new().unwrap();
    let values = data_dir.path().join("values.csv");
    std::fs::write(&values, "30,1\n").unwrap();

    attendance(&data_dir)
        .args(["export", "-m", "2", "-y", "2024", "--values"])
        .arg(&values)
        .arg("--output")
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("day 30 is not in"));
}

#[test]
fn config_prints_paths() {
    let data_dir = TempDir::new().unwrap();
    attendance(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json").and(predicate::str::contains("Log level")));
}
