use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;

const BINARY_NAME: &str = "kiva-explore";

const TOTALS: &str = "\
country,ISO,MPI,GII
Albania,ALB,0.005,0.238
Mali,MLI,0.457,0.678
";

const GENDERS: &str = "\
country,ISO,Female,Male,Mixed
Albania,ALB,120,80,4
Mali,MLI,2100,900,310
";

const SECTORS: &str = "\
,ISO,country,Agriculture,Retail
0,ALB,Albania,40,20
1,MLI,Mali,1200,600
";

const MPI: &str = "\
country,ISO,MPI
Albania,ALB,0.005
Mali,MLI,0.457
";

/// Helper to get a temporary directory that doubles as $HOME
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn write_data(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("totals.csv"), TOTALS).unwrap();
    fs::write(dir.join("genders.csv"), GENDERS).unwrap();
    fs::write(dir.join("sectors.csv"), SECTORS).unwrap();
    fs::write(dir.join("mpi.csv"), MPI).unwrap();
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("inspect"))
        .stdout(contains("init-config"));
}

#[test]
/// init-config writes a loadable default configuration.
fn init_config_writes_defaults() {
    let tmp = temp_dir();
    let config_path = tmp.path().join("nested").join("config.json");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init-config")
        .arg(&config_path)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Config written"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(written["port"], 8050);
    assert_eq!(written["default_iso"], "ALB");
    assert_eq!(written["default_metric"], "MPI");
}

#[test]
/// inspect prints the selection's views as JSON.
fn inspect_prints_selection_views() {
    let tmp = temp_dir();
    let data_dir = tmp.path().join("data");
    write_data(&data_dir);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    let output = cmd
        .arg("inspect")
        .arg("--iso")
        .arg("mli")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--assets-dir")
        .arg(tmp.path().join("assets"))
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Find your perfect borrower in Mali now."))
        .stdout(contains("https://www.kiva.org/lend?country=ML"))
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["state"]["selection"], "MLI");
    assert_eq!(report["state"]["metric"], "MPI");
    assert_eq!(report["updates"].as_array().unwrap().len(), 8);
}

#[test]
/// The config file is honored and flags override it.
fn inspect_uses_config_file() {
    let tmp = temp_dir();
    let data_dir = tmp.path().join("data");
    write_data(&data_dir);
    let config_path = tmp.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "data_dir": "/does/not/exist",
            "link_template": "https://example.org/{code}"
        })
        .to_string(),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("inspect")
        .arg("--iso")
        .arg("ALB")
        .arg("--metric")
        .arg("gii")
        .arg("--config")
        .arg(&config_path)
        .arg("--data-dir")
        .arg(&data_dir)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("https://example.org/AL"))
        .stdout(contains("GII by Country"));
}

#[test]
/// A missing data directory is fatal.
fn missing_data_dir_fails() {
    let tmp = temp_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("inspect")
        .arg("--iso")
        .arg("MLI")
        .arg("--data-dir")
        .arg(tmp.path().join("missing"))
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("could not load its data"));
}

#[test]
/// An invalid country code is rejected before anything is loaded.
fn inspect_rejects_invalid_iso() {
    let tmp = temp_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("inspect")
        .arg("--iso")
        .arg("Mali")
        .env("HOME", tmp.path())
        .assert()
        .failure();
}
