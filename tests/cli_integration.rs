//! CLI integration tests for Fleetdesk
//!
//! These tests drive the binary end to end against a data file in a
//! temporary directory, checking that commands and the interactive shell
//! persist and read back the same dataset.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the fleetdesk binary, isolated in `dir`
fn fleet_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("fleetdesk"));
    cmd.current_dir(dir.path())
        .env("FLEETDESK_CONFIG", dir.path().join("config.toml"))
        .env_remove("FLEETDESK_DATA");
    cmd
}

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("transport_data.json")
}

fn read_data(dir: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(data_path(dir)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// Create C1, D1 and V1
fn seed(dir: &TempDir) {
    fleet_cmd(dir)
        .args(["customer", "add", "C1", "--name", "Sok Dara", "--phone", "012", "--address", "Phnom Penh"])
        .assert()
        .success();
    fleet_cmd(dir)
        .args(["driver", "add", "D1", "--name", "Vann", "--phone", "011", "--license", "B-7781"])
        .assert()
        .success();
    fleet_cmd(dir)
        .args(["vehicle", "add", "V1", "--plate", "2A-1234", "--type", "truck", "--capacity", "5000"])
        .assert()
        .success();
}

fn create_shipment(dir: &TempDir, id: &str, price: &str) -> assert_cmd::assert::Assert {
    fleet_cmd(dir)
        .args([
            "shipment", "create", id, "--customer", "C1", "--driver", "D1", "--vehicle", "V1",
            "--from", "Phnom Penh", "--to", "Siem Reap", "--weight", "10.5", "--price", price,
        ])
        .assert()
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_first_add_creates_data_file() {
    let dir = TempDir::new().unwrap();
    assert!(!data_path(&dir).exists());

    seed(&dir);

    let data = read_data(&dir);
    assert_eq!(data["customers"][0]["id"], "C1");
    assert_eq!(data["drivers"][0]["license"], "B-7781");
    assert_eq!(data["vehicles"][0]["type"], "truck");
    assert_eq!(data["vehicles"][0]["capacity_kg"], 5000.0);
    assert!(data["shipments"].as_array().unwrap().is_empty());
}

#[test]
fn test_list_on_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();

    fleet_cmd(&dir)
        .args(["customer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records"));

    // Reading never writes
    assert!(!data_path(&dir).exists());
}

#[test]
fn test_data_flag_overrides_default_location() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("nested").join("fleet.json");

    fleet_cmd(&dir)
        .arg("--data")
        .arg(&custom)
        .args(["driver", "add", "D7", "--name", "Kim", "--phone", "1", "--license", "L"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!data_path(&dir).exists());
}

#[test]
fn test_config_file_sets_data_file_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "data_file = \"configured.json\"\ndefault_format = \"json\"\n",
    )
    .unwrap();

    fleet_cmd(&dir)
        .args(["customer", "add", "C1", "--name", "A", "--phone", "1", "--address", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"C1\""));

    assert!(dir.path().join("configured.json").exists());
}

#[test]
fn test_corrupt_data_file_aborts() {
    let dir = TempDir::new().unwrap();
    fs::write(data_path(&dir), "{ this is not json").unwrap();

    fleet_cmd(&dir)
        .args(["customer", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid dataset"));

    // The corrupt file is left alone
    assert_eq!(
        fs::read_to_string(data_path(&dir)).unwrap(),
        "{ this is not json"
    );
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_duplicate_customer_fails() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .args(["customer", "add", "C1", "--name", "Other", "--phone", "9", "--address", "Y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Customer ID 'C1' already exists"));

    let data = read_data(&dir);
    assert_eq!(data["customers"].as_array().unwrap().len(), 1);
    assert_eq!(data["customers"][0]["name"], "Sok Dara");
}

#[test]
fn test_edit_changes_only_given_field() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .args(["customer", "edit", "C1", "--phone", "099"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated customer C1"));

    let data = read_data(&dir);
    assert_eq!(data["customers"][0]["phone"], "099");
    assert_eq!(data["customers"][0]["name"], "Sok Dara");
    assert_eq!(data["customers"][0]["address"], "Phnom Penh");
}

#[test]
fn test_edit_without_fields_changes_nothing() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let before = fs::read_to_string(data_path(&dir)).unwrap();

    fleet_cmd(&dir)
        .args(["driver", "edit", "D1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));

    assert_eq!(fs::read_to_string(data_path(&dir)).unwrap(), before);
}

#[test]
fn test_edit_to_same_value_reports_no_changes() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .args(["customer", "edit", "C1", "--name", "Sok Dara"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to customer C1"));
}

#[test]
fn test_vehicle_edit_with_bad_capacity_keeps_old_value() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .args(["vehicle", "edit", "V1", "--plate", "3B-9999", "--capacity", "heavy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("capacity_kg 'heavy' is not valid"));

    let data = read_data(&dir);
    assert_eq!(data["vehicles"][0]["plate"], "3B-9999");
    assert_eq!(data["vehicles"][0]["capacity_kg"], 5000.0);
}

#[test]
fn test_vehicle_add_rejects_non_numeric_capacity() {
    let dir = TempDir::new().unwrap();

    fleet_cmd(&dir)
        .args(["vehicle", "add", "V1", "--plate", "P", "--type", "van", "--capacity", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid capacity_kg"));

    assert!(!data_path(&dir).exists());
}

#[test]
fn test_remove_missing_and_existing() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .args(["vehicle", "remove", "V9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vehicle 'V9' not found"));

    fleet_cmd(&dir)
        .args(["vehicle", "remove", "V1"])
        .assert()
        .success();

    let data = read_data(&dir);
    assert!(data["vehicles"].as_array().unwrap().is_empty());
    assert_eq!(data["customers"].as_array().unwrap().len(), 1);
}

#[test]
fn test_show_json() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    let output = fleet_cmd(&dir)
        .args(["--format", "json", "customer", "show", "C1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Sok Dara");
}

// =============================================================================
// Shipments
// =============================================================================

#[test]
fn test_shipment_with_unknown_customer_fails() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    fleet_cmd(&dir).args(["customer", "remove", "C1"]).assert().success();

    create_shipment(&dir, "S1", "99.99")
        .failure()
        .stderr(predicate::str::contains("Customer ID 'C1' does not exist"));

    assert!(read_data(&dir)["shipments"].as_array().unwrap().is_empty());
}

#[test]
fn test_shipment_lifecycle_and_search() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    create_shipment(&dir, "S1", "99.99")
        .success()
        .stdout(predicate::str::contains("status Pending"));

    let data = read_data(&dir);
    let shipment = &data["shipments"][0];
    assert_eq!(shipment["status"], "Pending");
    assert_eq!(shipment["weight_kg"], 10.5);
    assert_eq!(shipment["price_usd"], 99.99);
    let created_at = shipment["created_at"].as_str().unwrap().to_string();
    assert_eq!(created_at.len(), 19);

    fleet_cmd(&dir)
        .args(["shipment", "status", "S1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S1 is now Delivered"));

    let output = fleet_cmd(&dir)
        .args(["-f", "json", "shipment", "search", "status", "DELIVERED"])
        .output()
        .unwrap();
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["id"], "S1");

    fleet_cmd(&dir)
        .args(["shipment", "status", "S1", "cancelled"])
        .assert()
        .success();

    let output = fleet_cmd(&dir)
        .args(["-f", "json", "shipment", "search", "status", "delivered"])
        .output()
        .unwrap();
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(results.as_array().unwrap().is_empty());

    // created_at never changes
    assert_eq!(read_data(&dir)["shipments"][0]["created_at"], created_at.as_str());
}

#[test]
fn test_invalid_status_is_rejected() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    create_shipment(&dir, "S1", "10").success();

    fleet_cmd(&dir)
        .args(["shipment", "status", "S1", "lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));

    fleet_cmd(&dir)
        .args(["shipment", "status", "S9", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shipment 'S9' not found"));
}

#[test]
fn test_search_unknown_field_is_empty() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    create_shipment(&dir, "S1", "10").success();

    fleet_cmd(&dir)
        .args(["shipment", "search", "origin", "Phnom Penh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records"));
}

#[test]
fn test_report_excludes_cancelled_income() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    create_shipment(&dir, "S1", "100").success();
    create_shipment(&dir, "S2", "200").success();
    create_shipment(&dir, "S3", "50").success();
    fleet_cmd(&dir).args(["shipment", "status", "S2", "Delivered"]).assert().success();
    fleet_cmd(&dir).args(["shipment", "status", "S3", "4"]).assert().success();

    let output = fleet_cmd(&dir)
        .args(["--format", "json", "report"])
        .output()
        .unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_shipments"], 3);
    assert_eq!(summary["total_income"], 300.0);
    assert_eq!(summary["cancelled"], 1);

    fleet_cmd(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income($) : 300.00"));
}

// =============================================================================
// Interactive shell
// =============================================================================

#[test]
fn test_shell_is_default_and_persists() {
    let dir = TempDir::new().unwrap();

    fleet_cmd(&dir)
        .write_stdin("1\n1\nC1\nDara\n012\nPhnom Penh\n2\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added customer C1"))
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(read_data(&dir)["customers"][0]["address"], "Phnom Penh");
}

#[test]
fn test_shell_survives_errors_and_end_of_input() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fleet_cmd(&dir)
        .arg("shell")
        .write_stdin("4\n1\nS1\nC1\nD404\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Driver ID 'D404' does not exist"))
        .stdout(predicate::str::contains("REPORT SUMMARY"));
}

#[test]
fn test_verbose_mode() {
    let dir = TempDir::new().unwrap();

    fleet_cmd(&dir)
        .args(["--verbose", "report"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:store]"));
}
