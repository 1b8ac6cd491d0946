//! End-to-end CLI tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = "dialect: mysql\n";

const SNAPSHOT: &str = r#"
tables:
  - name: users
    columns:
      - name: id
        raw_type:
          name: INT
          native: INT
        nullable: false
        primary_key: true
      - name: active
        raw_type:
          name: TINYINT
          display_width: 1
          native: TINYINT(1)
      - name: balance
        raw_type:
          name: DECIMAL
          precision: 10
          scale: 2
          native: DECIMAL(10, 2)
data:
  users:
    - id: 1
      active: 1
      balance: "0E-8"
    - id: 2
      active: 0
      balance: "12.50"
"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn dbexport() -> Command {
    Command::cargo_bin("dbexport").unwrap()
}

#[test]
fn test_generate_writes_all_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", CONFIG);
    let snapshot = write(dir.path(), "snapshot.yaml", SNAPSHOT);
    let out = dir.path().join("out");

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    let mysql = fs::read_to_string(out.join("mysql_table.sql")).unwrap();
    // same-dialect output keeps the native type text
    assert!(mysql.contains("TINYINT(1)"), "{}", mysql);
    assert!(mysql.contains("DROP TABLE IF EXISTS users;"));
    assert!(mysql.contains("PRIMARY KEY (id)"));

    let sqlite = fs::read_to_string(out.join("sqlite_table.sql")).unwrap();
    assert!(sqlite.contains("balance TEXT"), "{}", sqlite);
    assert!(sqlite.contains("active  INTEGER"), "{}", sqlite);

    let schemas = fs::read_to_string(out.join("schemas.py")).unwrap();
    assert!(schemas.contains("class UsersSchema(Schema):"));
    assert!(schemas.contains("balance = fields.Decimal(places=2)"));

    let data: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("data.json")).unwrap()).unwrap();
    assert_eq!(data["users"][0]["balance"], serde_json::json!("0.0"));
    assert_eq!(data["users"][1]["balance"], serde_json::json!("12.50"));
}

#[test]
fn test_generate_skips_data_file_without_rows() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", CONFIG);
    let snapshot = write(
        dir.path(),
        "snapshot.yaml",
        "tables:\n  - name: users\n    columns:\n      - name: id\n        raw_type:\n          name: INT\n",
    );
    let out = dir.path().join("out");

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("mysql_table.sql").exists());
    assert!(!out.join("data.json").exists());
}

#[test]
fn test_excluded_tables_do_not_appear() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "config.yaml",
        "dialect: mysql\nexclude_tables:\n  - audit_log\n",
    );
    let snapshot = write(
        dir.path(),
        "snapshot.yaml",
        r#"
tables:
  - name: users
    columns:
      - name: id
        raw_type:
          name: INT
  - name: audit_log
    columns:
      - name: id
        raw_type:
          name: INT
"#,
    );
    let out = dir.path().join("out");

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    let mysql = fs::read_to_string(out.join("mysql_table.sql")).unwrap();
    assert!(mysql.contains("users"));
    assert!(!mysql.contains("audit_log"));
}

#[test]
fn test_invalid_dialect_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", "dialect: postgres\n");
    let snapshot = write(dir.path(), "snapshot.yaml", "tables: []\n");

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no such dialect: postgres"));
}

#[test]
fn test_missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", CONFIG);

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--snapshot")
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_check_reports_unclassifiable_columns() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", CONFIG);
    let snapshot = write(
        dir.path(),
        "snapshot.yaml",
        r#"
tables:
  - name: widgets
    columns:
      - name: id
        raw_type:
          name: INT
      - name: payload
        raw_type:
          name: BLOB
          native: BLOB
"#,
    );

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN widgets.payload (BLOB)"))
        .stdout(predicate::str::contains("1 unclassifiable columns"));
}

#[test]
fn test_check_clean_snapshot() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.yaml", CONFIG);
    let snapshot = write(dir.path(), "snapshot.yaml", SNAPSHOT);

    dbexport()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("all columns classified"));
}
