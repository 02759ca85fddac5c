use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const DOCUMENTED_CS: &str = r#"namespace Demo
{
    public class Calculator
    {
        /// <summary>
        /// Adds two numbers.
        /// </summary>
        public int Add(int a, int b)
        {
            return a + b;
        }

        public void Reset()
        {
            return;
        }
    }
}
"#;

const BARE_CS: &str = r#"class Worker
{
    /// Stops the worker.
    void Stop() { return; }
}
"#;

// Runs the binary against an isolated config file inside `dir`.
fn csdoc(dir: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("csdoc")?;
    cmd.env("CSDOC_CONFIG_PATH", dir.join("config.toml"));
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_extract_prints_documented_units() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("Calculator.cs");
    fs::write(&file, DOCUMENTED_CS)?;

    csdoc(dir.path())?
        .arg("extract")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/// <summary>\n/// Adds two numbers.\n/// </summary>\npublic int Add(int a, int b)",
        ))
        .stdout(predicate::str::contains("public void Reset()").not());
    Ok(())
}

#[test]
fn test_extract_directory_as_json() -> Result<()> {
    let dir = tempdir()?;
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("nested"))?;
    fs::write(src.join("Calculator.cs"), DOCUMENTED_CS)?;
    fs::write(src.join("nested").join("Worker.cs"), BARE_CS)?;
    fs::write(src.join("notes.txt"), "/// not code")?;

    let output = csdoc(dir.path())?
        .arg("extract")
        .arg(&src)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let reports: Value = serde_json::from_slice(&output.stdout)?;
    let reports = reports.as_array().expect("array of reports");
    assert_eq!(reports.len(), 2);

    assert!(reports[0]["file_path"].as_str().unwrap().ends_with("Calculator.cs"));
    assert_eq!(reports[0]["units"].as_array().unwrap().len(), 1);
    assert_eq!(reports[0]["has_value_return"], Value::Bool(true));

    assert!(reports[1]["file_path"].as_str().unwrap().ends_with("Worker.cs"));
    assert_eq!(reports[1]["units"][0]["doc_lines"][0], "/// Stops the worker.");
    assert_eq!(reports[1]["has_value_return"], Value::Bool(false));
    Ok(())
}

#[test]
fn test_extract_missing_path_fails() -> Result<()> {
    let dir = tempdir()?;
    csdoc(dir.path())?
        .arg("extract")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_extract_respects_size_limit() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("config.toml"),
        "[extraction]\nmax_file_size_bytes = 16\n",
    )?;
    let file = dir.path().join("Calculator.cs");
    fs::write(&file, DOCUMENTED_CS)?;

    csdoc(dir.path())?
        .arg("extract")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the limit"));
    Ok(())
}

#[test]
fn test_returns_reports_value() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("Calculator.cs");
    fs::write(&file, DOCUMENTED_CS)?;

    let output = csdoc(dir.path())?
        .arg("returns")
        .arg(&file)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["has_value_return"], Value::Bool(true));
    let returns = report["returns"].as_array().unwrap();
    assert_eq!(returns.len(), 2);
    assert_eq!(returns[0]["has_value"], Value::Bool(true));
    assert_eq!(returns[1]["has_value"], Value::Bool(false));
    Ok(())
}

#[test]
fn test_returns_bare_only() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("Worker.cs");
    fs::write(&file, BARE_CS)?;

    csdoc(dir.path())?
        .arg("returns")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Has return value: false"));
    Ok(())
}

#[test]
fn test_demo_prints_sample() -> Result<()> {
    let dir = tempdir()?;
    csdoc(dir.path())?
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/// <summary>\n/// This method adds two numbers."))
        .stdout(predicate::str::contains("Has return value: true"));
    Ok(())
}

#[test]
fn test_config_init_then_show() -> Result<()> {
    let dir = tempdir()?;
    csdoc(dir.path())?
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    csdoc(dir.path())?
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    csdoc(dir.path())?
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doc_comment_marker = \"///\""));
    Ok(())
}

#[test]
fn test_config_init_force_repairs_malformed_file() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("config.toml"), "scan = [not toml")?;

    csdoc(dir.path())?
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));

    csdoc(dir.path())?
        .args(["config", "init", "--force"])
        .assert()
        .success();

    csdoc(dir.path())?
        .arg("demo")
        .assert()
        .success();
    Ok(())
}
