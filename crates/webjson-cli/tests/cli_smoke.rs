use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-depth"));
    Ok(())
}

#[test]
fn encode_outputs_ascii_json() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("{\n  \"a\": \"<caf\u{e9}>\",\n  \"b\": [true, 1.5]\n}\n")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert!(out.is_ascii());
    assert!(!out.contains('<'));
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v, serde_json::json!({"a": "<caf\u{e9}>", "b": [true, 1.5]}));
    Ok(())
}

#[test]
fn reads_stdin_when_no_file_given() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .write_stdin("[1, \"x/y\"]")
        .assert()
        .success()
        .stdout("[1,\"x/y\"]\n");
    Ok(())
}

#[test]
fn max_depth_is_enforced() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("[[1]]")?;
    Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg("--max-depth")
        .arg("1")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular reference"));
    Ok(())
}

#[test]
fn unsafe_integers_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("{\"n\": 9007199254740993}")?;
    Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn invalid_input_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("{not json")?;
    Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
    Ok(())
}

#[test]
fn decode_passes_json_through() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file("{\"a\": 2}")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg("--decode")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v_out: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v_out, serde_json::json!({"a": 2}));
    Ok(())
}

#[test]
fn max_depth_above_parser_default_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let deep = format!("{}{}", "[".repeat(150), "]".repeat(150));
    let tmp = input_file(&deep)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg("--max-depth")
        .arg("200")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?.trim_end(), deep);

    Command::new(assert_cmd::cargo::cargo_bin!("webjson-cli"))
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular reference"));
    Ok(())
}
