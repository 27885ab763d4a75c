use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}

#[test]
fn test_single_argument_prints_usage() -> Result<()> {
    let test = CliTest::with_file("A.swift", r#"print("Hi")"#)?;

    let output = test.command().arg("A.swift").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[INPUT]"));
    assert!(out.contains("[OUTPUT]"));

    Ok(())
}
