use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_excluded_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("App/A.swift", r#"print("Hi")"#)?;
    test.write_file("App/Tests/B.swift", r#"print("Bye")"#)?;

    let output = test.extract("App", "strings.txt")?;

    assert!(output.status.success());
    assert_eq!(test.read_file("strings.txt")?, "// A.swift\n\"Hi\"\n");
    assert!(stdout(&output).contains("Extracted 1 literal from 1 of 1 file into strings.txt"));

    Ok(())
}

#[test]
fn test_single_file_input() -> Result<()> {
    let test = CliTest::with_file(
        "Screens/LoginView.swift",
        r#"
final class LoginView: UIView {
    let title = "Welcome back"
    let icon = UIImage(named: "logo")
    let empty = ""

    required init?(coder: NSCoder) {
        fatalError("init(coder:) has not been implemented")
    }
}
"#,
    )?;

    let output = test.extract("Screens/LoginView.swift", "strings.txt")?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("strings.txt")?,
        "// LoginView.swift\n\"Welcome back\"\n"
    );

    Ok(())
}

#[test]
fn test_report_groups_by_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Sources/Settings/SettingsView.swift",
        r#"
let logout = "Log out"
alert(title: "Oops", message: "Try again")
"#,
    )?;
    test.write_file("Sources/Home.swift", "let greeting = \"Hello\"\n")?;
    test.write_file("Sources/Constants.swift", "let retries = 3\n")?;
    test.write_file("Sources/Vendor/Lib.swift", "let v = \"vendored\"\n")?;
    test.write_file("Sources/.build/Gen.swift", "let g = \"generated\"\n")?;
    test.write_file("Sources/README.md", "Some \"quoted\" text\n")?;

    let output = test.extract("Sources", "strings.txt")?;

    assert!(output.status.success());
    assert_snapshot!(test.read_file("strings.txt")?, @r#"
    // Home.swift
    "Hello"

    // SettingsView.swift
    "Log out"
    "Oops", message: "Try again"
    "#);

    Ok(())
}

#[test]
fn test_missing_input_writes_empty_report() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract("does-not-exist", "strings.txt")?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("warning: Cannot access path: "));
    assert_eq!(test.read_file("strings.txt")?, "");

    Ok(())
}

#[test]
fn test_output_is_overwritten() -> Result<()> {
    let test = CliTest::with_file("A.swift", r#"print("Hi")"#)?;
    test.write_file("strings.txt", "old report\nwith several lines\n")?;

    let output = test.extract("A.swift", "strings.txt")?;

    assert!(output.status.success());
    assert_eq!(test.read_file("strings.txt")?, "// A.swift\n\"Hi\"\n");

    Ok(())
}

#[test]
fn test_write_failure_exits_nonzero() -> Result<()> {
    let test = CliTest::with_file("A.swift", r#"print("Hi")"#)?;

    let output = test.extract("A.swift", "missing/strings.txt")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error serializing results"));
    assert!(!test.root().join("missing").exists());

    Ok(())
}
