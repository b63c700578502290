use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn pagesim(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pagesim")).args(args).output()?)
}

/// Test that a run prints the summary table and statistics
#[test]
fn test_cli_run_text() -> Result<()> {
    let output = pagesim(&["run", "--policy", "lru", "--frames", "3", "7,0,1,2,0,3,0,4"])?;
    assert!(output.status.success(), "CLI run command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Least Recently Used (LRU) Simulator (3 frames)"));
    assert!(stdout.contains("(8 rows)"));
    assert!(stdout.contains("Page faults:    6"));
    assert!(stdout.contains("Hit ratio:      25.00%"));
    Ok(())
}

/// Test that JSON output is the serialized result
#[test]
fn test_cli_run_json() -> Result<()> {
    let output = pagesim(&["run", "-p", "fifo", "-f", "2", "--format", "json", "1,2,1"])?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["policy"], "fifo");
    assert_eq!(json["steps"].as_array().map(|s| s.len()), Some(3));
    assert_eq!(json["steps"][2]["fault"], false);
    Ok(())
}

/// Test reading the reference string from a file
#[test]
fn test_cli_reference_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5")?;

    let path = file.path().to_string_lossy().to_string();
    let output = pagesim(&["compare", "--frames", "3", "--file", &path])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Fewest faults: Optimal (7)"));
    Ok(())
}

/// Test that invalid input is reported and the process fails
#[test]
fn test_cli_rejects_bad_input() -> Result<()> {
    let output = pagesim(&["run", "1,x,3"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Invalid reference string"));

    let output = pagesim(&["run", "--frames", "0", "1,2"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Number of frames must be between 1 and 10"));
    Ok(())
}

#[test]
fn test_cli_describe() -> Result<()> {
    let output = pagesim(&["describe", "optimal"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Optimal Algorithm"));
    Ok(())
}

/// Test the shell with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_pagesim"))
        .current_dir(temp_dir.path())
        .args(["shell", "-p", "fifo", "-f", "2", "1,2,3"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(b"next\nnext\nstats\nexit\n")?;
    }
    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Step 3 of 3"));
    assert!(stdout.contains("Page faults:    3"));
    assert!(stdout.contains("Goodbye!"));
    Ok(())
}
