use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::io::Write;

#[test]
fn quits_cleanly() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("rbank")?;
    cmd.write_stdin("q\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("================ MENU ================")
                .and(predicate::str::contains("Leaving the system. Goodbye!")),
        );
    Ok(())
}

#[test]
fn flags_override_config_file() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "branch": "0100", "withdrawal_limit": 50 }}"#)?;

    let mut cmd = Command::cargo_bin("rbank")?;
    cmd.arg("--config")
        .arg(file.path())
        .args(["--max-withdrawals", "1"])
        .write_stdin("nu\n1\nAna\n01-01-1990\nRua A\nnc\n1\nd\n1\n100\ns\n1\n60\ns\n1\n10\ns\n1\n10\nlc\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Branch:\t\t0100")
                .and(predicate::str::contains("exceeds the withdrawal limit of 50"))
                .and(predicate::str::contains("Withdrawal count limit reached (1 withdrawals)")),
        );
    Ok(())
}

#[test]
fn malformed_config_fails_at_startup() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "not json")?;

    let mut cmd = Command::cargo_bin("rbank")?;
    cmd.arg("--config")
        .arg(file.path())
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Json"));
    Ok(())
}

#[test]
fn rejected_deposit_stays_off_the_default_log() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("rbank")?;
    cmd.env_remove("RUST_LOG")
        .write_stdin("nu\n1\nAna\n01-01-1990\nRua A\nnc\n1\nd\n1\n0\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid deposit"))
        .stderr(predicate::str::contains("command rejected").not());
    Ok(())
}
