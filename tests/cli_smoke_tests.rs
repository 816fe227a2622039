use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "books_core_cli";

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BOOKS_CORE_CLI_SCRIPT", "1");
    cmd.env("BOOKS_CORE_HOME", home.path());
    cmd
}

#[test]
fn cli_help_command_prints_overview() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"));
}

#[test]
fn cli_version_command_prints_version_info() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("Books Core"));
}

#[test]
fn cli_dashboard_reports_empty_books() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("dashboard\nexit\n")
        .assert()
        .success()
        .stdout(contains("Finance Summary"));
}
