//! Integration tests for the flow-demo binary

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED_STDOUT: &str = "\
Mayor de edad
Muy bueno
Entre 11 y 20
Primera iteracion
Iteracion intermedia
Iteracion intermedia
Iteracion intermedia
Ultima iteracion
Alto
Alto
Alto
Medio
Medio
Medio
Medio
Bajo
Bajo
Bajo
Diferentes
x es menor
x menor o igual a 10
6
5
Esta activo
Fin del programa
";

#[test]
fn test_cli_prints_walkthrough() {
    let mut cmd = Command::cargo_bin("flow-demo").unwrap();
    cmd.assert().success().stdout(EXPECTED_STDOUT);
}

#[test]
fn test_cli_repeated_runs_match() {
    for _ in 0..2 {
        Command::cargo_bin("flow-demo")
            .unwrap()
            .assert()
            .success()
            .stdout(EXPECTED_STDOUT);
    }
}

#[test]
fn test_cli_logging_stays_off_stdout() {
    let mut cmd = Command::cargo_bin("flow-demo").unwrap();
    cmd.arg("-vvv");
    cmd.assert()
        .success()
        .stdout(EXPECTED_STDOUT)
        .stderr(predicate::str::contains("walkthrough completed"));
}

#[test]
fn test_cli_json_logging() {
    let mut cmd = Command::cargo_bin("flow-demo").unwrap();
    cmd.args(["--log", "info", "--log-format", "json"]);
    cmd.assert()
        .success()
        .stdout(EXPECTED_STDOUT)
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}

#[test]
fn test_cli_quiet_is_silent_on_stderr() {
    let mut cmd = Command::cargo_bin("flow-demo").unwrap();
    cmd.arg("--quiet");
    cmd.assert()
        .success()
        .stdout(EXPECTED_STDOUT)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("flow-demo").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(target_os = "linux")]
#[test]
fn test_cli_full_stdout_fails() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_flow-demo"))
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    output
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "could not write the walkthrough to stdout",
        ));
}
