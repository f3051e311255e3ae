use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn check_single_variable_equation() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("x^3 + x = 2");

    cmd.assert()
        .success()
        .stdout("this is an equation in 1 variable of degree 3\n");
}

#[test]
fn check_fails_when_any_argument_is_not_an_equation() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("x = 1").arg("x + = 1");

    cmd.assert().code(1).stdout(
        predicate::str::contains("this is an equation in 1 variable of degree 1")
            .and(predicate::str::contains("this is not an equation")),
    );
}

#[test]
fn check_several_variables_still_succeeds() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("x + y = 1");

    cmd.assert()
        .success()
        .stdout("this is an equation, but not in 1 variable\n");
}

#[test]
fn check_equation_starting_with_minus() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("--").arg("-x^2 + 3 = 0");

    cmd.assert()
        .success()
        .stdout("this is an equation in 1 variable of degree 2\n");
}

#[test]
fn check_json_format() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("--format").arg("json").arg("x^4 = 1");

    cmd.assert().success().stdout(
        predicate::str::starts_with("{\"source\":\"x^4 = 1\"")
            .and(predicate::str::contains("\"degree\":4")),
    );
}

#[test]
fn check_flag_after_equation() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.args(["x = 1", "--format", "json"]);

    cmd.assert().success().stdout(
        predicate::str::starts_with("{\"source\":\"x = 1\"")
            .and(predicate::str::contains("not an equation").not()),
    );
}

#[test]
fn check_with_combinator_backend() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.args(["--backend", "combinator", "--format", "json", "2x = 4"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"backend\":\"combinator\""));
}

#[test]
fn check_with_token_echo() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.args(["--show-tokens", "x^2=1"]);

    cmd.assert().success().stdout(
        "the token list is x ^ 2 = 1\nthis is an equation in 1 variable of degree 2\n",
    );
}

#[test]
fn session_reads_until_sentinel() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.write_stdin("x^5=0\nx=0\n!\nx^9=0\n");

    cmd.assert().success().stdout(
        "give an equation: this is an equation in 1 variable of degree 5\n\
         give an equation: this is an equation in 1 variable of degree 1\n\
         give an equation: good bye\n",
    );
}

#[test]
fn session_ends_at_end_of_input() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.write_stdin("x +\n");

    cmd.assert()
        .success()
        .stdout("give an equation: this is not an equation\ngive an equation: \ngood bye\n");
}

#[test]
fn session_survives_invalid_utf8_line() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.write_stdin(&b"x = \xff\nx = 1\n!\n"[..]);

    cmd.assert().success().stdout(
        "give an equation: this is not an equation\n\
         give an equation: this is an equation in 1 variable of degree 1\n\
         give an equation: good bye\n",
    );
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("polyeq.toml"),
        "[session]\nprompt = \"eq? \"\nfarewell = \"ciao\"\n",
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.current_dir(dir.path()).write_stdin("x^2 = 1\n!\n");

    cmd.assert()
        .success()
        .stdout("eq? this is an equation in 1 variable of degree 2\neq? ciao\n");
}

#[test]
fn explicit_config_file_layers_over_local_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("polyeq.toml"),
        "[output]\nformat = \"yaml\"\n",
    )
    .expect("write local config");
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[output]\nformat = \"json\"\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&explicit)
        .arg("x = 1");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{\"source\""));
}

#[test]
fn config_file_customizes_session() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "[session]\nprompt = \"> \"\nsentinel = \"quit\"\nfarewell = \"bye\""
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("--config").arg(file.path()).write_stdin("x = 2\nquit\n");

    cmd.assert()
        .success()
        .stdout("> this is an equation in 1 variable of degree 1\n> bye\n");
}

#[test]
fn format_flag_overrides_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[output]\nformat = \"json\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("--config")
        .arg(file.path())
        .args(["--format", "text", "x = 1"]);

    cmd.assert()
        .success()
        .stdout("this is an equation in 1 variable of degree 1\n");
}

#[test]
fn unknown_format_is_an_error() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.args(["--format", "xml", "x = 1"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Format 'xml' not supported"));
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.args(["--config", "/nonexistent/polyeq.toml", "x = 1"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("polyeq");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("Available output formats")
            .and(predicate::str::contains("text"))
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}
