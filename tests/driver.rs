mod common;

use std::io::Write;
use std::process::Stdio;

use common::{command, lines};

#[test]
fn too_many_arguments_is_a_usage_error() {
    let output = command()
        .args(["a.lox", "b.lox"])
        .output()
        .expect("Command execution error.");
    assert_eq!(output.status.code(), Some(64));
    assert_eq!(lines(&output.stderr), vec!["Usage: loxscan [path]"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let output = command()
        .arg("tests/suite/does_not_exist.lox")
        .output()
        .expect("Command execution error.");
    assert_eq!(output.status.code(), Some(74));
    assert_eq!(
        lines(&output.stderr),
        vec!["Could not read file \"tests/suite/does_not_exist.lox\"."]
    );
}

#[test]
fn repl_scans_each_line_independently() {
    let mut child = command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Command execution error.");
    child
        .stdin
        .take()
        .expect("No stdin.")
        .write_all(b"1 @\nfun\n")
        .expect("Could not write to stdin.");
    let output = child.wait_with_output().expect("Command execution error.");

    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert_eq!(
        out,
        "> NUMBER 1 1.0\nEOF  nil\n> FUN fun nil\nEOF  nil\n> \n"
    );
    assert_eq!(
        lines(&output.stderr),
        vec!["[line 1] Error: Unexpected character."]
    );
}
