//! CLI contract tests for the insert-example-code binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn insert_cmd() -> Command {
    Command::cargo_bin("insert-example-code").unwrap()
}

#[test]
fn too_few_arguments_print_usage_and_exit_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("out.xml");

    insert_cmd()
        .arg(tmp.path())
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    // No output document is created on a usage error.
    assert!(!output.exists());
}

#[test]
fn no_arguments_print_usage_and_exit_1() {
    insert_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn successful_run_exits_0_and_writes_output() {
    let tmp = tempfile::tempdir().unwrap();
    let example = tmp.path().join("helloworld");
    fs::create_dir(&example).unwrap();
    fs::write(example.join("main.cc"), "int main() {}\n").unwrap();

    let input = tmp.path().join("chapter.xml");
    let output = tmp.path().join("manual.xml");
    fs::write(
        &input,
        "<para><link xlink:href=\"&url_examples_base;helloworld\">Source Code</link></para>\n",
    )
    .unwrap();

    insert_cmd()
        .arg(tmp.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let result = fs::read_to_string(&output).unwrap();
    assert!(result.contains("<!-- start inserted example code -->"));
    assert!(result.contains("<![CDATA[int main() {}\n]]></programlisting>"));
}

#[test]
fn several_inputs_before_the_output() {
    let tmp = tempfile::tempdir().unwrap();
    let one = tmp.path().join("one.xml");
    let two = tmp.path().join("two.xml");
    let output = tmp.path().join("manual.xml");
    fs::write(&one, "<para>one</para>\n").unwrap();
    fs::write(&two, "<para>two</para>\n").unwrap();

    insert_cmd()
        .arg(tmp.path())
        .arg(&one)
        .arg(&two)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<para>one</para>\n<para>two</para>\n"
    );
}

#[test]
fn missing_input_fails_with_diagnostic() {
    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("manual.xml");

    insert_cmd()
        .arg(tmp.path())
        .arg(tmp.path().join("absent.xml"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.xml"));
}
