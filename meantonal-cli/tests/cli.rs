use std::{
    fs,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;
use serde_yaml::Value;

macro_rules! check_output {
    ($file_name:literal, $actual:expr) => {
        check_output(&$actual, include_str!($file_name), $file_name);
    };
}

fn check_output(actual: &[u8], expected: &str, file_name: &str) {
    fs::write("tests/".to_owned() + file_name, actual).unwrap();
    assert_eq!(String::from_utf8_lossy(actual), expected);
}

fn call_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_meantonal"))
        .args(args)
        .output()
        .unwrap()
}

fn call_cli_piped(first_args: &[&str], second_args: &[&str]) -> Output {
    let first_command = Command::new(env!("CARGO_BIN_EXE_meantonal"))
        .args(first_args)
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    Command::new(env!("CARGO_BIN_EXE_meantonal"))
        .args(second_args)
        .stdin(first_command.stdout.unwrap())
        .output()
        .unwrap()
}

#[test]
fn convert_lilypond_to_abc() {
    let output = call_cli(&["convert", "--from", "lily", "--to", "abc", "bes,"]);
    check_output!("snapshots/convert_lilypond_to_abc.stdout", output.stdout);
}

#[test]
fn analyze_compound_interval() {
    let output = call_cli(&["interval", "C4", "Eb5"]);
    check_output!("snapshots/interval_c4_eb5.stdout", output.stdout);
}

#[test]
fn list_d_major_scale() {
    let output = call_cli(&[
        "range", "diatonic", "D4", "D5", "--tonic", "D", "--mode", "major",
    ]);
    check_output!("snapshots/range_diatonic_d_major.stdout", output.stdout);
}

#[test]
fn list_chromatic_notes_in_lilypond_notation() {
    let output = call_cli(&["range", "chromatic", "C4", "E4", "--notation", "lily"]);
    check_output!(
        "snapshots/range_chromatic_c_major_lilypond.stdout",
        output.stdout
    );
}

#[test]
fn tune_in_12_edo() {
    let output = call_cli(&["tune", "C4", "E4", "A4", "G3"]);
    check_output!("snapshots/tune_12_edo.stdout", output.stdout);
}

#[test]
fn tune_in_31_edo() {
    let output = call_cli(&["tune", "--edo", "31", "C4", "E4", "Eb4", "D#4"]);
    check_output!("snapshots/tune_31_edo.stdout", output.stdout);
}

#[test]
fn tune_with_custom_fifth_and_reference() {
    let output = call_cli(&[
        "tune", "--fifth", "696", "--ref-note", "A4", "--ref-hz", "440", "A4", "C5", "E5",
    ]);
    check_output!("snapshots/tune_fifth_696_from_a4.stdout", output.stdout);
}

#[test]
fn tune_dumped_notes() {
    let output = call_cli_piped(
        &["dump", "C4", "E4", "Eb4", "D#4"],
        &["tune", "--edo", "31"],
    );
    check_output!("snapshots/tune_31_edo.stdout", output.stdout);
}

#[test]
fn dump_notes_as_yaml() {
    let output = call_cli(&["dump", "Bb3", "F#5", "--tonic", "F", "--mode", "major"]);
    assert!(output.status.success());

    let dump: Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["type"], Value::from("Notes"));
    assert_eq!(dump["key"], Value::from("F Ionian"));

    let b_flat = &dump["items"][0];
    assert_eq!(b_flat["spn"], Value::from("Bb3"));
    assert_eq!(b_flat["midi_number"], Value::from(58));
    assert_eq!(b_flat["degree"], Value::from(3));
    assert_eq!(b_flat["alteration"], Value::from(0));
    assert_eq!(b_flat["lilypond"], Value::from("bes"));
    assert_eq!(b_flat["helmholtz"], Value::from("bb"));
    assert_eq!(b_flat["abc"], Value::from("_B,"));

    let f_sharp = &dump["items"][1];
    assert_eq!(f_sharp["degree"], Value::from(0));
    assert_eq!(f_sharp["alteration"], Value::from(1));
}

#[test]
fn invalid_note_names_are_reported() {
    let output = call_cli(&["convert", "--to", "lily", "H4"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid SPN 'H4'"));
}

#[test]
fn invalid_modes_are_reported() {
    let output = call_cli(&["range", "diatonic", "C4", "C5", "--mode", "bebop"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid mode 'bebop'"));
}

#[test]
fn empty_ranges_are_reported() {
    let output = call_cli(&["range", "diatonic", "C5", "C4"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "C4 lies below C5, nothing to list\n"
    );
}

#[test]
fn zero_edo_is_rejected() {
    let output = call_cli(&["tune", "--edo", "0", "C4"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
