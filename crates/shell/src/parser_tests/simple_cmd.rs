// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::helpers::*;
use super::macros::simple_cmd_tests;
use crate::ast::*;

simple_cmd_tests! {
    echo_no_args: "echo" => ("echo", 1),
    echo_one_arg: "echo hello" => ("echo", 2),
    ls_flags: "ls -la /tmp" => ("ls", 3),
    cat_three_files: "cat file1 file2 file3" => ("cat", 4),
    dashes_and_dots: "./run.sh --flag=1 -v" => ("./run.sh", 3),
}

#[test]
fn words_keep_source_order() {
    let command = parse_command("cp -r src dst");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["cp", "-r", "src", "dst"]);
}

#[test]
fn absent_fields_are_omitted() {
    let command = parse_command("ls");
    let cmd = get_simple(&command);
    assert!(cmd.words.is_some());
    assert!(cmd.assignments.is_none());
    assert!(cmd.redirects.is_none());
}

#[test]
fn quoted_word_is_structured() {
    let command = parse_command("echo 'a b'");
    let cmd = get_simple(&command);
    let words = cmd.words.as_deref().unwrap();
    assert_eq!(words[1].parts, vec![WordPart::SingleQuoted("a b".into())]);
}

#[test]
fn concatenated_word_has_multiple_parts() {
    let command = parse_command("echo pre'mid'post");
    let cmd = get_simple(&command);
    let words = cmd.words.as_deref().unwrap();
    assert_eq!(
        words[1].parts,
        vec![
            WordPart::Literal("pre".into()),
            WordPart::SingleQuoted("mid".into()),
            WordPart::Literal("post".into()),
        ]
    );
}

// =============================================================================
// Assignment prefixes
// =============================================================================

#[test]
fn leading_assignment() {
    let command = parse_command("FOO=bar cmd");
    let cmd = get_simple(&command);
    let assignments = cmd.assignments.as_deref().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].name, "FOO");
    assert!(!assignments[0].append);
    assert_literal(assignments[0].value.as_ref().unwrap(), "bar");
    assert_eq!(simple_words(cmd), vec!["cmd"]);
}

#[test]
fn multiple_leading_assignments() {
    let command = parse_command("A=1 B=2 env");
    let cmd = get_simple(&command);
    assert_eq!(cmd.assignments.as_deref().unwrap().len(), 2);
    assert_eq!(simple_words(cmd), vec!["env"]);
}

#[test]
fn assignment_only_statement() {
    let command = parse_command("COUNT=3");
    let cmd = get_simple(&command);
    assert_eq!(cmd.assignments.as_deref().unwrap().len(), 1);
    assert!(cmd.words.is_none());
}

#[test]
fn assignment_after_first_word_is_a_word() {
    let command = parse_command("cmd FOO=bar");
    let cmd = get_simple(&command);
    assert!(cmd.assignments.is_none());
    assert_eq!(simple_words(cmd), vec!["cmd", "FOO=bar"]);
}

#[test]
fn invalid_name_is_a_word() {
    let command = parse_command("1x=2");
    let cmd = get_simple(&command);
    assert!(cmd.assignments.is_none());
    assert_eq!(simple_words(cmd), vec!["1x=2"]);
}

#[test]
fn append_assignment() {
    let command = parse_command("PATH+=:/opt/bin");
    let cmd = get_simple(&command);
    let assignment = &cmd.assignments.as_deref().unwrap()[0];
    assert_eq!(assignment.name, "PATH");
    assert!(assignment.append);
    assert_literal(assignment.value.as_ref().unwrap(), ":/opt/bin");
}

#[test]
fn bare_assignment_has_empty_value() {
    let command = parse_command("FOO=");
    let cmd = get_simple(&command);
    let assignment = &cmd.assignments.as_deref().unwrap()[0];
    assert_literal(assignment.value.as_ref().unwrap(), "");
    assert!(assignment.array.is_none());
}

#[test]
fn assignment_value_keeps_expansions() {
    let command = parse_command("DIR=$HOME/src cmd");
    let cmd = get_simple(&command);
    let value = cmd.assignments.as_deref().unwrap()[0].value.as_ref().unwrap();
    assert_eq!(
        value.parts,
        vec![
            WordPart::Param(ParamExp::short("HOME")),
            WordPart::Literal("/src".into()),
        ]
    );
}

#[test]
fn assignment_value_concatenates_quotes() {
    let command = parse_command("GREETING=hello' world'");
    let cmd = get_simple(&command);
    let value = cmd.assignments.as_deref().unwrap()[0].value.as_ref().unwrap();
    assert_eq!(
        value.parts,
        vec![
            WordPart::Literal("hello".into()),
            WordPart::SingleQuoted(" world".into()),
        ]
    );
}

#[test]
fn second_equals_belongs_to_value() {
    let command = parse_command("KEY=a=b");
    let cmd = get_simple(&command);
    let assignment = &cmd.assignments.as_deref().unwrap()[0];
    assert_eq!(assignment.name, "KEY");
    assert_literal(assignment.value.as_ref().unwrap(), "a=b");
}
