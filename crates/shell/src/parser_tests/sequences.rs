// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statement lists, separators, background, negation, logical chains, and
//! pipelines.

use super::helpers::*;
use super::macros::parse_tests;
use crate::ast::*;

parse_tests! {
    empty_input: "" => statements: 0,
    whitespace_only: "   \t " => statements: 0,
    only_separators: "; ;\n;" => statements: 0,
    single: "a" => statements: 1,
    two_semicolon: "a; b" => statements: 2,
    three_semicolon: "a; b; c" => statements: 3,
    newline_separated: "a\nb\nc" => statements: 3,
    mixed_separators: "a; b\nc ;\nd" => statements: 4,
    leading_separators: ";;; a" => statements: 1,
    trailing_separators: "a ;;" => statements: 1,
    background_pair: "a & b" => statements: 2,
    logical_is_one_statement: "a && b || c" => statements: 1,
    pipeline_is_one_statement: "a | b | c" => statements: 1,
}

// =============================================================================
// Background and negation flags
// =============================================================================

#[test]
fn background_flag() {
    let statement = parse_one("sleep 5 &");
    assert!(statement.background);
    assert!(!statement.negated);
}

#[test]
fn negation_flag() {
    let statement = parse_one("! grep -q x f");
    assert!(statement.negated);
    assert!(!statement.background);
}

#[test]
fn negation_applies_to_whole_chain() {
    // ! foo && bar &  →  one statement, both flags, logical inside
    let statement = parse_one("! foo && bar &");
    assert!(statement.negated);
    assert!(statement.background);
    let logical = get_logical(&statement.command);
    assert_eq!(logical.op, LogicalOp::And);
    assert_command_named(&logical.left.command, "foo");
    assert_command_named(&logical.right.command, "bar");
}

#[test]
fn background_terminates_statement() {
    let program = parse_ok("a & b");
    assert!(program.statements[0].background);
    assert!(!program.statements[1].background);
}

// =============================================================================
// Logical chains
// =============================================================================

#[test]
fn and_chain() {
    let command = parse_command("a && b");
    let logical = get_logical(&command);
    assert_eq!(logical.op, LogicalOp::And);
    assert_command_named(&logical.left.command, "a");
    assert_command_named(&logical.right.command, "b");
}

#[test]
fn or_chain() {
    let command = parse_command("a || b");
    assert_eq!(get_logical(&command).op, LogicalOp::Or);
}

#[test]
fn logical_is_left_associative() {
    // a && b || c  →  (a && b) || c
    let command = parse_command("a && b || c");
    let outer = get_logical(&command);
    assert_eq!(outer.op, LogicalOp::Or);
    let inner = get_logical(&outer.left.command);
    assert_eq!(inner.op, LogicalOp::And);
    assert_command_named(&inner.left.command, "a");
    assert_command_named(&inner.right.command, "b");
    assert_command_named(&outer.right.command, "c");
}

#[test]
fn inner_statements_carry_no_flags() {
    let command = parse_command("a && b");
    let logical = get_logical(&command);
    assert!(!logical.left.negated && !logical.left.background);
    assert!(!logical.right.negated && !logical.right.background);
}

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn two_stage_pipeline() {
    let command = parse_command("a | b");
    let pipeline = get_pipeline(&command);
    assert_eq!(pipeline.commands.len(), 2);
    assert_command_named(&pipeline.commands[0].command, "a");
    assert_command_named(&pipeline.commands[1].command, "b");
}

#[test]
fn three_stage_pipeline() {
    let command = parse_command("a | b | c");
    assert_eq!(get_pipeline(&command).commands.len(), 3);
}

#[test]
fn single_command_is_not_a_pipeline() {
    let command = parse_command("a");
    assert!(matches!(command, Command::Simple(_)));
}

#[test]
fn pipeline_binds_tighter_than_or() {
    // foo | bar || baz  →  Logical(or, Pipeline[foo, bar], baz)
    let command = parse_command("foo | bar || baz");
    let logical = get_logical(&command);
    assert_eq!(logical.op, LogicalOp::Or);
    let pipeline = get_pipeline(&logical.left.command);
    assert_eq!(pipeline.commands.len(), 2);
    assert_command_named(&pipeline.commands[0].command, "foo");
    assert_command_named(&pipeline.commands[1].command, "bar");
    assert_command_named(&logical.right.command, "baz");
}

#[test]
fn pipeline_binds_tighter_than_and() {
    let command = parse_command("a | b && c");
    let logical = get_logical(&command);
    assert_eq!(logical.op, LogicalOp::And);
    assert_eq!(get_pipeline(&logical.left.command).commands.len(), 2);
}

#[test]
fn pipeline_of_compounds() {
    let command = parse_command("(a; b) | grep x");
    let pipeline = get_pipeline(&command);
    assert!(matches!(pipeline.commands[0].command, Command::Subshell(_)));
    assert_command_named(&pipeline.commands[1].command, "grep");
}
