// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! If clauses, while/until loops, subshells, and blocks.

use super::helpers::*;
use super::macros::parse_tests;
use crate::ast::*;

parse_tests! {
    if_statement: "if a; then b; fi" => statements: 1,
    if_then_else: "if a; then b; else c; fi" => statements: 1,
    while_loop: "while a; do b; done" => statements: 1,
    subshell: "(a; b)" => statements: 1,
    block: "{ a; b; }" => statements: 1,
    statement_after_compound: "if a; then b; fi; c" => statements: 2,
}

// =============================================================================
// If clauses
// =============================================================================

#[test]
fn if_basic() {
    let command = parse_command("if a; then b; fi");
    let clause = get_if(&command);
    assert_eq!(clause.condition.len(), 1);
    assert_command_named(&clause.condition[0].command, "a");
    assert_eq!(clause.then_body.len(), 1);
    assert_command_named(&clause.then_body[0].command, "b");
    assert!(clause.else_body.is_none());
}

#[test]
fn if_with_else() {
    let command = parse_command("if a; then b; else c; fi");
    let clause = get_if(&command);
    let else_body = clause.else_body.as_deref().unwrap();
    assert_eq!(else_body.len(), 1);
    assert_command_named(&else_body[0].command, "c");
}

#[test]
fn elif_desugars_to_nested_if() {
    // if a; then b; elif c; then d; else e; fi
    //   → IfClause(cond=[a], then=[b], else=[IfClause(cond=[c], then=[d], else=[e])])
    let command = parse_command("if a; then b; elif c; then d; else e; fi");
    let outer = get_if(&command);
    assert_command_named(&outer.condition[0].command, "a");
    assert_command_named(&outer.then_body[0].command, "b");

    let else_body = outer.else_body.as_deref().unwrap();
    assert_eq!(else_body.len(), 1);
    let inner = get_if(&else_body[0].command);
    assert_command_named(&inner.condition[0].command, "c");
    assert_command_named(&inner.then_body[0].command, "d");
    let inner_else = inner.else_body.as_deref().unwrap();
    assert_command_named(&inner_else[0].command, "e");
}

#[test]
fn elif_chain_nests_repeatedly() {
    let command = parse_command("if a; then b; elif c; then d; elif e; then f; fi");
    let outer = get_if(&command);
    let mid = get_if(&outer.else_body.as_deref().unwrap()[0].command);
    let inner = get_if(&mid.else_body.as_deref().unwrap()[0].command);
    assert_command_named(&inner.condition[0].command, "e");
    assert!(inner.else_body.is_none());
}

#[test]
fn if_condition_may_hold_multiple_statements() {
    let command = parse_command("if a; b; then c; fi");
    let clause = get_if(&command);
    assert_eq!(clause.condition.len(), 2);
}

#[test]
fn if_condition_may_be_a_logical_chain() {
    let command = parse_command("if a && b; then c; fi");
    let clause = get_if(&command);
    assert!(matches!(clause.condition[0].command, Command::Logical(_)));
}

#[test]
fn newline_separated_if() {
    let command = parse_command("if a\nthen\nb\nfi");
    let clause = get_if(&command);
    assert_eq!(clause.condition.len(), 1);
    assert_eq!(clause.then_body.len(), 1);
}

#[test]
fn quoted_keyword_is_not_a_keyword() {
    let command = parse_command("'if' a");
    let cmd = get_simple(&command);
    assert_eq!(cmd.words.as_deref().unwrap().len(), 2);
}

// =============================================================================
// While / until
// =============================================================================

#[test]
fn while_basic() {
    let command = parse_command("while a; do b; c; done");
    let clause = match &command {
        Command::While(w) => w,
        other => panic!("expected while clause, got {other:?}"),
    };
    assert!(!clause.until);
    assert_eq!(clause.condition.len(), 1);
    assert_eq!(clause.body.len(), 2);
}

#[test]
fn until_sets_flag() {
    let command = parse_command("until a; do b; done");
    let clause = match &command {
        Command::While(w) => w,
        other => panic!("expected while clause, got {other:?}"),
    };
    assert!(clause.until);
}

#[test]
fn loops_nest() {
    let command = parse_command("while a; do if b; then c; fi; done");
    let clause = match &command {
        Command::While(w) => w,
        other => panic!("expected while clause, got {other:?}"),
    };
    assert!(matches!(clause.body[0].command, Command::If(_)));
}

// =============================================================================
// Subshells and blocks
// =============================================================================

#[test]
fn subshell_body() {
    let command = parse_command("(a; b)");
    let subshell = match &command {
        Command::Subshell(s) => s,
        other => panic!("expected subshell, got {other:?}"),
    };
    assert_eq!(subshell.body.len(), 2);
}

#[test]
fn empty_subshell_is_allowed() {
    let command = parse_command("( )");
    let subshell = match &command {
        Command::Subshell(s) => s,
        other => panic!("expected subshell, got {other:?}"),
    };
    assert!(subshell.body.is_empty());
}

#[test]
fn block_body() {
    let command = parse_command("{ a; b; }");
    let block = match &command {
        Command::Block(b) => b,
        other => panic!("expected block, got {other:?}"),
    };
    assert_eq!(block.body.len(), 2);
}

#[test]
fn nested_subshells() {
    let command = parse_command("((inner); outer)");
    let subshell = match &command {
        Command::Subshell(s) => s,
        other => panic!("expected subshell, got {other:?}"),
    };
    assert_eq!(subshell.body.len(), 2);
    assert!(matches!(subshell.body[0].command, Command::Subshell(_)));
}

#[test]
fn subshell_with_background_statement() {
    let command = parse_command("(a & b)");
    let subshell = match &command {
        Command::Subshell(s) => s,
        other => panic!("expected subshell, got {other:?}"),
    };
    assert_eq!(subshell.body.len(), 2);
    assert!(subshell.body[0].background);
}
