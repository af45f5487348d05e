// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Function declarations (both forms), coproc, and time.

use super::helpers::*;
use crate::ast::*;

fn get_function(command: &Command) -> &FunctionDecl {
    match command {
        Command::Function(f) => f,
        other => panic!("expected function declaration, got {other:?}"),
    }
}

#[test]
fn shorthand_function() {
    let command = parse_command("greet() { echo hi; }");
    let decl = get_function(&command);
    assert_eq!(decl.name, "greet");
    assert_eq!(decl.body.len(), 1);
    assert_command_named(&decl.body[0].command, "echo");
}

#[test]
fn keyword_function_without_parens() {
    let command = parse_command("function greet { echo hi; }");
    let decl = get_function(&command);
    assert_eq!(decl.name, "greet");
    assert_eq!(decl.body.len(), 1);
}

#[test]
fn keyword_function_with_parens() {
    let command = parse_command("function greet() { echo hi; }");
    assert_eq!(get_function(&command).name, "greet");
}

#[test]
fn function_body_may_hold_compounds() {
    let command = parse_command("run() { if a; then b; fi; c; }");
    let decl = get_function(&command);
    assert_eq!(decl.body.len(), 2);
    assert!(matches!(decl.body[0].command, Command::If(_)));
}

#[test]
fn shorthand_with_newline_before_brace() {
    let command = parse_command("greet()\n{ echo hi; }");
    assert_eq!(get_function(&command).name, "greet");
}

#[test]
fn dashed_function_name() {
    let command = parse_command("my-task() { a; }");
    assert_eq!(get_function(&command).name, "my-task");
}

#[test]
fn call_without_parens_is_a_command() {
    let command = parse_command("greet arg");
    assert!(matches!(command, Command::Simple(_)));
}

// =============================================================================
// Coproc
// =============================================================================

#[test]
fn coproc_named() {
    let command = parse_command("coproc worker { sleep 1; }");
    let clause = match &command {
        Command::Coproc(c) => c,
        other => panic!("expected coproc clause, got {other:?}"),
    };
    assert_eq!(clause.name.as_deref(), Some("worker"));
    assert!(matches!(clause.body.command, Command::Block(_)));
}

#[test]
fn coproc_unnamed() {
    let command = parse_command("coproc sleep 10");
    let clause = match &command {
        Command::Coproc(c) => c,
        other => panic!("expected coproc clause, got {other:?}"),
    };
    assert!(clause.name.is_none());
    assert_command_named(&clause.body.command, "sleep");
}

// =============================================================================
// Time
// =============================================================================

#[test]
fn time_wraps_a_statement() {
    let command = parse_command("time sleep 1");
    let clause = match &command {
        Command::Time(t) => t,
        other => panic!("expected time clause, got {other:?}"),
    };
    assert_command_named(&clause.command.command, "sleep");
}

#[test]
fn time_wraps_a_pipeline() {
    let command = parse_command("time a | b");
    let clause = match &command {
        Command::Time(t) => t,
        other => panic!("expected time clause, got {other:?}"),
    };
    assert!(matches!(clause.command.command, Command::Pipeline(_)));
}
