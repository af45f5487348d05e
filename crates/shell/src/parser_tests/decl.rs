// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declaration clauses (declare/local/export/readonly/typeset/nameref)
//! and let.

use super::helpers::*;
use crate::ast::*;

fn get_decl(command: &Command) -> &DeclClause {
    match command {
        Command::Decl(d) => d,
        other => panic!("expected declaration clause, got {other:?}"),
    }
}

fn get_let(command: &Command) -> &LetClause {
    match command {
        Command::Let(l) => l,
        other => panic!("expected let clause, got {other:?}"),
    }
}

#[test]
fn declare_with_flag_and_assignment() {
    let command = parse_command("declare -x FOO=bar");
    let clause = get_decl(&command);
    assert_eq!(clause.variant, DeclVariant::Declare);
    let args = clause.args.as_deref().unwrap();
    assert_literal(&args[0], "-x");
    let assignments = clause.assignments.as_deref().unwrap();
    assert_eq!(assignments[0].name, "FOO");
    assert_literal(assignments[0].value.as_ref().unwrap(), "bar");
}

#[test]
fn local_assignment() {
    let command = parse_command("local count=0");
    let clause = get_decl(&command);
    assert_eq!(clause.variant, DeclVariant::Local);
    assert_eq!(clause.assignments.as_deref().unwrap()[0].name, "count");
}

#[test]
fn export_name_only_is_an_arg() {
    let command = parse_command("export PATH");
    let clause = get_decl(&command);
    assert_eq!(clause.variant, DeclVariant::Export);
    assert_literal(&clause.args.as_deref().unwrap()[0], "PATH");
    assert!(clause.assignments.is_none());
}

#[yare::parameterized(
    declare  = { "declare x", DeclVariant::Declare },
    local    = { "local x", DeclVariant::Local },
    export   = { "export x", DeclVariant::Export },
    readonly = { "readonly x", DeclVariant::Readonly },
    typeset  = { "typeset x", DeclVariant::Typeset },
    nameref  = { "nameref x", DeclVariant::Nameref },
)]
fn every_declaration_keyword(input: &str, variant: DeclVariant) {
    let command = parse_command(input);
    assert_eq!(get_decl(&command).variant, variant);
}

#[test]
fn declaration_keyword_in_argument_position_is_a_word() {
    let command = parse_command("echo declare");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["echo", "declare"]);
}

#[test]
fn decl_with_array_assignment() {
    let command = parse_command("declare -a xs=(1 2)");
    let clause = get_decl(&command);
    let assignment = &clause.assignments.as_deref().unwrap()[0];
    assert_eq!(assignment.array.as_ref().unwrap().elements.len(), 2);
}

#[test]
fn decl_with_redirect() {
    let command = parse_command("declare -p >vars.txt");
    let clause = get_decl(&command);
    let redirects = clause.redirects.as_deref().unwrap();
    assert_eq!(redirects[0].op, crate::token::RedirOp::Out);
}

#[test]
fn decl_stops_at_separator() {
    let program = parse_ok("export A=1; echo done");
    assert_eq!(program.statements.len(), 2);
}

// =============================================================================
// Let
// =============================================================================

#[test]
fn let_single_expression() {
    let command = parse_command("let x=1");
    let clause = get_let(&command);
    assert_eq!(clause.expressions.len(), 1);
    assert_literal(&clause.expressions[0], "x=1");
}

#[test]
fn let_multiple_expressions() {
    let command = parse_command("let a=1 b+=2 'c = 3'");
    let clause = get_let(&command);
    assert_eq!(clause.expressions.len(), 3);
}

#[test]
fn let_with_redirect() {
    let command = parse_command("let x+=1 2>err");
    let clause = get_let(&command);
    assert_eq!(clause.expressions.len(), 1);
    let redirects = clause.redirects.as_deref().unwrap();
    assert_eq!(redirects[0].fd.as_deref(), Some("2"));
}
