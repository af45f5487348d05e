// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program-level comment collection.

use super::helpers::*;
use crate::parser::Parser;
use crate::ParseOptions;

fn parse_keep(input: &str) -> crate::ast::Program {
    let options = ParseOptions { keep_comments: true, ..ParseOptions::default() };
    Parser::parse_with_options(input, options)
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

#[test]
fn comments_absent_by_default() {
    let program = parse_ok("echo hi # note");
    assert!(program.comments.is_none());
}

#[test]
fn comments_collected_in_encounter_order() {
    let program = parse_keep("# first\necho hi # second\n# third\nls");
    assert_eq!(
        program.comments.as_deref().unwrap(),
        [" first".to_string(), " second".into(), " third".into()]
    );
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn keep_comments_without_comments_stays_absent() {
    let program = parse_keep("echo hi");
    assert!(program.comments.is_none());
}

#[test]
fn comment_inside_array_expression() {
    let program = parse_keep("arr=(a # note\nb)");
    assert_eq!(program.comments.as_deref().unwrap(), [" note".to_string()]);
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn comment_never_attaches_to_nodes() {
    // The statement list is identical with and without comment collection.
    let with = parse_keep("a # x\nb");
    let without = parse_ok("a # x\nb");
    assert_eq!(with.statements, without.statements);
}

#[test]
fn statements_match_comment_stripped_source() {
    let commented = parse_ok("a # one\nb # two");
    let stripped = parse_ok("a\nb");
    assert_eq!(commented.statements, stripped.statements);
}

#[test]
fn comment_inside_substitution_joins_program_list() {
    let program = parse_keep("echo $(a # inner\nb)");
    assert_eq!(program.comments.as_deref().unwrap(), [" inner".to_string()]);
}
