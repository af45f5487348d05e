// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `[[ ]]` test clauses and `(( ))` arithmetic commands.

use super::helpers::*;
use crate::ast::*;

fn get_test(command: &Command) -> &TestClause {
    match command {
        Command::Test(t) => t,
        other => panic!("expected test clause, got {other:?}"),
    }
}

#[test]
fn file_test() {
    let command = parse_command("[[ -f config.toml ]]");
    let clause = get_test(&command);
    assert_eq!(clause.words.len(), 2);
    assert_literal(&clause.words[0], "-f");
    assert_literal(&clause.words[1], "config.toml");
}

#[test]
fn string_comparison() {
    let command = parse_command("[[ $a == $b ]]");
    let clause = get_test(&command);
    assert_eq!(clause.words.len(), 3);
    assert_literal(&clause.words[1], "==");
}

#[test]
fn no_internal_operator_tree() {
    let command = parse_command("[[ a && b ]]");
    let clause = get_test(&command);
    assert_eq!(clause.words.len(), 3);
    assert_literal(&clause.words[1], "&&");
}

#[test]
fn comparison_operators_fold_to_words() {
    let command = parse_command("[[ a < b ]]");
    let clause = get_test(&command);
    assert_eq!(clause.words.len(), 3);
    assert_literal(&clause.words[1], "<");
}

#[test]
fn test_in_logical_chain() {
    let command = parse_command("[[ -n $x ]] && echo set");
    let logical = get_logical(&command);
    assert!(matches!(logical.left.command, Command::Test(_)));
}

#[test]
fn quoted_brackets_are_ordinary_words() {
    let command = parse_command("'[[' a");
    assert!(matches!(command, Command::Simple(_)));
}

#[test]
fn adjacent_bracket_is_not_the_keyword() {
    // `[[-f` is a single word, not the [[ keyword
    let command = parse_command("[[-f x");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["[[-f", "x"]);
}

// =============================================================================
// Arithmetic commands
// =============================================================================

fn get_arith(command: &Command) -> &ArithCmd {
    match command {
        Command::Arith(a) => a,
        other => panic!("expected arithmetic command, got {other:?}"),
    }
}

#[test]
fn arith_command_keeps_expression_text() {
    let command = parse_command("((count += 1))");
    assert_eq!(get_arith(&command).expression, "count += 1");
}

#[test]
fn arith_command_in_condition() {
    let command = parse_command("while ((i < 10)); do a; done");
    let clause = match &command {
        Command::While(w) => w,
        other => panic!("expected while clause, got {other:?}"),
    };
    assert!(matches!(clause.condition[0].command, Command::Arith(_)));
}

#[test]
fn arith_command_in_logical_chain() {
    let command = parse_command("((x)) && echo yes");
    let logical = get_logical(&command);
    assert_eq!(get_arith(&logical.left.command).expression, "x");
}
