// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! For loops (word-list and C-style), and select.

use super::helpers::*;
use crate::ast::*;

fn get_for(command: &Command) -> &ForClause {
    match command {
        Command::For(f) => f,
        other => panic!("expected for clause, got {other:?}"),
    }
}

fn get_c_style(command: &Command) -> &CStyleLoop {
    match command {
        Command::CStyleFor(c) => c,
        other => panic!("expected c-style loop, got {other:?}"),
    }
}

#[test]
fn for_in_words() {
    let command = parse_command("for x in a b c; do echo $x; done");
    let clause = get_for(&command);
    assert_eq!(clause.variable, "x");
    let items = clause.items.as_deref().unwrap();
    assert_eq!(items.len(), 3);
    assert_literal(&items[0], "a");
    assert_eq!(clause.body.len(), 1);
}

#[test]
fn for_without_in_iterates_positionals() {
    let command = parse_command("for arg; do echo $arg; done");
    let clause = get_for(&command);
    assert_eq!(clause.variable, "arg");
    assert!(clause.items.is_none());
}

#[test]
fn for_without_in_or_semicolon() {
    let command = parse_command("for arg do echo; done");
    let clause = get_for(&command);
    assert!(clause.items.is_none());
}

#[test]
fn for_in_with_empty_list() {
    let command = parse_command("for x in; do a; done");
    let clause = get_for(&command);
    assert!(clause.items.is_none());
}

#[test]
fn for_items_may_be_structured_words() {
    let command = parse_command("for f in *.txt \"$dir\"; do a; done");
    let clause = get_for(&command);
    let items = clause.items.as_deref().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[1].as_literal().is_none());
}

#[test]
fn for_with_newline_separators() {
    let command = parse_command("for x in a b\ndo\necho\ndone");
    let clause = get_for(&command);
    assert_eq!(clause.items.as_deref().unwrap().len(), 2);
}

// =============================================================================
// C-style loops
// =============================================================================

#[test]
fn c_style_full_header() {
    // for ((i=0; i<10; i++)); do echo $i; done
    let command = parse_command("for ((i=0; i<10; i++)); do echo $i; done");
    let clause = get_c_style(&command);
    assert_eq!(clause.init.as_deref(), Some("i=0"));
    assert_eq!(clause.condition.as_deref(), Some("i<10"));
    assert_eq!(clause.post.as_deref(), Some("i++"));
    assert_eq!(clause.body.len(), 1);
}

#[test]
fn c_style_empty_header() {
    let command = parse_command("for ((;;)); do a; done");
    let clause = get_c_style(&command);
    assert!(clause.init.is_none());
    assert!(clause.condition.is_none());
    assert!(clause.post.is_none());
}

#[test]
fn c_style_partial_header() {
    let command = parse_command("for ((i=0;;i++)); do a; done");
    let clause = get_c_style(&command);
    assert_eq!(clause.init.as_deref(), Some("i=0"));
    assert!(clause.condition.is_none());
    assert_eq!(clause.post.as_deref(), Some("i++"));
}

#[test]
fn c_style_without_semicolon_before_do() {
    let command = parse_command("for ((;;)) do a; done");
    assert!(matches!(command, Command::CStyleFor(_)));
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn select_mirrors_for_shape() {
    let command = parse_command("select opt in one two; do echo $opt; done");
    let clause = match &command {
        Command::Select(s) => s,
        other => panic!("expected select clause, got {other:?}"),
    };
    assert_eq!(clause.variable, "opt");
    assert_eq!(clause.items.as_deref().unwrap().len(), 2);
    assert_eq!(clause.body.len(), 1);
}

#[test]
fn select_without_in() {
    let command = parse_command("select x; do a; done");
    let clause = match &command {
        Command::Select(s) => s,
        other => panic!("expected select clause, got {other:?}"),
    };
    assert!(clause.items.is_none());
}
