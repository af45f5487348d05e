// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Case clauses: pattern lists, item bodies, `;;` handling.

use super::helpers::*;
use crate::ast::*;

#[test]
fn case_with_alternate_patterns() {
    // case x in a|b) z ;; esac
    let command = parse_command("case x in a|b) z ;; esac");
    let clause = get_case(&command);
    assert_literal(&clause.word, "x");
    assert_eq!(clause.items.len(), 1);

    let item = &clause.items[0];
    assert_eq!(item.patterns.len(), 2);
    assert_literal(&item.patterns[0], "a");
    assert_literal(&item.patterns[1], "b");
    assert_eq!(item.body.len(), 1);
    assert_command_named(&item.body[0].command, "z");
}

#[test]
fn case_multiple_items() {
    let command = parse_command("case $1 in start) a ;; stop) b ;; esac");
    let clause = get_case(&command);
    assert_eq!(clause.items.len(), 2);
    assert_literal(&clause.items[0].patterns[0], "start");
    assert_literal(&clause.items[1].patterns[0], "stop");
}

#[test]
fn case_scrutinee_may_be_expansion() {
    let command = parse_command("case $mode in a) b ;; esac");
    let clause = get_case(&command);
    assert_eq!(clause.word.parts, vec![WordPart::Param(ParamExp::short("mode"))]);
}

#[test]
fn case_without_items() {
    let command = parse_command("case x in esac");
    let clause = get_case(&command);
    assert!(clause.items.is_empty());
}

#[test]
fn case_item_with_empty_body() {
    let command = parse_command("case x in a) ;; esac");
    let clause = get_case(&command);
    assert_eq!(clause.items.len(), 1);
    assert!(clause.items[0].body.is_empty());
}

#[test]
fn final_dsemi_is_optional() {
    let command = parse_command("case x in a) b ;; c) d esac");
    let clause = get_case(&command);
    assert_eq!(clause.items.len(), 2);
    assert_eq!(clause.items[1].body.len(), 1);
}

#[test]
fn glob_patterns_stay_words() {
    let command = parse_command("case $f in *.txt) a ;; ??) b ;; esac");
    let clause = get_case(&command);
    assert_literal(&clause.items[0].patterns[0], "*.txt");
    assert_literal(&clause.items[1].patterns[0], "??");
}

#[test]
fn item_body_may_hold_multiple_statements() {
    let command = parse_command("case x in a) b; c ;; esac");
    let clause = get_case(&command);
    assert_eq!(clause.items[0].body.len(), 2);
}

#[test]
fn newline_separated_case() {
    let command = parse_command("case x in\na) b\n;;\nesac");
    let clause = get_case(&command);
    assert_eq!(clause.items.len(), 1);
}

#[test]
fn every_item_has_patterns() {
    let command = parse_command("case x in a) ;; b|c|d) ;; esac");
    let clause = get_case(&command);
    for item in &clause.items {
        assert!(!item.patterns.is_empty());
    }
}
