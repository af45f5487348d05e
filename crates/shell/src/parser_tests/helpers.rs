// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for parser tests.

use crate::ast::*;
use crate::parser::Parser;

pub fn parse_ok(input: &str) -> Program {
    Parser::parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Parse input that must contain exactly one statement.
pub fn parse_one(input: &str) -> Statement {
    let program = parse_ok(input);
    assert_eq!(program.statements.len(), 1, "input: {input:?}");
    program.statements.into_iter().next().unwrap()
}

/// Parse a single plain statement and return its command.
pub fn parse_command(input: &str) -> Command {
    let statement = parse_one(input);
    assert!(!statement.negated, "expected plain statement");
    assert!(!statement.background, "expected foreground statement");
    statement.command
}

pub fn get_simple(command: &Command) -> &SimpleCommand {
    match command {
        Command::Simple(cmd) => cmd,
        other => panic!("expected simple command, got {other:?}"),
    }
}

pub fn get_pipeline(command: &Command) -> &Pipeline {
    match command {
        Command::Pipeline(p) => p,
        other => panic!("expected pipeline, got {other:?}"),
    }
}

pub fn get_logical(command: &Command) -> &Logical {
    match command {
        Command::Logical(l) => l,
        other => panic!("expected logical chain, got {other:?}"),
    }
}

pub fn get_if(command: &Command) -> &IfClause {
    match command {
        Command::If(i) => i,
        other => panic!("expected if clause, got {other:?}"),
    }
}

pub fn get_case(command: &Command) -> &CaseClause {
    match command {
        Command::Case(c) => c,
        other => panic!("expected case clause, got {other:?}"),
    }
}

/// The command's words as plain literal strings.
pub fn simple_words(cmd: &SimpleCommand) -> Vec<&str> {
    cmd.words
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|w| w.as_literal().unwrap_or("<structured>"))
        .collect()
}

/// Assert a word is a plain literal with the expected text.
pub fn assert_literal(word: &Word, expected: &str) {
    assert_eq!(word.as_literal(), Some(expected), "word: {word:?}");
}

/// Assert a command is a simple command whose first word is the expected
/// literal.
pub fn assert_command_named(command: &Command, expected: &str) {
    let cmd = get_simple(command);
    let words = cmd.words.as_deref().unwrap_or_else(|| panic!("no words in {cmd:?}"));
    assert_literal(&words[0], expected);
}
