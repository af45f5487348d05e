// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error tests. All errors are fatal, first in source order, with
//! no partial AST.

use super::macros::parse_error_tests;
use crate::error::LexError;
use crate::parse_error::ParseError;
use crate::parser::Parser;

parse_error_tests! {
    unclosed_double_quote: "\"foo" => ParseError::Lex(LexError::UnclosedDoubleQuote),
    unclosed_single_quote: "'foo" => ParseError::Lex(LexError::UnclosedSingleQuote),
    unterminated_if: "if a; then b" => ParseError::UnclosedStructure { .. },
    unterminated_if_condition: "if a" => ParseError::UnclosedStructure { .. },
    unterminated_while: "while a; do b" => ParseError::UnclosedStructure { .. },
    unterminated_case: "case x in a) b ;;" => ParseError::UnclosedStructure { .. },
    unterminated_test: "[[ a" => ParseError::UnclosedStructure { .. },
    unclosed_array: "arr=(a b" => ParseError::UnclosedArrayExpression,
    unclosed_subshell: "(echo hi" => ParseError::UnclosedGroup { symbol: ')' },
    unclosed_block: "{ echo hi" => ParseError::UnclosedGroup { symbol: '}' },
    redirect_without_target: "foo >" => ParseError::RedirectWithoutTarget,
    redirect_at_operator: "foo > | bar" => ParseError::RedirectWithoutTarget,
    bare_let: "let" => ParseError::LetRequiresExpression,
}

parse_error_tests! {
    pipe_at_start: "| cmd" => ParseError::UnexpectedToken { .. },
    and_at_start: "&& cmd" => ParseError::UnexpectedToken { .. },
    double_and: "a && && b" => ParseError::UnexpectedToken { .. },
    double_pipe_operand: "a | | b" => ParseError::UnexpectedToken { .. },
    stray_rparen: "echo hi )" => ParseError::UnexpectedToken { .. },
    stray_rbrace: "echo hi }" => ParseError::UnexpectedToken { .. },
    and_at_end: "cmd &&" => ParseError::ExpectedCommandWord,
    pipe_at_end: "cmd |" => ParseError::ExpectedCommandWord,
    bang_alone: "!" => ParseError::ExpectedCommandWord,
    missing_do: "for x in a; echo; done" => ParseError::ExpectedKeyword { .. },
    case_missing_paren: "case x in a b ;; esac" => ParseError::ExpectedSymbol { symbol: ')' },
}

#[test]
fn error_message_names_the_token() {
    let err = Parser::parse("| cmd").unwrap_err();
    assert_eq!(err.to_string(), "unexpected token '|'");
}

#[test]
fn unclosed_structure_names_the_keywords() {
    let err = Parser::parse("if a; then b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected end of input, expected 'elif', 'else', or 'fi'"
    );
}

#[test]
fn first_error_wins() {
    // The unclosed quote precedes the stray pipe.
    let err = Parser::parse("'oops | &&").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::UnclosedSingleQuote)));
}

#[test]
fn no_partial_ast_on_error() {
    assert!(Parser::parse("good; if bad").is_err());
}
