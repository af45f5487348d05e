// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::LexError;
use crate::parse_error::ParseError;

#[test]
fn lex_error_messages() {
    assert_eq!(LexError::UnclosedSingleQuote.to_string(), "unclosed single quote");
    assert_eq!(LexError::UnclosedDoubleQuote.to_string(), "unclosed double quote");
    assert_eq!(
        LexError::UnexpectedCharacter { ch: '~' }.to_string(),
        "unexpected character '~'"
    );
}

#[test]
fn parse_error_wraps_lex_error() {
    let err: ParseError = LexError::UnclosedDoubleQuote.into();
    assert_eq!(err.to_string(), "lexer error: unclosed double quote");
}

#[test]
fn parse_error_messages() {
    assert_eq!(
        ParseError::UnclosedGroup { symbol: ')' }.to_string(),
        "unexpected end of input, expected ')'"
    );
    assert_eq!(
        ParseError::UnclosedStructure { expected: "'fi'".into() }.to_string(),
        "unexpected end of input, expected 'fi'"
    );
    assert_eq!(
        ParseError::UnexpectedToken { found: "'|'".into() }.to_string(),
        "unexpected token '|'"
    );
    assert_eq!(ParseError::ExpectedCommandWord.to_string(), "expected command word");
    assert_eq!(
        ParseError::RedirectWithoutTarget.to_string(),
        "redirect operator without target"
    );
    assert_eq!(
        ParseError::LetRequiresExpression.to_string(),
        "let requires at least one expression"
    );
}
