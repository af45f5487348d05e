// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::lexer::{LexError, Lexer};
use crate::ParseOptions;

lex_error_tests! {
    unterminated_single: "'abc" => LexError::UnclosedSingleQuote,
    unterminated_single_mid_word: "a'bc" => LexError::UnclosedSingleQuote,
    unterminated_double: "\"abc" => LexError::UnclosedDoubleQuote,
    unterminated_double_mid_word: "a\"bc" => LexError::UnclosedDoubleQuote,
    trailing_backslash_in_double: "\"abc\\" => LexError::UnclosedDoubleQuote,
    unterminated_double_in_param_value: "${x:-\"y}" => LexError::UnclosedDoubleQuote,
}

#[test]
fn error_survives_preceding_valid_tokens() {
    let result = Lexer::tokenize("echo ok && 'oops", &ParseOptions::default());
    assert!(matches!(result, Err(LexError::UnclosedSingleQuote)));
}
