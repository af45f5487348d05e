// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting tests: single-quote runs, double-quote runs, escapes.

use super::helpers::*;
use crate::lexer::Lexer;
use crate::token::Token;
use crate::ParseOptions;

lex_tests! {
    single_quoted: "'hello world'" => [Token::Word(vec![sq("hello world")])],
    single_quoted_empty: "''" => [Token::Word(vec![sq("")])],
    single_preserves_specials: "'$HOME `x` \\'" => [Token::Word(vec![sq("$HOME `x` \\")])],
    single_mid_word: "a'b'c" => [Token::Word(vec![lit("a"), sq("b"), lit("c")])],
    adjacent_quote_runs: "'a'\"b\"" => [Token::Word(vec![sq("a"), dq(vec![lit("b")])])],
    double_inside_single: "'say \"hi\"'" => [Token::Word(vec![sq("say \"hi\"")])],
}

lex_tests! {
    double_quoted: "\"hello\"" => [Token::Word(vec![dq(vec![lit("hello")])])],
    double_quoted_empty: "\"\"" => [Token::Word(vec![dq(vec![])])],
    double_with_spaces: "\"a b  c\"" => [Token::Word(vec![dq(vec![lit("a b  c")])])],
    double_with_param: "\"hi $name\"" => [
        Token::Word(vec![dq(vec![lit("hi "), param("name")])]),
    ],
    double_param_then_text: "\"$x!\"" => [
        Token::Word(vec![dq(vec![param("x"), lit("!")])]),
    ],
    single_inside_double: "\"it's\"" => [Token::Word(vec![dq(vec![lit("it's")])])],
    double_mid_word: "pre\"mid\"post" => [
        Token::Word(vec![lit("pre"), dq(vec![lit("mid")]), lit("post")]),
    ],
    semicolon_inside_double: "\"a;b\"" => [Token::Word(vec![dq(vec![lit("a;b")])])],
}

// Backslash escapes inside double quotes stay verbatim in the literal
// stream; semantic un-escaping is the consumer's concern.
lex_tests! {
    escaped_dollar_in_double: r#""a\$b""# => [Token::Word(vec![dq(vec![lit(r"a\$b")])])],
    escaped_quote_in_double: r#""a\"b""# => [Token::Word(vec![dq(vec![lit(r#"a\"b"#)])])],
    escaped_backslash_in_double: r#""a\\b""# => [Token::Word(vec![dq(vec![lit(r"a\\b")])])],
    escaped_letter_in_double: r#""a\nb""# => [Token::Word(vec![dq(vec![lit(r"a\nb")])])],
    escaped_backtick_in_double: r#""a\`b""# => [Token::Word(vec![dq(vec![lit(r"a\`b")])])],
    continuation_in_double: "\"a\\\nb\"" => [Token::Word(vec![dq(vec![lit("ab")])])],
}
