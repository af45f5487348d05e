// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, operators, whitespace, boundaries.

use super::helpers::*;
use crate::lexer::Lexer;
use crate::token::{Op, Symbol, Token};
use crate::ParseOptions;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
}

lex_tests! {
    single_word: "echo" => [word("echo")],
    simple_words: "echo hello world" => [word("echo"), word("hello"), word("world")],
    multiple_spaces: "ls   -la" => [word("ls"), word("-la")],
    tabs_and_spaces: "cmd1\t  cmd2" => [word("cmd1"), word("cmd2")],
    punctuation_in_word: "a.b,c=d" => [word("a.b,c=d")],
    hash_inside_word: "foo#bar" => [word("foo#bar")],
    equals_word: "--flag=value" => [word("--flag=value")],
}

lex_tests! {
    semicolon: "a;b" => [word("a"), semi(), word("b")],
    newline_is_semi: "a\nb" => [word("a"), semi(), word("b")],
    crlf_is_semi: "a\r\nb" => [word("a"), semi(), word("b")],
    blank_lines: "a\n\n\nb" => [word("a"), semi(), semi(), semi(), word("b")],
    trailing_newline: "a\n" => [word("a"), semi()],
    and_op: "a && b" => [word("a"), Token::Op(Op::And), word("b")],
    or_op: "a || b" => [word("a"), Token::Op(Op::Or), word("b")],
    pipe_op: "a | b" => [word("a"), Token::Op(Op::Pipe), word("b")],
    pipe_adjacent: "a|b" => [word("a"), Token::Op(Op::Pipe), word("b")],
    background: "a &" => [word("a"), Token::Op(Op::Amp)],
    amp_then_word: "a & b" => [word("a"), Token::Op(Op::Amp), word("b")],
}

lex_tests! {
    bang_at_start: "! a" => [Token::Op(Op::Bang), word("a")],
    bang_adjacent: "!a" => [Token::Op(Op::Bang), word("a")],
    bang_inside_word: "a!b" => [word("a!b")],
    bang_after_semi: "a; ! b" => [word("a"), semi(), Token::Op(Op::Bang), word("b")],
}

lex_tests! {
    parens: "(a)" => [
        Token::Symbol(Symbol::LParen),
        word("a"),
        Token::Symbol(Symbol::RParen),
    ],
    braces: "{ a; }" => [
        Token::Symbol(Symbol::LBrace),
        word("a"),
        semi(),
        Token::Symbol(Symbol::RBrace),
    ],
    brace_splits_word: "a{b}" => [
        word("a"),
        Token::Symbol(Symbol::LBrace),
        word("b"),
        Token::Symbol(Symbol::RBrace),
    ],
}

lex_tests! {
    line_continuation: "echo a \\\nb" => [word("echo"), word("a"), word("b")],
    line_continuation_crlf: "echo a \\\r\nb" => [word("echo"), word("a"), word("b")],
    escaped_space_stays_in_word: "a\\ b" => [word("a\\ b")],
    escaped_semicolon: "a\\;b" => [word("a\\;b")],
    trailing_backslash: "a\\" => [word("a\\")],
    lone_backslash: "\\" => [word("\\")],
}

#[test]
fn token_count_scales_with_input() {
    let input = "a; b; c; d";
    let tokens = Lexer::tokenize(input, &ParseOptions::default()).unwrap();
    assert_eq!(tokens.len(), 7);
}
