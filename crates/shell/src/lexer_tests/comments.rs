// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Comment tests: boundary gating and the keep-comments option.

use super::helpers::*;
use crate::lexer::Lexer;
use crate::token::Token;
use crate::ParseOptions;

fn tokenize_keep(input: &str) -> Vec<Token> {
    let options = ParseOptions { keep_comments: true, ..ParseOptions::default() };
    Lexer::tokenize(input, &options).unwrap()
}

lex_tests! {
    comment_discarded_by_default: "echo #hi" => [word("echo")],
    whole_line_comment_discarded: "#hi\nls" => [semi(), word("ls")],
    hash_mid_word_is_not_comment: "foo#bar" => [word("foo#bar")],
    hash_in_quotes_is_not_comment: "'#x'" => [Token::Word(vec![sq("#x")])],
}

#[test]
fn comment_kept_when_requested() {
    let tokens = tokenize_keep("echo #hi");
    assert_eq!(tokens, vec![word("echo"), Token::Comment("hi".into())]);
}

#[test]
fn comment_text_excludes_hash_and_keeps_spacing() {
    let tokens = tokenize_keep("ls # trailing note");
    assert_eq!(tokens, vec![word("ls"), Token::Comment(" trailing note".into())]);
}

#[test]
fn whole_line_comment_kept() {
    let tokens = tokenize_keep("# header\nls");
    assert_eq!(
        tokens,
        vec![Token::Comment(" header".into()), semi(), word("ls")]
    );
}

#[test]
fn comment_stops_at_newline() {
    let tokens = tokenize_keep("a #one\nb #two");
    assert_eq!(
        tokens,
        vec![
            word("a"),
            Token::Comment("one".into()),
            semi(),
            word("b"),
            Token::Comment("two".into()),
        ]
    );
}

#[test]
fn comment_after_semicolon() {
    let tokens = tokenize_keep("a; #x");
    assert_eq!(tokens, vec![word("a"), semi(), Token::Comment("x".into())]);
}
