// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter expansion tests: `$name`, specials, and the `${…}` forms.

use super::helpers::*;
use crate::ast::{ParamExp, Word, WordPart};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::ParseOptions;

fn braced(name: &str, op: Option<&str>, value: Option<Vec<WordPart>>) -> Token {
    Token::Word(vec![WordPart::Param(ParamExp {
        short: false,
        name: name.into(),
        op: op.map(String::from),
        value: value.map(|parts| Word { parts }),
    })])
}

lex_tests! {
    simple_param: "$HOME" => [Token::Word(vec![param("HOME")])],
    param_underscore: "$_private" => [Token::Word(vec![param("_private")])],
    param_mid_word: "a$b" => [Token::Word(vec![lit("a"), param("b")])],
    param_name_stops_at_dash: "$a-b" => [Token::Word(vec![param("a"), lit("-b")])],
    digit_param: "$1" => [Token::Word(vec![param("1")])],
    digit_param_single: "$12" => [Token::Word(vec![param("1"), lit("2")])],
    lone_dollar: "echo $" => [word("echo"), word("$")],
    dollar_punct_is_literal: "$.x" => [word("$.x")],
}

lex_tests! {
    special_status: "$?" => [Token::Word(vec![param("?")])],
    special_count: "$#" => [Token::Word(vec![param("#")])],
    special_all_at: "$@" => [Token::Word(vec![param("@")])],
    special_all_star: "$*" => [Token::Word(vec![param("*")])],
    special_self: "$$" => [Token::Word(vec![param("$")])],
    special_last_bg: "$!" => [Token::Word(vec![param("!")])],
    special_flags: "$-" => [Token::Word(vec![param("-")])],
}

lex_tests! {
    braced_plain: "${HOME}" => [braced("HOME", None, None)],
    braced_digit: "${10}" => [braced("10", None, None)],
    braced_length: "${#files}" => [braced("#files", None, None)],
    braced_indirect: "${!ref}" => [braced("!ref", None, None)],
    braced_special: "${@}" => [braced("@", None, None)],
    braced_mid_word: "a${b}c" => [
        Token::Word(vec![
            lit("a"),
            WordPart::Param(ParamExp { short: false, name: "b".into(), op: None, value: None }),
            lit("c"),
        ]),
    ],
}

lex_tests! {
    op_default: "${x:-fallback}" => [braced("x", Some(":-"), Some(vec![lit("fallback")]))],
    op_assign: "${x:=y}" => [braced("x", Some(":="), Some(vec![lit("y")]))],
    op_alt: "${x:+y}" => [braced("x", Some(":+"), Some(vec![lit("y")]))],
    op_error: "${x:?missing}" => [braced("x", Some(":?"), Some(vec![lit("missing")]))],
    op_default_unset: "${x-y}" => [braced("x", Some("-"), Some(vec![lit("y")]))],
    op_assign_unset: "${x=y}" => [braced("x", Some("="), Some(vec![lit("y")]))],
    op_strip_suffix: "${x%.txt}" => [braced("x", Some("%"), Some(vec![lit(".txt")]))],
    op_strip_suffix_greedy: "${x%%.*}" => [braced("x", Some("%%"), Some(vec![lit(".*")]))],
    op_strip_prefix: "${x#pre}" => [braced("x", Some("#"), Some(vec![lit("pre")]))],
    op_strip_prefix_greedy: "${x##*/}" => [braced("x", Some("##"), Some(vec![lit("*/")]))],
    op_replace: "${x/a/b}" => [braced("x", Some("/"), Some(vec![lit("a/b")]))],
    op_replace_all: "${x//a/b}" => [braced("x", Some("//"), Some(vec![lit("a/b")]))],
    op_empty_value: "${x:-}" => [braced("x", Some(":-"), Some(vec![lit("")]))],
    value_with_spaces: "${x:-a b}" => [braced("x", Some(":-"), Some(vec![lit("a b")]))],
    value_with_param: "${x:-$y}" => [braced("x", Some(":-"), Some(vec![param("y")]))],
    value_nested_braces: "${x:-${y}}" => [braced("x", Some(":-"), Some(vec![
        WordPart::Param(ParamExp { short: false, name: "y".into(), op: None, value: None }),
    ]))],
}

// Forms outside the operator alphabet keep the whole bracketed body as the
// name, verbatim.
lex_tests! {
    substring_fallback: "${x:1:2}" => [braced("x:1:2", None, None)],
    case_mod_fallback: "${x^^}" => [braced("x^^", None, None)],
    array_subscript_fallback: "${arr[0]}" => [braced("arr[0]", None, None)],
}

lex_tests! {
    unterminated_brace_falls_back: "${x" => [
        word("$"),
        Token::Symbol(crate::token::Symbol::LBrace),
        word("x"),
    ],
}
