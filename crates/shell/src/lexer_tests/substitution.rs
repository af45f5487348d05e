// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command substitution lexer tests: `$(…)`, backticks, depth tracking,
//! and arithmetic expansion.
//!
//! Content is captured as a raw slice, not recursively tokenized; the
//! parser re-enters the pipeline on it later.

use super::helpers::*;
use crate::ast::{SubstBody, WordPart};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::ParseOptions;

fn cmd_subst(content: &str) -> WordPart {
    WordPart::CmdSubst { body: SubstBody::Unparsed(content.into()), backtick: false }
}

fn backtick(content: &str) -> WordPart {
    WordPart::CmdSubst { body: SubstBody::Unparsed(content.into()), backtick: true }
}

lex_tests! {
    simple_subst: "$(date)" => [Token::Word(vec![cmd_subst("date")])],
    subst_with_args: "$(echo hello world)" => [Token::Word(vec![cmd_subst("echo hello world")])],
    nested_depth_1: "$(cat $(file))" => [Token::Word(vec![cmd_subst("cat $(file)")])],
    nested_depth_2: "$(a $(b $(c)))" => [Token::Word(vec![cmd_subst("a $(b $(c))")])],
    nested_siblings: "$($(a) $(b))" => [Token::Word(vec![cmd_subst("$(a) $(b)")])],
    inner_subshell: "$( (a) b)" => [Token::Word(vec![cmd_subst(" (a) b")])],
    quoted_close_paren: "$(echo \")\")" => [Token::Word(vec![cmd_subst("echo \")\"")])],
    single_quoted_paren: "$(echo ')')" => [Token::Word(vec![cmd_subst("echo ')'")])],
    adjacent_text: "pre$(c)post" => [Token::Word(vec![lit("pre"), cmd_subst("c"), lit("post")])],
    subst_in_double_quotes: "\"now: $(date)\"" => [
        Token::Word(vec![dq(vec![lit("now: "), cmd_subst("date")])]),
    ],
}

lex_tests! {
    backtick_simple: "`date`" => [Token::Word(vec![backtick("date")])],
    backtick_with_args: "`echo hi`" => [Token::Word(vec![backtick("echo hi")])],
    backtick_adjacent: "pre`c`post" => [Token::Word(vec![lit("pre"), backtick("c"), lit("post")])],
    backtick_in_double_quotes: "\"v: `id`\"" => [
        Token::Word(vec![dq(vec![lit("v: "), backtick("id")])]),
    ],
    backtick_escaped_close: r"`a \` b`" => [Token::Word(vec![backtick(r"a \` b")])],
}

#[yare::parameterized(
    simple    = { "$(date)", "`date`" },
    with_args = { "$(echo hello world)", "`echo hello world`" },
)]
fn backtick_dollar_equivalence(dollar_input: &str, backtick_input: &str) {
    let options = ParseOptions::default();
    let dollar = Lexer::tokenize(dollar_input, &options).unwrap();
    let ticked = Lexer::tokenize(backtick_input, &options).unwrap();
    assert_eq!(dollar.len(), 1);
    assert_eq!(ticked.len(), 1);
    match (&dollar[0], &ticked[0]) {
        (Token::Word(d), Token::Word(b)) => match (&d[0], &b[0]) {
            (
                WordPart::CmdSubst { body: c1, backtick: false },
                WordPart::CmdSubst { body: c2, backtick: true },
            ) => assert_eq!(c1, c2),
            other => panic!("expected substitution parts, got {other:?}"),
        },
        other => panic!("expected word tokens, got {other:?}"),
    }
}

// Arithmetic expansion is captured verbatim and never re-parsed.
lex_tests! {
    arith_expansion: "$((1+2))" => [Token::Word(vec![WordPart::ArithExp("1+2".into())])],
    arith_with_spaces: "$(( a * b ))" => [Token::Word(vec![WordPart::ArithExp(" a * b ".into())])],
    arith_nested_parens: "$(((a+b)*c))" => [Token::Word(vec![WordPart::ArithExp("(a+b)*c".into())])],
    arith_in_word: "x=$((n+1))" => [Token::Word(vec![lit("x="), WordPart::ArithExp("n+1".into())])],
    arith_in_double_quotes: "\"$((1+2))\"" => [
        Token::Word(vec![dq(vec![WordPart::ArithExp("1+2".into())])]),
    ],
}

// Unterminated openings fall back to their plain-character readings.
lex_tests! {
    unterminated_subst: "$(foo" => [
        word("$"),
        Token::Symbol(crate::token::Symbol::LParen),
        word("foo"),
    ],
    unterminated_backtick: "`abc" => [word("`abc")],
}
