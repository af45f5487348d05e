// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ast::WordPart;

#[yare::parameterized(
    out          = { RedirOp::Out, ">" },
    input        = { RedirOp::In, "<" },
    append       = { RedirOp::Append, ">>" },
    clobber      = { RedirOp::Clobber, ">|" },
    dup_out      = { RedirOp::DupOut, ">&" },
    dup_in       = { RedirOp::DupIn, "<&" },
    read_write   = { RedirOp::ReadWrite, "<>" },
    out_err      = { RedirOp::OutErr, "&>" },
    append_err   = { RedirOp::AppendErr, "&>>" },
    here_string  = { RedirOp::HereString, "<<<" },
    heredoc      = { RedirOp::Heredoc, "<<" },
    heredoc_tabs = { RedirOp::HeredocStrip, "<<-" },
)]
fn redir_op_text(op: RedirOp, expected: &str) {
    assert_eq!(op.as_str(), expected);
    assert_eq!(op.to_string(), expected);
}

#[test]
fn heredoc_ops_are_heredoc() {
    assert!(RedirOp::Heredoc.is_heredoc());
    assert!(RedirOp::HeredocStrip.is_heredoc());
    assert!(!RedirOp::HereString.is_heredoc());
    assert!(!RedirOp::In.is_heredoc());
}

#[test]
fn token_display_names_the_lexeme() {
    let word = Token::Word(vec![WordPart::Literal("ls".into())]);
    assert_eq!(word.to_string(), "word 'ls'");
    assert_eq!(Token::Op(Op::And).to_string(), "'&&'");
    assert_eq!(
        Token::Redirect { op: RedirOp::Out, fd: Some("2".into()) }.to_string(),
        "'2>'"
    );
    assert_eq!(Token::Symbol(Symbol::RBrace).to_string(), "'}'");
}

#[test]
fn parts_text_concatenates_quoted_runs() {
    let parts = vec![
        WordPart::Literal("a".into()),
        WordPart::SingleQuoted("b".into()),
        WordPart::DoubleQuoted(vec![WordPart::Literal("c".into())]),
    ];
    assert_eq!(parts_text(&parts), "abc");
}

#[yare::parameterized(
    plain      = { "FOO", true },
    underscore = { "_x1", true },
    digits     = { "a99", true },
    leading_digit = { "9a", false },
    dash       = { "a-b", false },
    empty      = { "", false },
)]
fn name_validation(name: &str, valid: bool) {
    assert_eq!(is_valid_name(name), valid);
}
