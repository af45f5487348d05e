// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heredoc body attachment: bodies pair with their opening redirects in
//! FIFO order.

use super::helpers::*;
use crate::ast::*;
use crate::token::RedirOp;

fn heredoc_text(redirect: &Redirect) -> &str {
    redirect
        .heredoc
        .as_ref()
        .and_then(|w| w.as_literal())
        .expect("expected a heredoc body")
}

#[test]
fn body_attaches_to_redirect() {
    // cat <<EOF\nhello\nEOF
    let command = parse_command("cat <<EOF\nhello\nEOF");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["cat"]);

    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::Heredoc);
    assert_literal(&redirect.target, "EOF");
    assert_eq!(heredoc_text(redirect), "hello\n");
}

#[test]
fn strip_tabs_heredoc() {
    let command = parse_command("cat <<-END\n\tindented\nEND");
    let cmd = get_simple(&command);
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::HeredocStrip);
    assert_eq!(heredoc_text(redirect), "indented\n");
}

#[test]
fn two_heredocs_attach_in_order() {
    let command = parse_command("cat <<A <<B\none\nA\ntwo\nB");
    let cmd = get_simple(&command);
    let redirects = cmd.redirects.as_deref().unwrap();
    assert_eq!(redirects.len(), 2);
    assert_eq!(heredoc_text(&redirects[0]), "one\n");
    assert_eq!(heredoc_text(&redirects[1]), "two\n");
}

#[test]
fn statement_continues_after_heredoc() {
    let program = parse_ok("cat <<EOF\nbody\nEOF\necho done");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn heredoc_inside_if_condition() {
    let command = parse_command("if grep -q x <<EOF\nneedle x\nEOF\nthen echo found; fi");
    let clause = get_if(&command);
    let cond = get_simple(&clause.condition[0].command);
    let redirect = &cond.redirects.as_deref().unwrap()[0];
    assert_eq!(heredoc_text(redirect), "needle x\n");
}

#[test]
fn heredoc_with_fd() {
    let command = parse_command("cmd 3<<END\nx\nEND");
    let cmd = get_simple(&command);
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.fd.as_deref(), Some("3"));
    assert_eq!(heredoc_text(redirect), "x\n");
}

#[test]
fn heredoc_without_newline_has_no_body() {
    let command = parse_command("cat <<EOF");
    let cmd = get_simple(&command);
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::Heredoc);
    assert!(redirect.heredoc.is_none());
}

#[test]
fn heredoc_body_is_uninterpreted() {
    let command = parse_command("cat <<EOF\n$(x) | y\nEOF");
    let cmd = get_simple(&command);
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(heredoc_text(redirect), "$(x) | y\n");
}
