// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirect parsing on simple commands.

use super::helpers::*;
use crate::ast::*;
use crate::token::RedirOp;

fn redirects(input: &str) -> Vec<Redirect> {
    let command = parse_command(input);
    let cmd = match command {
        Command::Simple(cmd) => cmd,
        other => panic!("expected simple command, got {other:?}"),
    };
    cmd.redirects.expect("expected redirects")
}

#[test]
fn output_redirect() {
    let redirect = &redirects("cmd >out.txt")[0];
    assert_eq!(redirect.op, RedirOp::Out);
    assert!(redirect.fd.is_none());
    assert_literal(&redirect.target, "out.txt");
    assert!(redirect.heredoc.is_none());
}

#[test]
fn fd_prefix_attaches() {
    let redirect = &redirects("cmd 2>err.log")[0];
    assert_eq!(redirect.op, RedirOp::Out);
    assert_eq!(redirect.fd.as_deref(), Some("2"));
}

#[test]
fn dup_redirect() {
    let redirect = &redirects("cmd 2>&1")[0];
    assert_eq!(redirect.op, RedirOp::DupOut);
    assert_eq!(redirect.fd.as_deref(), Some("2"));
    assert_literal(&redirect.target, "1");
}

#[test]
fn herestring_target_is_the_string() {
    // grep -rn '\bnpm\b' <<< 'npm install'
    let command = parse_command(r"grep -rn '\bnpm\b' <<< 'npm install'");
    let cmd = get_simple(&command);
    assert_literal(&cmd.words.as_deref().unwrap()[0], "grep");

    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::HereString);
    assert_eq!(
        redirect.target.parts,
        vec![WordPart::SingleQuoted("npm install".into())]
    );
}

#[test]
fn redirects_keep_source_order() {
    let list = redirects("cmd <in >out 2>>err");
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].op, RedirOp::In);
    assert_eq!(list[1].op, RedirOp::Out);
    assert_eq!(list[2].op, RedirOp::Append);
}

#[test]
fn redirect_between_words() {
    let command = parse_command("cmd a >f b");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["cmd", "a", "b"]);
    assert_eq!(cmd.redirects.as_deref().unwrap().len(), 1);
}

#[test]
fn redirect_before_command_word() {
    let command = parse_command(">log echo hi");
    let cmd = get_simple(&command);
    assert_eq!(simple_words(cmd), vec!["echo", "hi"]);
    assert_eq!(cmd.redirects.as_deref().unwrap().len(), 1);
}

#[test]
fn redirect_only_command() {
    let command = parse_command(">out");
    let cmd = get_simple(&command);
    assert!(cmd.words.is_none());
    assert_eq!(cmd.redirects.as_deref().unwrap().len(), 1);
}

#[test]
fn both_streams_redirect() {
    let redirect = &redirects("cmd &>all.log")[0];
    assert_eq!(redirect.op, RedirOp::OutErr);
    assert_literal(&redirect.target, "all.log");
}

#[test]
fn target_may_be_an_expansion() {
    let redirect = &redirects("cmd >$LOG")[0];
    assert_eq!(redirect.target.parts, vec![WordPart::Param(ParamExp::short("LOG"))]);
}

#[test]
fn close_fd_target() {
    let redirect = &redirects("cmd >&-")[0];
    assert_eq!(redirect.op, RedirOp::DupOut);
    assert_literal(&redirect.target, "-");
}
