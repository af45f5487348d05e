// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirect operator tests: longest match and fd attachment.

use super::helpers::*;
use crate::lexer::Lexer;
use crate::token::{RedirOp, Token};
use crate::ParseOptions;

lex_tests! {
    out: "> f" => [redirect(RedirOp::Out), word("f")],
    out_adjacent: ">f" => [redirect(RedirOp::Out), word("f")],
    append: ">>log" => [redirect(RedirOp::Append), word("log")],
    clobber: ">|f" => [redirect(RedirOp::Clobber), word("f")],
    input: "<f" => [redirect(RedirOp::In), word("f")],
    read_write: "<>f" => [redirect(RedirOp::ReadWrite), word("f")],
    here_string: "<<<hi" => [redirect(RedirOp::HereString), word("hi")],
    both: "&>log" => [redirect(RedirOp::OutErr), word("log")],
    both_append: "&>>log" => [redirect(RedirOp::AppendErr), word("log")],
}

lex_tests! {
    fd_out: "2>err" => [redirect_fd(RedirOp::Out, "2"), word("err")],
    fd_append: "12>>log" => [redirect_fd(RedirOp::Append, "12"), word("log")],
    fd_input: "0<f" => [redirect_fd(RedirOp::In, "0"), word("f")],
    dup_out: "2>&1" => [redirect_fd(RedirOp::DupOut, "2"), word("1")],
    dup_out_bare: ">&2" => [redirect(RedirOp::DupOut), word("2")],
    dup_in: "0<&3" => [redirect_fd(RedirOp::DupIn, "0"), word("3")],
    dup_close: ">&-" => [redirect(RedirOp::DupOut), word("-")],
    fd_needs_adjacency: "echo 2 > f" => [word("echo"), word("2"), redirect(RedirOp::Out), word("f")],
    quoted_digit_is_word: "\"2\">f" => [
        Token::Word(vec![dq(vec![lit("2")])]),
        redirect(RedirOp::Out),
        word("f"),
    ],
    digits_in_word_not_fd: "a2>f" => [word("a2"), redirect(RedirOp::Out), word("f")],
}

lex_tests! {
    full_command: "cmd <in >out 2>>err" => [
        word("cmd"),
        redirect(RedirOp::In),
        word("in"),
        redirect(RedirOp::Out),
        word("out"),
        redirect_fd(RedirOp::Append, "2"),
        word("err"),
    ],
}
