// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Here-document lexer tests: delimiter pairing and deferred body capture.
//!
//! The opening redirect and the delimiter stay ordinary tokens; bodies are
//! emitted as standalone `HeredocBody` tokens after the newline that
//! triggered collection, in the order the heredocs were opened.

use super::helpers::*;
use crate::lexer::Lexer;
use crate::token::{RedirOp, Token};
use crate::ParseOptions;

lex_tests! {
    basic_heredoc: "cat <<EOF\nhello\nworld\nEOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("hello\nworld\n".into()),
    ],
    single_line_body: "cat <<EOF\nhello\nEOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("hello\n".into()),
    ],
    empty_body: "cat <<EOF\nEOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("".into()),
    ],
    custom_delimiter: "cat <<MARKER\ndata\nMARKER" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("MARKER"),
        semi(),
        Token::HeredocBody("data\n".into()),
    ],
}

lex_tests! {
    strip_tabs_body: "cat <<-EOF\n\thello\n\tworld\nEOF" => [
        word("cat"),
        redirect(RedirOp::HeredocStrip),
        word("EOF"),
        semi(),
        Token::HeredocBody("hello\nworld\n".into()),
    ],
    strip_tabs_delimiter: "cat <<-EOF\n\thello\n\tEOF" => [
        word("cat"),
        redirect(RedirOp::HeredocStrip),
        word("EOF"),
        semi(),
        Token::HeredocBody("hello\n".into()),
    ],
    strip_tabs_mixed: "cat <<-EOF\n\thello\nno tabs\n\tEOF" => [
        word("cat"),
        redirect(RedirOp::HeredocStrip),
        word("EOF"),
        semi(),
        Token::HeredocBody("hello\nno tabs\n".into()),
    ],
}

lex_tests! {
    heredoc_with_fd: "cmd 3<<END\ncontent\nEND" => [
        word("cmd"),
        redirect_fd(RedirOp::Heredoc, "3"),
        word("END"),
        semi(),
        Token::HeredocBody("content\n".into()),
    ],
    quoted_delimiter: "cat <<'EOF'\n$x\nEOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        Token::Word(vec![sq("EOF")]),
        semi(),
        Token::HeredocBody("$x\n".into()),
    ],
    body_is_raw_text: "cat <<EOF\n$(rm -rf) `x` \"q\"\nEOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("$(rm -rf) `x` \"q\"\n".into()),
    ],
}

lex_tests! {
    two_heredocs_fifo: "cat <<A <<B\none\nA\ntwo\nB" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("A"),
        redirect(RedirOp::Heredoc),
        word("B"),
        semi(),
        Token::HeredocBody("one\n".into()),
        Token::HeredocBody("two\n".into()),
    ],
    statement_after_heredoc: "cat <<EOF\nhi\nEOF\necho done" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("hi\n".into()),
        word("echo"),
        word("done"),
    ],
}

// Degenerate inputs: collection needs a newline; EOF ends a body early.
lex_tests! {
    no_newline_no_body: "cat <<EOF" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
    ],
    missing_delimiter_reads_to_eof: "cat <<EOF\nabc\ndef" => [
        word("cat"),
        redirect(RedirOp::Heredoc),
        word("EOF"),
        semi(),
        Token::HeredocBody("abc\ndef\n".into()),
    ],
}
