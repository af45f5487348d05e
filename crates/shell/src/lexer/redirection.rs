// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirect operator lexing and heredoc body capture.

use super::Lexer;
use crate::token::{parts_text, RedirOp, Token};

impl Lexer<'_> {
    /// Lex an output redirect: `>`, `>>`, `>&`, or `>|`.
    ///
    /// Called when peek() has confirmed the next char is '>'. `fd` carries
    /// an attached leading digit run.
    pub(super) fn lex_redirect_out(&mut self, fd: Option<String>) -> Token {
        self.bump(); // consume >

        let op = match self.peek_char() {
            Some('>') => {
                self.bump();
                RedirOp::Append
            }
            Some('&') => {
                self.bump();
                RedirOp::DupOut
            }
            Some('|') => {
                self.bump();
                RedirOp::Clobber
            }
            _ => RedirOp::Out,
        };
        Token::Redirect { op, fd }
    }

    /// Lex an input redirect: `<`, `<<`, `<<-`, `<<<`, `<&`, or `<>`.
    ///
    /// Called when peek() has confirmed the next char is '<'.
    pub(super) fn lex_redirect_in(&mut self, fd: Option<String>) -> Token {
        self.bump(); // consume <

        let op = match self.peek_char() {
            Some('<') => {
                self.bump();
                match self.peek_char() {
                    Some('<') => {
                        self.bump();
                        RedirOp::HereString
                    }
                    Some('-') => {
                        self.bump();
                        RedirOp::HeredocStrip
                    }
                    _ => RedirOp::Heredoc,
                }
            }
            Some('&') => {
                self.bump();
                RedirOp::DupIn
            }
            Some('>') => {
                self.bump();
                RedirOp::ReadWrite
            }
            _ => RedirOp::In,
        };
        Token::Redirect { op, fd }
    }

    /// Capture bodies for all pending heredocs, in the order the heredocs
    /// were opened, appending one `HeredocBody` token per heredoc.
    ///
    /// The delimiter is the surface text of the word token following the
    /// opening redirect. A redirect with no following word is skipped; the
    /// parser reports the missing target.
    pub(super) fn collect_pending_heredocs(&mut self, tokens: &mut Vec<Token>) {
        while let Some(pending) = self.pending_heredocs.pop_front() {
            let Some(Token::Word(parts)) = tokens.get(pending.token_index + 1) else {
                continue;
            };
            let delimiter = parts_text(parts);
            let body = self.read_heredoc_body(&delimiter, pending.strip_tabs);
            tracing::trace!(delimiter = %delimiter, bytes = body.len(), "collected heredoc body");
            tokens.push(Token::HeredocBody(body));
        }
    }

    /// Read body lines until a line equals the delimiter. The delimiter
    /// line is consumed but not appended. For `<<-`, leading tab runs are
    /// stripped before both the comparison and accumulation. At end of
    /// input the text collected so far becomes the body.
    fn read_heredoc_body(&mut self, delimiter: &str, strip_tabs: bool) -> String {
        let mut body = String::new();
        while self.chars.peek().is_some() {
            let line = self.read_line();
            let content = if strip_tabs {
                line.trim_start_matches('\t')
            } else {
                line.as_str()
            };
            if content == delimiter {
                break;
            }
            body.push_str(content);
            body.push('\n');
        }
        body
    }

    /// Read one line, consuming but not returning its terminator.
    fn read_line(&mut self) -> String {
        let start = self.current_position();
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\n' || ch == '\r' {
                self.consume_newline();
                break;
            }
            end = pos + ch.len_utf8();
            self.bump();
        }
        self.input[start..end].to_string()
    }
}
