// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted runs).

use super::{Lexer, LexError};
use crate::ast::WordPart;

impl Lexer<'_> {
    /// Read a single-quoted run. Content is preserved literally with no
    /// escape processing; the quotes themselves are consumed.
    pub(super) fn read_single_quoted(&mut self) -> Result<String, LexError> {
        self.bump(); // consume opening '
        let start = self.current_position();
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\'' {
                let content = self.input[start..end].to_string();
                self.bump(); // consume closing '
                return Ok(content);
            }
            end = pos + ch.len_utf8();
            self.bump();
        }
        Err(LexError::UnclosedSingleQuote)
    }

    /// Lex a double-quoted run into a `DoubleQuoted` part.
    ///
    /// Inside `"…"` only `\`, `$`, `` ` `` and `"` are special. Backslash
    /// escapes stay verbatim in the literal stream (two characters); a
    /// backslash-newline pair is a line continuation and vanishes.
    pub(super) fn lex_double_quoted(&mut self) -> Result<WordPart, LexError> {
        self.bump(); // consume opening "
        let mut parts: Vec<WordPart> = Vec::new();
        let mut lit = String::new();

        loop {
            let Some(&(_, ch)) = self.chars.peek() else {
                return Err(LexError::UnclosedDoubleQuote);
            };
            match ch {
                '"' => {
                    self.bump();
                    Self::flush_literal(&mut lit, &mut parts);
                    return Ok(WordPart::DoubleQuoted(parts));
                }
                '\\' if self.is_line_continuation() => {
                    self.bump();
                    self.consume_newline();
                }
                '\\' => {
                    self.bump();
                    let Some(&(_, esc)) = self.chars.peek() else {
                        return Err(LexError::UnclosedDoubleQuote);
                    };
                    lit.push('\\');
                    lit.push(esc);
                    self.bump();
                }
                '$' => match self.scan_dollar()? {
                    Some(part) => {
                        Self::flush_literal(&mut lit, &mut parts);
                        parts.push(part);
                    }
                    None => lit.push('$'),
                },
                '`' => match self.try_lex_backtick() {
                    Some(part) => {
                        Self::flush_literal(&mut lit, &mut parts);
                        parts.push(part);
                    }
                    None => {
                        lit.push('`');
                        self.bump();
                    }
                },
                _ => {
                    lit.push(ch);
                    self.bump();
                }
            }
        }
    }
}
