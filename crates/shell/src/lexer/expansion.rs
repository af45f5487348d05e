// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `$` expansion scan: arithmetic expansion, command substitution,
//! braced parameter expansion, names, digits, and special parameters.

use super::{Lexer, LexError};
use crate::ast::{ParamExp, Word, WordPart, PARAM_OPS};
use crate::token::{is_name_char, is_name_start, is_special_param};

impl Lexer<'_> {
    /// Scan an expansion after `$`. The `$` is consumed here; `Ok(None)`
    /// means no recognizer matched and the caller treats `$` as a literal.
    ///
    /// Recognizers run in order: `$((…))`, `$(…)`, `${…}`, `$name`,
    /// `$<digit>`, `$<special>`.
    pub(super) fn scan_dollar(&mut self) -> Result<Option<WordPart>, LexError> {
        self.bump(); // consume $
        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        match ch {
            '(' => {
                if self.peek_second() == Some('(') {
                    if let Some(part) = self.try_lex_arith_expansion() {
                        return Ok(Some(part));
                    }
                }
                Ok(self.try_lex_cmd_subst())
            }
            '{' => self.try_lex_braced_param(),
            c if is_name_start(c) => {
                let name = self.scan_name();
                Ok(Some(WordPart::Param(ParamExp::short(name))))
            }
            c if c.is_ascii_digit() => {
                self.bump();
                Ok(Some(WordPart::Param(ParamExp::short(c.to_string()))))
            }
            c if is_special_param(c) => {
                self.bump();
                Ok(Some(WordPart::Param(ParamExp::short(c.to_string()))))
            }
            _ => Ok(None),
        }
    }

    /// Scan a name run, consuming valid name characters.
    pub(super) fn scan_name(&mut self) -> String {
        let start = self.current_position();
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if !is_name_char(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.bump();
        }
        self.input[start..end].to_string()
    }

    /// Lex a `${…}` parameter expansion; the `$` is consumed and peek() is
    /// at the `{`. The close is found by brace-depth tracking; when the
    /// input ends first, `$` stays literal and the brace re-lexes as a
    /// symbol.
    fn try_lex_braced_param(&mut self) -> Result<Option<WordPart>, LexError> {
        let mut look = self.chars.clone();
        look.next(); // consume {
        let start = look.peek().map(|&(p, _)| p).unwrap_or(self.input.len());
        let mut depth = 1usize;
        let mut content_end = None;
        while let Some((pos, ch)) = look.next() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        content_end = Some(pos);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(end) = content_end else { return Ok(None) };

        let part = Self::parse_param_body(&self.input[start..end])?;
        self.chars = look;
        Ok(Some(part))
    }

    /// Structurally parse the inside of `${…}`: an optional `!`/`#` prefix,
    /// a name run, and optionally an operator from the fixed alphabet
    /// followed by a value. Anything else keeps the entire bracketed
    /// content as the name, verbatim.
    fn parse_param_body(content: &str) -> Result<WordPart, LexError> {
        let (prefix, rest) = match content.chars().next() {
            Some(c @ ('!' | '#')) if content.len() > c.len_utf8() => {
                (Some(c), &content[c.len_utf8()..])
            }
            _ => (None, content),
        };

        let name_end = rest
            .char_indices()
            .find(|(_, ch)| !is_name_char(*ch))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let name_run = &rest[..name_end];
        let leftover = &rest[name_end..];

        let name = match prefix {
            Some(p) => format!("{p}{name_run}"),
            None => name_run.to_string(),
        };

        if leftover.is_empty() {
            return Ok(WordPart::Param(ParamExp {
                short: false,
                name,
                op: None,
                value: None,
            }));
        }

        if !name.is_empty() {
            for op in PARAM_OPS {
                if let Some(value_text) = leftover.strip_prefix(op) {
                    return Ok(WordPart::Param(ParamExp {
                        short: false,
                        name,
                        op: Some(op.to_string()),
                        value: Some(Self::lex_embedded_word(value_text)?),
                    }));
                }
            }
        }

        // Substring, case modification, and other elaborate forms keep the
        // whole body as the name; consumers can re-parse it if needed.
        Ok(WordPart::Param(ParamExp {
            short: false,
            name: content.to_string(),
            op: None,
            value: None,
        }))
    }

    /// Lex an embedded slice (a `${…}` operator value) into word parts.
    ///
    /// Word-ending characters have no effect here; only quotes, `$`,
    /// backticks, and backslashes are special.
    pub(super) fn lex_embedded_word(text: &str) -> Result<Word, LexError> {
        let mut lexer = Lexer::new(text, false);
        let mut parts: Vec<WordPart> = Vec::new();
        let mut lit = String::new();

        loop {
            let Some(&(_, ch)) = lexer.chars.peek() else { break };
            match ch {
                '\'' => {
                    Self::flush_literal(&mut lit, &mut parts);
                    parts.push(WordPart::SingleQuoted(lexer.read_single_quoted()?));
                }
                '"' => {
                    Self::flush_literal(&mut lit, &mut parts);
                    parts.push(lexer.lex_double_quoted()?);
                }
                '$' => match lexer.scan_dollar()? {
                    Some(part) => {
                        Self::flush_literal(&mut lit, &mut parts);
                        parts.push(part);
                    }
                    None => lit.push('$'),
                },
                '`' => match lexer.try_lex_backtick() {
                    Some(part) => {
                        Self::flush_literal(&mut lit, &mut parts);
                        parts.push(part);
                    }
                    None => {
                        lit.push('`');
                        lexer.bump();
                    }
                },
                '\\' => {
                    lexer.bump();
                    lit.push('\\');
                    if let Some(&(_, esc)) = lexer.chars.peek() {
                        lit.push(esc);
                        lexer.bump();
                    }
                }
                _ => {
                    lit.push(ch);
                    lexer.bump();
                }
            }
        }
        Self::flush_literal(&mut lit, &mut parts);

        if parts.is_empty() {
            parts.push(WordPart::Literal(String::new()));
        }
        Ok(Word { parts })
    }
}
