// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw-slice capture for embedded sublanguages: `$(…)`, backticks,
//! `(( … ))` arithmetic commands, and `<(…)`/`>(…)` process substitutions.
//!
//! The lexer never recursively tokenizes these; it captures the bracketed
//! content as a raw string and the parser re-enters the pipeline on demand.
//! Every recognizer here scans ahead on a cloned iterator and commits only
//! when the closing delimiter exists, so malformed openings fall back to
//! their plain-character readings.

use super::{Lexer, QuoteState};
use crate::ast::{ProcSubstDirection, SubstBody, WordPart};
use crate::token::Token;

type CharCursor<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

impl<'a> Lexer<'a> {
    /// Lex a backtick substitution, or None when no closing unescaped
    /// backtick exists (the caller then treats `` ` `` as a literal).
    ///
    /// Content is captured raw, including escape backslashes.
    pub(super) fn try_lex_backtick(&mut self) -> Option<WordPart> {
        let mut look = self.chars.clone();
        look.next(); // opening `
        let start = look.peek().map(|&(p, _)| p).unwrap_or(self.input.len());
        let mut escaped = false;
        while let Some((pos, ch)) = look.next() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '`' => {
                    let raw = self.input[start..pos].to_string();
                    self.chars = look;
                    return Some(WordPart::CmdSubst {
                        body: SubstBody::Unparsed(raw),
                        backtick: true,
                    });
                }
                _ => {}
            }
        }
        None
    }

    /// Lex a `$(…)` command substitution; the `$` is already consumed and
    /// peek() is at the `(`.
    ///
    /// Tracks ALL parentheses for balance, not just `$(` markers, and
    /// respects quotes so `$(echo ")")` closes correctly.
    pub(super) fn try_lex_cmd_subst(&mut self) -> Option<WordPart> {
        let (raw, rest) = self.scan_balanced_parens(1)?;
        self.chars = rest;
        Some(WordPart::CmdSubst {
            body: SubstBody::Unparsed(raw),
            backtick: false,
        })
    }

    /// Lex a `$((…))` arithmetic expansion; the `$` is already consumed and
    /// peek() is at the first `(`. The expression is stored verbatim.
    pub(super) fn try_lex_arith_expansion(&mut self) -> Option<WordPart> {
        let (raw, rest) = self.scan_double_paren(2)?;
        self.chars = rest;
        Some(WordPart::ArithExp(raw))
    }

    /// Lex a `(( … ))` arithmetic command at a boundary; peek() is at the
    /// first `(`. The expression between the outer parentheses is trimmed.
    pub(super) fn try_lex_arith_command(&mut self) -> Option<Token> {
        let (raw, rest) = self.scan_double_paren(2)?;
        self.chars = rest;
        Some(Token::ArithCommand(raw.trim().to_string()))
    }

    /// Lex a `<(…)`/`>(…)` process substitution at a boundary; peek() is at
    /// the direction character. Produces a word token whose sole part is
    /// the raw slice.
    pub(super) fn try_lex_proc_subst(&mut self, direction: ProcSubstDirection) -> Option<Token> {
        let (raw, rest) = self.scan_balanced_parens(2)?;
        self.chars = rest;
        Some(Token::Word(vec![WordPart::ProcSubst {
            direction,
            body: SubstBody::Unparsed(raw),
        }]))
    }

    /// Scan past `skip` characters, then quote-aware balanced parentheses
    /// (depth starts at 1) to the matching `)`. Returns the enclosed slice
    /// and the cursor advanced past the close.
    fn scan_balanced_parens(&self, skip: usize) -> Option<(String, CharCursor<'a>)> {
        let mut look = self.chars.clone();
        for _ in 0..skip {
            look.next();
        }
        let start = look.peek().map(|&(p, _)| p).unwrap_or(self.input.len());
        let mut depth = 1usize;
        let mut quotes = QuoteState::new();
        while let Some((pos, ch)) = look.next() {
            if quotes.process(ch) {
                continue;
            }
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((self.input[start..pos].to_string(), look));
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Scan past `skip` characters, then to a `))` pair at inner depth
    /// zero. Returns the slice before the pair and the cursor advanced past
    /// both closers; None when the pair never appears (a lone `)` at depth
    /// zero without an adjacent second `)` also aborts).
    fn scan_double_paren(&self, skip: usize) -> Option<(String, CharCursor<'a>)> {
        let mut look = self.chars.clone();
        for _ in 0..skip {
            look.next();
        }
        let start = look.peek().map(|&(p, _)| p).unwrap_or(self.input.len());
        let mut depth = 0usize;
        while let Some((pos, ch)) = look.next() {
            match ch {
                '(' => depth += 1,
                ')' if depth > 0 => depth -= 1,
                ')' => {
                    return match look.next() {
                        Some((_, ')')) => Some((self.input[start..pos].to_string(), look)),
                        _ => None,
                    };
                }
                _ => {}
            }
        }
        None
    }
}
