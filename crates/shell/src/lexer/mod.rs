// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Context-sensitive shell lexer.
//!
//! A single left-to-right pass turns source text into tokens. The lexical
//! class of several characters depends on scanner state: `#`, `!`, `((`,
//! and `<(`/`>(` have their special meanings only at a token boundary, and
//! word characters change meaning inside quote runs. Embedded command,
//! process, and backtick substitutions are captured as raw slices for the
//! parser to re-enter.

mod expansion;
mod operators;
mod quotes;
mod redirection;
mod substitution;

use std::collections::VecDeque;

use crate::ast::{ProcSubstDirection, WordPart};
use crate::token::{Op, RedirOp, Symbol, Token};
use crate::ParseOptions;

pub use crate::error::LexError;

/// Heredoc redirect waiting for its body, in the order it was opened.
struct PendingHeredoc {
    /// Index of the opening redirect token in the output stream.
    token_index: usize,
    /// True for `<<-`.
    strip_tabs: bool,
}

/// Track quote state during balanced content reading.
struct QuoteState {
    in_single_quote: bool,
    in_double_quote: bool,
    escaped: bool,
}

impl QuoteState {
    fn new() -> Self {
        Self {
            in_single_quote: false,
            in_double_quote: false,
            escaped: false,
        }
    }

    /// Process a character, updating quote state.
    /// Returns true if the character should be treated literally (inside
    /// quotes or escaped).
    fn process(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return true;
        }
        match ch {
            '\\' if !self.in_single_quote => {
                self.escaped = true;
                false
            }
            '\'' if !self.in_double_quote => {
                self.in_single_quote = !self.in_single_quote;
                false
            }
            '"' if !self.in_single_quote => {
                self.in_double_quote = !self.in_double_quote;
                false
            }
            _ => self.in_single_quote || self.in_double_quote,
        }
    }
}

/// Shell lexer that tokenizes input into words, operators, redirects,
/// grouping symbols, arithmetic commands, heredoc bodies, and comments.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// True when the next character begins a fresh token: at input start,
    /// or after whitespace, a newline, an operator, or a grouping symbol.
    at_boundary: bool,
    keep_comments: bool,
    /// Pending heredocs awaiting body capture.
    pending_heredocs: VecDeque<PendingHeredoc>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, keep_comments: bool) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            at_boundary: true,
            keep_comments,
            pending_heredocs: VecDeque::new(),
        }
    }

    /// Tokenize the entire input and return a vector of tokens.
    pub fn tokenize(input: &str, options: &ParseOptions) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(input, options.keep_comments);
        // Pre-allocate based on heuristic: ~1 token per 4 characters
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);

        loop {
            lexer.skip_blank();
            let Some(ch) = lexer.peek_char() else { break };

            match ch {
                '\n' => {
                    lexer.consume_newline();
                    lexer.push_token(Token::Op(Op::Semi), &mut tokens);
                    if !lexer.pending_heredocs.is_empty() {
                        lexer.collect_pending_heredocs(&mut tokens);
                    }
                }
                '#' if lexer.at_boundary => {
                    if let Some(text) = lexer.lex_comment() {
                        tokens.push(Token::Comment(text));
                    }
                }
                ';' => {
                    lexer.bump();
                    lexer.push_token(Token::Op(Op::Semi), &mut tokens);
                }
                '&' => {
                    let token = lexer.lex_amp();
                    lexer.push_token(token, &mut tokens);
                }
                '|' => {
                    let token = lexer.lex_pipe();
                    lexer.push_token(token, &mut tokens);
                }
                '!' if lexer.at_boundary => {
                    lexer.bump();
                    lexer.push_token(Token::Op(Op::Bang), &mut tokens);
                }
                '(' if lexer.at_boundary && lexer.peek_second() == Some('(') => {
                    match lexer.try_lex_arith_command() {
                        Some(token) => lexer.push_token(token, &mut tokens),
                        None => {
                            lexer.bump();
                            lexer.push_token(Token::Symbol(Symbol::LParen), &mut tokens);
                        }
                    }
                }
                '(' => {
                    lexer.bump();
                    lexer.push_token(Token::Symbol(Symbol::LParen), &mut tokens);
                }
                ')' => {
                    lexer.bump();
                    lexer.push_token(Token::Symbol(Symbol::RParen), &mut tokens);
                }
                '{' => {
                    lexer.bump();
                    lexer.push_token(Token::Symbol(Symbol::LBrace), &mut tokens);
                }
                '}' => {
                    lexer.bump();
                    lexer.push_token(Token::Symbol(Symbol::RBrace), &mut tokens);
                }
                '<' | '>' if lexer.at_boundary && lexer.peek_second() == Some('(') => {
                    let direction = if ch == '<' {
                        ProcSubstDirection::In
                    } else {
                        ProcSubstDirection::Out
                    };
                    let token = match lexer.try_lex_proc_subst(direction) {
                        Some(token) => token,
                        None if ch == '<' => lexer.lex_redirect_in(None),
                        None => lexer.lex_redirect_out(None),
                    };
                    lexer.push_token(token, &mut tokens);
                }
                '<' => {
                    let token = lexer.lex_redirect_in(None);
                    lexer.push_token(token, &mut tokens);
                }
                '>' => {
                    let token = lexer.lex_redirect_out(None);
                    lexer.push_token(token, &mut tokens);
                }
                _ => {
                    let token = lexer.lex_word()?;
                    lexer.push_token(token, &mut tokens);
                }
            }
        }

        // Heredocs that never saw a newline carry no body; the parser leaves
        // the redirect's heredoc field absent.
        Ok(tokens)
    }

    /// Push a token, updating the boundary flag and registering heredoc
    /// redirects for deferred body capture.
    fn push_token(&mut self, token: Token, tokens: &mut Vec<Token>) {
        if let Token::Redirect { op, .. } = &token {
            if op.is_heredoc() {
                self.pending_heredocs.push_back(PendingHeredoc {
                    token_index: tokens.len(),
                    strip_tabs: matches!(op, RedirOp::HeredocStrip),
                });
            }
        }
        self.at_boundary = !matches!(token, Token::Word(_));
        tokens.push(token);
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Peek one character past the next one.
    fn peek_second(&self) -> Option<char> {
        let mut look = self.chars.clone();
        look.next();
        look.next().map(|(_, c)| c)
    }

    #[inline]
    fn bump(&mut self) {
        self.chars.next();
    }

    /// Get the current byte position in the input.
    fn current_position(&self) -> usize {
        self.chars
            .clone()
            .next()
            .map(|(pos, _)| pos)
            .unwrap_or(self.input.len())
    }

    /// True when the next characters are a line continuation: a backslash
    /// followed by LF or CRLF.
    fn is_line_continuation(&self) -> bool {
        let mut look = self.chars.clone();
        if !matches!(look.next(), Some((_, '\\'))) {
            return false;
        }
        match look.next() {
            Some((_, '\n')) => true,
            Some((_, '\r')) => matches!(look.next(), Some((_, '\n'))),
            _ => false,
        }
    }

    /// Consume a newline (LF or CRLF).
    fn consume_newline(&mut self) {
        match self.peek_char() {
            Some('\n') => self.bump(),
            Some('\r') => {
                self.bump();
                if self.peek_char() == Some('\n') {
                    self.bump();
                }
            }
            _ => {}
        }
    }

    /// Skip separator characters: spaces, tabs, carriage returns, and line
    /// continuations. All of them set the boundary flag.
    fn skip_blank(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r') => {
                    self.bump();
                    self.at_boundary = true;
                }
                Some('\\') if self.is_line_continuation() => {
                    self.bump();
                    self.consume_newline();
                    self.at_boundary = true;
                }
                _ => break,
            }
        }
    }

    /// Lex a comment after a boundary `#`, through (not including) the next
    /// newline. Returns the text only when comments are kept.
    fn lex_comment(&mut self) -> Option<String> {
        self.bump(); // consume #
        let start = self.current_position();
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            end = pos + ch.len_utf8();
            self.bump();
        }
        if self.keep_comments {
            Some(self.input[start..end].to_string())
        } else {
            None
        }
    }

    /// Lex a word token: a run of literal, quoted, and expansion parts.
    ///
    /// Called when the dispatch loop found no operator, symbol, comment, or
    /// redirect at the current position. A word made of a bare digit run
    /// immediately followed by `<` or `>` becomes that redirect's fd.
    fn lex_word(&mut self) -> Result<Token, LexError> {
        let mut parts: Vec<WordPart> = Vec::new();
        let mut lit = String::new();

        loop {
            let Some(&(_, ch)) = self.chars.peek() else { break };
            match ch {
                c if Self::is_word_end(c) => break,
                '\\' if self.is_line_continuation() => break,
                '\\' => {
                    // Escapes are preserved verbatim; un-escaping is a
                    // consumer concern.
                    self.bump();
                    lit.push('\\');
                    if let Some(&(_, esc)) = self.chars.peek() {
                        lit.push(esc);
                        self.bump();
                    }
                }
                '\'' => {
                    Self::flush_literal(&mut lit, &mut parts);
                    parts.push(WordPart::SingleQuoted(self.read_single_quoted()?));
                }
                '"' => {
                    Self::flush_literal(&mut lit, &mut parts);
                    parts.push(self.lex_double_quoted()?);
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
        Self::flush_literal(&mut lit, &mut parts);

        if parts.is_empty() {
            // The dispatch loop only calls lex_word on a word-starting
            // character, so this is unreachable on well-formed input.
            let ch = self.peek_char().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter { ch });
        }

        if let [WordPart::Literal(s)] = parts.as_slice() {
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                match self.peek_char() {
                    Some('>') => return Ok(self.lex_redirect_out(Some(s.clone()))),
                    Some('<') => return Ok(self.lex_redirect_in(Some(s.clone()))),
                    _ => {}
                }
            }
        }

        Ok(Token::Word(parts))
    }

    fn flush_literal(lit: &mut String, parts: &mut Vec<WordPart>) {
        if !lit.is_empty() {
            parts.push(WordPart::Literal(std::mem::take(lit)));
        }
    }

    /// Check if a character ends a word.
    #[inline]
    fn is_word_end(ch: char) -> bool {
        matches!(
            ch,
            ' ' | '\t' | '\r' | '\n' | ';' | '&' | '|' | '<' | '>' | '(' | ')' | '{' | '}'
        )
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
