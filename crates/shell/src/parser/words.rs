// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word conversion, assignment recognition, and array literals.
//!
//! Token word parts carry raw substitution slices; conversion re-enters
//! the lexer and parser on each slice and stores the parsed statement
//! list in its place.

use super::Parser;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::token::{is_valid_name, Op, Symbol, Token};

impl Parser {
    /// Consume the next token, which must be a word, and convert its parts.
    pub(super) fn parse_word(&mut self) -> Result<Word, ParseError> {
        let parts = match self.peek() {
            Some(Token::Word(parts)) => parts.clone(),
            Some(_) => return Err(self.unexpected_token()),
            None => return Err(ParseError::ExpectedCommandWord),
        };
        self.advance();
        Ok(Word { parts: self.convert_parts(parts)? })
    }

    fn convert_parts(&mut self, parts: Vec<WordPart>) -> Result<Vec<WordPart>, ParseError> {
        parts.into_iter().map(|part| self.convert_part(part)).collect()
    }

    fn convert_part(&mut self, part: WordPart) -> Result<WordPart, ParseError> {
        Ok(match part {
            WordPart::CmdSubst { body: SubstBody::Unparsed(raw), backtick } => {
                WordPart::CmdSubst {
                    body: SubstBody::Parsed(self.parse_embedded(&raw)?),
                    backtick,
                }
            }
            WordPart::ProcSubst { direction, body: SubstBody::Unparsed(raw) } => {
                WordPart::ProcSubst {
                    direction,
                    body: SubstBody::Parsed(self.parse_embedded(&raw)?),
                }
            }
            WordPart::DoubleQuoted(inner) => WordPart::DoubleQuoted(self.convert_parts(inner)?),
            WordPart::Param(param) => {
                let ParamExp { short, name, op, value } = param;
                let value = match value {
                    Some(word) => Some(Word { parts: self.convert_parts(word.parts)? }),
                    None => None,
                };
                WordPart::Param(ParamExp { short, name, op, value })
            }
            other => other,
        })
    }

    /// Tokenize and parse an embedded raw slice as its own program. Inner
    /// comments join the outer program-level list.
    fn parse_embedded(&mut self, raw: &str) -> Result<Vec<Statement>, ParseError> {
        let program = Parser::parse_with_options(raw, self.options.clone())?;
        if let Some(mut inner) = program.comments {
            self.comments.append(&mut inner);
        }
        Ok(program.statements)
    }

    /// Recognize `NAME=…`/`NAME+=…` at the current word token and build an
    /// assignment, or return None leaving the token untouched.
    ///
    /// Recognition inspects the word's first literal part; the value word
    /// is the literal remainder plus any remaining parts, so expansions in
    /// values are preserved. `NAME=` followed by `(` opens an array.
    pub(super) fn try_parse_assignment(&mut self) -> Result<Option<Assignment>, ParseError> {
        let Some(Token::Word(parts)) = self.peek() else {
            return Ok(None);
        };
        let Some(WordPart::Literal(first)) = parts.first() else {
            return Ok(None);
        };
        let Some((name, append, value_prefix)) = split_assignment_literal(first) else {
            return Ok(None);
        };

        let name = name.to_string();
        let value_prefix = value_prefix.to_string();
        let rest_parts: Vec<WordPart> = parts[1..].to_vec();
        self.advance();

        if value_prefix.is_empty()
            && rest_parts.is_empty()
            && matches!(self.peek(), Some(Token::Symbol(Symbol::LParen)))
        {
            let array = self.parse_array_expr()?;
            return Ok(Some(Assignment { name, append, value: None, array: Some(array) }));
        }

        let mut value_parts = Vec::new();
        if !value_prefix.is_empty() {
            value_parts.push(WordPart::Literal(value_prefix));
        }
        value_parts.extend(self.convert_parts(rest_parts)?);
        if value_parts.is_empty() {
            value_parts.push(WordPart::Literal(String::new()));
        }

        Ok(Some(Assignment {
            name,
            append,
            value: Some(Word { parts: value_parts }),
            array: None,
        }))
    }

    /// `( element… )` after `NAME=`. Separators and comments between
    /// elements are discarded or collected; anything else is an error.
    fn parse_array_expr(&mut self) -> Result<ArrayExpr, ParseError> {
        self.advance(); // consume (
        let mut elements = Vec::new();

        loop {
            match self.peek() {
                None => return Err(ParseError::UnclosedArrayExpression),
                Some(Token::Symbol(Symbol::RParen)) => {
                    self.advance();
                    return Ok(ArrayExpr { elements });
                }
                Some(Token::Op(Op::Semi)) => {
                    self.advance();
                }
                Some(Token::Comment(_)) => self.take_comment(),
                Some(Token::Word(_)) => elements.push(self.parse_array_elem()?),
                Some(_) => return Err(self.unexpected_token()),
            }
        }
    }

    /// An element is `value` or `[index]=value`.
    fn parse_array_elem(&mut self) -> Result<ArrayElem, ParseError> {
        let word = self.parse_word()?;

        if let Some((index, value)) = split_keyed_element(&word) {
            return Ok(ArrayElem { index: Some(index), value: Some(value) });
        }

        Ok(ArrayElem { index: None, value: Some(word) })
    }
}

/// Split a `[index]=value` element word at its `]=` marker, or None when
/// the word does not have the keyed shape.
///
/// The word's textual concatenation decides: the `[` must open the leading
/// literal, and the `]=` is found in the first unquoted literal part that
/// carries it, so indices (and values) may hold expansions. Quoted brackets
/// never match.
fn split_keyed_element(word: &Word) -> Option<(Word, Word)> {
    match word.parts.first() {
        Some(WordPart::Literal(first)) if first.starts_with('[') => {}
        _ => return None,
    }

    let mut index_parts: Vec<WordPart> = Vec::new();
    let mut value_parts: Vec<WordPart> = Vec::new();
    let mut in_value = false;

    for (i, part) in word.parts.iter().enumerate() {
        if in_value {
            value_parts.push(part.clone());
            continue;
        }
        match part {
            WordPart::Literal(text) => {
                let text = if i == 0 { &text[1..] } else { text.as_str() };
                if let Some(close) = text.find("]=") {
                    if !text[..close].is_empty() {
                        index_parts.push(WordPart::Literal(text[..close].to_string()));
                    }
                    if !text[close + 2..].is_empty() {
                        value_parts.push(WordPart::Literal(text[close + 2..].to_string()));
                    }
                    in_value = true;
                } else if !text.is_empty() {
                    index_parts.push(WordPart::Literal(text.to_string()));
                }
            }
            other => index_parts.push(other.clone()),
        }
    }

    if !in_value {
        return None;
    }
    if index_parts.is_empty() {
        index_parts.push(WordPart::Literal(String::new()));
    }
    if value_parts.is_empty() {
        value_parts.push(WordPart::Literal(String::new()));
    }
    Some((Word { parts: index_parts }, Word { parts: value_parts }))
}

/// Split a literal into assignment pieces: name, append flag, and the text
/// after `=`. None when the part before `=`/`+=` is not a valid name.
fn split_assignment_literal(raw: &str) -> Option<(&str, bool, &str)> {
    let eq = raw.find('=')?;
    let (name, append) = match raw[..eq].strip_suffix('+') {
        Some(name) => (name, true),
        None => (&raw[..eq], false),
    };
    if !is_valid_name(name) {
        return None;
    }
    Some((name, append, &raw[eq + 1..]))
}
