// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound commands: if/elif/else, while/until, for (both forms), select,
//! case, `[[ ]]`, time, coproc, function declarations, declaration
//! builtins, and let.

use super::{non_empty, ListStop, Parser};
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::token::{Op, Symbol, Token};

impl Parser {
    /// Grammar: `if <cond> then <body> (elif <cond> then <body>)* [else <body>] fi`
    pub(super) fn parse_if(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume if
        Ok(Command::If(self.parse_if_clause()?))
    }

    /// Called after `if` or `elif` is consumed; consumes through the
    /// closing `fi`. Each `elif` materializes as an else branch holding a
    /// single nested if statement.
    fn parse_if_clause(&mut self) -> Result<IfClause, ParseError> {
        let condition = self.parse_statement_list(ListStop::Keywords(&["then"]))?;
        self.expect_keyword("then")?;
        let then_body = self.parse_statement_list(ListStop::Keywords(&["elif", "else", "fi"]))?;

        let else_body = match self.peek_keyword() {
            Some("elif") => {
                self.advance();
                let nested = self.parse_if_clause()?;
                Some(vec![Statement::plain(Command::If(nested))])
            }
            Some("else") => {
                self.advance();
                let body = self.parse_statement_list(ListStop::Keywords(&["fi"]))?;
                self.advance(); // consume fi
                non_empty(body)
            }
            _ => {
                self.advance(); // consume fi
                None
            }
        };

        Ok(IfClause { condition, then_body, else_body })
    }

    /// Grammar: `(while|until) <cond> do <body> done`
    pub(super) fn parse_while(&mut self, until: bool) -> Result<Command, ParseError> {
        self.advance(); // consume while/until
        let condition = self.parse_statement_list(ListStop::Keywords(&["do"]))?;
        self.expect_keyword("do")?;
        let body = self.parse_statement_list(ListStop::Keywords(&["done"]))?;
        self.advance(); // consume done
        Ok(Command::While(WhileClause { condition, body, until }))
    }

    /// Grammar: `for (( init; cond; post )) …` or `for name [in word…] [;] do <body> done`
    pub(super) fn parse_for(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume for

        if let Some(Token::ArithCommand(expr)) = self.peek() {
            let expr = expr.clone();
            self.advance();
            return self.parse_c_style_loop(&expr);
        }

        let variable = self.parse_name()?;
        let items = self.parse_in_items()?;
        self.expect_keyword("do")?;
        let body = self.parse_statement_list(ListStop::Keywords(&["done"]))?;
        self.advance(); // consume done
        Ok(Command::For(ForClause { variable, items, body }))
    }

    /// Grammar: `select name [in word…] [;] do <body> done`
    pub(super) fn parse_select(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume select
        let variable = self.parse_name()?;
        let items = self.parse_in_items()?;
        self.expect_keyword("do")?;
        let body = self.parse_statement_list(ListStop::Keywords(&["done"]))?;
        self.advance(); // consume done
        Ok(Command::Select(SelectClause { variable, items, body }))
    }

    /// The loop header is split verbatim on `;` into up to three trimmed
    /// parts; empty parts become absent.
    fn parse_c_style_loop(&mut self, expr: &str) -> Result<Command, ParseError> {
        let mut fields = expr.splitn(3, ';');
        let mut next_field = move || {
            fields
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        let init = next_field();
        let condition = next_field();
        let post = next_field();

        self.skip_separators();
        self.expect_keyword("do")?;
        let body = self.parse_statement_list(ListStop::Keywords(&["done"]))?;
        self.advance(); // consume done
        Ok(Command::CStyleFor(CStyleLoop { init, condition, post, body }))
    }

    /// The loop variable: a word whose single part is a literal.
    fn parse_name(&mut self) -> Result<String, ParseError> {
        match self.peek_keyword() {
            Some(name) => {
                let name = name.to_string();
                self.advance();
                Ok(name)
            }
            None => Err(self.unexpected_token()),
        }
    }

    /// `in word…` with an optional trailing `;` before `do`. An `in` with
    /// zero items is treated like a missing list.
    fn parse_in_items(&mut self) -> Result<Option<Vec<Word>>, ParseError> {
        let items = if self.peek_keyword() == Some("in") {
            self.advance();
            let mut words = Vec::new();
            while matches!(self.peek(), Some(Token::Word(_))) {
                words.push(self.parse_word()?);
            }
            non_empty(words)
        } else {
            None
        };
        self.skip_separators();
        Ok(items)
    }

    /// Grammar: `case <word> in { <pattern> ('|' <pattern>)* ')' <body> ;; } esac`
    ///
    /// A trailing `;;` before `esac` is optional; a body may also end at
    /// `esac` directly.
    pub(super) fn parse_case(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume case
        let word = self.parse_word()?;
        self.expect_keyword("in")?;

        let mut items = Vec::new();
        loop {
            self.skip_separators();
            if self.peek_keyword() == Some("esac") {
                self.advance();
                break;
            }
            if self.at_end() {
                return Err(ParseError::UnclosedStructure { expected: "'esac'".to_string() });
            }

            let mut patterns = vec![self.parse_word()?];
            while self.eat_op(Op::Pipe) {
                patterns.push(self.parse_word()?);
            }
            self.expect_symbol(Symbol::RParen)?;

            let body = self.parse_statement_list(ListStop::CaseItem)?;
            if self.at_semi(self.pos) && self.at_semi(self.pos + 1) {
                self.advance();
                self.advance();
            }
            items.push(CaseItem { patterns, body });
        }

        Ok(Command::Case(CaseClause { word, items }))
    }

    /// Grammar: `[[ <word>… ]]`. The list is unstructured; operator-class
    /// tokens inside the brackets fold back into literal words.
    pub(super) fn parse_test(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume [[
        let mut words = Vec::new();

        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::UnclosedStructure { expected: "']]'".to_string() })
                }
                Some(Token::Word(_)) => {
                    if self.peek_keyword() == Some("]]") {
                        self.advance();
                        break;
                    }
                    words.push(self.parse_word()?);
                }
                Some(Token::Op(Op::Semi)) => return Err(self.unexpected_token()),
                Some(Token::Op(op)) => {
                    let text = op.as_str();
                    self.advance();
                    words.push(Word::literal(text));
                }
                Some(Token::Redirect { op, fd }) => {
                    let text = match fd {
                        Some(fd) => format!("{fd}{op}"),
                        None => op.as_str().to_string(),
                    };
                    self.advance();
                    words.push(Word::literal(text));
                }
                Some(Token::Symbol(s)) => {
                    let text = s.as_char().to_string();
                    self.advance();
                    words.push(Word::literal(text));
                }
                Some(_) => return Err(self.unexpected_token()),
            }
        }

        Ok(Command::Test(TestClause { words }))
    }

    /// Grammar: `time <statement>`
    pub(super) fn parse_time(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume time
        let command = self.parse_statement()?;
        Ok(Command::Time(TimeClause { command: Box::new(command) }))
    }

    /// Grammar: `coproc [name] <statement>`. The name form requires a `{`
    /// right after the name word.
    pub(super) fn parse_coproc(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume coproc

        let name = match (self.keyword_at(self.pos), self.tokens.get(self.pos + 1)) {
            (Some(name), Some(Token::Symbol(Symbol::LBrace))) => {
                let name = name.to_string();
                self.advance();
                Some(name)
            }
            _ => None,
        };
        let body = self.parse_statement()?;
        Ok(Command::Coproc(CoprocClause { name, body: Box::new(body) }))
    }

    /// Grammar: `function name [()] { <body> }`
    pub(super) fn parse_function_keyword(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume function
        let name = self.parse_name()?;
        if matches!(self.peek(), Some(Token::Symbol(Symbol::LParen))) {
            self.advance();
            self.expect_symbol(Symbol::RParen)?;
        }
        self.skip_separators();
        self.expect_symbol(Symbol::LBrace)?;
        let body = self.parse_statement_list(ListStop::Symbol(Symbol::RBrace))?;
        self.advance(); // consume }
        Ok(Command::Function(FunctionDecl { name, body }))
    }

    /// Grammar: `name () { <body> }`. The caller has already verified the
    /// `( ) {` lookahead.
    pub(super) fn parse_function_shorthand(&mut self) -> Result<Command, ParseError> {
        let name = self.parse_name()?;
        self.advance(); // consume (
        self.advance(); // consume )
        self.skip_separators();
        self.expect_symbol(Symbol::LBrace)?;
        let body = self.parse_statement_list(ListStop::Symbol(Symbol::RBrace))?;
        self.advance(); // consume }
        Ok(Command::Function(FunctionDecl { name, body }))
    }

    /// A declaration builtin: every following word is either an assignment
    /// or a plain argument, with redirects interleaved.
    pub(super) fn parse_decl(&mut self, variant: DeclVariant) -> Result<Command, ParseError> {
        self.advance(); // consume the keyword
        let mut args = Vec::new();
        let mut assignments = Vec::new();
        let mut redirects = Vec::new();

        loop {
            match self.peek() {
                Some(Token::Word(_)) => {
                    if let Some(assignment) = self.try_parse_assignment()? {
                        assignments.push(assignment);
                    } else {
                        args.push(self.parse_word()?);
                    }
                }
                Some(Token::Redirect { .. }) => redirects.push(self.parse_redirect()?),
                Some(Token::Comment(_)) => self.take_comment(),
                _ => break,
            }
        }

        Ok(Command::Decl(DeclClause {
            variant,
            args: non_empty(args),
            assignments: non_empty(assignments),
            redirects: non_empty(redirects),
        }))
    }

    /// Grammar: `let <expr>+` with redirects interleaved.
    pub(super) fn parse_let(&mut self) -> Result<Command, ParseError> {
        self.advance(); // consume let
        let mut expressions = Vec::new();
        let mut redirects = Vec::new();

        loop {
            match self.peek() {
                Some(Token::Word(_)) => expressions.push(self.parse_word()?),
                Some(Token::Redirect { .. }) => redirects.push(self.parse_redirect()?),
                Some(Token::Comment(_)) => self.take_comment(),
                _ => break,
            }
        }

        if expressions.is_empty() {
            return Err(ParseError::LetRequiresExpression);
        }
        Ok(Command::Let(LetClause { expressions, redirects: non_empty(redirects) }))
    }
}
