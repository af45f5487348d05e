// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell script lexer and parser for programmatic analysis.
//!
//! This crate assigns structure to POSIX/Bash shell text: it tokenizes and
//! parses a Bash-leaning superset into a typed Abstract Syntax Tree without
//! executing, expanding, or evaluating anything. Typical consumers classify
//! commands, track variable mutations, and enforce guardrails on command
//! invocations.
//!
//! # Quick Start
//!
//! ```ignore
//! use shrub_shell::{Parser, Program};
//!
//! let ast = Parser::parse("make lint | tee log || exit 1")?;
//! println!("{} simple commands", ast.count_simple_commands());
//! # Ok::<(), shrub_shell::ParseError>(())
//! ```
//!
//! # Features
//!
//! - **Full statement grammar**: pipelines, `&&`/`||` chains, `!` negation,
//!   `&` background, subshells, blocks
//! - **Compound commands**: `if`/`elif`/`else`, `while`/`until`, `for` (both
//!   forms), `select`, `case`, `[[ ]]`, `(( ))`, `coproc`, `time`, function
//!   declarations, declaration builtins, `let`
//! - **Words with structure**: quoting, `$VAR` and `${VAR:-default}`
//!   parameter expansion, `$(cmd)` and backtick substitution, `$((…))`,
//!   `<(…)`/`>(…)` process substitution
//! - **Redirects**: the full operator set including heredocs and
//!   herestrings, with heredoc bodies attached to their redirects
//!
//! # AST Structure
//!
//! ```text
//! Program
//! └── Statement[] (negated, background flags)
//!     └── Command (Simple | Pipeline | Logical | If | Case | …)
//!         └── Word[]
//!             └── WordPart (Literal | Quoted | Param | CmdSubst | …)
//! ```
//!
//! # Parsing
//!
//! Use [`parse`] (or [`Parser::parse`] with default options) for strict
//! parsing: the first syntax error aborts and is returned; there is no
//! partial AST and no recovery.
//!
//! # AST Traversal
//!
//! Implement the [`AstVisitor`] trait for custom traversal, or use the
//! built-in utility methods on [`Program`]:
//!
//! - [`Program::count_simple_commands`] - Count all simple commands
//! - [`Program::collect_variables`] - Collect referenced parameter names
//! - [`Program::collect_assigned_names`] - Collect assignment targets
//! - [`Program::has_command_substitutions`] - Check for substitutions

mod ast;
mod error;
mod lexer;
mod options;
mod parse_error;
mod parser;
mod token;

// AST types
pub use ast::{
    ArithCmd, ArrayElem, ArrayExpr, Assignment, AstVisitor, Block, CStyleLoop, CaseClause,
    CaseItem, Command, CoprocClause, DeclClause, DeclVariant, ForClause, FunctionDecl, IfClause,
    LetClause, Logical, LogicalOp, ParamExp, Pipeline, ProcSubstDirection, Program, Redirect,
    SelectClause, SimpleCommand, Statement, SubstBody, Subshell, TestClause, TimeClause,
    WhileClause, Word, WordPart, PARAM_OPS,
};

// Lexer
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Op, RedirOp, Symbol, Token};

// Parser
pub use options::{Dialect, ParseOptions};
pub use parse_error::ParseError;
pub use parser::Parser;

/// Parse shell source into a [`Program`] under the given options.
///
/// The single public operation: all configuration flows through
/// [`ParseOptions`], and the produced AST owns its strings.
pub fn parse(source: &str, options: ParseOptions) -> Result<Program, ParseError> {
    Parser::parse_with_options(source, options)
}
