// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer tests split into logical modules.

#[macro_use]
mod macros;
mod helpers;

mod arith;
mod basic;
mod comments;
mod errors;
mod expansions;
mod heredoc;
mod procsubst;
mod quoting;
mod redirection;
mod substitution;
