// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Target shell dialect.
///
/// Accepted and stored, reserved for future dialect switching; the parser
/// currently implements a Bash-leaning superset regardless of the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Posix,
    #[default]
    Bash,
    Mksh,
    Zsh,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// When true, `#`-comment bodies are collected into the program-level
    /// comment list in encounter order; when false they are discarded.
    pub keep_comments: bool,
}
