// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract Syntax Tree types for parsed shell scripts.
//!
//! The schema is the contract consumers read: every node is a tagged
//! variant, and "absent" optional fields are omitted rather than carried
//! as empty collections. Serialization through serde preserves that
//! presence/absence distinction.

use serde::{Deserialize, Serialize};

use crate::token::RedirOp;

/// A parsed script: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
    /// Preserved comments in encounter order, present only when parsing
    /// with `keep_comments` and at least one comment was seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

/// The unit of list-level composition. Wraps exactly one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub command: Command,
    /// `!` prefix.
    pub negated: bool,
    /// `&` suffix.
    pub background: bool,
}

impl Statement {
    /// A statement with neither flag set, as used inside pipelines and
    /// logical chains.
    pub fn plain(command: Command) -> Self {
        Statement { command, negated: false, background: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Simple(SimpleCommand),
    /// Commands connected by `|`.
    Pipeline(Pipeline),
    /// Commands connected by `&&` or `||`.
    Logical(Logical),
    /// `( … )`
    Subshell(Subshell),
    /// `{ …; }`
    Block(Block),
    If(IfClause),
    While(WhileClause),
    For(ForClause),
    Select(SelectClause),
    /// `for (( init; cond; post ))`
    CStyleFor(CStyleLoop),
    Case(CaseClause),
    Function(FunctionDecl),
    /// `[[ … ]]`
    Test(TestClause),
    /// `(( … ))`
    Arith(ArithCmd),
    Coproc(CoprocClause),
    Time(TimeClause),
    /// `declare`/`local`/`export`/`readonly`/`typeset`/`nameref`
    Decl(DeclClause),
    Let(LetClause),
}

/// At least 2 statements connected by `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub commands: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

/// Left-associative binary chain; binds looser than `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logical {
    pub op: LogicalOp,
    pub left: Box<Statement>,
    pub right: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCommand {
    /// `NAME=value` prefixes preceding the first non-assignment word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<Assignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
    /// Redirects in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Vec<Redirect>>,
}

/// `elif` chains are represented recursively: each `elif` becomes an else
/// branch holding a single statement whose command is another `IfClause`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfClause {
    pub condition: Vec<Statement>,
    pub then_body: Vec<Statement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileClause {
    pub condition: Vec<Statement>,
    pub body: Vec<Statement>,
    /// True for `until`.
    pub until: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForClause {
    pub variable: String,
    /// Absent when there is no `in` list (iterate positional parameters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Word>>,
    pub body: Vec<Statement>,
}

/// Same shape as [`ForClause`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectClause {
    pub variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Word>>,
    pub body: Vec<Statement>,
}

/// The three header expressions are verbatim slices from inside `(( ))`;
/// empty slices are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CStyleLoop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseClause {
    pub word: Word,
    pub items: Vec<CaseItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseItem {
    /// Non-empty; patterns separated by `|` in source.
    pub patterns: Vec<Word>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub body: Vec<Statement>,
}

/// Executes its body in a child environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subshell {
    pub body: Vec<Statement>,
}

/// Executes its body in the current environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub body: Vec<Statement>,
}

/// The words between `[[` and `]]`, unstructured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClause {
    pub words: Vec<Word>,
}

/// Verbatim expression between `(( ))`; never re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithCmd {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoprocClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeClause {
    pub command: Box<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclVariant {
    Declare,
    Local,
    Export,
    Readonly,
    Typeset,
    Nameref,
}

impl DeclVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclVariant::Declare => "declare",
            DeclVariant::Local => "local",
            DeclVariant::Export => "export",
            DeclVariant::Readonly => "readonly",
            DeclVariant::Typeset => "typeset",
            DeclVariant::Nameref => "nameref",
        }
    }
}

/// A declaration builtin in command position; its arguments may be
/// assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclClause {
    pub variant: DeclVariant,
    /// Flag and name arguments that are not assignment-shaped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Word>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<Assignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Vec<Redirect>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetClause {
    /// At least one expression word.
    pub expressions: Vec<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Vec<Redirect>>,
}

/// `NAME=value` or `NAME+=value`; the name always matches
/// `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    /// True for `+=`.
    pub append: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<ArrayExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub elements: Vec<ArrayElem>,
}

/// `(a b c)` yields value-only elements; `([k]=v)` yields both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayElem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub op: RedirOp,
    /// Leading digit run (`2>&1` carries `"2"`), verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fd: Option<String>,
    pub target: Word,
    /// Collected body for `<<`/`<<-`, once the tokenizer has seen the
    /// terminating delimiter line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heredoc: Option<Word>,
}

/// A word composed of literal, quoted, and expansion parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

impl Word {
    pub fn literal(value: impl Into<String>) -> Self {
        Word { parts: vec![WordPart::Literal(value.into())] }
    }

    /// `Some` iff the word is a plain literal (exactly one `Literal` part).
    pub fn as_literal(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [WordPart::Literal(s)] => Some(s),
            _ => None,
        }
    }
}

/// A deferred substitution body: raw at the token level, parsed in the AST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstBody {
    Unparsed(String),
    Parsed(Vec<Statement>),
}

/// Direction of a process substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcSubstDirection {
    #[serde(rename = "<")]
    In,
    #[serde(rename = ">")]
    Out,
}

impl ProcSubstDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcSubstDirection::In => "<",
            ProcSubstDirection::Out => ">",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordPart {
    /// Unquoted text fragment.
    Literal(String),
    /// Text inside `'…'`, uninterpreted.
    SingleQuoted(String),
    /// Parts inside `"…"`. Backslash escapes are preserved verbatim in the
    /// literal stream; un-escaping is a consumer concern.
    DoubleQuoted(Vec<WordPart>),
    /// `$name` or `${…}`.
    Param(ParamExp),
    /// `$(…)` or `` `…` ``.
    CmdSubst { body: SubstBody, backtick: bool },
    /// `$((…))`, stored verbatim.
    ArithExp(String),
    /// `<(…)` or `>(…)`.
    ProcSubst {
        direction: ProcSubstDirection,
        body: SubstBody,
    },
}

/// A parameter expansion. Complex `${…}` forms that do not match the fixed
/// operator alphabet keep the entire bracketed content in `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamExp {
    /// True for the `$x` form, false for `${…}`.
    pub short: bool,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Word>,
}

impl ParamExp {
    pub fn short(name: impl Into<String>) -> Self {
        ParamExp { short: true, name: name.into(), op: None, value: None }
    }
}

/// The `${name<op>value}` operator alphabet, longest match first.
pub const PARAM_OPS: [&str; 14] = [
    ":-", ":=", ":+", ":?", "##", "%%", "//", "-", "+", "=", "?", "#", "%", "/",
];

// ── Analysis utilities ───────────────────────────────────────────────────

impl Program {
    /// Convenience wrapper around [`Parser::parse`].
    ///
    /// [`Parser::parse`]: crate::Parser::parse
    pub fn parse(source: &str) -> Result<Self, crate::ParseError> {
        crate::Parser::parse(source)
    }

    /// Count the total number of simple commands, including those inside
    /// compound bodies and command substitutions.
    pub fn count_simple_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
                self.0 += 1;
                self.walk_simple_command(cmd);
            }
        }
        let mut counter = Counter(0);
        counter.visit_program(self);
        counter.0
    }

    /// Collect referenced parameter names, de-duplicated, in first-appearance
    /// order. Only the leading name run of a `${…}` fallback body counts.
    pub fn collect_variables(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl AstVisitor for Collector {
            fn visit_word_part(&mut self, part: &WordPart) {
                if let WordPart::Param(p) = part {
                    if let Some(name) = leading_param_name(&p.name) {
                        if !self.0.iter().any(|n| n == name) {
                            self.0.push(name.to_string());
                        }
                    }
                }
                self.walk_word_part(part);
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_program(self);
        collector.0
    }

    /// Collect names mutated by assignments (simple-command prefixes and
    /// declaration clauses), de-duplicated, in first-appearance order.
    pub fn collect_assigned_names(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl AstVisitor for Collector {
            fn visit_assignment(&mut self, assignment: &Assignment) {
                if !self.0.contains(&assignment.name) {
                    self.0.push(assignment.name.clone());
                }
                self.walk_assignment(assignment);
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_program(self);
        collector.0
    }

    /// True if the tree contains any `$(…)` or backtick substitution,
    /// including nested inside other substitutions.
    pub fn has_command_substitutions(&self) -> bool {
        struct Finder(bool);
        impl AstVisitor for Finder {
            fn visit_word_part(&mut self, part: &WordPart) {
                if matches!(part, WordPart::CmdSubst { .. }) {
                    self.0 = true;
                }
                self.walk_word_part(part);
            }
        }
        let mut finder = Finder(false);
        finder.visit_program(self);
        finder.0
    }
}

/// The `[A-Za-z0-9_]` run at the front of a parameter-expansion name, after
/// any `!`/`#` prefix. `None` when the body starts with something else
/// (special parameters, digits excluded deliberately are still returned).
fn leading_param_name(name: &str) -> Option<&str> {
    let trimmed = name.strip_prefix(['!', '#']).unwrap_or(name);
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !crate::token::is_name_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    if end == 0 {
        None
    } else {
        Some(&trimmed[..end])
    }
}

// ── Visitor ──────────────────────────────────────────────────────────────

/// Visitor pattern for walking the shell AST.
///
/// Each `visit_*` method has a corresponding `walk_*` method. The `visit_*`
/// method is called at a node, and can call `walk_*` to descend into
/// children. To stop traversal at a node, simply don't call `walk_*`.
pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) {
        self.walk_program(program);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        self.walk_statement(statement);
    }

    fn visit_command(&mut self, command: &Command) {
        self.walk_command(command);
    }

    fn visit_simple_command(&mut self, cmd: &SimpleCommand) {
        self.walk_simple_command(cmd);
    }

    fn visit_word(&mut self, word: &Word) {
        self.walk_word(word);
    }

    fn visit_word_part(&mut self, part: &WordPart) {
        self.walk_word_part(part);
    }

    fn visit_assignment(&mut self, assignment: &Assignment) {
        self.walk_assignment(assignment);
    }

    fn visit_redirect(&mut self, redirect: &Redirect) {
        self.walk_redirect(redirect);
    }

    fn walk_program(&mut self, program: &Program) {
        for statement in &program.statements {
            self.visit_statement(statement);
        }
    }

    fn walk_statement(&mut self, statement: &Statement) {
        self.visit_command(&statement.command);
    }

    fn walk_command(&mut self, command: &Command) {
        match command {
            Command::Simple(cmd) => self.visit_simple_command(cmd),
            Command::Pipeline(p) => {
                for stmt in &p.commands {
                    self.visit_statement(stmt);
                }
            }
            Command::Logical(l) => {
                self.visit_statement(&l.left);
                self.visit_statement(&l.right);
            }
            Command::Subshell(s) => {
                for stmt in &s.body {
                    self.visit_statement(stmt);
                }
            }
            Command::Block(b) => {
                for stmt in &b.body {
                    self.visit_statement(stmt);
                }
            }
            Command::If(i) => {
                for stmt in i.condition.iter().chain(&i.then_body) {
                    self.visit_statement(stmt);
                }
                for stmt in i.else_body.iter().flatten() {
                    self.visit_statement(stmt);
                }
            }
            Command::While(w) => {
                for stmt in w.condition.iter().chain(&w.body) {
                    self.visit_statement(stmt);
                }
            }
            Command::For(f) => {
                for word in f.items.iter().flatten() {
                    self.visit_word(word);
                }
                for stmt in &f.body {
                    self.visit_statement(stmt);
                }
            }
            Command::Select(s) => {
                for word in s.items.iter().flatten() {
                    self.visit_word(word);
                }
                for stmt in &s.body {
                    self.visit_statement(stmt);
                }
            }
            Command::CStyleFor(c) => {
                for stmt in &c.body {
                    self.visit_statement(stmt);
                }
            }
            Command::Case(c) => {
                self.visit_word(&c.word);
                for item in &c.items {
                    for pattern in &item.patterns {
                        self.visit_word(pattern);
                    }
                    for stmt in &item.body {
                        self.visit_statement(stmt);
                    }
                }
            }
            Command::Function(f) => {
                for stmt in &f.body {
                    self.visit_statement(stmt);
                }
            }
            Command::Test(t) => {
                for word in &t.words {
                    self.visit_word(word);
                }
            }
            Command::Arith(_) => {}
            Command::Coproc(c) => self.visit_statement(&c.body),
            Command::Time(t) => self.visit_statement(&t.command),
            Command::Decl(d) => {
                for word in d.args.iter().flatten() {
                    self.visit_word(word);
                }
                for assignment in d.assignments.iter().flatten() {
                    self.visit_assignment(assignment);
                }
                for redirect in d.redirects.iter().flatten() {
                    self.visit_redirect(redirect);
                }
            }
            Command::Let(l) => {
                for word in &l.expressions {
                    self.visit_word(word);
                }
                for redirect in l.redirects.iter().flatten() {
                    self.visit_redirect(redirect);
                }
            }
        }
    }

    fn walk_simple_command(&mut self, cmd: &SimpleCommand) {
        for assignment in cmd.assignments.iter().flatten() {
            self.visit_assignment(assignment);
        }
        for word in cmd.words.iter().flatten() {
            self.visit_word(word);
        }
        for redirect in cmd.redirects.iter().flatten() {
            self.visit_redirect(redirect);
        }
    }

    fn walk_assignment(&mut self, assignment: &Assignment) {
        if let Some(value) = &assignment.value {
            self.visit_word(value);
        }
        for elem in assignment.array.iter().flat_map(|a| &a.elements) {
            if let Some(index) = &elem.index {
                self.visit_word(index);
            }
            if let Some(value) = &elem.value {
                self.visit_word(value);
            }
        }
    }

    fn walk_redirect(&mut self, redirect: &Redirect) {
        self.visit_word(&redirect.target);
        if let Some(heredoc) = &redirect.heredoc {
            self.visit_word(heredoc);
        }
    }

    fn walk_word(&mut self, word: &Word) {
        for part in &word.parts {
            self.visit_word_part(part);
        }
    }

    fn walk_word_part(&mut self, part: &WordPart) {
        match part {
            WordPart::DoubleQuoted(parts) => {
                for inner in parts {
                    self.visit_word_part(inner);
                }
            }
            WordPart::Param(p) => {
                if let Some(value) = &p.value {
                    self.visit_word(value);
                }
            }
            WordPart::CmdSubst { body: SubstBody::Parsed(statements), .. }
            | WordPart::ProcSubst { body: SubstBody::Parsed(statements), .. } => {
                for stmt in statements {
                    self.visit_statement(stmt);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
