// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for parser invariants.

use proptest::prelude::*;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::ParseOptions;

const RESERVED: &[&str] = &[
    "if", "then", "elif", "else", "fi", "while", "until", "do", "done", "for", "in", "select",
    "case", "esac", "time", "coproc", "function", "let", "declare", "local", "export", "readonly",
    "typeset", "nameref",
];

/// Strategy for generating plain shell words (reserved words excluded).
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}"
        .prop_map(String::from)
        .prop_filter("reserved word", |w| !RESERVED.contains(&w.as_str()))
}

/// Strategy for generating simple commands.
fn simple_command_strategy() -> impl Strategy<Value = String> {
    (word_strategy(), prop::collection::vec(word_strategy(), 0..5)).prop_map(|(name, args)| {
        if args.is_empty() {
            name
        } else {
            format!("{} {}", name, args.join(" "))
        }
    })
}

/// Strategy for generating statement lists.
fn statement_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(simple_command_strategy(), 1..5).prop_map(|cmds| cmds.join("; "))
}

proptest! {
    /// Invariant: a valid statement list parses.
    #[test]
    fn parse_valid_statement_list(input in statement_list_strategy()) {
        let result = Parser::parse(&input);
        prop_assert!(result.is_ok(), "failed to parse: {:?}", input);
    }

    /// Invariant: empty input produces an empty program.
    #[test]
    fn empty_input_produces_empty_program(ws in "[ \t\n]*") {
        let program = Parser::parse(&ws).unwrap();
        prop_assert!(program.statements.is_empty());
    }

    /// Invariant: N separator-joined commands produce N statements.
    #[test]
    fn separator_count_matches_statement_count(
        cmds in prop::collection::vec(word_strategy(), 1..10)
    ) {
        let input = cmds.join("; ");
        let program = Parser::parse(&input).unwrap();
        prop_assert_eq!(program.statements.len(), cmds.len());
    }

    /// Invariant: parsing the same input twice yields equal ASTs.
    #[test]
    fn parsing_is_deterministic(input in statement_list_strategy()) {
        let first = Parser::parse(&input).unwrap();
        let second = Parser::parse(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Invariant: N piped commands produce a pipeline of N statements.
    #[test]
    fn pipe_count_matches_pipeline_len(
        cmds in prop::collection::vec(word_strategy(), 2..6)
    ) {
        let input = cmds.join(" | ");
        let program = Parser::parse(&input).unwrap();
        prop_assert_eq!(program.statements.len(), 1);
        match &program.statements[0].command {
            Command::Pipeline(p) => prop_assert_eq!(p.commands.len(), cmds.len()),
            other => prop_assert!(false, "expected pipeline, got {:?}", other),
        }
    }

    /// Invariant: pipe binds tighter than the logical operators.
    #[test]
    fn pipeline_precedence(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        let input = format!("{a} | {b} && {c}");
        let program = Parser::parse(&input).unwrap();
        match &program.statements[0].command {
            Command::Logical(l) => {
                prop_assert!(matches!(l.left.command, Command::Pipeline(_)));
            }
            other => prop_assert!(false, "expected logical chain, got {:?}", other),
        }
    }
}

// =============================================================================
// Structural invariants hold for any accepted input
// =============================================================================

/// Walk an AST checking the shape invariants: pipelines hold at least two
/// statements, case items have patterns, and optional collections are
/// never present-but-empty.
struct InvariantChecker;

impl AstVisitor for InvariantChecker {
    fn visit_command(&mut self, command: &Command) {
        match command {
            Command::Pipeline(p) => assert!(p.commands.len() >= 2, "degenerate pipeline"),
            Command::Simple(cmd) => {
                assert!(cmd.words.as_ref().map_or(true, |w| !w.is_empty()));
                assert!(cmd.assignments.as_ref().map_or(true, |a| !a.is_empty()));
                assert!(cmd.redirects.as_ref().map_or(true, |r| !r.is_empty()));
            }
            Command::Case(c) => {
                for item in &c.items {
                    assert!(!item.patterns.is_empty(), "case item without patterns");
                }
            }
            Command::For(f) => assert!(f.items.as_ref().map_or(true, |i| !i.is_empty())),
            Command::Select(s) => assert!(s.items.as_ref().map_or(true, |i| !i.is_empty())),
            _ => {}
        }
        self.walk_command(command);
    }

    fn visit_assignment(&mut self, assignment: &Assignment) {
        assert!(
            crate::token::is_valid_name(&assignment.name),
            "invalid assignment name {:?}",
            assignment.name
        );
        self.walk_assignment(assignment);
    }
}

fn check_invariants(input: &str) {
    if let Ok(program) = Parser::parse(input) {
        InvariantChecker.visit_program(&program);
    }
}

#[test]
fn invariants_hold_for_representative_inputs() {
    for input in [
        "a | b | c",
        "x=1 y=2 cmd a b >f 2>&1",
        "if a; then b; elif c; then d; fi",
        "case x in a|b) y ;; esac",
        "for i in 1 2 3; do echo $i; done",
        "arr=([k]=v a) cmd",
        "f() { a | b && c; }",
        "echo $(a; b) `c` <(d)",
        "cat <<EOF\nbody\nEOF",
        "! a && b || c &",
    ] {
        check_invariants(input);
    }
}

proptest! {
    /// Invariant: the checker holds over generated pipelines and lists.
    #[test]
    fn invariants_hold_for_generated_inputs(input in statement_list_strategy()) {
        check_invariants(&input);
    }

    /// Invariant: the lexer never panics on arbitrary ASCII input.
    #[test]
    fn lexer_never_panics(input in "[ -~\\n\\t]{0,200}") {
        let _ = Lexer::tokenize(&input, &ParseOptions::default());
    }

    /// Invariant: the parser never panics on arbitrary ASCII input.
    #[test]
    fn parser_never_panics(input in "[ -~\\n\\t]{0,200}") {
        let _ = Parser::parse(&input);
    }

    /// Invariant: the parser never panics on mixed Unicode input.
    #[test]
    fn parser_handles_unicode(input in "[a-z日本語$(){}\\s]{0,50}") {
        let _ = Parser::parse(&input);
    }

    /// Invariant: keeping comments never changes the statement list.
    #[test]
    fn comments_do_not_change_structure(input in statement_list_strategy()) {
        let plain = Parser::parse(&input).unwrap();
        let kept = Parser::parse_with_options(
            &input,
            ParseOptions { keep_comments: true, ..ParseOptions::default() },
        )
        .unwrap();
        prop_assert_eq!(plain.statements, kept.statements);
    }
}

// =============================================================================
// Nesting depth
// =============================================================================

#[test]
fn deep_subshell_nesting() {
    // Spaces keep `((` from reading as an arithmetic command.
    let depth = 20;
    let input = format!("{}cmd{}", "( ".repeat(depth), " )".repeat(depth));
    assert!(Parser::parse(&input).is_ok(), "failed at {depth} levels");
}

#[test]
fn deep_block_nesting() {
    let depth = 20;
    let mut input = String::new();
    for _ in 0..depth {
        input.push_str("{ ");
    }
    input.push_str("cmd");
    for _ in 0..depth {
        input.push_str("; }");
    }
    assert!(Parser::parse(&input).is_ok());
}

#[test]
fn deep_substitution_nesting() {
    let depth = 10;
    let mut input = String::from("cmd");
    for _ in 0..depth {
        input = format!("echo $({input})");
    }
    assert!(Parser::parse(&input).is_ok());
}

proptest! {
    /// Invariant: N nested subshells produce N levels of AST nesting.
    #[test]
    fn subshell_nesting_depth_matches(depth in 1usize..10) {
        let input = format!("{}cmd{}", "( ".repeat(depth), " )".repeat(depth));
        let program = Parser::parse(&input).unwrap();
        let mut current = &program.statements[0].command;
        for _ in 0..depth {
            match current {
                Command::Subshell(s) => {
                    prop_assert_eq!(s.body.len(), 1);
                    current = &s.body[0].command;
                }
                other => prop_assert!(false, "expected subshell, got {:?}", other),
            }
        }
        prop_assert!(matches!(current, Command::Simple(_)));
    }
}
