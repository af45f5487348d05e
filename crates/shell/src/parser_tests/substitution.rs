// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded sublanguages: the parser re-enters the lexer/parser on raw
//! substitution slices and stores parsed statement lists.

use super::helpers::*;
use crate::ast::*;
use crate::parse_error::ParseError;
use crate::parser::Parser;

fn arg_part(input: &str, word_index: usize) -> WordPart {
    let command = parse_command(input);
    let cmd = match command {
        Command::Simple(cmd) => cmd,
        other => panic!("expected simple command, got {other:?}"),
    };
    cmd.words.expect("expected words")[word_index].parts[0].clone()
}

fn parsed_statements(part: &WordPart) -> &[Statement] {
    match part {
        WordPart::CmdSubst { body: SubstBody::Parsed(statements), .. }
        | WordPart::ProcSubst { body: SubstBody::Parsed(statements), .. } => statements,
        other => panic!("expected parsed substitution, got {other:?}"),
    }
}

#[test]
fn command_substitution_is_parsed() {
    let part = arg_part("echo $(ls -l)", 1);
    let statements = parsed_statements(&part);
    assert_eq!(statements.len(), 1);
    assert_command_named(&statements[0].command, "ls");
}

#[test]
fn substitution_body_may_be_a_pipeline() {
    let part = arg_part("echo $(sort f | uniq)", 1);
    let statements = parsed_statements(&part);
    assert!(matches!(statements[0].command, Command::Pipeline(_)));
}

#[test]
fn nested_substitutions_parse_recursively() {
    let part = arg_part("echo $(echo $(date))", 1);
    let outer = parsed_statements(&part);
    let inner_cmd = get_simple(&outer[0].command);
    let inner_arg = &inner_cmd.words.as_deref().unwrap()[1];
    let inner = parsed_statements(&inner_arg.parts[0]);
    assert_command_named(&inner[0].command, "date");
}

#[test]
fn backtick_substitution_is_parsed() {
    let part = arg_part("echo `date -u`", 1);
    match &part {
        WordPart::CmdSubst { backtick: true, body: SubstBody::Parsed(statements) } => {
            assert_command_named(&statements[0].command, "date");
        }
        other => panic!("expected backtick substitution, got {other:?}"),
    }
}

#[test]
fn process_substitution_is_parsed() {
    let part = arg_part("diff <(sort a) <(sort b)", 1);
    match &part {
        WordPart::ProcSubst { direction: ProcSubstDirection::In, body: SubstBody::Parsed(s) } => {
            assert_command_named(&s[0].command, "sort");
        }
        other => panic!("expected process substitution, got {other:?}"),
    }
}

#[test]
fn substitution_inside_double_quotes_is_parsed() {
    let part = arg_part("echo \"today: $(date)\"", 1);
    match &part {
        WordPart::DoubleQuoted(parts) => {
            let statements = parsed_statements(&parts[1]);
            assert_command_named(&statements[0].command, "date");
        }
        other => panic!("expected double-quoted word, got {other:?}"),
    }
}

#[test]
fn param_default_value_substitution_is_parsed() {
    let part = arg_part("echo ${dir:-$(pwd)}", 1);
    match &part {
        WordPart::Param(param) => {
            let value = param.value.as_ref().unwrap();
            let statements = parsed_statements(&value.parts[0]);
            assert_command_named(&statements[0].command, "pwd");
        }
        other => panic!("expected parameter expansion, got {other:?}"),
    }
}

#[test]
fn arith_expansion_stays_verbatim() {
    let part = arg_part("echo $((n + 1))", 1);
    assert_eq!(part, WordPart::ArithExp("n + 1".into()));
}

#[test]
fn substitution_may_hold_multiple_statements() {
    let part = arg_part("echo $(a; b)", 1);
    assert_eq!(parsed_statements(&part).len(), 2);
}

#[test]
fn inner_parse_errors_propagate() {
    let result = Parser::parse("echo $(if a; then)");
    assert!(matches!(result, Err(ParseError::UnclosedStructure { .. })));
}

#[test]
fn no_unparsed_bodies_survive() {
    struct NoRaw(bool);
    impl AstVisitor for NoRaw {
        fn visit_word_part(&mut self, part: &WordPart) {
            if matches!(
                part,
                WordPart::CmdSubst { body: SubstBody::Unparsed(_), .. }
                    | WordPart::ProcSubst { body: SubstBody::Unparsed(_), .. }
            ) {
                self.0 = true;
            }
            self.walk_word_part(part);
        }
    }
    let program = parse_ok("a $(b `c` <(d) ${e:-$(f)}) \"$(g)\"");
    let mut visitor = NoRaw(false);
    visitor.visit_program(&program);
    assert!(!visitor.0, "raw substitution bodies leaked into the AST");
}
