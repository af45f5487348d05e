// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::parser::Parser;

#[test]
fn count_simple_commands_includes_substitutions() {
    let program = Parser::parse("echo $(ls | wc -l); cat f").unwrap();
    // echo, ls, wc, cat
    assert_eq!(program.count_simple_commands(), 4);
}

#[test]
fn count_simple_commands_descends_into_compounds() {
    let program = Parser::parse("if a; then b; fi; while c; do d; done").unwrap();
    assert_eq!(program.count_simple_commands(), 4);
}

#[test]
fn collect_variables_orders_and_dedupes() {
    let program = Parser::parse("echo $FOO ${BAR:-x} \"$FOO\"").unwrap();
    assert_eq!(program.collect_variables(), vec!["FOO", "BAR"]);
}

#[test]
fn collect_variables_sees_substitution_interiors() {
    let program = Parser::parse("echo $(cat $CONF)").unwrap();
    assert_eq!(program.collect_variables(), vec!["CONF"]);
}

#[test]
fn collect_variables_ignores_special_parameters() {
    let program = Parser::parse("echo $? $# $HOME").unwrap();
    assert_eq!(program.collect_variables(), vec!["HOME"]);
}

#[test]
fn collect_assigned_names_covers_prefixes_and_decls() {
    let program = Parser::parse("A=1 cmd; declare B=2; A=3").unwrap();
    assert_eq!(program.collect_assigned_names(), vec!["A", "B"]);
}

#[test]
fn has_command_substitutions_finds_backticks() {
    assert!(Parser::parse("echo `date`").unwrap().has_command_substitutions());
    assert!(!Parser::parse("echo date").unwrap().has_command_substitutions());
}

#[test]
fn word_as_literal_requires_single_literal_part() {
    let word = Word::literal("ok");
    assert_eq!(word.as_literal(), Some("ok"));

    let mixed = Word {
        parts: vec![
            WordPart::Literal("a".into()),
            WordPart::SingleQuoted("b".into()),
        ],
    };
    assert_eq!(mixed.as_literal(), None);
}

#[test]
fn statement_plain_has_no_flags() {
    let statement = Statement::plain(Command::Arith(ArithCmd { expression: "1".into() }));
    assert!(!statement.negated);
    assert!(!statement.background);
}

// =============================================================================
// Serialization: absent fields are omitted, not empty
// =============================================================================

#[test]
fn serialized_simple_command_omits_absent_fields() {
    let program = Parser::parse("ls").unwrap();
    let json = serde_json::to_value(&program).unwrap();
    let simple = &json["statements"][0]["command"]["Simple"];
    assert!(simple.get("words").is_some());
    assert!(simple.get("assignments").is_none());
    assert!(simple.get("redirects").is_none());
}

#[test]
fn serialized_program_omits_empty_comments() {
    let program = Parser::parse("ls").unwrap();
    let json = serde_json::to_value(&program).unwrap();
    assert!(json.get("comments").is_none());
}

#[test]
fn redirect_op_serializes_as_source_text() {
    let json = serde_json::to_value(crate::token::RedirOp::AppendErr).unwrap();
    assert_eq!(json, serde_json::json!("&>>"));
}

#[test]
fn ast_roundtrips_through_serde() {
    let program = Parser::parse("FOO=1 bar --baz 2>&1 | grep x && echo ok").unwrap();
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(program, back);
}

// =============================================================================
// Visitor
// =============================================================================

#[test]
fn visitor_can_stop_descent() {
    struct TopLevelOnly(usize);
    impl AstVisitor for TopLevelOnly {
        fn visit_word_part(&mut self, part: &WordPart) {
            if matches!(part, WordPart::CmdSubst { .. }) {
                self.0 += 1;
            }
            // no walk: nested substitutions are not counted
        }
    }
    let program = Parser::parse("echo $(echo $(date))").unwrap();
    let mut visitor = TopLevelOnly(0);
    visitor.visit_program(&program);
    assert_eq!(visitor.0, 1);
}

#[test]
fn visitor_reaches_redirect_targets() {
    struct Targets(Vec<String>);
    impl AstVisitor for Targets {
        fn visit_redirect(&mut self, redirect: &Redirect) {
            if let Some(text) = redirect.target.as_literal() {
                self.0.push(text.to_string());
            }
            self.walk_redirect(redirect);
        }
    }
    let program = Parser::parse("cmd >out 2>>err").unwrap();
    let mut visitor = Targets(Vec::new());
    visitor.visit_program(&program);
    assert_eq!(visitor.0, vec!["out", "err"]);
}
