// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Array assignment literals.

use super::helpers::*;
use crate::ast::*;

fn get_array(input: &str) -> ArrayExpr {
    let command = parse_command(input);
    let cmd = match command {
        Command::Simple(cmd) => cmd,
        other => panic!("expected simple command, got {other:?}"),
    };
    let mut assignments = cmd.assignments.expect("expected assignments");
    assignments
        .remove(0)
        .array
        .expect("expected array expression")
}

#[test]
fn plain_elements() {
    let array = get_array("arr=(a b c)");
    assert_eq!(array.elements.len(), 3);
    for elem in &array.elements {
        assert!(elem.index.is_none());
        assert!(elem.value.is_some());
    }
    assert_literal(array.elements[0].value.as_ref().unwrap(), "a");
}

#[test]
fn keyed_elements() {
    // arr=([k]=v [0]=x)
    let array = get_array("arr=([k]=v [0]=x)");
    assert_eq!(array.elements.len(), 2);

    let first = &array.elements[0];
    assert_literal(first.index.as_ref().unwrap(), "k");
    assert_literal(first.value.as_ref().unwrap(), "v");

    let second = &array.elements[1];
    assert_literal(second.index.as_ref().unwrap(), "0");
    assert_literal(second.value.as_ref().unwrap(), "x");
}

#[test]
fn mixed_elements() {
    let array = get_array("arr=([k]=v plain)");
    assert!(array.elements[0].index.is_some());
    assert!(array.elements[1].index.is_none());
}

#[test]
fn empty_array() {
    let array = get_array("arr=()");
    assert!(array.elements.is_empty());
}

#[test]
fn append_array() {
    let command = parse_command("arr+=(x)");
    let cmd = get_simple(&command);
    let assignment = &cmd.assignments.as_deref().unwrap()[0];
    assert!(assignment.append);
    assert!(assignment.value.is_none());
    assert_eq!(assignment.array.as_ref().unwrap().elements.len(), 1);
}

#[test]
fn multiline_array() {
    let array = get_array("arr=(a\nb\nc)");
    assert_eq!(array.elements.len(), 3);
}

#[test]
fn element_with_expansion() {
    let array = get_array("arr=($HOME 'x y')");
    assert_eq!(array.elements.len(), 2);
    assert_eq!(
        array.elements[0].value.as_ref().unwrap().parts,
        vec![WordPart::Param(ParamExp::short("HOME"))]
    );
}

#[test]
fn array_assignment_before_command_word() {
    let command = parse_command("OPTS=(-v -q) run");
    let cmd = get_simple(&command);
    assert_eq!(cmd.assignments.as_deref().unwrap().len(), 1);
    assert_eq!(simple_words(cmd), vec!["run"]);
}

#[test]
fn keyed_element_with_expansion_index() {
    // arr=([$i]=v) keeps the index/value split; the index is the expansion
    let array = get_array("arr=([$i]=v)");
    let elem = &array.elements[0];
    assert_eq!(
        elem.index.as_ref().unwrap().parts,
        vec![WordPart::Param(ParamExp::short("i"))]
    );
    assert_literal(elem.value.as_ref().unwrap(), "v");
}

#[test]
fn keyed_element_with_substitution_index() {
    let array = get_array("arr=([$(key)]=v)");
    let elem = &array.elements[0];
    let index = elem.index.as_ref().unwrap();
    assert!(matches!(
        index.parts[0],
        WordPart::CmdSubst { body: SubstBody::Parsed(_), .. }
    ));
    assert_literal(elem.value.as_ref().unwrap(), "v");
}

#[test]
fn keyed_element_with_mixed_index_and_value() {
    let array = get_array("arr=([a$i]=v$j)");
    let elem = &array.elements[0];
    assert_eq!(
        elem.index.as_ref().unwrap().parts,
        vec![
            WordPart::Literal("a".into()),
            WordPart::Param(ParamExp::short("i")),
        ]
    );
    assert_eq!(
        elem.value.as_ref().unwrap().parts,
        vec![
            WordPart::Literal("v".into()),
            WordPart::Param(ParamExp::short("j")),
        ]
    );
}

#[test]
fn quoted_bracket_element_is_value_only() {
    let array = get_array("arr=('[k]=v')");
    let elem = &array.elements[0];
    assert!(elem.index.is_none());
    assert_eq!(
        elem.value.as_ref().unwrap().parts,
        vec![WordPart::SingleQuoted("[k]=v".into())]
    );
}
