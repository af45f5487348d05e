//! End-to-end parsing specs.
//!
//! Each scenario drives the public `parse` surface the way a consumer
//! would and checks the resulting tree shape, including field
//! presence/absence, which is part of the contract.

use shrub_shell::{
    parse, Command, Dialect, LogicalOp, ParamExp, ParseError, ParseOptions, Program, RedirOp,
    SimpleCommand, Statement, WordPart,
};
use similar_asserts::assert_eq;

fn parse_default(source: &str) -> Program {
    parse(source, ParseOptions::default())
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

fn single(source: &str) -> Statement {
    let mut program = parse_default(source);
    assert_eq!(program.statements.len(), 1, "source: {source:?}");
    program.statements.remove(0)
}

fn simple(command: &Command) -> &SimpleCommand {
    match command {
        Command::Simple(cmd) => cmd,
        other => panic!("expected simple command, got {other:?}"),
    }
}

fn word_text(command: &Command, index: usize) -> &str {
    simple(command).words.as_deref().unwrap()[index]
        .as_literal()
        .expect("expected a plain literal word")
}

#[test]
fn pipeline_feeds_logical_or() {
    // foo | bar || baz  →  Logical(or, Pipeline[foo, bar], baz)
    let statement = single("foo | bar || baz");
    let Command::Logical(logical) = &statement.command else {
        panic!("expected logical chain");
    };
    assert_eq!(logical.op, LogicalOp::Or);
    let Command::Pipeline(pipeline) = &logical.left.command else {
        panic!("expected pipeline on the left");
    };
    assert_eq!(pipeline.commands.len(), 2);
    assert_eq!(word_text(&pipeline.commands[0].command, 0), "foo");
    assert_eq!(word_text(&pipeline.commands[1].command, 0), "bar");
    assert_eq!(word_text(&logical.right.command, 0), "baz");
}

#[test]
fn elif_desugars_recursively() {
    let statement = single("if a; then b; elif c; then d; else e; fi");
    let Command::If(outer) = &statement.command else {
        panic!("expected if clause");
    };
    assert_eq!(word_text(&outer.condition[0].command, 0), "a");
    assert_eq!(word_text(&outer.then_body[0].command, 0), "b");

    let else_body = outer.else_body.as_deref().unwrap();
    let Command::If(inner) = &else_body[0].command else {
        panic!("expected nested if clause");
    };
    assert_eq!(word_text(&inner.condition[0].command, 0), "c");
    assert_eq!(word_text(&inner.then_body[0].command, 0), "d");
    assert_eq!(
        word_text(&inner.else_body.as_deref().unwrap()[0].command, 0),
        "e"
    );
}

#[test]
fn c_style_loop_splits_header() {
    let statement = single("for ((i=0; i<10; i++)); do echo $i; done");
    let Command::CStyleFor(clause) = &statement.command else {
        panic!("expected c-style loop");
    };
    assert_eq!(clause.init.as_deref(), Some("i=0"));
    assert_eq!(clause.condition.as_deref(), Some("i<10"));
    assert_eq!(clause.post.as_deref(), Some("i++"));
    assert_eq!(word_text(&clause.body[0].command, 0), "echo");
}

#[test]
fn case_patterns_split_on_pipe() {
    let statement = single("case x in a|b) z ;; esac");
    let Command::Case(clause) = &statement.command else {
        panic!("expected case clause");
    };
    assert_eq!(clause.word.as_literal(), Some("x"));
    assert_eq!(clause.items.len(), 1);
    let item = &clause.items[0];
    assert_eq!(item.patterns[0].as_literal(), Some("a"));
    assert_eq!(item.patterns[1].as_literal(), Some("b"));
    assert_eq!(word_text(&item.body[0].command, 0), "z");
}

#[test]
fn keyed_array_assignment() {
    let statement = single("arr=([k]=v [0]=x)");
    let cmd = simple(&statement.command);
    assert!(cmd.words.is_none());
    let assignment = &cmd.assignments.as_deref().unwrap()[0];
    assert_eq!(assignment.name, "arr");
    let elements = &assignment.array.as_ref().unwrap().elements;
    assert_eq!(elements[0].index.as_ref().unwrap().as_literal(), Some("k"));
    assert_eq!(elements[0].value.as_ref().unwrap().as_literal(), Some("v"));
    assert_eq!(elements[1].index.as_ref().unwrap().as_literal(), Some("0"));
    assert_eq!(elements[1].value.as_ref().unwrap().as_literal(), Some("x"));
}

#[test]
fn heredoc_body_attaches_to_redirect() {
    let statement = single("cat <<EOF\nhello\nEOF");
    let cmd = simple(&statement.command);
    assert_eq!(word_text(&statement.command, 0), "cat");
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::Heredoc);
    assert_eq!(redirect.target.as_literal(), Some("EOF"));
    assert_eq!(
        redirect.heredoc.as_ref().unwrap().as_literal(),
        Some("hello\n")
    );
}

#[test]
fn herestring_does_not_leak_into_words() {
    let statement = single(r"grep -rn '\bnpm\b' <<< 'npm install'");
    let cmd = simple(&statement.command);
    assert_eq!(word_text(&statement.command, 0), "grep");
    let redirect = &cmd.redirects.as_deref().unwrap()[0];
    assert_eq!(redirect.op, RedirOp::HereString);
    assert_eq!(
        redirect.target.parts,
        vec![WordPart::SingleQuoted("npm install".into())]
    );
}

#[test]
fn negation_and_background_flag_the_statement() {
    let statement = single("! foo && bar &");
    assert!(statement.negated);
    assert!(statement.background);
    let Command::Logical(logical) = &statement.command else {
        panic!("expected logical chain");
    };
    assert_eq!(logical.op, LogicalOp::And);
}

#[test]
fn expansion_parts_are_structured() {
    let statement = single("echo ${name:-guest} $HOME");
    let cmd = simple(&statement.command);
    let words = cmd.words.as_deref().unwrap();
    assert_eq!(
        words[1].parts[0],
        WordPart::Param(ParamExp {
            short: false,
            name: "name".into(),
            op: Some(":-".into()),
            value: Some(shrub_shell::Word {
                parts: vec![WordPart::Literal("guest".into())]
            }),
        })
    );
    assert_eq!(words[2].parts[0], WordPart::Param(ParamExp::short("HOME")));
}

// =============================================================================
// Negative scenarios
// =============================================================================

#[test]
fn unclosed_double_quote_fails() {
    let err = parse("\"foo", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(err.to_string(), "lexer error: unclosed double quote");
}

#[test]
fn unterminated_if_fails() {
    let err = parse("if a; then b", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::UnclosedStructure { .. }));
}

#[test]
fn unclosed_array_fails() {
    let err = parse("arr=(a b", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::UnclosedArrayExpression));
}

#[test]
fn redirect_without_target_fails() {
    let err = parse("foo >", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::RedirectWithoutTarget));
}

#[test]
fn bare_let_fails() {
    let err = parse("let", ParseOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::LetRequiresExpression));
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn dialect_is_accepted_and_inert() {
    let source = "if a; then b; fi | c && d";
    let bash = parse(source, ParseOptions { dialect: Dialect::Bash, keep_comments: false });
    let posix = parse(source, ParseOptions { dialect: Dialect::Posix, keep_comments: false });
    assert_eq!(bash.unwrap(), posix.unwrap());
}

#[test]
fn keep_comments_collects_program_level_list() {
    let options = ParseOptions { keep_comments: true, ..ParseOptions::default() };
    let program = parse("# header\nls # trailing", options).unwrap();
    assert_eq!(
        program.comments.as_deref().unwrap(),
        [" header".to_string(), " trailing".into()]
    );
}

#[test]
fn serialized_tree_preserves_field_absence() {
    let program = parse_default("ls");
    let json = serde_json::to_value(&program).unwrap();
    assert!(json.get("comments").is_none());
    let cmd = &json["statements"][0]["command"]["Simple"];
    assert!(cmd.get("assignments").is_none());
    assert!(cmd.get("redirects").is_none());
}
