// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for shell parser tests.
//!
//! These macros reduce boilerplate in parser tests by providing
//! declarative test generation, matching the pattern in lexer_tests/macros.rs.

/// Generate parse success tests that verify statement count.
///
/// # Usage
///
/// ```ignore
/// parse_tests! {
///     name: "input" => statements: N,
/// }
/// ```
macro_rules! parse_tests {
    ($($name:ident: $input:expr => statements: $count:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let program = crate::parser::Parser::parse($input)
                    .expect(concat!("failed to parse: ", $input));
                assert_eq!(
                    program.statements.len(), $count,
                    "input: {:?}, expected {} statements, got {}",
                    $input, $count, program.statements.len()
                );
            }
        )*
    };
}

/// Generate parse error tests.
///
/// # Usage
///
/// ```ignore
/// parse_error_tests! {
///     name: "input" => ErrorVariant { .. },
/// }
/// ```
macro_rules! parse_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = crate::parser::Parser::parse($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Generate simple command tests (single statement, verifies first word
/// and total word count).
///
/// # Usage
///
/// ```ignore
/// simple_cmd_tests! {
///     name: "input" => (cmd_name, word_count),
/// }
/// ```
macro_rules! simple_cmd_tests {
    ($($name:ident: $input:expr => ($cmd:expr, $words:expr)),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let command = super::helpers::parse_command($input);
                let cmd = super::helpers::get_simple(&command);
                let words = super::helpers::simple_words(cmd);
                assert_eq!(words.first().copied(), Some($cmd), "input: {:?}", $input);
                assert_eq!(
                    words.len(), $words,
                    "input: {:?}, expected {} words",
                    $input, $words
                );
            }
        )*
    };
}

pub(crate) use {parse_error_tests, parse_tests, simple_cmd_tests};
