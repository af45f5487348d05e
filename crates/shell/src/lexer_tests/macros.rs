// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for shell lexer tests.
//!
//! These macros reduce boilerplate in lexer tests by providing
//! declarative test generation.

/// Generate tokenization success tests.
///
/// # Usage
///
/// ```ignore
/// lex_tests! {
///     name: "input" => [token1, token2, ...],
/// }
/// ```
///
/// # Example
///
/// ```ignore
/// lex_tests! {
///     empty_input: "" => [],
///     single_word: "echo" => [word("echo")],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input, &ParseOptions::default())
                    .expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<Token> = vec![$($token),*];
                assert_eq!(tokens, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// # Usage
///
/// ```ignore
/// lex_error_tests! {
///     name: "input" => ErrorVariant,
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::tokenize($input, &ParseOptions::default());
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
