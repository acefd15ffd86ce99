//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CATEGORY!` - Creates a category definition for a token specification
//!
//! These macros reduce boilerplate in the lexer and in vocabulary tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The shared category name
/// * `$lexeme` - The matched text
/// * `$trivia` - Whether the category is trivia
/// * `$start` / `$end` - Source positions around the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(name, "42".to_string(), false, start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $lexeme:expr, $trivia:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            category: $category,
            lexeme: $lexeme,
            trivia: $trivia,
            span: $crate::Span {
                start: $start,
                end: $end,
            },
        }
    };
}

/// Creates a `CategoryDef` for `TokenSpecification::new`.
///
/// Append `trivia` to mark the category as skipped.
///
/// # Example
///
/// ```ignore
/// let defs = vec![
///     MK_CATEGORY!("NUMBER", Rule::pattern(r"\d+")?),
///     MK_CATEGORY!("WHITESPACE", Rule::pattern(r"\s+")?, trivia),
/// ];
/// ```
#[macro_export]
macro_rules! MK_CATEGORY {
    ($name:expr, $rule:expr) => {
        $crate::specification::specification::CategoryDef {
            name: String::from($name),
            rule: $rule,
            trivia: false,
        }
    };
    ($name:expr, $rule:expr, trivia) => {
        $crate::specification::specification::CategoryDef {
            name: String::from($name),
            rule: $rule,
            trivia: true,
        }
    };
}
