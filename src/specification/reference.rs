//! The query vocabulary the scanner ships with.
//!
//! Eight categories in priority order: comments, keywords, `?variables`,
//! `prefix:name` identifiers, optionally language-tagged strings, integers,
//! structural symbols and whitespace. Comments and whitespace are trivia.

use lazy_static::lazy_static;

use crate::{MK_CATEGORY, errors::errors::SpecError};

use super::{rule::Rule, specification::TokenSpecification};

pub const COMMENT: &str = "COMMENT";
pub const KEYWORD: &str = "KEYWORD";
pub const VAR: &str = "VAR";
pub const IDENT: &str = "IDENT";
pub const STRING: &str = "STRING";
pub const NUMBER: &str = "NUMBER";
pub const SYMBOL: &str = "SYMBOL";
pub const WHITESPACE: &str = "WHITESPACE";

pub const RESERVED_WORDS: [&str; 4] = ["select", "where", "limit", "a"];

lazy_static! {
    static ref REFERENCE: TokenSpecification =
        build_reference().expect("reference vocabulary is well-formed");
}

/// The shared reference vocabulary, built on first use.
pub fn reference() -> &'static TokenSpecification {
    &REFERENCE
}

/// Builds a fresh copy of the reference vocabulary.
pub fn build_reference() -> Result<TokenSpecification, SpecError> {
    TokenSpecification::new(vec![
        MK_CATEGORY!(COMMENT, Rule::pattern(r"#.*")?, trivia),
        MK_CATEGORY!(KEYWORD, Rule::keywords(RESERVED_WORDS)?),
        MK_CATEGORY!(VAR, Rule::pattern(r"\?[A-Za-z_]\w*")?),
        MK_CATEGORY!(IDENT, Rule::pattern(r"[A-Za-z_][\w-]*:[A-Za-z_][\w-]*")?),
        MK_CATEGORY!(STRING, Rule::pattern(r#""[^"]*"(?:@[a-z]+)?"#)?),
        MK_CATEGORY!(NUMBER, Rule::pattern(r"\d+")?),
        MK_CATEGORY!(SYMBOL, Rule::one_of("{}.;")),
        MK_CATEGORY!(WHITESPACE, Rule::pattern(r"[ \t\n]+")?, trivia),
    ])
}
