use std::{fmt::Display, sync::Arc};

use crate::{errors::errors::LexError, Span};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub category: Arc<str>,
    pub lexeme: String,
    pub trivia: bool,
    pub span: Span,
}

impl Token {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn offset(&self) -> usize {
        self.span.start.offset
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.span.end.offset
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn is_one_of_many(&self, categories: &[&str]) -> bool {
        categories.iter().any(|category| *category == self.category())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.category, self.lexeme)
    }
}

/// Result of a full scan.
///
/// `tokens` holds everything produced before the scan stopped, so a failed
/// strict scan still carries its partial output. `errors` holds at most one
/// entry unless recovery was enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scan {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self) -> Option<&LexError> {
        self.errors.first()
    }

    /// `(category, lexeme)` pairs, the minimal form of the output.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.tokens
            .iter()
            .map(|token| (token.category(), token.lexeme.as_str()))
            .collect()
    }

    pub fn into_result(self) -> Result<Vec<Token>, LexError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}
