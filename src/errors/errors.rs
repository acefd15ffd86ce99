use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Errors raised while building a `TokenSpecification`.
///
/// These indicate a mistake in the vocabulary itself and are never recovered
/// from internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("category {name:?} is defined more than once")]
    DuplicateCategory { name: String },
    #[error("token specification has no categories")]
    EmptySpecification,
    #[error("invalid rule {pattern:?}: {message}")]
    InvalidRule { pattern: String, message: String },
    #[error("category {name:?} can match empty input")]
    EmptyMatch { name: String },
}

impl SpecError {
    pub fn get_error_name(&self) -> &str {
        match self {
            SpecError::DuplicateCategory { .. } => "DuplicateCategory",
            SpecError::EmptySpecification => "EmptySpecification",
            SpecError::InvalidRule { .. } => "InvalidRule",
            SpecError::EmptyMatch { .. } => "EmptyMatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            SpecError::DuplicateCategory { name } => {
                ErrorTip::Suggestion(format!("Rename or merge the second `{}` category", name))
            }
            SpecError::EmptySpecification => {
                ErrorTip::Suggestion(String::from("Add at least one category"))
            }
            SpecError::InvalidRule { .. } => ErrorTip::None,
            SpecError::EmptyMatch { name } => ErrorTip::Suggestion(format!(
                "Category `{}` must consume at least one character on every match",
                name
            )),
        }
    }
}

/// No category matched at a position in the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "unrecognised character {character:?} at line {}, column {}",
    .position.line,
    .position.column
)]
pub struct LexError {
    character: char,
    position: Position,
}

impl LexError {
    pub fn new(character: char, position: Position) -> Self {
        LexError {
            character,
            position,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn get_error_name(&self) -> &str {
        "UnrecognisedCharacter"
    }

    pub fn get_tip(&self) -> ErrorTip {
        ErrorTip::Suggestion(format!("unexpected character `{}`", self.character.escape_default()))
    }
}

/// Top-level error for callers that drive both construction and scanning.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
