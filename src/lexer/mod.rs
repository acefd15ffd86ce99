//! Lexical analysis.
//!
//! This module contains the scanner that turns source text into a stream of
//! classified tokens. It handles:
//!
//! - First-match-wins category selection in priority order
//! - Byte offset, line and column tracking
//! - Skipping trivia such as comments and whitespace
//! - Strict and recovering handling of unmatched characters

pub mod lexer;
pub mod tokens;
