//! Error types for the scanner.
//!
//! This module defines:
//!
//! - `SpecError` for mistakes found while building a token specification
//! - `LexError` for characters no category recognises, with exact position
//! - `Error`, wrapping both plus I/O failures for the command-line front end
//! - `ErrorTip` for short human-readable hints

pub mod errors;
