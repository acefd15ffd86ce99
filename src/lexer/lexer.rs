use std::iter::FusedIterator;

use crate::{
    errors::errors::LexError, specification::specification::TokenSpecification, Position, MK_TOKEN,
};

use super::tokens::{Scan, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Skip an unmatched character and keep scanning instead of stopping.
    pub recover: bool,
    /// Emit trivia categories as tokens too.
    pub keep_trivia: bool,
}

/// A one-pass scan over `source`.
///
/// Yields tokens in source order. An unmatched character yields an `Err` and,
/// unless recovering, ends the iteration.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    spec: &'a TokenSpecification,
    source: &'a str,
    options: ScanOptions,
    pos: usize,
    line: u32,
    column: u32,
    halted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(spec: &'a TokenSpecification, source: &'a str, options: ScanOptions) -> Lexer<'a> {
        let start = Position::start();

        Lexer {
            spec,
            source,
            options,
            pos: start.offset,
            line: start.line,
            column: start.column,
            halted: false,
        }
    }

    /// Consumes `n` bytes and returns the position after them.
    ///
    /// `n` must end on a character boundary of the remaining input.
    pub(crate) fn advance_n(&mut self, n: usize) -> Position {
        let source = self.source;
        for c in source[self.pos..self.pos + n].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;

        self.current_position()
    }

    pub fn current_position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.halted || self.at_eof() {
                return None;
            }

            let start = self.current_position();

            let (spec, source) = (self.spec, self.source);

            let Some((category, len)) = spec.find_category(source, self.pos) else {
                let character = self.at()?;
                let error = LexError::new(character, start);
                tracing::debug!(offset = start.offset, line = start.line, column = start.column, ?character, "no category matches");

                if self.options.recover {
                    self.advance_n(character.len_utf8());
                } else {
                    self.halted = true;
                }

                return Some(Err(error));
            };

            let lexeme = &source[self.pos..self.pos + len];
            let end = self.advance_n(len);
            tracing::trace!(category = category.name(), offset = start.offset, len, "matched");

            if category.is_trivia() && !self.options.keep_trivia {
                continue;
            }

            return Some(Ok(MK_TOKEN!(
                category.shared_name(),
                lexeme.to_string(),
                category.is_trivia(),
                start,
                end
            )));
        }
    }
}

impl FusedIterator for Lexer<'_> {}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), recover = options.recover))]
pub fn scan_with(spec: &TokenSpecification, source: &str, options: ScanOptions) -> Scan {
    let mut scan = Scan::default();

    for item in Lexer::new(spec, source, options) {
        match item {
            Ok(token) => scan.tokens.push(token),
            Err(error) => scan.errors.push(error),
        }
    }

    tracing::debug!(tokens = scan.tokens.len(), errors = scan.errors.len(), "scan finished");
    scan
}

/// Strict scan: stops at the first unmatched character.
pub fn scan(spec: &TokenSpecification, source: &str) -> Scan {
    scan_with(spec, source, ScanOptions::default())
}

pub fn tokenize(spec: &TokenSpecification, source: &str) -> Result<Vec<Token>, LexError> {
    scan(spec, source).into_result()
}
