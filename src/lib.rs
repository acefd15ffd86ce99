#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod specification;

extern crate regex;

pub use errors::errors::{Error, SpecError};
pub use lexer::lexer::{scan, scan_with, tokenize, Lexer, ScanOptions};
pub use lexer::tokens::{Scan, Token};
pub use specification::reference::reference;
pub use specification::rule::Rule;
pub use specification::specification::{CategoryDef, TokenSpecification};

/// A point in the scanned text.
///
/// `offset` is a byte offset into the UTF-8 source. `line` and `column` are
/// 1-based, and columns count code points rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with `RUST_LOG=scanner=debug`, or
/// `RUST_LOG=scanner=trace` to see every category match.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Returns `(line_number, line_text, byte_offset_in_line)` for a byte offset,
/// or `None` when the offset is past the end of `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

pub fn render_error(error: &LexError, source: &str, file: &str) -> String {
    /*
        Error: UnrecognisedCharacter (unexpected character `$`)
        -> query.rq
          |
        1 | select $x
          | -------^
    */

    let mut out = String::new();
    let line_string = error.line().to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some((_, line_text, _)) = get_line_at_position(source, error.offset()) {
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

        let arrows = (error.column() as usize - 1).saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
