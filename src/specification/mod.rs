//! Token specifications.
//!
//! A specification is the ordered list of lexical categories a scan matches
//! against. It covers:
//!
//! - Recognition rules (`Rule`), one variant per kind of shape
//! - Construction and validation of the category list
//! - The built-in reference query vocabulary

pub mod reference;
pub mod rule;
pub mod specification;
