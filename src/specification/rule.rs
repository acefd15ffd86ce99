use regex::{Regex, RegexBuilder};

use crate::errors::errors::SpecError;

/// How a category recognises text at the cursor.
///
/// Every variant is anchored: it only ever matches text starting exactly at
/// the position it is asked about.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A regular expression, compiled with a leading `^`.
    Pattern(Regex),
    /// One of a fixed list of words, matched as a whole word.
    ///
    /// `matcher` is `^(?:w1|w2|...)$` over the escaped words, tested against
    /// the word run at the cursor.
    Keywords {
        words: Vec<String>,
        case_insensitive: bool,
        matcher: Regex,
    },
    /// Exact text.
    Literal(String),
    /// A single character out of a fixed set.
    OneOf(Vec<char>),
}

impl Rule {
    pub fn pattern(source: &str) -> Result<Rule, SpecError> {
        Regex::new(&format!("^(?:{})", source))
            .map(Rule::Pattern)
            .map_err(|error| SpecError::InvalidRule {
                pattern: source.to_string(),
                message: error.to_string(),
            })
    }

    /// Case-insensitive whole-word keywords, folded the way `(?i)` folds.
    pub fn keywords<I, S>(words: I) -> Result<Rule, SpecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keyword_rule(words, true)
    }

    /// Case-sensitive whole-word keywords.
    pub fn exact_keywords<I, S>(words: I) -> Result<Rule, SpecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keyword_rule(words, false)
    }

    pub fn literal(text: impl Into<String>) -> Rule {
        Rule::Literal(text.into())
    }

    pub fn one_of(chars: &str) -> Rule {
        Rule::OneOf(chars.chars().collect())
    }

    /// Length in bytes of the match starting exactly at `at`, if any.
    ///
    /// Zero-length matches are reported as no match so the caller always
    /// makes progress.
    pub fn match_len(&self, text: &str, at: usize) -> Option<usize> {
        let rest = text.get(at..)?;

        let len = match self {
            Rule::Pattern(regex) => regex.find(rest).map(|found| found.end()),
            Rule::Keywords { matcher, .. } => {
                if text[..at].chars().next_back().is_some_and(is_word_char) {
                    return None;
                }

                let word_len = rest
                    .char_indices()
                    .find(|(_, c)| !is_word_char(*c))
                    .map_or(rest.len(), |(index, _)| index);

                matcher.is_match(&rest[..word_len]).then_some(word_len)
            }
            Rule::Literal(literal) => rest.starts_with(literal.as_str()).then_some(literal.len()),
            Rule::OneOf(chars) => rest
                .chars()
                .next()
                .filter(|c| chars.contains(c))
                .map(char::len_utf8),
        };

        len.filter(|len| *len > 0)
    }

    /// Rejects rules that could never make progress or are malformed.
    pub(crate) fn validate(&self, name: &str) -> Result<(), SpecError> {
        match self {
            Rule::Pattern(regex) => {
                if regex.is_match("") {
                    return Err(SpecError::EmptyMatch {
                        name: name.to_string(),
                    });
                }
            }
            Rule::Keywords { words, .. } => {
                if words.is_empty() {
                    return Err(SpecError::InvalidRule {
                        pattern: name.to_string(),
                        message: String::from("keyword list is empty"),
                    });
                }

                if let Some(word) = words.iter().find(|word| word.is_empty() || !word.chars().all(is_word_char)) {
                    return Err(SpecError::InvalidRule {
                        pattern: word.clone(),
                        message: String::from("keywords must be non-empty runs of letters, digits or underscores"),
                    });
                }
            }
            Rule::Literal(literal) => {
                if literal.is_empty() {
                    return Err(SpecError::EmptyMatch {
                        name: name.to_string(),
                    });
                }
            }
            Rule::OneOf(chars) => {
                if chars.is_empty() {
                    return Err(SpecError::EmptyMatch {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn keyword_rule<I, S>(words: I, case_insensitive: bool) -> Result<Rule, SpecError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<String> = words.into_iter().map(|word| word.as_ref().to_string()).collect();
    let alternation = words.iter().map(|word| regex::escape(word)).collect::<Vec<_>>().join("|");

    let matcher = RegexBuilder::new(&format!("^(?:{})$", alternation))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|error| SpecError::InvalidRule {
            pattern: alternation.clone(),
            message: error.to_string(),
        })?;

    Ok(Rule::Keywords {
        words,
        case_insensitive,
        matcher,
    })
}

/// Matches the `\w` class: Unicode alphanumerics and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
