use std::{collections::HashSet, sync::Arc};

use crate::errors::errors::SpecError;

use super::rule::Rule;

/// One entry of the input list given to `TokenSpecification::new`.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    pub name: String,
    pub rule: Rule,
    pub trivia: bool,
}

#[derive(Debug, Clone)]
pub struct TokenCategory {
    name: Arc<str>,
    rule: Rule,
    trivia: bool,
    rank: usize,
}

impl TokenCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as shared by every token of this category.
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn is_trivia(&self) -> bool {
        self.trivia
    }

    /// Position in priority order, 0 being the highest.
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// The category picked at a position and how many bytes it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub rank: usize,
    pub len: usize,
}

/// An ordered, immutable catalog of token categories.
///
/// Order is matching priority: at any position the first listed category
/// that matches wins, regardless of how long other matches would be.
#[derive(Debug, Clone)]
pub struct TokenSpecification {
    categories: Vec<TokenCategory>,
}

impl TokenSpecification {
    pub fn new(defs: Vec<CategoryDef>) -> Result<Self, SpecError> {
        if defs.is_empty() {
            return Err(SpecError::EmptySpecification);
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(defs.len());

        for (rank, def) in defs.into_iter().enumerate() {
            if !seen.insert(def.name.clone()) {
                return Err(SpecError::DuplicateCategory { name: def.name });
            }

            def.rule.validate(&def.name)?;

            categories.push(TokenCategory {
                name: Arc::from(def.name),
                rule: def.rule,
                trivia: def.trivia,
                rank,
            });
        }

        tracing::debug!(categories = categories.len(), "built token specification");

        Ok(TokenSpecification { categories })
    }

    pub fn builder() -> TokenSpecificationBuilder {
        TokenSpecificationBuilder::default()
    }

    pub fn categories(&self) -> &[TokenCategory] {
        &self.categories
    }

    pub fn category(&self, rank: usize) -> Option<&TokenCategory> {
        self.categories.get(rank)
    }

    pub fn get(&self, name: &str) -> Option<&TokenCategory> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// First category in priority order matching at byte offset `at`.
    pub fn find_match(&self, text: &str, at: usize) -> Option<Match> {
        self.find_category(text, at).map(|(category, len)| Match {
            rank: category.rank,
            len,
        })
    }

    pub(crate) fn find_category(&self, text: &str, at: usize) -> Option<(&TokenCategory, usize)> {
        self.categories
            .iter()
            .find_map(|category| category.rule.match_len(text, at).map(|len| (category, len)))
    }
}

#[derive(Debug, Default)]
pub struct TokenSpecificationBuilder {
    defs: Vec<CategoryDef>,
}

impl TokenSpecificationBuilder {
    pub fn category(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.defs.push(CategoryDef {
            name: name.into(),
            rule,
            trivia: false,
        });
        self
    }

    pub fn trivia(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.defs.push(CategoryDef {
            name: name.into(),
            rule,
            trivia: true,
        });
        self
    }

    pub fn build(self) -> Result<TokenSpecification, SpecError> {
        TokenSpecification::new(self.defs)
    }
}
