use crate::rules::{Builder, Rule};
use std::convert::Infallible;

/// Set membership against a fixed list of keywords.
pub struct ExactRule {
    table: ahash::AHashSet<String>,
}

#[derive(Default)]
pub struct ExactRuleBuilder {
    table: ahash::AHashSet<String>,
}

impl Rule for ExactRule {
    type Builder = ExactRuleBuilder;

    fn matches(&self, string: &str) -> bool {
        self.table.contains(string)
    }
}

impl ExactRule {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Builder for ExactRuleBuilder {
    type Rule = ExactRule;
    type Error = Infallible;

    fn build(self) -> Result<Self::Rule, Self::Error> {
        Ok(ExactRule { table: self.table })
    }

    fn add(&mut self, string: &str) -> &mut Self {
        self.table.insert(string.to_string());
        self
    }
}
