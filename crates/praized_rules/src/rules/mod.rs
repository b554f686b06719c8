mod exact;
mod pattern;

pub use exact::{ExactRule, ExactRuleBuilder};
pub use pattern::{PatternRule, PatternRuleBuilder};

pub trait Rule: 'static + Send + Sync {
    type Builder: Builder;

    fn matches(&self, string: &str) -> bool;

    fn builder() -> Self::Builder {
        Self::Builder::default()
    }
}

pub trait Builder: Default {
    type Rule: Rule;
    type Error;

    fn build(self) -> Result<Self::Rule, Self::Error>;
    fn add(&mut self, string: &str) -> &mut Self;

    fn add_owned(mut self, string: &str) -> Self {
        self.add(string);
        self
    }

    fn add_all<'s>(mut self, strings: impl IntoIterator<Item = &'s str>) -> Self {
        for string in strings {
            self.add(string);
        }
        self
    }
}
