use crate::rules::{Builder, Rule};

/// Matches when any of its regular expressions covers the whole input.
#[derive(Debug)]
pub struct PatternRule {
    regex_set: regex::RegexSet,
    regexes: Vec<regex::Regex>,
}

#[derive(Default)]
pub struct PatternRuleBuilder {
    patterns: Vec<String>,
}

impl Rule for PatternRule {
    type Builder = PatternRuleBuilder;

    fn matches(&self, string: &str) -> bool {
        self.regex_set.matches(string).into_iter().any(|i| {
            self.regexes[i]
                .find(string)
                .map_or(false, |m| m.start() == 0 && m.end() == string.len())
        })
    }
}

impl Builder for PatternRuleBuilder {
    type Rule = PatternRule;
    type Error = regex::Error;

    fn build(self) -> Result<Self::Rule, Self::Error> {
        Ok(PatternRule {
            regex_set: regex::RegexSetBuilder::new(&self.patterns)
                .unicode(true)
                .build()?,
            regexes: self
                .patterns
                .iter()
                .map(|p| regex::RegexBuilder::new(p).unicode(true).build())
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn add(&mut self, pattern: &str) -> &mut Self {
        self.patterns.push(pattern.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_input_only() {
        let rule = PatternRule::builder().add_owned("[a-z]+").build().unwrap();

        assert!(rule.matches("acme"));
        assert!(!rule.matches("acme1"));
        assert!(!rule.matches("1acme"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn any_pattern() {
        let rule = PatternRule::builder()
            .add_all(["^a+$", "^b+$"])
            .build()
            .unwrap();

        assert!(rule.matches("aaa"));
        assert!(rule.matches("bb"));
        assert!(!rule.matches("ab"));
    }

    #[test]
    fn invalid_pattern() {
        assert!(PatternRule::builder().add_owned("[a-").build().is_err());
    }
}
