//! Pre-flight checks for Praized API URLs.
//!
//! [`Checker::check`] looks at the shape of a URL only: host, community slug,
//! resource, identifiers and the `api_key` parameter. It never talks to the
//! API, so a URL it accepts may still be refused there. The reverse should
//! not happen: anything the API would accept passes.
//!
//! ```
//! let checker = praized_checker::Checker::new().unwrap();
//! let result = checker.check("https://api.praized.com/acme/users/jdoe");
//! assert!(!result.is_valid());
//! assert_eq!(result.messages(), vec!["Api Key Missing."]);
//! ```

mod query;
mod segments;
mod violation;

use crate::query::validate_query;
use crate::segments::SegmentValidator;
use once_cell::sync::OnceCell;
use praized_rules::{RulePattern, RuleTable};
use praized_url::{PathSegments, QueryParams, RawUrl};

pub use crate::query::{API_KEY, COMMUNITY_SLUG};
pub use crate::violation::{ValidationResult, Violation};
pub use praized_rules::RuleError;

static DEFAULT: OnceCell<Checker> = OnceCell::new();

/// Checks `url` with a process wide [`Checker`], built on first use.
pub fn check(url: &str) -> Result<ValidationResult, RuleError> {
    Ok(DEFAULT.get_or_try_init(Checker::new)?.check(url))
}

pub struct Checker {
    rules: RuleTable,
}

impl Checker {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self::with_rules(RuleTable::new()?))
    }

    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn is_valid(&self, url: &str) -> bool {
        self.check(url).is_valid()
    }

    pub fn check(&self, url: &str) -> ValidationResult {
        let raw = RawUrl::tokenize(url);
        let params = raw.query.map(QueryParams::parse);
        let segments = raw
            .path
            .as_deref()
            .map(|path| PathSegments::split(path, raw.scheme))
            .filter(|segments| !self.is_bare_host(segments));

        let mut violations = Vec::new();
        match (segments, &params) {
            (None, _) => {
                violations.push(Violation::SlugOrResourceMissing);
                validate_query(&self.rules, params.as_ref(), &mut violations);
            }
            (Some(_), None) => violations.push(Violation::ApiKeyMissing),
            (Some(segments), Some(params)) => {
                let segments = segments.normalize(params.get(COMMUNITY_SLUG), |s| {
                    self.rules.is_resource(s)
                });
                SegmentValidator::new(&self.rules, &mut violations).validate(&segments);
                validate_query(&self.rules, Some(params), &mut violations);
            }
        }

        let result = ValidationResult::new(violations);
        tracing::debug!(
            url,
            valid = result.is_valid(),
            messages = ?result.messages(),
            "checked url"
        );
        result
    }

    /// A path holding nothing but the API host is as good as no path.
    fn is_bare_host(&self, segments: &PathSegments<'_>) -> bool {
        segments.is_bare()
            && segments
                .host()
                .map_or(true, |host| self.rules.matches(RulePattern::Host, host))
    }
}
