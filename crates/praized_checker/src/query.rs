use crate::Violation;
use praized_rules::{RulePattern, RuleTable};
use praized_url::QueryParams;

pub const API_KEY: &str = "api_key";
pub const COMMUNITY_SLUG: &str = "community_slug";

/// Checks the `api_key` parameter. A missing query counts as a missing key.
pub(crate) fn validate_query(
    rules: &RuleTable,
    params: Option<&QueryParams<'_>>,
    violations: &mut Vec<Violation>,
) {
    match params.and_then(|p| p.get(API_KEY)) {
        None => violations.push(Violation::ApiKeyMissing),
        Some(key) if !rules.matches(RulePattern::HexId, key) => {
            tracing::trace!(key, "api key rejected");
            violations.push(Violation::ApiKeyIllegal);
        }
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: Vec<Violation> = Vec::new();

    fn validate(query: Option<&str>) -> Vec<Violation> {
        let rules = RuleTable::new().unwrap();
        let params = query.map(QueryParams::parse);
        let mut violations = Vec::new();
        validate_query(&rules, params.as_ref(), &mut violations);
        violations
    }

    #[test]
    fn valid_key() {
        assert_eq!(validate(Some("api_key=0123456789ABCDEF0123456789abcdef")), NONE);
    }

    #[test]
    fn missing_key() {
        assert_eq!(validate(None), vec![Violation::ApiKeyMissing]);
        assert_eq!(validate(Some("")), vec![Violation::ApiKeyMissing]);
        assert_eq!(validate(Some("api_key=")), vec![Violation::ApiKeyMissing]);
        assert_eq!(validate(Some("community_slug=acme")), vec![Violation::ApiKeyMissing]);
    }

    #[test]
    fn illegal_key() {
        assert_eq!(validate(Some("api_key=secret")), vec![Violation::ApiKeyIllegal]);
    }
}
