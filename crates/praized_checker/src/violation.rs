use praized_rules::IdentifierKind;

/// A reason for rejecting a URL. The display text is the message handed to
/// callers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("Community slug or resource missing.")]
    SlugOrResourceMissing,
    #[error("Host is not valid")]
    InvalidHost,
    #[error("Community Slug is not valid")]
    InvalidSlug,
    #[error("Resource is not valid")]
    InvalidResource,
    #[error("Login is not valid")]
    InvalidLogin,
    #[error("PID is not valid")]
    InvalidPid,
    #[error("Nested resource is not valid")]
    InvalidNestedResource,
    #[error("Nested resource pid is not valid")]
    InvalidNestedPid,
    #[error("Api Key Missing.")]
    ApiKeyMissing,
    #[error("Api Key Illegal.")]
    ApiKeyIllegal,
}

impl Violation {
    pub(crate) fn for_identifier(kind: IdentifierKind) -> Self {
        match kind {
            IdentifierKind::Login => Violation::InvalidLogin,
            IdentifierKind::Pid => Violation::InvalidPid,
        }
    }
}

/// Outcome of a single check.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.messages(), Vec::<String>::new());
    }

    #[test]
    fn messages_keep_order() {
        let result = ValidationResult::new(vec![Violation::InvalidHost, Violation::ApiKeyMissing]);
        assert!(!result.is_valid());
        assert!(result.contains(Violation::ApiKeyMissing));
        assert!(!result.contains(Violation::InvalidPid));
        assert_eq!(result.messages(), vec!["Host is not valid", "Api Key Missing."]);
    }

    #[test]
    fn identifier_violations() {
        assert_eq!(Violation::for_identifier(IdentifierKind::Login), Violation::InvalidLogin);
        assert_eq!(Violation::for_identifier(IdentifierKind::Pid), Violation::InvalidPid);
    }
}
