use crate::Violation;
use praized_rules::{RulePattern, RuleTable};
use praized_url::PathSegments;

/// Walks the fixed segment positions. Every position is checked, a failure
/// never stops the walk.
pub(crate) struct SegmentValidator<'r> {
    rules: &'r RuleTable,
    violations: &'r mut Vec<Violation>,
}

impl<'r> SegmentValidator<'r> {
    pub(crate) fn new(rules: &'r RuleTable, violations: &'r mut Vec<Violation>) -> Self {
        Self { rules, violations }
    }

    pub(crate) fn validate(&mut self, segments: &PathSegments<'_>) {
        self.expect(segments.host(), RulePattern::Host, Violation::InvalidHost);

        match segments.slug() {
            Some(slug) => self.expect(Some(slug), RulePattern::Slug, Violation::InvalidSlug),
            // the resource sat in the slug position and no community_slug was given
            None if segments.slug_injected() => self.fail(Violation::InvalidSlug),
            None => {}
        }

        let resource = segments.resource();
        self.expect(resource, RulePattern::ResourceName, Violation::InvalidResource);

        let kind = self.rules.identifier_kind(resource);
        self.expect(
            segments.resource_id(),
            kind.pattern(),
            Violation::for_identifier(kind),
        );

        self.expect(
            segments.nested_resource(),
            RulePattern::ResourceName,
            Violation::InvalidNestedResource,
        );
        self.expect(
            segments.nested_resource_id(),
            RulePattern::HexId,
            Violation::InvalidNestedPid,
        );
    }

    /// Absent segments are skipped.
    fn expect(&mut self, segment: Option<&str>, rule: RulePattern, violation: Violation) {
        if let Some(segment) = segment {
            if !self.rules.matches(rule, segment) {
                tracing::trace!(segment, %rule, "segment rejected");
                self.fail(violation);
            }
        }
    }

    fn fail(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}
