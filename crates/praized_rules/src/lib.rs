//! The fixed rules a Praized API URL is checked against.
//!
//! Every pattern is compiled once into a [`RuleTable`] which is immutable and
//! can be shared between threads freely.

pub mod rules;

use crate::rules::{Builder, ExactRule, PatternRule, Rule};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};

pub const HOST_PATTERN: &str = r"^api(\.dev)?\.praized\.com$";
pub const SLUG_PATTERN: &str = r"^[a-zA-Z_-][a-zA-Z0-9_-]+$";
pub const HEX_ID_PATTERN: &str = r"(?i)^[a-f0-9]{32,34}$";
pub const LOGIN_NAME_PATTERN: &str = r"^[a-zA-Z_-][a-zA-Z0-9_-]+$";
pub const TAG_PATTERN: &str =
    r"^[a-z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}\s0-9-]{2,20}$";

/// Collections the API knows about.
pub const RESOURCE_NAMES: [&str; 20] = [
    "actions",
    "merchants",
    "users",
    "questions",
    "answers",
    "communities",
    "favorites",
    "votes",
    "comments",
    "search",
    "realtime_items",
    "replies",
    "checkins",
    "shares",
    "friends",
    "location",
    "settings",
    "avatar",
    "broadcast_services",
    "action_types",
];

/// Resources whose identifier is not a pid. Anything missing here uses
/// [`IdentifierKind::Pid`].
pub const RESOURCE_IDENTIFIERS: [(&str, IdentifierKind); 1] = [("users", IdentifierKind::Login)];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RulePattern {
    Host,
    Slug,
    ResourceName,
    HexId,
    LoginName,
    Tag,
}

/// Shape of the identifier following a resource name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IdentifierKind {
    Login,
    Pid,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("failed to compile the {rule} rule: {source}")]
    Pattern {
        rule: RulePattern,
        #[source]
        source: regex::Error,
    },
}

impl From<Infallible> for RuleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl RulePattern {
    pub const ALL: [RulePattern; 6] = [
        RulePattern::Host,
        RulePattern::Slug,
        RulePattern::ResourceName,
        RulePattern::HexId,
        RulePattern::LoginName,
        RulePattern::Tag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RulePattern::Host => "host",
            RulePattern::Slug => "slug",
            RulePattern::ResourceName => "resourceName",
            RulePattern::HexId => "hexId",
            RulePattern::LoginName => "loginName",
            RulePattern::Tag => "tag",
        }
    }
}

impl Display for RulePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl IdentifierKind {
    /// The rule an identifier of this kind has to satisfy.
    pub fn pattern(self) -> RulePattern {
        match self {
            IdentifierKind::Login => RulePattern::LoginName,
            IdentifierKind::Pid => RulePattern::HexId,
        }
    }
}

pub struct RuleTable {
    host: PatternRule,
    slug: PatternRule,
    resource_name: ExactRule,
    hex_id: PatternRule,
    login_name: PatternRule,
    tag: PatternRule,
    identifiers: ahash::AHashMap<&'static str, IdentifierKind>,
}

impl RuleTable {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            host: compile(RulePattern::Host, HOST_PATTERN)?,
            slug: compile(RulePattern::Slug, SLUG_PATTERN)?,
            resource_name: ExactRule::builder().add_all(RESOURCE_NAMES).build()?,
            hex_id: compile(RulePattern::HexId, HEX_ID_PATTERN)?,
            login_name: compile(RulePattern::LoginName, LOGIN_NAME_PATTERN)?,
            tag: compile(RulePattern::Tag, TAG_PATTERN)?,
            identifiers: RESOURCE_IDENTIFIERS.into_iter().collect(),
        })
    }

    pub fn matches(&self, rule: RulePattern, string: &str) -> bool {
        match rule {
            RulePattern::Host => self.host.matches(string),
            RulePattern::Slug => self.slug.matches(string),
            RulePattern::ResourceName => self.resource_name.matches(string),
            RulePattern::HexId => self.hex_id.matches(string),
            RulePattern::LoginName => self.login_name.matches(string),
            RulePattern::Tag => self.tag.matches(string),
        }
    }

    pub fn is_resource(&self, string: &str) -> bool {
        self.resource_name.matches(string)
    }

    /// Identifier shape for `resource`; unknown or missing resources fall
    /// back to [`IdentifierKind::Pid`].
    pub fn identifier_kind(&self, resource: Option<&str>) -> IdentifierKind {
        resource
            .and_then(|r| self.identifiers.get(r))
            .copied()
            .unwrap_or(IdentifierKind::Pid)
    }
}

fn compile(rule: RulePattern, pattern: &str) -> Result<PatternRule, RuleError> {
    PatternRule::builder()
        .add_owned(pattern)
        .build()
        .map_err(|source| RuleError::Pattern { rule, source })
}
