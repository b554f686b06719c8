use smallvec::SmallVec;

pub const HOST: usize = 0;
pub const SLUG: usize = 1;
pub const RESOURCE: usize = 2;
pub const RESOURCE_ID: usize = 3;
pub const NESTED_RESOURCE: usize = 4;
pub const NESTED_RESOURCE_ID: usize = 5;

/// Path segments with positional meaning, see the index constants.
///
/// An empty segment (`a//b`, trailing slash) is stored as `None` and keeps
/// its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: SmallVec<[Option<&'a str>; 8]>,
    slug_injected: bool,
}

impl<'a> PathSegments<'a> {
    /// Splits a tokenized path on `/`.
    ///
    /// The first segment is taken as the host when the URL carried a scheme
    /// or when it looks like a domain. Otherwise the host position stays
    /// empty and the first segment lands in the slug position.
    pub fn split(path: &'a str, scheme: bool) -> Self {
        let mut parts = path.split('/').map(|s| Some(s).filter(|s| !s.is_empty()));
        let mut segments: SmallVec<[Option<&'a str>; 8]> = SmallVec::new();

        let first = parts.next().flatten();
        if !scheme && !first.map_or(false, |f| f.contains('.')) {
            segments.push(None);
        }
        segments.push(first);
        segments.extend(parts);

        Self {
            segments,
            slug_injected: false,
        }
    }

    /// Moves a community slug passed as a query parameter into the path.
    ///
    /// Only happens when the slug position holds a resource name, i.e. the
    /// caller left the slug out of the path. A missing `community_slug` still
    /// occupies the position and is remembered as injected.
    pub fn normalize(
        mut self,
        community_slug: Option<&'a str>,
        is_resource: impl Fn(&str) -> bool,
    ) -> Self {
        if self.get(SLUG).map_or(false, |s| is_resource(s)) {
            tracing::trace!(?community_slug, "injecting community slug from query");
            self.segments.insert(SLUG, community_slug);
            self.slug_injected = true;
        }
        self
    }

    pub fn get(&self, position: usize) -> Option<&'a str> {
        self.segments.get(position).copied().flatten()
    }

    pub fn host(&self) -> Option<&'a str> {
        self.get(HOST)
    }

    pub fn slug(&self) -> Option<&'a str> {
        self.get(SLUG)
    }

    pub fn resource(&self) -> Option<&'a str> {
        self.get(RESOURCE)
    }

    pub fn resource_id(&self) -> Option<&'a str> {
        self.get(RESOURCE_ID)
    }

    pub fn nested_resource(&self) -> Option<&'a str> {
        self.get(NESTED_RESOURCE)
    }

    pub fn nested_resource_id(&self) -> Option<&'a str> {
        self.get(NESTED_RESOURCE_ID)
    }

    /// `true` if the slug position was filled from the query string.
    pub fn slug_injected(&self) -> bool {
        self.slug_injected
    }

    /// `true` if nothing follows the host position.
    pub fn is_bare(&self) -> bool {
        self.segments.iter().skip(SLUG).all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn is_resource(s: &str) -> bool {
        matches!(s, "users" | "merchants")
    }

    #[test]
    fn split_with_host() {
        let segs = PathSegments::split("api.praized.com/acme/users/jdoe", true);
        assert_eq!(segs.host(), Some("api.praized.com"));
        assert_eq!(segs.slug(), Some("acme"));
        assert_eq!(segs.resource(), Some("users"));
        assert_eq!(segs.resource_id(), Some("jdoe"));
        assert_eq!(segs.nested_resource(), None);
        assert_eq!(segs.len(), 4);
    }

    #[test]
    fn split_relative() {
        let segs = PathSegments::split("acme/users/jdoe", false);
        assert_eq!(segs.host(), None);
        assert_eq!(segs.slug(), Some("acme"));
        assert_eq!(segs.resource_id(), Some("jdoe"));
    }

    #[test]
    fn split_domain_without_scheme() {
        let segs = PathSegments::split("api.praized.com/acme", false);
        assert_eq!(segs.host(), Some("api.praized.com"));
        assert_eq!(segs.slug(), Some("acme"));
    }

    #[test]
    fn empty_segments_keep_position() {
        let segs = PathSegments::split("api.praized.com/acme//jdoe/", true);
        assert_eq!(segs.resource(), None);
        assert_eq!(segs.resource_id(), Some("jdoe"));
        assert_eq!(segs.nested_resource(), None);
        assert_eq!(segs.len(), 5);
    }

    #[test]
    fn scheme_without_host() {
        let segs = PathSegments::split("/acme/users", true);
        assert_eq!(segs.host(), None);
        assert_eq!(segs.slug(), Some("acme"));
        assert_eq!(segs.resource(), Some("users"));
    }

    #[test]
    fn bare_host() {
        assert!(PathSegments::split("api.praized.com", true).is_bare());
        assert!(PathSegments::split("api.praized.com//", true).is_bare());
        assert!(!PathSegments::split("api.praized.com/acme", true).is_bare());
    }

    #[test]
    fn slug_injected_from_query() {
        let segs = PathSegments::split("api.praized.com/merchants/abc", true)
            .normalize(Some("acme"), is_resource);
        assert!(segs.slug_injected());
        assert_eq!(segs.slug(), Some("acme"));
        assert_eq!(segs.resource(), Some("merchants"));
        assert_eq!(segs.resource_id(), Some("abc"));
    }

    #[test]
    fn missing_slug_still_shifts() {
        let segs = PathSegments::split("merchants/abc", false).normalize(None, is_resource);
        assert!(segs.slug_injected());
        assert_eq!(segs.slug(), None);
        assert_eq!(segs.resource(), Some("merchants"));
        assert_eq!(segs.resource_id(), Some("abc"));
    }

    #[test]
    fn slug_in_path_is_kept() {
        let segs = PathSegments::split("api.praized.com/acme/users", true)
            .normalize(Some("other"), is_resource);
        assert!(!segs.slug_injected());
        assert_eq!(segs.slug(), Some("acme"));
    }
}
