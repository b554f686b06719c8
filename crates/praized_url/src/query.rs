use crate::decode::decode;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Decoded `key=value` pairs of a query string, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams<'a> {
    pairs: SmallVec<[(Cow<'a, str>, Cow<'a, str>); 8]>,
}

impl<'a> QueryParams<'a> {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// Pairs are separated by `&`, a pair without `=` has an empty value.
    /// A component with a broken percent escape is kept as written.
    pub fn parse(query: &'a str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_lossy(key), decode_lossy(value))
            })
            .collect();
        Self { pairs }
    }

    /// Value of the first non-empty occurrence of `name`.
    ///
    /// An empty value counts as absent, so `api_key=` is the same as no
    /// `api_key` at all.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn decode_lossy(raw: &str) -> Cow<'_, str> {
    decode(raw).unwrap_or_else(|err| {
        tracing::debug!(raw, %err, "keeping undecodable query component as is");
        Cow::Borrowed(raw)
    })
}
