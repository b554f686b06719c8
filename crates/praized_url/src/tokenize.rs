use crate::border::find_border;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::combinator::opt;
use nom::IResult;
use std::borrow::Cow;

const EXTENSIONS: [&str; 2] = [".json", ".xml"];

/// A URL cut into the parts the checker cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUrl<'a> {
    /// `true` if the URL started with `http://` or `https://`.
    pub scheme: bool,
    /// Everything between the scheme (or leading slash) and the query,
    /// with the response format extension removed.
    pub path: Option<Cow<'a, str>>,
    pub query: Option<&'a str>,
}

impl<'a> RawUrl<'a> {
    pub fn tokenize(url: &'a str) -> Self {
        let (query_loc, hash_loc) = find_border(url);
        let end = query_loc.or(hash_loc).unwrap_or(url.len());

        let (body, scheme) = match lead(&url[..end]) {
            Ok((rest, Some(lead))) => (rest, lead != "/"),
            Ok((rest, None)) => (rest, false),
            Err(_) => (&url[..end], false),
        };

        let path = Some(strip_extension(body)).filter(|p| !p.is_empty());
        let query = query_loc.map(|q| &url[q + 1..hash_loc.unwrap_or(url.len())]);

        Self {
            scheme,
            path,
            query,
        }
    }
}

pub fn extract_path(url: &str) -> Option<Cow<'_, str>> {
    RawUrl::tokenize(url).path
}

pub fn extract_query(url: &str) -> Option<&str> {
    RawUrl::tokenize(url).query
}

fn lead(i: &str) -> IResult<&str, Option<&str>> {
    opt(alt((
        tag_no_case("https://"),
        tag_no_case("http://"),
        tag("/"),
    )))(i)
}

/// Drops the first `.json` or `.xml`, wherever it sits.
fn strip_extension(path: &str) -> Cow<'_, str> {
    let found = EXTENSIONS
        .iter()
        .filter_map(|ext| path.find(ext).map(|at| (at, ext.len())))
        .min();

    match found {
        Some((at, len)) => Cow::Owned([&path[..at], &path[at + len..]].concat()),
        None => Cow::Borrowed(path),
    }
}
