//! Splits a candidate Praized API URL into the pieces the checker looks at.
//!
//! Nothing in here knows about the API's rules. The tokenizer finds the path
//! and the query string, [`PathSegments`] gives the path positional meaning
//! and [`QueryParams`] decodes the query string.

mod border;
mod decode;
mod query;
mod segments;
mod tokenize;


pub use decode::{decode, DecodeError};
pub use query::QueryParams;
pub use segments::{
    PathSegments, HOST, NESTED_RESOURCE, NESTED_RESOURCE_ID, RESOURCE, RESOURCE_ID, SLUG,
};
pub use tokenize::{extract_path, extract_query, RawUrl};
