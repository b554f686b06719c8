use nom::bytes::complete::{tag, take_while_m_n};
use nom::combinator::map_res;
use nom::multi::many1;
use nom::{AsChar, IResult};
use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed percent escape at byte {0}")]
    Escape(usize),
    #[error("percent escapes do not form valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn take_byte(input: &str) -> IResult<&str, u8> {
    let (i, _) = tag("%")(input)?;
    map_res(take_while_m_n(2, 2, |c: char| c.is_hex_digit()), from_hex)(i)
}

fn take_encoded(i: &str) -> IResult<&str, Vec<u8>> {
    many1(take_byte)(i)
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` becomes a space and `%XX` becomes the byte `XX`. Input without either
/// is handed back borrowed.
pub fn decode(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    if !input.contains(|c: char| c == '%' || c == '+') {
        return Ok(Cow::Borrowed(input));
    }

    let mut buf = Vec::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        if let Ok((i, bytes)) = take_encoded(rest) {
            buf.extend_from_slice(&bytes);
            rest = i;
            continue;
        }
        if rest.starts_with('%') {
            return Err(DecodeError::Escape(input.len() - rest.len()));
        }

        let end = rest.find('%').unwrap_or(rest.len());
        buf.extend(
            rest[..end]
                .bytes()
                .map(|b| if b == b'+' { b' ' } else { b }),
        );
        rest = &rest[end..];
    }

    Ok(Cow::Owned(String::from_utf8(buf)?))
}

#[cfg(test)]
mod tests {
    use super::{decode, DecodeError};
    use std::borrow::Cow;

    #[test]
    fn plain_is_borrowed() {
        assert_eq!(decode("acme"), Ok(Cow::Borrowed("acme")));
    }

    #[test]
    fn plus_is_space() {
        assert_eq!(decode("a+b").unwrap(), "a b");
    }

    #[test]
    fn escapes() {
        assert_eq!(decode("w%C3%B6rld").unwrap(), "wörld");
        assert_eq!(decode("%61cme").unwrap(), "acme");
    }

    #[test]
    fn malformed_escape() {
        assert_eq!(decode("ab%zz"), Err(DecodeError::Escape(2)));
        assert_eq!(decode("ab%4"), Err(DecodeError::Escape(2)));
    }

    #[test]
    fn invalid_utf8() {
        assert!(matches!(decode("%C3"), Err(DecodeError::Utf8(_))));
    }
}
