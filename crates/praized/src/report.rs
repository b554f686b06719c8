use praized_checker::ValidationResult;
use std::io::Write;

/// Writes one verdict line, followed by an indented line per message.
pub fn write(
    out: &mut impl Write,
    url: &str,
    result: &ValidationResult,
    quiet: bool,
) -> std::io::Result<()> {
    if result.is_valid() {
        if !quiet {
            writeln!(out, "ok   {}", url)?;
        }
        return Ok(());
    }

    writeln!(out, "fail {}", url)?;
    for message in result.messages() {
        writeln!(out, "     {}", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write;
    use praized_checker::Checker;
    use pretty_assertions::assert_eq;

    fn render(url: &str, quiet: bool) -> String {
        let result = Checker::new().unwrap().check(url);
        let mut out = Vec::new();
        write(&mut out, url, &result, quiet).unwrap();
        String::from_utf8(out).unwrap()
    }

    const VALID: &str =
        "https://api.praized.com/acme/users/jdoe?api_key=0123456789abcdef0123456789abcdef";

    #[test]
    fn valid_url() {
        assert_eq!(render(VALID, false), format!("ok   {}\n", VALID));
        assert_eq!(render(VALID, true), "");
    }

    #[test]
    fn invalid_url() {
        let url = "https://api.notpraized.com/acme/users/jdoe";
        assert_eq!(
            render(url, true),
            format!("fail {}\n     Api Key Missing.\n", url)
        );
    }
}
