//! Safe SQL identifier quoting.
//!
//! Every column reference emitted by the builders is rendered as a
//! double-quoted identifier, with embedded `"` escaped as `""`. Quoting is
//! unconditional so that case-sensitive column names survive the target
//! dialect's identifier folding.

/// Render `name` as a double-quoted SQL identifier.
pub fn quoted(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name);
    out
}

/// Append `name` to `out` as a double-quoted SQL identifier.
pub(crate) fn write_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_simple() {
        assert_eq!(quoted("title"), r#""title""#);
    }

    #[test]
    fn quoted_preserves_case() {
        assert_eq!(quoted("companyHandle"), r#""companyHandle""#);
    }

    #[test]
    fn quoted_escapes_embedded_quote() {
        assert_eq!(quoted(r#"has"quote"#), r#""has""quote""#);
    }

    #[test]
    fn quoted_empty_stays_delimited() {
        assert_eq!(quoted(""), r#""""#);
    }
}
