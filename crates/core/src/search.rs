//! Case-insensitive substring search helpers.
//!
//! Every list endpoint that accepts `?search=` matches with PostgreSQL
//! `ILIKE`. User input is escaped so that `%`, `_` and `\` match literally.

/// Normalize a raw `?search=` value. Blank input means "no search".
pub fn normalize_term(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|t| !t.is_empty())
}

/// Escape `ILIKE` metacharacters in `term` (backslash is PostgreSQL's
/// default escape character).
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Build a `%term%` substring pattern for `ILIKE`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term.trim()))
}

/// Render `(col1 ILIKE $n OR col2 ILIKE $n ...)` for a single bound pattern.
pub fn ilike_any(columns: &[&str], bind_idx: u32) -> String {
    let parts: Vec<String> = columns
        .iter()
        .map(|c| format!("{c} ILIKE ${bind_idx}"))
        .collect();
    format!("({})", parts.join(" OR "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_terms_are_ignored() {
        assert_eq!(normalize_term(None), None);
        assert_eq!(normalize_term(Some("   ")), None);
        assert_eq!(normalize_term(Some(" comp ")), Some("comp"));
    }

    #[test]
    fn pattern_wraps_and_trims() {
        assert_eq!(contains_pattern(" comp "), "%comp%");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }

    #[test]
    fn ilike_any_shares_one_placeholder() {
        assert_eq!(
            ilike_any(&["name", "about"], 3),
            "(name ILIKE $3 OR about ILIKE $3)"
        );
    }
}
