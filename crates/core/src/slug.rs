//! URL slug generation for departments and courses.

/// Maximum generated slug length.
pub const MAX_SLUG_LEN: usize = 120;

/// Lowercase ASCII slug: alphanumerics kept, every other run of characters
/// collapsed into a single `-`, no leading or trailing dashes.
///
/// ```
/// use campus_core::slug::slugify;
///
/// assert_eq!(slugify("Computer Science & Engineering"), "computer-science-engineering");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

/// Candidate slug for the `attempt`-th collision (`attempt` 0 is the base).
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        return base.to_string();
    }
    let suffix = format!("-{}", attempt + 1);
    let keep = MAX_SLUG_LEN.saturating_sub(suffix.len()).min(base.len());
    format!("{}{suffix}", base[..keep].trim_end_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_spaces() {
        assert_eq!(slugify("  B.Tech -- AI/ML  "), "b-tech-ai-ml");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Café Studies"), "caf-studies");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn long_names_are_capped() {
        let slug = slugify(&"a ".repeat(200));
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn suffixes_start_at_two() {
        assert_eq!(with_suffix("physics", 0), "physics");
        assert_eq!(with_suffix("physics", 1), "physics-2");
        assert_eq!(with_suffix("physics", 4), "physics-5");
    }
}
