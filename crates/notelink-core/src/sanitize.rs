//! Heading text sanitization for link fragments.

/// Characters that cannot appear in a heading link fragment.
const ILLEGAL_FRAGMENT_CHARS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '(', ')', '*', '+', ',', '.', ':', ';', '<', '=', '>', '?', '@',
    '^', '`', '{', '|', '}', '~', '/', '[', ']', '\\',
];

/// Normalizes heading display text into a safe link fragment.
///
/// Each illegal character becomes a single space, runs of whitespace collapse
/// to one space, and leading/trailing whitespace is trimmed. The function is
/// pure and idempotent.
///
/// # Examples
///
/// ```rust
/// use notelink_core::sanitize::sanitize_heading;
///
/// assert_eq!(sanitize_heading("Release notes: v2.0!"), "Release notes v2 0");
/// assert_eq!(sanitize_heading("  plain heading  "), "plain heading");
/// ```
pub fn sanitize_heading(heading: &str) -> String {
    let replaced: String = heading
        .chars()
        .map(|c| {
            if ILLEGAL_FRAGMENT_CHARS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_every_illegal_char() {
        let input: String = ILLEGAL_FRAGMENT_CHARS.iter().collect();
        assert_eq!(sanitize_heading(&input), "");

        let sanitized = sanitize_heading("a#b[c]d^e");
        for c in ['#', '[', ']', '^'] {
            assert!(!sanitized.contains(c), "{c} survived sanitization");
        }
        assert_eq!(sanitized, "a b c d e");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(sanitize_heading("  too   many\tspaces "), "too many spaces");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Notes: 2024.01 (draft)", "plain", "", "## weird ## input"] {
            let once = sanitize_heading(input);
            assert_eq!(sanitize_heading(&once), once);
        }
    }

    #[test]
    fn test_keeps_legal_punctuation() {
        assert_eq!(sanitize_heading("naming-things is_hard"), "naming-things is_hard");
    }
}
