//! Common utilities shared across domain models

/// Interprets a yes/no answer
///
/// Only "yes" (any case, surrounding whitespace ignored) counts as yes.
/// "y", "true" and anything else are no.
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_accepts_yes() {
        assert!(parse_yes("yes"));
        assert!(parse_yes("YES"));
        assert!(parse_yes("  Yes \n"));
    }

    #[test]
    fn test_parse_yes_rejects_everything_else() {
        assert!(!parse_yes("y"));
        assert!(!parse_yes("no"));
        assert!(!parse_yes(""));
        assert!(!parse_yes("yes please"));
    }
}
