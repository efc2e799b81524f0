//! Text normalization for tolerant matching
//!
//! Every comparison in the resolver goes through `normalize` on both
//! sides, so "MNIT Jaipur", "mnit   jaipur" and "MNÍT, Jaipur!" all
//! compare equal.

use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching.
///
/// Steps, in order:
/// - NFKD decomposition, dropping everything outside ASCII (strips
///   diacritics to their base letters)
/// - lowercase
/// - remove characters that are neither word characters nor whitespace
/// - collapse runs of whitespace and trim
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkd().filter(char::is_ascii).collect();

    let stripped: String = folded
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize("MNIT Jaipur"), normalize("mnit   jaipur"));
        assert_eq!(normalize("MNIT Jaipur"), "mnit jaipur");
    }

    #[test]
    fn test_accents_stripped() {
        assert_eq!(normalize("Collège Étudiant"), "college etudiant");
        assert_eq!(normalize("MNÍT Jaipur"), "mnit jaipur");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(normalize("Where is MNIT, Jaipur?!"), "where is mnit jaipur");
    }

    #[test]
    fn test_idempotent() {
        for input in ["  ¡Hola! MNIT ", "a.b.c", "IIT-Jodhpur", "", "   ", "mnit   jaipur"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
