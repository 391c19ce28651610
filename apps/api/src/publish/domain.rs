//! Candidate domain normalization.
//!
//! The builder strips invalid characters as the user types rather than
//! rejecting at submit time; the server re-applies the same rule so a stale
//! or bypassing client can never reach the registrar with garbage.

/// Lowercases and strips everything outside `[a-z0-9-]` from a domain
/// label (the part the user types, before the extension).
pub fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Normalizes a full candidate domain, keeping dots between labels.
pub fn normalize_domain(raw: &str) -> String {
    raw.split('.')
        .map(normalize_label)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_invalid_characters() {
        assert_eq!(normalize_label("Jane Doe!"), "janedoe");
        assert_eq!(normalize_label("ada_lovelace"), "adalovelace");
        assert_eq!(normalize_label("dev-2024"), "dev-2024");
    }

    #[test]
    fn test_normalize_domain_keeps_extension() {
        assert_eq!(normalize_domain("JaneDoe.me"), "janedoe.me");
        assert_eq!(normalize_domain("my résumé.cv"), "myrsum.cv");
    }

    #[test]
    fn test_empty_labels_collapse() {
        assert_eq!(normalize_domain("!!.me"), "me");
        assert_eq!(normalize_domain(""), "");
    }
}
