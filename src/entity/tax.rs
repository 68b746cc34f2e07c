/// Tax rate codes understood by the remote accounting service, with their
/// display labels.
///
/// This vocabulary is shared by every entity type that carries a tax type
/// field. Entities treat the value as an opaque string and do not enforce
/// membership; the table exists so callers can present labels and populate
/// pickers without round-tripping to the service.
pub const TAX_TYPES: &[(&str, &str)] = &[
    ("NONE", "No tax"),
    ("INPUT", "Tax on purchases"),
    ("OUTPUT", "Tax on sales"),
    ("EXEMPTINPUT", "Tax exempt purchases"),
    ("EXEMPTOUTPUT", "Tax exempt sales"),
    ("ZERORATED", "Zero-rated supplies"),
];

/// Returns the display label for a tax type code, if the code is known.
pub fn label(code: &str) -> Option<&'static str> {
    TAX_TYPES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
}

/// Whether `code` appears in the shared vocabulary.
pub fn is_known(code: &str) -> bool {
    label(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_resolves_to_label() {
        assert_eq!(label("OUTPUT"), Some("Tax on sales"));
        assert!(is_known("INPUT"));
    }

    #[test]
    fn unknown_code_is_not_found() {
        assert_eq!(label("BOGUS"), None);
        assert!(!is_known("output"));
    }
}
