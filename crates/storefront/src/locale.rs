//! Fixed choices for the city and language pickers.
//!
//! The pickers are stateless: selecting an entry echoes its label back
//! into the header, nothing is persisted server-side.

/// Cities offered by the delivery picker. The first entry is the default.
pub const CITIES: &[&str] = &["Moscow", "Saint Petersburg", "Kazan", "Novosibirsk"];

/// Languages offered by the language picker. The first entry is the default.
pub const LANGUAGES: &[&str] = &["Русский", "English"];

/// Default city label.
#[must_use]
pub fn default_city() -> &'static str {
    CITIES.first().copied().unwrap_or("Moscow")
}

/// Default language label.
#[must_use]
pub fn default_language() -> &'static str {
    LANGUAGES.first().copied().unwrap_or("English")
}

/// Whether a submitted label is one of the offered choices.
#[must_use]
pub fn is_known(choices: &[&str], label: &str) -> bool {
    choices.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(default_city(), "Moscow");
        assert_eq!(default_language(), "Русский");
    }

    #[test]
    fn test_is_known_rejects_arbitrary_labels() {
        assert!(is_known(CITIES, "Kazan"));
        assert!(!is_known(CITIES, "Atlantis"));
    }
}
