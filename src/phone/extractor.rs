// src/phone/extractor.rs
use regex::Regex;

/// Matches Spanish phone numbers in free text.
///
/// Two patterns are tried in order: the bare nine-digit form first,
/// then the grouping that allows spaces or hyphens between digit
/// groups. The first match wins and separators are stripped from it.
pub struct PhoneExtractor {
    bare: Regex,
    grouped: Regex,
    separators: Regex,
}

impl PhoneExtractor {
    pub fn new() -> Self {
        Self {
            bare: Regex::new(r"(?:\+?34)?[6789]\d{8}").unwrap(),
            grouped: Regex::new(r"(?:\+?34)?\s?[6789]\d{2}[\s-]?\d{2}[\s-]?\d{2}[\s-]?\d{2}")
                .unwrap(),
            separators: Regex::new(r"[\s-]").unwrap(),
        }
    }

    /// Returns the first phone number found in `text`, with internal
    /// spaces and hyphens removed.
    pub fn first_match(&self, text: &str) -> Option<String> {
        for pattern in [&self.bare, &self.grouped] {
            if let Some(found) = pattern.find(text) {
                return Some(self.separators.replace_all(found.as_str(), "").into_owned());
            }
        }

        None
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_a_bare_nine_digit_number() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.first_match("Reservas: 915550123, abierto 24h"),
            Some("915550123".to_string())
        );
    }

    #[test]
    fn matches_a_spaced_grouping_and_strips_separators() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.first_match("Llámanos al 666 12 34 56"),
            Some("666123456".to_string())
        );
    }

    #[test]
    fn strips_hyphens_too() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.first_match("tel: 666-12-34-56"),
            Some("666123456".to_string())
        );
    }

    #[test]
    fn keeps_an_explicit_country_prefix() {
        let extractor = PhoneExtractor::new();
        assert_eq!(
            extractor.first_match("contacto +34666123456 madrid"),
            Some("+34666123456".to_string())
        );
    }

    #[test]
    fn the_bare_pattern_wins_over_the_grouped_one() {
        let extractor = PhoneExtractor::new();
        // Both forms appear; the bare pattern is tried first even though
        // the grouped number comes earlier in the text.
        assert_eq!(
            extractor.first_match("centralita 666 12 34 56 o bien 915550123"),
            Some("915550123".to_string())
        );
    }

    #[test]
    fn rejects_numbers_with_a_bad_leading_digit() {
        let extractor = PhoneExtractor::new();
        assert_eq!(extractor.first_match("código postal 280130000 no"), None);
    }

    #[test]
    fn returns_none_on_text_without_phones() {
        let extractor = PhoneExtractor::new();
        assert_eq!(extractor.first_match("Parking abierto todos los días"), None);
    }
}
