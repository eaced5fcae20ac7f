//! The country catalog
//!
//! Fixed, ordered list of the countries a round can draw from. Rounds pick
//! three of these; every entry must have matching flag artwork in
//! `data/flags.txt`.

/// All countries the quiz can ask about, in catalog order.
pub const COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK",
    "Ukraine", "US",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eleven_countries() {
        assert_eq!(COUNTRIES.len(), 11);
    }

    #[test]
    fn test_catalog_entries_are_distinct() {
        let mut sorted = COUNTRIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), COUNTRIES.len());
    }

    #[test]
    fn test_catalog_entries_are_nonempty() {
        for country in COUNTRIES {
            assert!(!country.is_empty());
        }
    }
}
