#![allow(dead_code)]
//! Embedded flag artwork
//!
//! `data/flags.txt` is embedded at build time and holds one block per
//! country: a `= Country` header followed by rows of color-code cells.
//! Parsed once into a lookup map.

use once_cell::sync::Lazy;
use ratatui::style::Color;
use std::collections::HashMap;

/// Cells per artwork row
pub const FLAG_WIDTH: usize = 12;
/// Rows per flag
pub const FLAG_HEIGHT: usize = 6;

static FLAGS_DATA: &str = include_str!("../../data/flags.txt");

static FLAGS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let mut name: Option<&str> = None;
    let mut rows: Vec<&str> = Vec::new();

    for line in FLAGS_DATA.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(header) = line.strip_prefix("= ") {
            if let Some(prev) = name.take() {
                map.insert(prev, std::mem::take(&mut rows));
            }
            name = Some(header.trim());
        } else if !line.trim().is_empty() {
            rows.push(line.trim_end());
        }
    }
    if let Some(prev) = name {
        map.insert(prev, rows);
    }
    map
});

/// Artwork rows for a country, if it has any.
pub fn rows(country: &str) -> Option<&'static [&'static str]> {
    FLAGS.get(country).map(|rows| rows.as_slice())
}

/// Map a cell code from the artwork file to a terminal color.
pub fn cell_color(code: char) -> Color {
    match code {
        'b' => Color::Blue,
        'k' => Color::Black,
        'w' => Color::White,
        'r' => Color::Red,
        'g' => Color::Green,
        'y' => Color::Yellow,
        'o' => Color::Rgb(255, 136, 62),
        'n' => Color::Rgb(20, 30, 110),
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::COUNTRIES;

    #[test]
    fn test_every_catalog_country_has_artwork() {
        for country in COUNTRIES {
            assert!(rows(country).is_some(), "no artwork for {}", country);
        }
    }

    #[test]
    fn test_artwork_dimensions_are_uniform() {
        for country in COUNTRIES {
            let art = rows(country).expect("artwork present");
            assert_eq!(art.len(), FLAG_HEIGHT, "{} has wrong height", country);
            for row in art {
                assert_eq!(
                    row.chars().count(),
                    FLAG_WIDTH,
                    "{} has a row of wrong width",
                    country
                );
            }
        }
    }

    #[test]
    fn test_artwork_uses_only_known_codes() {
        for country in COUNTRIES {
            for row in rows(country).expect("artwork present") {
                for code in row.chars() {
                    assert_ne!(
                        cell_color(code),
                        Color::DarkGray,
                        "{} uses unknown code '{}'",
                        country,
                        code
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_country_has_no_artwork() {
        assert!(rows("Atlantis").is_none());
    }
}
