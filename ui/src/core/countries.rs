//! Countries offered by the profile form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub label: &'static str,
    pub code: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { label: "Argentina", code: "ar" },
    Country { label: "United States", code: "us" },
    Country { label: "Japan", code: "jp" },
    Country { label: "Spain", code: "es" },
    Country { label: "United Kingdom", code: "uk" },
    Country { label: "Mexico", code: "mx" },
    Country { label: "Brazil", code: "br" },
    Country { label: "Germany", code: "de" },
    Country { label: "Canada", code: "ca" },
    Country { label: "India", code: "in" },
    Country { label: "Australia", code: "au" },
    Country { label: "China", code: "cn" },
    Country { label: "France", code: "fr" },
    Country { label: "Italy", code: "it" },
    Country { label: "Russia", code: "ru" },
    Country { label: "South Korea", code: "kr" },
];

pub fn find(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

pub fn label_for(code: &str) -> &str {
    find(code).map(|country| country.label).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_lowercase_pairs() {
        let mut seen = std::collections::HashSet::new();
        for country in COUNTRIES {
            assert_eq!(country.code.len(), 2);
            assert_eq!(country.code, country.code.to_ascii_lowercase());
            assert!(seen.insert(country.code), "duplicate {}", country.code);
        }
    }

    #[test]
    fn unknown_label_echoes_code() {
        assert_eq!(label_for("jp"), "Japan");
        assert_eq!(label_for("zz"), "zz");
    }
}
