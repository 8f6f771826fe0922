//! Accent-insensitive search matching
//!
//! Client, plate and city values are typed by hand with inconsistent casing
//! and accents ("José" vs "jose"), so all search comparisons fold case and
//! diacritics before looking for a substring.

/// Folds a search term: trims, lowercases, and strips the Latin diacritics
/// that occur in the data set.
pub fn normalize_search(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect()
}

/// Returns true when `text` contains `query` after both are folded.
/// An empty query matches everything.
pub fn matches_search(text: &str, query: &str) -> bool {
    normalize_search(text).contains(&normalize_search(query))
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_accents() {
        assert_eq!(normalize_search("  José Pérez "), "jose perez");
        assert_eq!(normalize_search("IBARRA"), "ibarra");
        assert_eq!(normalize_search("Cañar"), "canar");
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("José Pérez", "jose"));
        assert!(matches_search("José Pérez", "PÉREZ"));
        assert!(matches_search("Quito", ""));
        assert!(!matches_search("Quito", "cuenca"));
    }
}
