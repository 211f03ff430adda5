//! Tokenizing helpers shared by the ingredient and substance sides of the
//! matching contract. Both sides must split and trim identically.

/// Strips every character outside the allow-set
/// {ASCII letters, digits, `-`, `[`, `]`, `.`, `,`, `'`, `(`, `)`, `/`, whitespace}.
pub fn clean_ingredient_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '-' | '[' | ']' | '.' | ',' | '\'' | '(' | ')' | '/')
        })
        .collect()
}

/// Splits a flat comma-space separated list into trimmed tokens. Trailing
/// empty segments are dropped; interior ones pass through as empty strings.
/// Nothing is deduplicated.
pub fn split_list(text: &str) -> Vec<String> {
    let mut parts: Vec<&str> = text.split(", ").collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    parts
        .into_iter()
        .map(|part| part.trim().to_string())
        .collect()
}

pub fn tokenize_ingredients(raw: &str) -> Vec<String> {
    split_list(&clean_ingredient_text(raw))
}

/// The authoritative per-substance check: substance tokens that contain the
/// ingredient as an ASCII case-insensitive substring.
pub fn matching_substances(substances: &str, ingredient: &str) -> Vec<String> {
    let needle = ingredient.to_uppercase();
    split_list(substances)
        .into_iter()
        .filter(|substance| substance.to_uppercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_comma_space_separated() {
        assert_eq!(
            tokenize_ingredients("Milk, Eggs, Soy-Lecithin"),
            vec!["Milk", "Eggs", "Soy-Lecithin"]
        );
    }

    #[test]
    fn test_tokenize_strips_disallowed_characters_before_splitting() {
        // The ';' is removed, leaving no comma-space to split on.
        assert_eq!(tokenize_ingredients("Milk; Eggs"), vec!["Milk Eggs"]);
    }

    #[test]
    fn test_tokenize_keeps_allowed_punctuation() {
        assert_eq!(
            tokenize_ingredients("E-330 [citric acid], Oil (sunflower), D/L-lactose"),
            vec!["E-330 [citric acid]", "Oil (sunflower)", "D/L-lactose"]
        );
    }

    #[test]
    fn test_tokenize_preserves_interior_empty_segments() {
        assert_eq!(tokenize_ingredients("Milk, , Eggs"), vec!["Milk", "", "Eggs"]);
    }

    #[test]
    fn test_tokenize_drops_trailing_empty_segments() {
        assert_eq!(tokenize_ingredients("Milk, "), vec!["Milk"]);
        assert_eq!(tokenize_ingredients("Milk, , "), vec!["Milk"]);
        assert!(tokenize_ingredients("").is_empty());
    }

    #[test]
    fn test_comma_without_space_is_not_a_separator() {
        assert_eq!(tokenize_ingredients("Milk,Eggs"), vec!["Milk,Eggs"]);
    }

    #[test]
    fn test_matching_substances_keeps_only_containing_tokens() {
        assert_eq!(
            matching_substances("Casein, Whey, Milk Protein", "Milk"),
            vec!["Milk Protein"]
        );
    }

    #[test]
    fn test_matching_substances_is_case_insensitive() {
        assert_eq!(
            matching_substances("casein, MILK protein", "mIlK"),
            vec!["MILK protein"]
        );
    }

    #[test]
    fn test_matching_substances_no_match() {
        assert!(matching_substances("Casein, Whey", "Peanut").is_empty());
    }
}
