//! Whitespace tokenization of the raw CEA report

/// Split the report text into whitespace-delimited tokens.
///
/// Any run of whitespace (spaces, tabs, newlines) is a single separator;
/// empty tokens are never produced. The tokens borrow from the input text.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_mixed_whitespace() {
        let tokens = tokenize("MOLE  FRACTIONS\n\tCH4   0.123\r\nO2 0.456");
        assert_eq!(
            tokens,
            vec!["MOLE", "FRACTIONS", "CH4", "0.123", "O2", "0.456"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_no_empty_tokens() {
        let tokens = tokenize("  a   b  ");
        assert_eq!(tokens, vec!["a", "b"]);
    }
}
