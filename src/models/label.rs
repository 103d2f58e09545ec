//! Identifier-to-label formatting

/// Insert a space before every uppercase letter or digit after the first character
///
/// - "NeuteredAdult" -> "Neutered Adult"
/// - "Puppy0To4Months" -> "Puppy 0 To 4 Months"
pub fn add_spaces_to_pascal_case(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut spaced = String::with_capacity(text.len() * 2);
    spaced.push(first);

    for c in chars {
        if c.is_uppercase() || c.is_ascii_digit() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_words() {
        assert_eq!(add_spaces_to_pascal_case("NeuteredAdult"), "Neutered Adult");
        assert_eq!(
            add_spaces_to_pascal_case("InactiveObeseProne"),
            "Inactive Obese Prone"
        );
        assert_eq!(add_spaces_to_pascal_case("Gestation"), "Gestation");
    }

    #[test]
    fn test_digits_are_spaced() {
        assert_eq!(
            add_spaces_to_pascal_case("Puppy0To4Months"),
            "Puppy 0 To 4 Months"
        );
        assert_eq!(
            add_spaces_to_pascal_case("Puppy4MonthsToAdult"),
            "Puppy 4 Months To Adult"
        );
        assert_eq!(add_spaces_to_pascal_case("K9"), "K 9");
    }

    #[test]
    fn test_first_character_never_spaced() {
        assert_eq!(add_spaces_to_pascal_case("A"), "A");
        assert_eq!(add_spaces_to_pascal_case("7Up"), "7 Up");
        assert_eq!(add_spaces_to_pascal_case("lowercase"), "lowercase");
    }

    #[test]
    fn test_empty() {
        assert_eq!(add_spaces_to_pascal_case(""), "");
    }
}
