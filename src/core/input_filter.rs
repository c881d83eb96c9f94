use crate::domain::ports::InputFilter;
use regex::Regex;
use std::sync::LazyLock;

// digits, then optionally one `.` or `,` and up to two more digits
static PARTIAL_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*(?:[.,][0-9]{0,2})?$").expect("partial numeric pattern must compile")
});

/// Keystroke guard shared by the balance and amount fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericInputFilter;

impl InputFilter for NumericInputFilter {
    fn accept(&self, candidate: &str) -> bool {
        accept(candidate)
    }
}

/// Returns true when `candidate` is a valid in-progress decimal number.
/// The empty string is accepted.
pub fn accept(candidate: &str) -> bool {
    PARTIAL_NUMERIC.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_partial_numbers() {
        for text in ["", "0", "12", "12.", "12,", "12.5", "12,55", ".", ",", ".5", ",55"] {
            assert!(accept(text), "expected {:?} to be accepted", text);
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["12,555", "1.2.3", "1,2,3", "1.,2", "a", "-1", "+1", " 1", "1 ", "١٢", "1e3"] {
            assert!(!accept(text), "expected {:?} to be rejected", text);
        }
    }

    #[test]
    fn test_trait_matches_free_function() {
        let filter = NumericInputFilter;
        assert!(filter.accept("99,9"));
        assert!(!filter.accept("99,999"));
    }
}
