//! Delimiter counting helpers.
//!
//! Several checks share the same shallow heuristic: count opening and
//! closing delimiters and require the counts to be pairwise equal. This
//! is a lexical check only; delimiters inside strings or comments are
//! counted like any other character.

/// Returns the number of occurrences of `needle` in `text`.
pub fn count(text: &str, needle: char) -> usize {
    text.chars().filter(|&c| c == needle).count()
}

/// Returns `true` when every `(open, close)` pair has equal counts.
pub fn pairs_balanced(text: &str, pairs: &[(char, char)]) -> bool {
    pairs
        .iter()
        .all(|&(open, close)| count(text, open) == count(text, close))
}

/// Brackets, parentheses, and braces: the pairs shared by the diagram
/// balance check and the brace-language syntax checks.
pub const BRACKET_PAIRS: &[(char, char)] = &[('[', ']'), ('(', ')'), ('{', '}')];

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count("a{b{c}", '{'), 2);
        assert_eq!(count("a{b{c}", '}'), 1);
        assert_eq!(count("", '{'), 0);
    }

    #[test]
    fn test_pairs_balanced() {
        assert!(pairs_balanced("fn f() { [1] }", BRACKET_PAIRS));
        assert!(!pairs_balanced("fn f() { [1 }", BRACKET_PAIRS));
        assert!(pairs_balanced("no delimiters at all", BRACKET_PAIRS));
    }

    #[test]
    fn test_counts_not_nesting() {
        // The heuristic only compares counts; crossed pairs still pass.
        assert!(pairs_balanced("([)]", BRACKET_PAIRS));
    }

    proptest! {
        #[test]
        fn prop_text_without_delimiters_is_balanced(text in "[a-zA-Z0-9 \n]*") {
            prop_assert!(pairs_balanced(&text, BRACKET_PAIRS));
        }

        #[test]
        fn prop_wrapping_preserves_balance(text in "[a-zA-Z0-9 \n]*") {
            let wrapped = format!("{{[({text})]}}");
            prop_assert!(pairs_balanced(&wrapped, BRACKET_PAIRS));
        }

        #[test]
        fn prop_extra_open_breaks_balance(text in "[a-zA-Z0-9 \n]*") {
            let unbalanced = format!("{{{text}");
            prop_assert!(!pairs_balanced(&unbalanced, BRACKET_PAIRS));
        }
    }
}
