//! Property tests for guess matching (pure domain).

use proptest::prelude::*;

use crate::domain::guess::{is_blank, is_correct_guess};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: padding and case never change the verdict for the exact name.
    #[test]
    fn prop_padded_case_variants_match(
        name in "[A-Za-z][A-Za-z. -]{0,10}[A-Za-z]",
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
        upper in any::<bool>(),
    ) {
        let cased = if upper { name.to_uppercase() } else { name.to_lowercase() };
        let guess = format!("{left}{cased}{right}");
        prop_assert!(is_correct_guess(&guess, &name));
    }

    /// Property: a strict prefix of the name is never accepted.
    #[test]
    fn prop_truncated_name_rejected(
        name in "[A-Za-z]{3,12}",
        cut in 1usize..3,
    ) {
        let truncated = &name[..name.len() - cut];
        prop_assert!(!is_correct_guess(truncated, &name));
    }

    /// Property: whitespace-only input is blank.
    #[test]
    fn prop_whitespace_is_blank(ws in "[ \t\r\n]{0,8}") {
        prop_assert!(is_blank(&ws));
    }
}
