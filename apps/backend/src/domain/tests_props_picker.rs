//! Property tests for silhouette/target selection.

use proptest::prelude::*;

use crate::domain::picker::{pick_distinct_pair, RandomPicker};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the pair is always distinct and in range.
    #[test]
    fn prop_pair_distinct_and_in_range(len in 2usize..200, seed in any::<u64>()) {
        let picker = RandomPicker::new(Some(seed));
        let (silhouette, target) = pick_distinct_pair(&picker, len).unwrap();
        prop_assert_ne!(silhouette, target);
        prop_assert!(silhouette < len);
        prop_assert!(target < len);
    }
}
