//! Property-based tests for the keyspaces.
//!
//! The one contract every provider must honour: for valid bounds the
//! returned key sorts strictly between them, and belongs to the keyspace so
//! it can serve as a bound next time.

use ordinal_keys::{Base64Keyspace, PaddedNumericKeyspace, SortKeyProvider};
use ordinal_types::SortKey;
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Valid Base64 keys: alphabet characters, never ending in the zero digit.
fn base64_key_strategy() -> impl Strategy<Value = SortKey> + Clone {
    prop::string::string_regex("[-0-9A-Z_a-z]{0,12}[0-9A-Z_a-z]")
        .unwrap()
        .prop_map(SortKey::from)
        .boxed()
}

/// Keys biased toward the hard cases: runs of the lowest and highest digits.
fn base64_edge_key_strategy() -> impl Strategy<Value = SortKey> + Clone {
    prop_oneof![
        prop::string::string_regex("[-]{0,8}[0-9]").unwrap(),
        prop::string::string_regex("[z]{1,8}").unwrap(),
        prop::string::string_regex("[yz]{0,8}[0-9A-Z_a-z]").unwrap(),
        prop::string::string_regex("[-0]{0,8}[0-9A-Z_a-z]").unwrap(),
    ]
    .prop_map(SortKey::from)
    .boxed()
}

fn distinct_pair<S>(strategy: S) -> impl Strategy<Value = (SortKey, SortKey)>
where
    S: Strategy<Value = SortKey> + Clone,
{
    (strategy.clone(), strategy)
        .prop_filter("bounds must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) })
}

// =============================================================================
// BASE64 PROPERTIES
// =============================================================================

mod base64_properties {
    use super::*;

    proptest! {
        #[test]
        fn key_is_strictly_between((lower, upper) in distinct_pair(base64_key_strategy())) {
            let ks = Base64Keyspace::new();
            let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();
            prop_assert!(lower < key, "{:?} !< {:?}", lower, key);
            prop_assert!(key < upper, "{:?} !< {:?}", key, upper);
            prop_assert!(ks.validate_key(&key).is_ok());
        }

        #[test]
        fn key_is_strictly_between_edge_keys((lower, upper) in distinct_pair(base64_edge_key_strategy())) {
            let ks = Base64Keyspace::new();
            let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();
            prop_assert!(lower < key && key < upper);
            prop_assert!(ks.validate_key(&key).is_ok());
        }

        #[test]
        fn jittered_key_is_strictly_between((lower, upper) in distinct_pair(base64_key_strategy())) {
            let ks = Base64Keyspace::with_jitter();
            let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();
            prop_assert!(lower < key && key < upper);
            prop_assert!(ks.validate_key(&key).is_ok());
        }

        #[test]
        fn open_upper_bound(lower in base64_key_strategy()) {
            let key = Base64Keyspace::new().key_between(Some(&lower), None).unwrap();
            prop_assert!(lower < key);
        }

        #[test]
        fn open_lower_bound(upper in base64_key_strategy()) {
            let key = Base64Keyspace::new().key_between(None, Some(&upper)).unwrap();
            prop_assert!(key < upper);
            prop_assert!(!key.is_empty());
        }

        /// The new key is never more than one digit longer than the longer bound.
        #[test]
        fn key_growth_is_bounded((lower, upper) in distinct_pair(base64_key_strategy())) {
            let key = Base64Keyspace::new().key_between(Some(&lower), Some(&upper)).unwrap();
            prop_assert!(key.len() <= lower.len().max(upper.len()) + 1);
        }

        /// Repeatedly splitting the lower half of a gap never collides.
        #[test]
        fn nested_bisection_stays_ordered((lower, upper) in distinct_pair(base64_key_strategy()), rounds in 1usize..40) {
            let ks = Base64Keyspace::new();
            let mut upper = upper;
            for _ in 0..rounds {
                let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();
                prop_assert!(lower < key && key < upper);
                upper = key;
            }
        }

        #[test]
        fn keys_between_are_ascending_and_inside((lower, upper) in distinct_pair(base64_key_strategy()), count in 0usize..50) {
            let keys = Base64Keyspace::new().keys_between(Some(&lower), Some(&upper), count).unwrap();
            prop_assert_eq!(keys.len(), count);
            for pair in keys.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            if let (Some(first), Some(last)) = (keys.first(), keys.last()) {
                prop_assert!(&lower < first && last < &upper);
            }
        }
    }
}

// =============================================================================
// PADDED NUMERIC PROPERTIES
// =============================================================================

mod padded_numeric_properties {
    use super::*;

    const WIDTH: usize = 9;

    proptest! {
        #[test]
        fn key_is_strictly_between(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
            let ks = PaddedNumericKeyspace::new(WIDTH).unwrap();
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assume!(hi - lo > 1);

            let lower = ks.key_for(lo).unwrap();
            let upper = ks.key_for(hi).unwrap();
            let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();

            prop_assert!(lower < key && key < upper);
            prop_assert_eq!(ks.value_of(&key).unwrap(), (lo + hi) / 2);
        }

        #[test]
        fn consecutive_values_are_exhausted(n in 0u64..999_999_999) {
            let ks = PaddedNumericKeyspace::new(WIDTH).unwrap();
            let lower = ks.key_for(n).unwrap();
            let upper = ks.key_for(n + 1).unwrap();
            let err = ks.key_between(Some(&lower), Some(&upper)).unwrap_err();
            prop_assert!(err.is_keyspace_exhausted());
        }

        #[test]
        fn two_apart_yields_the_value_between(n in 0u64..999_999_998) {
            let ks = PaddedNumericKeyspace::new(WIDTH).unwrap();
            let lower = ks.key_for(n).unwrap();
            let upper = ks.key_for(n + 2).unwrap();
            let key = ks.key_between(Some(&lower), Some(&upper)).unwrap();
            prop_assert_eq!(key, ks.key_for(n + 1).unwrap());
        }

        /// String order of keys matches numeric order of values.
        #[test]
        fn string_order_matches_numeric_order(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
            let ks = PaddedNumericKeyspace::new(WIDTH).unwrap();
            let ka = ks.key_for(a).unwrap();
            let kb = ks.key_for(b).unwrap();
            prop_assert_eq!(a.cmp(&b), ka.cmp(&kb));
        }

        #[test]
        fn open_bounds(n in 1u64..999_999_998) {
            let ks = PaddedNumericKeyspace::new(WIDTH).unwrap();
            let key = ks.key_for(n).unwrap();
            prop_assert!(ks.key_between(None, Some(&key)).unwrap() < key);
            prop_assert!(ks.key_between(Some(&key), None).unwrap() > key);
        }
    }
}
