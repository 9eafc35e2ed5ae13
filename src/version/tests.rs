use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;

fn cmp(a: &str, b: &str) -> Ordering {
    compare_evr(a, b).unwrap()
}

#[test]
fn test_parse_full() {
    let evr = Evr::parse("2:1.0.3-alt1").unwrap();
    assert_eq!(evr.epoch, "2");
    assert_eq!(evr.version, "1.0.3");
    assert_eq!(evr.release, "alt1");
}

#[test]
fn test_parse_missing_epoch_defaults_to_zero() {
    let evr = Evr::parse("1.0-1").unwrap();
    assert_eq!(evr.epoch, "0");

    let evr = Evr::parse(":1.0-1").unwrap();
    assert_eq!(evr.epoch, "0");
}

#[test]
fn test_parse_release_split_on_last_dash() {
    let evr = Evr::parse("0:1.0-beta-alt2").unwrap();
    assert_eq!(evr.version, "1.0-beta");
    assert_eq!(evr.release, "alt2");
}

#[test]
fn test_parse_without_release() {
    let evr = Evr::parse("1:2.5").unwrap();
    assert_eq!(evr.version, "2.5");
    assert_eq!(evr.release, "");
}

#[test]
fn test_parse_rejects_non_numeric_epoch() {
    let err = Evr::parse("x1:1.0-1").unwrap_err();
    assert!(matches!(err, VersionParseError::InvalidEpoch { .. }));
    assert!(err.to_string().contains("x1"));
}

#[test]
fn test_display_normalized() {
    assert_eq!(Evr::parse("1.0-1").unwrap().to_string(), "0:1.0-1");
    assert_eq!(Evr::parse("3:4.2").unwrap().to_string(), "3:4.2-");
}

#[test]
fn test_tilde_sorts_before_release() {
    assert_eq!(compare_segments("1.0~rc1", "1.0"), Ordering::Less);
    assert_eq!(compare_segments("1.0", "1.0~rc1"), Ordering::Greater);
    assert_eq!(compare_segments("1.0~rc1", "1.0~rc2"), Ordering::Less);
    assert_eq!(compare_segments("1.0~rc1", "1.0~rc1"), Ordering::Equal);
    assert_eq!(compare_segments("1.0~~", "1.0~"), Ordering::Less);
}

#[test]
fn test_numeric_segments() {
    assert_eq!(compare_segments("1.0.1", "1.0.2"), Ordering::Less);
    assert_eq!(compare_segments("1.0.10", "1.0.2"), Ordering::Greater);
    assert_eq!(compare_segments("1.01", "1.1"), Ordering::Equal);
    assert_eq!(compare_segments("1.001", "1.0001"), Ordering::Equal);
    assert_eq!(compare_segments("20240101", "9"), Ordering::Greater);
}

#[test]
fn test_alpha_segments() {
    assert_eq!(compare_segments("1.0a", "1.0b"), Ordering::Less);
    assert_eq!(compare_segments("alt1", "alt2"), Ordering::Less);
    assert_eq!(compare_segments("B", "a"), Ordering::Less);
    assert_eq!(compare_segments("abc", "ab"), Ordering::Greater);
}

#[test]
fn test_numeric_beats_alpha() {
    assert_eq!(compare_segments("1.1", "1.a"), Ordering::Greater);
    assert_eq!(compare_segments("1.a", "1.1"), Ordering::Less);
    assert_eq!(compare_segments("1", "a"), Ordering::Greater);
}

#[test]
fn test_remaining_segments_win() {
    assert_eq!(compare_segments("1.0", "1.0.1"), Ordering::Less);
    assert_eq!(compare_segments("1.0a", "1.0"), Ordering::Greater);
    assert_eq!(compare_segments("1.0", "1.0."), Ordering::Equal);
    assert_eq!(compare_segments("1.0", "1.0_"), Ordering::Equal);
}

#[test]
fn test_separators_are_ignored() {
    assert_eq!(compare_segments("1.0", "1_0"), Ordering::Equal);
    assert_eq!(compare_segments("1..0", "1.0"), Ordering::Equal);
    assert_eq!(compare_segments("1a", "1.a"), Ordering::Equal);
}

#[test]
fn test_empty_segments() {
    assert_eq!(compare_segments("", ""), Ordering::Equal);
    assert_eq!(compare_segments("", "1"), Ordering::Less);
    assert_eq!(compare_segments("a", ""), Ordering::Greater);
    assert_eq!(compare_segments("~", ""), Ordering::Less);
}

#[test]
fn test_epoch_dominates() {
    assert_eq!(cmp("1:1.0-1", "2:0.1-1"), Ordering::Less);
    assert_eq!(cmp("2:0.1-1", "1:9.9-9"), Ordering::Greater);
    assert_eq!(cmp("1.0-1", "0:1.0-1"), Ordering::Equal);
    assert_eq!(cmp("01:1.0-1", "1:1.0-1"), Ordering::Equal);
}

#[test]
fn test_huge_epoch_does_not_overflow() {
    assert_eq!(
        cmp("123456789012345678901234567890:1-1", "9:1-1"),
        Ordering::Greater
    );
}

#[test]
fn test_release_breaks_tie() {
    assert_eq!(cmp("0:1.0-1", "0:1.0-2"), Ordering::Less);
    assert_eq!(cmp("0:1.0-alt1", "0:1.0-alt1.1"), Ordering::Less);
    assert_eq!(cmp("0:1.0", "0:1.0-1"), Ordering::Less);
}

#[test]
fn test_equal_by_comparison_not_spelling() {
    let a = Evr::parse("0:1.01-1").unwrap();
    let b = Evr::parse("1.1-1").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_compare_evr_propagates_errors() {
    assert!(compare_evr("a:1-1", "1-1").is_err());
    assert!(compare_evr("1-1", "0:1-1").is_ok());
}

fn version_strategy() -> impl Strategy<Value = String> {
    "([0-9]{1,3}:)?[0-9a-z.~_+]{0,8}(-[0-9a-z.~]{0,5})?"
}

proptest! {
    #[test]
    fn prop_reflexive(a in version_strategy()) {
        prop_assert_eq!(cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(cmp(&a, &b), cmp(&b, &a).reverse());
    }

    #[test]
    fn prop_transitive(
        a in version_strategy(),
        b in version_strategy(),
        c in version_strategy(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort_by(|x, y| cmp(x, y));
        prop_assert_ne!(cmp(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(cmp(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(cmp(&sorted[0], &sorted[2]), Ordering::Greater);
    }
}
