//! Segment-wise comparison of a single version or release field

use std::cmp::Ordering;

/// Anything that is not an ASCII alphanumeric or `~` only separates segments.
fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~'
}

/// Split off the leading run of digits (or letters) of `s`
fn split_run(s: &str, digits: bool) -> (&str, &str) {
    let end = s
        .find(|c: char| {
            if digits {
                !c.is_ascii_digit()
            } else {
                !c.is_ascii_alphabetic()
            }
        })
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two all-digit strings by value without parsing them into integers
pub(super) fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare two version (or release) fields the way `rpmvercmp` does.
///
/// - separator runs are skipped on each side independently
/// - a `~` sorts before anything, including the end of the string
/// - a numeric segment is newer than an alphabetic one
/// - numeric segments compare by value, alphabetic ones by byte order
/// - if one side runs out first, the side with segments left is newer
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut one = a;
    let mut two = b;

    loop {
        one = one.trim_start_matches(is_separator);
        two = two.trim_start_matches(is_separator);

        match (one.strip_prefix('~'), two.strip_prefix('~')) {
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (Some(rest_one), Some(rest_two)) => {
                one = rest_one;
                two = rest_two;
                continue;
            }
            (None, None) => {}
        }

        if one.is_empty() || two.is_empty() {
            break;
        }

        let digits = one.starts_with(|c: char| c.is_ascii_digit());
        let (seg_one, rest_one) = split_run(one, digits);
        let (seg_two, rest_two) = split_run(two, digits);

        // Segment types differ
        if seg_two.is_empty() {
            return if digits {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ordering = if digits {
            compare_numeric(seg_one, seg_two)
        } else {
            seg_one.cmp(seg_two)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        one = rest_one;
        two = rest_two;
    }

    (!one.is_empty()).cmp(&!two.is_empty())
}
