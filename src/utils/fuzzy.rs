//! Fuzzy matching utilities
//!
//! Levenshtein edit distance and closest-match lookup over plain lists,
//! keyed maps and labeled enums.
//!
//! Distances are counted in Unicode scalar values (`char`). A precomposed
//! `"é"` is one unit, while `"e\u{301}"` is two.

use std::cmp::min;
use tracing::debug;

/// Tolerance used when a caller passes `None` as the maximum distance
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// A matched candidate together with its distance from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch<T> {
    pub value: T,
    pub distance: usize,
}

/// An enum whose variants each carry a unique string label.
///
/// ```
/// use foundation_helpers::utils::fuzzy::{closest_label, Labeled};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Shape {
///     Circle,
///     Square,
/// }
///
/// impl Labeled for Shape {
///     const VARIANTS: &'static [Self] = &[Shape::Circle, Shape::Square];
///
///     fn label(&self) -> &'static str {
///         match self {
///             Shape::Circle => "circle",
///             Shape::Square => "square",
///         }
///     }
/// }
///
/// assert_eq!(closest_label::<Shape>("cirle", None), Some(Shape::Circle));
/// ```
pub trait Labeled: Sized + Copy + 'static {
    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Levenshtein distance between `a` and `b`.
///
/// Uses a rolling pair of rows sized by the shorter input, so memory is
/// O(min(m, n)) while the result is identical to the full (m+1)×(n+1) table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Distance is symmetric, so the shorter sequence can always be the columns
    let (rows, cols) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if cols.is_empty() {
        return rows.len();
    }

    let mut prev: Vec<usize> = (0..=cols.len()).collect();
    let mut cur = vec![0; cols.len() + 1];

    for (i, r) in rows.iter().enumerate() {
        cur[0] = i + 1;
        for (j, c) in cols.iter().enumerate() {
            cur[j + 1] = if r == c {
                prev[j]
            } else {
                1 + min(min(prev[j + 1], cur[j]), prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[cols.len()]
}

/// Scan `(label, payload)` pairs in order and keep the first one with the
/// smallest distance that does not exceed `max_distance`.
fn closest_pair<'a, T, I>(input: &str, pairs: I, max_distance: usize) -> Option<FuzzyMatch<T>>
where
    I: IntoIterator<Item = (&'a str, T)>,
{
    let mut best: Option<FuzzyMatch<T>> = None;

    for (label, payload) in pairs {
        let distance = edit_distance(input, label);
        if distance > max_distance {
            continue;
        }

        let best_distance = best.as_ref().map_or(usize::MAX, |m| m.distance);
        if distance < best_distance {
            best = Some(FuzzyMatch {
                value: payload,
                distance,
            });
            if distance == 0 {
                break;
            }
        }
    }

    if best.is_none() {
        debug!("No candidate within distance {} of '{}'", max_distance, input);
    }
    best
}

/// Find the candidate closest to `input`.
///
/// Returns `None` when the list is empty or every candidate is further than
/// `max_distance` (default [`DEFAULT_MAX_DISTANCE`]). Ties keep the earliest
/// candidate.
pub fn closest_match<'c, S: AsRef<str>>(
    input: &str,
    candidates: &'c [S],
    max_distance: Option<usize>,
) -> Option<&'c str> {
    let max_distance = max_distance.unwrap_or(DEFAULT_MAX_DISTANCE);
    let pairs = candidates.iter().map(|c| (c.as_ref(), c.as_ref()));
    closest_pair(input, pairs, max_distance).map(|m| m.value)
}

/// Find the value whose key is closest to `input`.
///
/// Keys are scanned in ascending order so the outcome does not depend on the
/// map's iteration order.
pub fn closest_value<'m, K, V, M>(
    input: &str,
    mapping: M,
    max_distance: Option<usize>,
) -> Option<&'m V>
where
    M: IntoIterator<Item = (&'m K, &'m V)>,
    K: AsRef<str> + ?Sized + 'm,
    V: 'm,
{
    let max_distance = max_distance.unwrap_or(DEFAULT_MAX_DISTANCE);
    let mut entries: Vec<(&'m str, &'m V)> = mapping
        .into_iter()
        .map(|(key, value)| (key.as_ref(), value))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    closest_pair(input, entries, max_distance).map(|m| m.value)
}

/// Find the variant of `L` whose label is closest to `input`
pub fn closest_label<L: Labeled>(input: &str, max_distance: Option<usize>) -> Option<L> {
    let max_distance = max_distance.unwrap_or(DEFAULT_MAX_DISTANCE);
    let pairs = L::VARIANTS.iter().map(|variant| (variant.label(), *variant));
    closest_pair(input, pairs, max_distance).map(|m| m.value)
}

/// All candidates within `max_distance`, nearest first, at most `limit`.
///
/// Candidates at equal distance keep their original order.
pub fn closest_matches<'c, S: AsRef<str>>(
    input: &str,
    candidates: &'c [S],
    max_distance: Option<usize>,
    limit: usize,
) -> Vec<FuzzyMatch<&'c str>> {
    let max_distance = max_distance.unwrap_or(DEFAULT_MAX_DISTANCE);

    let mut matches: Vec<FuzzyMatch<&'c str>> = candidates
        .iter()
        .filter_map(|candidate| {
            let value = candidate.as_ref();
            let distance = edit_distance(input, value);
            (distance <= max_distance).then_some(FuzzyMatch { value, distance })
        })
        .collect();

    matches.sort_by_key(|m| m.distance);
    matches.truncate(limit);
    matches
}

/// Similarity score in `0.0..=1.0`, where `1.0` means identical
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

/// Method-call access to the matcher on string slices
pub trait FuzzyMatchExt {
    fn edit_distance(&self, other: &str) -> usize;

    fn closest_match<'c, S: AsRef<str>>(
        &self,
        candidates: &'c [S],
        max_distance: Option<usize>,
    ) -> Option<&'c str>;

    fn closest_value<'m, K, V, M>(&self, mapping: M, max_distance: Option<usize>) -> Option<&'m V>
    where
        M: IntoIterator<Item = (&'m K, &'m V)>,
        K: AsRef<str> + ?Sized + 'm,
        V: 'm;

    fn closest_label<L: Labeled>(&self, max_distance: Option<usize>) -> Option<L>;
}

impl FuzzyMatchExt for str {
    fn edit_distance(&self, other: &str) -> usize {
        edit_distance(self, other)
    }

    fn closest_match<'c, S: AsRef<str>>(
        &self,
        candidates: &'c [S],
        max_distance: Option<usize>,
    ) -> Option<&'c str> {
        closest_match(self, candidates, max_distance)
    }

    fn closest_value<'m, K, V, M>(&self, mapping: M, max_distance: Option<usize>) -> Option<&'m V>
    where
        M: IntoIterator<Item = (&'m K, &'m V)>,
        K: AsRef<str> + ?Sized + 'm,
        V: 'm,
    {
        closest_value(self, mapping, max_distance)
    }

    fn closest_label<L: Labeled>(&self, max_distance: Option<usize>) -> Option<L> {
        closest_label(self, max_distance)
    }
}
