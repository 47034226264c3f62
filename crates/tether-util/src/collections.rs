//! Sequence helpers.

/// Result of [`diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<'a, T, U> {
    /// Original elements paired with the first new element they match
    pub common: Vec<(&'a T, &'a U)>,
    /// Original elements with no match
    pub removed: Vec<&'a T>,
    /// New elements not matched by any common original element
    pub inserted: Vec<&'a U>,
}

/// Compare `original` against `new` using `matches`.
///
/// Order follows the inputs. Runs in O(n * m) comparator calls.
pub fn diff<'a, T, U>(
    original: &'a [T],
    new: &'a [U],
    mut matches: impl FnMut(&T, &U) -> bool,
) -> Diff<'a, T, U> {
    let mut common = Vec::new();
    let mut removed = Vec::new();

    for old in original {
        match new.iter().find(|candidate| matches(old, *candidate)) {
            Some(found) => common.push((old, found)),
            None => removed.push(old),
        }
    }

    let inserted = new
        .iter()
        .filter(|candidate| !common.iter().any(|&(old, _)| matches(old, *candidate)))
        .collect();

    Diff {
        common,
        removed,
        inserted,
    }
}

/// Split `items` into those matching `predicate` and the rest, keeping order.
pub fn separate<I, F>(items: I, mut predicate: F) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    items.into_iter().partition(|item| predicate(item))
}

/// `items[index]`, or `None` when out of range.
pub fn safe_get<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}
