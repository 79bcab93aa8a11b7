//! Slice helpers

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

/// Drop repeated entries, keeping the first occurrence and the original order
pub fn remove_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let started = Instant::now();
    let mut seen = HashSet::with_capacity(items.len());

    let unique: Vec<T> = items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();

    tracing::trace!(
        input = items.len(),
        output = unique.len(),
        elapsed = ?started.elapsed(),
        "remove_duplicates finished"
    );
    unique
}

/// Index of the first element equal to `value`
pub fn in_array<T: PartialEq>(value: &T, items: &[T]) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Index of the first element matching `predicate`
pub fn find_index_of<T, P>(items: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(|item| predicate(item))
}
