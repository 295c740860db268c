//! Dense zero-based ordering of sibling entities.
//!
//! Lists within a board and cards within a list carry a `position` that must
//! equal their index. Every structural change goes through these helpers so
//! the invariant is restored in one place.

/// An entity ordered among its siblings
pub trait Positioned {
    fn position(&self) -> usize;
    fn set_position(&mut self, position: usize);
}

/// Rewrite every position to match the item's index
pub fn renumber<T: Positioned>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(index);
    }
}

/// True when positions are exactly `0..items.len()` in order
pub fn is_dense<T: Positioned>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.position() == index)
}

/// Move the item at `from` so it ends up at `to`, shifting the items in
/// between by one. `to` is clamped to the last index.
///
/// Returns the final index, or `None` if `from` is out of range.
pub fn move_within<T: Positioned>(items: &mut Vec<T>, from: usize, to: usize) -> Option<usize> {
    if from >= items.len() {
        return None;
    }
    let to = to.min(items.len() - 1);
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    renumber(items);
    Some(to)
}

/// Insert `item` at `at`, clamped to `items.len()` (append), and renumber.
///
/// Returns the index the item landed on.
pub fn insert_at<T: Positioned>(items: &mut Vec<T>, item: T, at: usize) -> usize {
    let at = at.min(items.len());
    items.insert(at, item);
    renumber(items);
    at
}

/// Remove the item at `index` and close the gap.
pub fn remove_at<T: Positioned>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index >= items.len() {
        return None;
    }
    let item = items.remove(index);
    renumber(items);
    Some(item)
}
