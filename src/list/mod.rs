//! List navigation over dropdown data.
//!
//! The dropdown never walks its data directly. It asks a [`Navigator`] for
//! the first, last, next or previous item, so flat and grouped lists can
//! differ in traversal order while the widget logic stays the same.
//!
//! Navigators work with data indices: every position they return is an
//! index into the widget's data vector, not into the visible view.
//!
//! - [`PlainList`]: traverses the view in order.
//! - [`GroupedList`]: traverses group by group. Group headers are exposed
//!   for rendering through [`GroupedList::groups`] but are never returned
//!   by navigation.

mod grouped;
mod plain;

pub use grouped::{Group, GroupedList};
pub use plain::PlainList;

use crate::accessor::{Accessor, Item};

/// Navigation capability over an ordered collection.
///
/// Implementors provide the traversal order and item text; the movement
/// operations are shared.
///
/// Boundaries do not wrap: `next` past the end and `prev` before the start
/// return `None`. A `current` that is not part of the list (or `None`)
/// moves to the first item.
pub trait Navigator {
    /// Data indices in traversal order.
    fn order(&self) -> &[usize];

    /// Display text of the item at data index `idx`.
    fn text(&self, idx: usize) -> String;

    /// First item, or `None` when empty.
    fn first(&self) -> Option<usize> {
        self.order().first().copied()
    }

    /// Last item, or `None` when empty.
    fn last(&self) -> Option<usize> {
        self.order().last().copied()
    }

    /// Position of `current` in traversal order.
    fn position(&self, current: usize) -> Option<usize> {
        self.order().iter().position(|&idx| idx == current)
    }

    /// The item after `current`.
    ///
    /// With a non-empty `word`, scans forward cyclically from `current`
    /// (ending with `current` itself) for the first item whose text starts
    /// with `word`, ignoring case; `None` when nothing matches.
    fn next(&self, current: Option<usize>, word: Option<&str>) -> Option<usize> {
        let pos = current.and_then(|c| self.position(c));

        if let Some(word) = word.filter(|w| !w.is_empty()) {
            let word = word.to_lowercase();
            let order = self.order();
            let len = order.len();
            let start = pos.map_or(0, |p| p + 1);
            return (0..len)
                .map(|k| order[(start + k) % len])
                .find(|&idx| self.text(idx).to_lowercase().starts_with(&word));
        }

        match pos {
            Some(p) => self.order().get(p + 1).copied(),
            None => self.first(),
        }
    }

    /// The item before `current`.
    fn prev(&self, current: Option<usize>) -> Option<usize> {
        match current.and_then(|c| self.position(c)) {
            Some(0) => None,
            Some(p) => self.order().get(p - 1).copied(),
            None => self.first(),
        }
    }
}

/// A plain or grouped list, chosen by whether a group accessor is set.
#[derive(Debug)]
pub enum ListView<'a, I> {
    /// Flat traversal.
    Plain(PlainList<'a, I>),
    /// Group-by-group traversal.
    Grouped(GroupedList<'a, I>),
}

impl<'a, I: Item> ListView<'a, I> {
    /// Builds the list for `view` (indices into `data`).
    pub fn new(
        data: &'a [I],
        view: &[usize],
        text: &'a Accessor<I>,
        group_by: Option<&Accessor<I>>,
    ) -> Self {
        match group_by {
            Some(group_by) => ListView::Grouped(GroupedList::new(data, view, text, group_by)),
            None => ListView::Plain(PlainList::new(data, view, text)),
        }
    }

    /// Groups for rendering, if this is a grouped list.
    pub fn groups(&self) -> Option<&[Group]> {
        match self {
            ListView::Plain(_) => None,
            ListView::Grouped(list) => Some(list.groups()),
        }
    }
}

impl<I: Item> Navigator for ListView<'_, I> {
    fn order(&self) -> &[usize] {
        match self {
            ListView::Plain(list) => list.order(),
            ListView::Grouped(list) => list.order(),
        }
    }

    fn text(&self, idx: usize) -> String {
        match self {
            ListView::Plain(list) => list.text(idx),
            ListView::Grouped(list) => list.text(idx),
        }
    }
}
