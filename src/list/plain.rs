use super::Navigator;
use crate::accessor::{data_text, Accessor, Item};

/// Flat list: traverses the view in the order given.
#[derive(Debug)]
pub struct PlainList<'a, I> {
    data: &'a [I],
    order: Vec<usize>,
    text: &'a Accessor<I>,
}

impl<'a, I: Item> PlainList<'a, I> {
    /// Creates a list over `view`, a sequence of indices into `data`.
    ///
    /// Indices outside `data` are dropped.
    pub fn new(data: &'a [I], view: &[usize], text: &'a Accessor<I>) -> Self {
        let order = view.iter().copied().filter(|&idx| idx < data.len()).collect();
        Self { data, order, text }
    }

    /// Creates a list over all of `data`.
    pub fn from_data(data: &'a [I], text: &'a Accessor<I>) -> Self {
        Self {
            data,
            order: (0..data.len()).collect(),
            text,
        }
    }

    /// Number of navigable items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there is nothing to navigate.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The item at data index `idx`.
    pub fn item(&self, idx: usize) -> Option<&'a I> {
        self.data.get(idx)
    }
}

impl<I: Item> Navigator for PlainList<'_, I> {
    fn order(&self) -> &[usize] {
        &self.order
    }

    fn text(&self, idx: usize) -> String {
        self.data
            .get(idx)
            .map(|item| data_text(item, self.text))
            .unwrap_or_default()
    }
}
