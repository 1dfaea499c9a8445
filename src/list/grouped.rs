use super::{Navigator, PlainList};
use crate::accessor::{data_text, Accessor, Item};

/// A named run of items sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group key as produced by the group accessor.
    pub name: String,
    /// Data indices of the members, in view order.
    pub items: Vec<usize>,
}

/// Grouped list: items are partitioned by a group accessor.
///
/// Groups appear in order of first appearance in the view; members keep
/// their view order. Navigation walks group by group and never lands on a
/// header.
#[derive(Debug)]
pub struct GroupedList<'a, I> {
    inner: PlainList<'a, I>,
    groups: Vec<Group>,
}

impl<'a, I: Item> GroupedList<'a, I> {
    /// Groups `view` (indices into `data`) by `group_by`.
    pub fn new(
        data: &'a [I],
        view: &[usize],
        text: &'a Accessor<I>,
        group_by: &Accessor<I>,
    ) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        for &idx in view {
            let Some(item) = data.get(idx) else {
                continue;
            };
            let name = data_text(item, group_by);
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.items.push(idx),
                None => groups.push(Group {
                    name,
                    items: vec![idx],
                }),
            }
        }

        let order: Vec<usize> = groups.iter().flat_map(|g| g.items.iter().copied()).collect();
        Self {
            inner: PlainList::new(data, &order, text),
            groups,
        }
    }

    /// Groups with their members, for rendering.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of navigable items (headers excluded).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there is nothing to navigate.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<I: Item> Navigator for GroupedList<'_, I> {
    fn order(&self) -> &[usize] {
        self.inner.order()
    }

    fn text(&self, idx: usize) -> String {
        self.inner.text(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produce() -> Vec<String> {
        ["fruit:Apple", "veg:Carrot", "fruit:Banana", "veg:Leek", "nut:Pecan"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn kind() -> Accessor<String> {
        Accessor::func(|s: &String| s.split(':').next().unwrap_or_default().to_string())
    }

    fn name() -> Accessor<String> {
        Accessor::func(|s: &String| s.split(':').nth(1).unwrap_or_default().to_string())
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let data = produce();
        let (text, group_by) = (name(), kind());
        let view: Vec<usize> = (0..data.len()).collect();
        let list = GroupedList::new(&data, &view, &text, &group_by);

        let names: Vec<&str> = list.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["fruit", "veg", "nut"]);
        assert_eq!(list.order(), &[0, 2, 1, 3, 4]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_navigation_skips_headers() {
        let data = produce();
        let (text, group_by) = (name(), kind());
        let view: Vec<usize> = (0..data.len()).collect();
        let list = GroupedList::new(&data, &view, &text, &group_by);

        assert_eq!(list.first(), Some(0));
        assert_eq!(list.next(Some(0), None), Some(2));
        assert_eq!(list.next(Some(2), None), Some(1));
        assert_eq!(list.prev(Some(1)), Some(2));
        assert_eq!(list.last(), Some(4));
        assert_eq!(list.next(Some(4), None), None);
    }

    #[test]
    fn test_word_search_uses_item_text() {
        let data = produce();
        let (text, group_by) = (name(), kind());
        let view: Vec<usize> = (0..data.len()).collect();
        let list = GroupedList::new(&data, &view, &text, &group_by);

        assert_eq!(list.next(Some(0), Some("l")), Some(3));
        // group names are not searchable
        assert_eq!(list.next(Some(0), Some("veg")), None);
    }
}
