//! Data accessors for dropdown items.
//!
//! Items are opaque host records. The widget needs two things from each
//! item: the text it displays and the key that identifies it. Both are
//! resolved through an [`Accessor`], which is either the item's own
//! `Display`, a named field, or an arbitrary function.
//!
//! All lookups are total: a missing field resolves to empty text and a
//! value that is not part of the collection resolves to `None`.

use std::fmt::{self, Display};
use std::sync::Arc;

/// Trait for records that can be shown in a dropdown.
///
/// `field` backs [`Accessor::Field`]; the default implementation knows no
/// fields, which suits plain value types like `String`.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::Item;
/// use std::fmt;
///
/// #[derive(Clone, PartialEq)]
/// struct Fruit {
///     id: u32,
///     name: String,
/// }
///
/// impl fmt::Display for Fruit {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Item for Fruit {
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "id" => Some(self.id.to_string()),
///             "name" => Some(self.name.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Item: Display + Clone + PartialEq + Send + 'static {
    /// Returns the named field rendered as text, if the record has it.
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

impl Item for String {}

impl Item for &'static str {}

/// Function accessor type. `Send + Sync` so the widget stays `Send`.
pub type AccessorFn<I> = Arc<dyn Fn(&I) -> String + Send + Sync>;

/// How to read a piece of text out of an item.
pub enum Accessor<I> {
    /// Use the item's `Display` implementation.
    Display,
    /// Look up a named field through [`Item::field`].
    Field(String),
    /// Call a function.
    Func(AccessorFn<I>),
}

impl<I> Accessor<I> {
    /// Builds a field accessor.
    pub fn field(name: impl Into<String>) -> Self {
        Accessor::Field(name.into())
    }

    /// Builds a function accessor.
    pub fn func(f: impl Fn(&I) -> String + Send + Sync + 'static) -> Self {
        Accessor::Func(Arc::new(f))
    }
}

impl<I> Default for Accessor<I> {
    fn default() -> Self {
        Accessor::Display
    }
}

impl<I> Clone for Accessor<I> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Display => Accessor::Display,
            Accessor::Field(name) => Accessor::Field(name.clone()),
            Accessor::Func(f) => Accessor::Func(Arc::clone(f)),
        }
    }
}

impl<I> fmt::Debug for Accessor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Display => f.write_str("Display"),
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// A committed value: nothing, a concrete item, or an item key.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<I> {
    /// No value.
    #[default]
    Empty,
    /// A concrete item.
    Item(I),
    /// The key of an item, as resolved by the value accessor.
    Key(String),
}

impl<I> Value<I> {
    /// Returns `true` for [`Value::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl<I> From<Option<I>> for Value<I> {
    fn from(item: Option<I>) -> Self {
        item.map_or(Value::Empty, Value::Item)
    }
}

/// Resolves an item's text through `accessor`. Missing fields give `""`.
pub fn data_text<I: Item>(item: &I, accessor: &Accessor<I>) -> String {
    match accessor {
        Accessor::Display => item.to_string(),
        Accessor::Field(name) => item.field(name).unwrap_or_default(),
        Accessor::Func(f) => f(item),
    }
}

/// Resolves an item's key through `accessor`.
pub fn data_value<I: Item>(item: &I, accessor: &Accessor<I>) -> String {
    data_text(item, accessor)
}

/// Shallow equality between an item and a committed value.
pub fn is_same_value<I: Item>(item: &I, value: &Value<I>, accessor: &Accessor<I>) -> bool {
    match value {
        Value::Empty => false,
        Value::Item(other) => item == other || data_value(item, accessor) == data_value(other, accessor),
        Value::Key(key) => data_value(item, accessor) == *key,
    }
}

/// Returns the position of `value` in `data`.
pub fn data_index_of<I: Item>(data: &[I], value: &Value<I>, accessor: &Accessor<I>) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    data.iter().position(|item| is_same_value(item, value, accessor))
}

/// Resolves `value` to an item.
///
/// Prefers the matching element of `data`. An item value that is not part
/// of `data` resolves to itself; a key that is not part of `data` resolves
/// to `None`.
pub fn data_item<I: Item>(data: &[I], value: &Value<I>, accessor: &Accessor<I>) -> Option<I> {
    if let Some(idx) = data_index_of(data, value, accessor) {
        return data.get(idx).cloned();
    }
    match value {
        Value::Item(item) => Some(item.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: String,
    }

    impl Display for Person {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    impl Item for Person {
        fn field(&self, name: &str) -> Option<String> {
            match name {
                "id" => Some(self.id.to_string()),
                "name" => Some(self.name.clone()),
                _ => None,
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { id: 1, name: "Ada".into() },
            Person { id: 2, name: "Grace".into() },
        ]
    }

    #[test]
    fn test_text_accessors() {
        let p = &people()[1];
        assert_eq!(data_text(p, &Accessor::Display), "Grace");
        assert_eq!(data_text(p, &Accessor::field("id")), "2");
        assert_eq!(data_text(p, &Accessor::func(|p: &Person| p.name.to_uppercase())), "GRACE");
    }

    #[test]
    fn test_missing_field_degrades_to_empty() {
        let p = &people()[0];
        assert_eq!(data_text(p, &Accessor::field("email")), "");
    }

    #[test]
    fn test_index_of_by_key_and_item() {
        let data = people();
        let by_id = Accessor::field("id");
        assert_eq!(data_index_of(&data, &Value::Key("2".into()), &by_id), Some(1));
        assert_eq!(data_index_of(&data, &Value::Item(data[0].clone()), &by_id), Some(0));

        // same key, different record: still the same value
        let renamed = Person { id: 2, name: "G. Hopper".into() };
        assert_eq!(data_index_of(&data, &Value::Item(renamed), &by_id), Some(1));
        assert_eq!(data_index_of(&data, &Value::Empty, &by_id), None);
    }

    #[test]
    fn test_data_item_absent_value() {
        let data = people();
        let by_id = Accessor::field("id");
        assert_eq!(data_item(&data, &Value::Key("9".into()), &by_id), None);

        let stranger = Person { id: 9, name: "Linus".into() };
        assert_eq!(
            data_item(&data, &Value::Item(stranger.clone()), &by_id),
            Some(stranger)
        );
    }
}
