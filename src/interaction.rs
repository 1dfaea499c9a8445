//! Disabled and read-only configuration.
//!
//! Either flag can apply to the whole widget or to a list of item keys.
//! Whole-widget `disabled` blocks every interaction, including focus.
//! Whole-widget `read_only` still allows focus, navigation and opening the
//! popup but blocks value commits. Item lists only block committing the
//! listed items.

use crate::accessor::{data_value, Accessor, Item};

/// Interaction restriction for one flag (disabled or read-only).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Restriction {
    /// No restriction.
    #[default]
    None,
    /// Applies to the whole widget.
    All,
    /// Applies to items with these keys (as resolved by the value accessor).
    Items(Vec<String>),
}

impl Restriction {
    /// Returns `true` when the whole widget is restricted.
    pub fn is_all(&self) -> bool {
        matches!(self, Restriction::All)
    }

    /// Returns `true` when `item` is restricted.
    pub fn covers<I: Item>(&self, item: &I, value: &Accessor<I>) -> bool {
        match self {
            Restriction::None => false,
            Restriction::All => true,
            Restriction::Items(keys) => {
                let key = data_value(item, value);
                keys.iter().any(|k| *k == key)
            }
        }
    }
}

impl From<bool> for Restriction {
    fn from(on: bool) -> Self {
        if on {
            Restriction::All
        } else {
            Restriction::None
        }
    }
}

/// The widget's disabled and read-only settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Disabled restriction.
    pub disabled: Restriction,
    /// Read-only restriction.
    pub read_only: Restriction,
}

impl Interaction {
    /// Focus, keyboard and pointer handling are allowed.
    pub fn enabled(&self) -> bool {
        !self.disabled.is_all()
    }

    /// Value commits are allowed at all.
    pub fn editable(&self) -> bool {
        self.enabled() && !self.read_only.is_all()
    }

    /// `item` may become the committed value.
    pub fn can_commit<I: Item>(&self, item: &I, value: &Accessor<I>) -> bool {
        self.editable() && !self.disabled.covers(item, value) && !self.read_only.covers(item, value)
    }
}
