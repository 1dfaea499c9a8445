//! Messages and small types used by the dropdown.

use bubbletea_rs::Msg;

/// Tells the dropdown it gained keyboard focus.
///
/// Focus changes are settled through a short debounce so that focus moving
/// between the control and its filter input does not flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMsg;

/// Tells the dropdown it lost keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurMsg;

/// Where a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The closed-state control line (value and caret).
    Control,
    /// The filter input inside the popup.
    Filter,
    /// A list item, by data index.
    Item(usize),
}

/// A pointer click on the dropdown. The host maps mouse coordinates to a
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickMsg {
    /// What was clicked.
    pub target: ClickTarget,
}

/// Returned by the host's key-down handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOutcome {
    /// Let the dropdown handle the key.
    #[default]
    Continue,
    /// The host handled the key; the dropdown does nothing further.
    Handled,
}

/// Which part of the dropdown holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The main control.
    #[default]
    Control,
    /// The filter input of the open popup.
    Filter,
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Label of the open affordance.
    pub open: String,
    /// Shown when there is no data at all.
    pub empty_list: String,
    /// Shown when the filter matched nothing.
    pub empty_filter: String,
    /// Placeholder of the filter input.
    pub filter_placeholder: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            open: "open dropdown".to_string(),
            empty_list: "There are no items in this list".to_string(),
            empty_filter: "The filter returned no results".to_string(),
            filter_placeholder: String::new(),
        }
    }
}

impl From<FocusMsg> for Msg {
    fn from(msg: FocusMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<BlurMsg> for Msg {
    fn from(msg: BlurMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<ClickMsg> for Msg {
    fn from(msg: ClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}
