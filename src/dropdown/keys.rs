//! Key bindings for the dropdown.
//!
//! | Keys | Closed | Open |
//! |------|--------|------|
//! | `↓` / `↑` | commit next / previous item | move focus |
//! | `home` / `end` | commit first / last item | focus first / last |
//! | `alt+↓` | open | open |
//! | `alt+↑` | close | close, focus the control |
//! | `enter` | | select the focused item |
//! | `esc` | | close, focus the control |
//!
//! Printable characters feed type-ahead search, or the filter input when
//! the popup is open with filtering on.

use crate::key::{Binding, KeyMap};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// The action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Open the popup.
    Open,
    /// Close the popup and focus the control.
    Close,
    /// Next item.
    Next,
    /// Previous item.
    Prev,
    /// First item.
    First,
    /// Last item.
    Last,
    /// Select the focused item.
    Select,
    /// Close the popup (only when open).
    Cancel,
}

/// Key bindings for dropdown navigation and selection.
#[derive(Debug, Clone)]
pub struct DropdownKeyMap {
    /// Open the popup.
    pub open: Binding,
    /// Close the popup and return focus to the control.
    pub close: Binding,
    /// Move to the next item.
    pub next: Binding,
    /// Move to the previous item.
    pub prev: Binding,
    /// Jump to the first item.
    pub first: Binding,
    /// Jump to the last item.
    pub last: Binding,
    /// Select the focused item.
    pub select: Binding,
    /// Dismiss the popup.
    pub cancel: Binding,
}

impl Default for DropdownKeyMap {
    fn default() -> Self {
        Self {
            open: Binding::new(vec![(KeyCode::Down, KeyModifiers::ALT)]).with_help("alt+↓", "open"),
            close: Binding::new(vec![(KeyCode::Up, KeyModifiers::ALT)]).with_help("alt+↑", "close"),
            next: Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
            prev: Binding::new(vec![KeyCode::Up]).with_help("↑", "previous"),
            first: Binding::new(vec![KeyCode::Home]).with_help("home", "first"),
            last: Binding::new(vec![KeyCode::End]).with_help("end", "last"),
            select: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "dismiss"),
        }
    }
}

impl DropdownKeyMap {
    /// Maps a key press to an action.
    pub fn action(&self, msg: &KeyMsg) -> Option<KeyAction> {
        [
            (&self.open, KeyAction::Open),
            (&self.close, KeyAction::Close),
            (&self.last, KeyAction::Last),
            (&self.first, KeyAction::First),
            (&self.cancel, KeyAction::Cancel),
            (&self.select, KeyAction::Select),
            (&self.next, KeyAction::Next),
            (&self.prev, KeyAction::Prev),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(msg))
        .map(|(_, action)| action)
    }
}

impl KeyMap for DropdownKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.select, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.next, &self.prev, &self.first, &self.last],
            vec![&self.open, &self.close, &self.select, &self.cancel],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_arrows_are_not_plain_arrows() {
        let keys = DropdownKeyMap::default();
        let alt_down = KeyMsg {
            key: KeyCode::Down,
            modifiers: KeyModifiers::ALT,
        };
        let down = KeyMsg {
            key: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(keys.action(&alt_down), Some(KeyAction::Open));
        assert_eq!(keys.action(&down), Some(KeyAction::Next));
    }

    #[test]
    fn test_unbound_keys() {
        let keys = DropdownKeyMap::default();
        let a = KeyMsg {
            key: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(keys.action(&a), None);
        assert_eq!(keys.short_help().len(), 4);
    }
}
