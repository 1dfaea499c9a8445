//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the help text shown for it. Components describe their bindings
//! through the [`KeyMap`] trait.
//!
//! ```rust
//! use bubbletea_dropdown::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let open = Binding::new(vec![(KeyCode::Down, KeyModifiers::ALT)])
//!     .with_help("alt+↓", "open");
//! assert_eq!(open.help().key, "alt+↓");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held, exactly.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short representation of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// An action bound to one or more key presses.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding that fires on any of `keys`.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the help description, keeping the key label.
    pub fn set_help_desc(&mut self, desc: impl Into<String>) {
        self.help.desc = desc.into();
    }

    /// Returns the key presses for this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    ///
    /// Modifiers must match exactly, so `alt+↓` does not trigger a plain `↓`
    /// binding. `SHIFT` is ignored for character keys because terminals
    /// report it inconsistently for upper-case letters.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match msg.key {
                KeyCode::Char(_) => press.modifiers == msg.modifiers.difference(KeyModifiers::SHIFT),
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Components implement `KeyMap` to describe their bindings for help views.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Reports whether `msg` matches any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_plain_binding_rejects_modified_press() {
        let down = Binding::new(vec![KeyCode::Down]);
        assert!(down.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(!down.matches(&key(KeyCode::Down, KeyModifiers::ALT)));
    }

    #[test]
    fn test_modified_binding() {
        let open = Binding::new(vec![(KeyCode::Down, KeyModifiers::ALT)]);
        assert!(open.matches(&key(KeyCode::Down, KeyModifiers::ALT)));
        assert!(!open.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let g = Binding::new(vec![KeyCode::Char('G')]);
        assert!(g.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut enter = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
        enter.set_enabled(false);
        assert!(!enter.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!matches(&key(KeyCode::Enter, KeyModifiers::NONE), &[&enter]));
        assert_eq!(enter.help().desc, "select");
    }
}
