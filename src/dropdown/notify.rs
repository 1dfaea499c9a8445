//! Host notification layer.
//!
//! Every state transition the host may care about goes out through one of
//! these callbacks. All of them are optional; an absent callback is a
//! no-op. Callbacks must be `Send` because bubbletea models are moved into
//! the runtime.

use super::types::{ClickTarget, KeyOutcome};
use bubbletea_rs::KeyMsg;

/// Callback receiving an item.
pub type ItemHandler<I> = Box<dyn FnMut(&I) + Send>;
/// Callback receiving the requested open state.
pub type ToggleHandler = Box<dyn FnMut(bool) + Send>;
/// Callback receiving the requested search term.
pub type SearchHandler = Box<dyn FnMut(&str) + Send>;
/// Callback without arguments.
pub type FocusHandler = Box<dyn FnMut() + Send>;
/// Callback deciding whether a key press is handled by the host.
pub type KeyDownHandler = Box<dyn FnMut(&KeyMsg) -> KeyOutcome + Send>;
/// Callback receiving a click target.
pub type ClickHandler = Box<dyn FnMut(ClickTarget) + Send>;

/// The host's callbacks.
pub struct Handlers<I> {
    pub(super) on_change: Option<ItemHandler<I>>,
    pub(super) on_select: Option<ItemHandler<I>>,
    pub(super) on_toggle: Option<ToggleHandler>,
    pub(super) on_search: Option<SearchHandler>,
    pub(super) on_focus: Option<FocusHandler>,
    pub(super) on_blur: Option<FocusHandler>,
    pub(super) on_key_down: Option<KeyDownHandler>,
    pub(super) on_click: Option<ClickHandler>,
}

impl<I> Default for Handlers<I> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_select: None,
            on_toggle: None,
            on_search: None,
            on_focus: None,
            on_blur: None,
            on_key_down: None,
            on_click: None,
        }
    }
}

impl<I> std::fmt::Debug for Handlers<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_change", &self.on_change.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_toggle", &self.on_toggle.is_some())
            .field("on_search", &self.on_search.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl<I> Handlers<I> {
    pub(super) fn change(&mut self, item: &I) {
        if let Some(f) = self.on_change.as_mut() {
            f(item);
        }
    }

    pub(super) fn select(&mut self, item: &I) {
        if let Some(f) = self.on_select.as_mut() {
            f(item);
        }
    }

    pub(super) fn toggle(&mut self, open: bool) {
        if let Some(f) = self.on_toggle.as_mut() {
            f(open);
        }
    }

    pub(super) fn search(&mut self, term: &str) {
        if let Some(f) = self.on_search.as_mut() {
            f(term);
        }
    }

    pub(super) fn focus(&mut self, focused: bool) {
        let handler = if focused {
            self.on_focus.as_mut()
        } else {
            self.on_blur.as_mut()
        };
        if let Some(f) = handler {
            f();
        }
    }

    pub(super) fn key_down(&mut self, key: &KeyMsg) -> KeyOutcome {
        self.on_key_down.as_mut().map_or(KeyOutcome::Continue, |f| f(key))
    }

    pub(super) fn click(&mut self, target: ClickTarget) {
        if let Some(f) = self.on_click.as_mut() {
            f(target);
        }
    }
}
