//! Dropdown list / combobox component.
//!
//! A [`Dropdown`] shows the committed value on one line and opens a popup
//! list to choose from. It follows the Elm Architecture like every other
//! bubbletea component: feed it messages through `update`, run the command
//! it returns, render it with `view`.
//!
//! ## Keyboard
//!
//! - **Closed**: `↓`/`↑`/`home`/`end` commit the next, previous, first or
//!   last item directly, without opening. Typing jumps to the first item
//!   starting with the typed text.
//! - **Open**: the same keys only move the highlight; `enter` (or `space`
//!   without a filter) picks it, `esc` closes.
//! - `alt+↓` opens, `alt+↑` closes.
//!
//! ## Controlled and uncontrolled state
//!
//! `open`, `value` and `search_term` are owned by the widget unless the
//! builder is given `with_controlled_*`. Either way the widget reports
//! every requested change through `on_toggle`, `on_change` and
//! `on_search`; for controlled fields the host decides and pushes the
//! result back with `set_open`, `set_value` or `set_search_term`.
//!
//! ## Timers
//!
//! Type-ahead and focus changes are debounced. `update` returns the timer
//! command; the resulting [`TimeoutMsg`](crate::debounce::TimeoutMsg) must
//! be routed back to the same dropdown. Call [`Dropdown::dispose`] when the
//! widget goes away.
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut dropdown = Dropdown::builder(vec!["Apple", "Banana", "Cherry"])
//!     .with_value(Value::Item("Banana"))
//!     .build()
//!     .unwrap();
//!
//! let down = Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }) as Msg;
//! dropdown.update(down);
//!
//! assert_eq!(dropdown.value(), &Value::Item("Cherry"));
//! assert!(!dropdown.is_open());
//! ```

mod keys;
mod model;
mod notify;
mod style;
mod types;
mod update;
mod view;


pub use keys::{DropdownKeyMap, KeyAction};
pub use model::{Dropdown, DropdownBuilder, FOCUS_TIMER};
pub use notify::{
    ClickHandler, FocusHandler, Handlers, ItemHandler, KeyDownHandler, SearchHandler,
    ToggleHandler,
};
pub use style::{DropdownStyles, BUSY, CARET, POINTER};
pub use types::{BlurMsg, ClickMsg, ClickTarget, FocusMsg, FocusTarget, KeyOutcome, Messages};

use crate::accessor::Item;
use crate::Component;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};

impl<I: Item> Component for Dropdown<I> {
    /// Focuses the widget. Returns the focus-settle timer command.
    fn focus(&mut self) -> Option<Cmd> {
        self.handle_focus(true)
    }

    /// Blurs the widget immediately, closing the popup.
    fn blur(&mut self) {
        if !self.interaction.enabled() {
            return;
        }
        self.timers.cancel(FOCUS_TIMER);
        self.pending_focus = Some(false);
        self.settle_focus();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

impl<I: Item> BubbleTeaModel for Dropdown<I> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Dropdown::update(self, msg)
    }

    fn view(&self) -> String {
        Dropdown::view(self)
    }
}
