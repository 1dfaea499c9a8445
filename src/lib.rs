#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-dropdown/")]

//! # bubbletea-dropdown
//!
//! A dropdown list / combobox component for terminal applications built
//! with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The component follows the Elm Architecture pattern with `update()` and
//! `view()` methods. It renders the committed value on one line and opens
//! a popup list on demand, with:
//!
//! - **Keyboard navigation** that commits directly while closed and only
//!   moves the highlight while open
//! - **Type-ahead search**: type the start of an item to jump to it
//! - **Filtering** with prefix, substring, fuzzy or custom matching
//! - **Grouping** of the popup list by any accessor
//! - **Controlled or uncontrolled** `open`, `value` and `search_term`
//! - **Disabled / read-only** states for the whole widget or single items
//!
//! ## Building blocks
//!
//! The widget is composed from small modules that are useful on their own:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`accessor`] | Resolve item text and keys |
//! | [`list`] | Navigation over flat and grouped lists |
//! | [`filter`] | Pure filtering of a collection by a term |
//! | [`debounce`] | Named, re-armable timers as bubbletea commands |
//! | [`typeahead`] | Debounced type-to-jump |
//! | [`controlled`] | Host-owned vs widget-owned fields |
//! | [`interaction`] | Disabled / read-only guards |
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     fruit: Dropdown<&'static str>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let fruit = Dropdown::builder(vec!["Apple", "Banana", "Cherry"])
//!             .with_placeholder("Pick a fruit")
//!             .with_filter(FilterMode::Contains)
//!             .build()
//!             .expect("uncontrolled dropdown");
//!         (Self { fruit }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.fruit.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Fruit: {}", self.fruit.view())
//!     }
//! }
//! ```

pub mod accessor;
pub mod controlled;
pub mod debounce;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod interaction;
pub mod key;
pub mod list;
pub mod typeahead;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command (the
///   dropdown returns its focus-settle timer)
/// - `blur()` unsets the focused state and cleans up focus-related state
/// - `focused()` reports the current focus state
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
///
/// let mut dropdown = Dropdown::new(vec!["Apple", "Banana"]);
/// assert!(!dropdown.focused());
/// let _settle = dropdown.focus();
/// dropdown.blur();
/// assert!(!dropdown.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use accessor::{Accessor, Item, Value};
pub use dropdown::{
    BlurMsg, ClickMsg, ClickTarget, Dropdown, DropdownBuilder, DropdownKeyMap, DropdownStyles,
    FocusMsg, FocusTarget, KeyOutcome, Messages,
};
pub use error::DropdownError;
pub use filter::{FilterMode, FilterOptions};
pub use interaction::{Interaction, Restriction};
pub use key::{Binding, KeyMap, KeyPress};
pub use list::{GroupedList, Navigator, PlainList};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accessor::{Accessor, Item, Value};
    pub use crate::dropdown::{
        BlurMsg, ClickMsg, ClickTarget, Dropdown, DropdownKeyMap, DropdownStyles, FocusMsg,
        KeyOutcome, Messages,
    };
    pub use crate::filter::FilterMode;
    pub use crate::interaction::Restriction;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::Component;
}
