//! The dropdown model, its builder and the state it derives from props.

use super::keys::DropdownKeyMap;
use super::notify::Handlers;
use super::style::DropdownStyles;
use super::types::{ClickTarget, FocusTarget, KeyOutcome, Messages};
use crate::accessor::{data_index_of, data_item, is_same_value, Accessor, Item, Value};
use crate::controlled::Controllable;
use crate::debounce::Timers;
use crate::error::{DropdownError, Result};
use crate::filter::{filter, FilterMode, FilterOptions};
use crate::interaction::{Interaction, Restriction};
use crate::list::{ListView, Navigator};
use crate::typeahead::{TypeAhead, DEFAULT_DELAY};
use bubbletea_rs::KeyMsg;
use std::time::Duration;

/// Timer name used to settle focus changes.
pub const FOCUS_TIMER: &str = "focus";

/// A dropdown list / combobox.
///
/// The dropdown shows the committed value on a single line and opens a
/// popup list to pick from. It supports keyboard navigation, type-ahead
/// search, optional filtering and grouping, and reports every change to
/// the host through callbacks.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::{Dropdown, FilterMode, Value};
///
/// let dropdown = Dropdown::builder(vec!["Apple", "Banana", "Cherry"])
///     .with_value(Value::Item("Banana"))
///     .with_filter(FilterMode::Contains)
///     .with_placeholder("Pick a fruit")
///     .build()
///     .unwrap();
///
/// assert_eq!(dropdown.selected_item(), Some(&"Banana"));
/// assert!(!dropdown.is_open());
/// ```
pub struct Dropdown<I: Item> {
    pub(super) data: Vec<I>,
    pub(super) value_field: Accessor<I>,
    pub(super) text_field: Accessor<I>,
    pub(super) group_by: Option<Accessor<I>>,
    pub(super) value: Controllable<Value<I>>,
    pub(super) open: Controllable<bool>,
    pub(super) search_term: Controllable<String>,
    pub(super) filter: FilterOptions<I>,
    pub(super) interaction: Interaction,
    pub(super) handlers: Handlers<I>,

    /// Shows a loading marker. Does not block interaction.
    pub busy: bool,
    /// Quiet period before type-ahead looks up the typed word.
    pub delay: Duration,
    /// Quiet period before focus changes are reported.
    pub focus_delay: Duration,
    /// Shown on the control when there is no value.
    pub placeholder: String,
    /// Width of the control line in cells. 0 sizes to content.
    pub width: usize,
    /// Maximum rows shown in the popup. 0 shows all.
    pub max_height: usize,
    /// User-facing strings.
    pub messages: Messages,
    /// Styles.
    pub styles: DropdownStyles,
    /// Key bindings.
    pub keymap: DropdownKeyMap,

    pub(super) filtered: Option<Vec<usize>>,
    pub(super) selected: Option<usize>,
    pub(super) focused_item: Option<usize>,
    pub(super) focused: bool,
    pub(super) focus_target: FocusTarget,
    pub(super) pending_focus: Option<bool>,
    pub(super) type_ahead: TypeAhead,
    pub(super) timers: Timers,
}

impl<I: Item + std::fmt::Debug> std::fmt::Debug for Dropdown<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("data", &self.data)
            .field("value", self.value.get())
            .field("open", self.open.get())
            .field("search_term", self.search_term.get())
            .field("selected", &self.selected)
            .field("focused_item", &self.focused_item)
            .field("focused", &self.focused)
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

/// Configures and validates a [`Dropdown`].
///
/// Fields set through `with_controlled_*` are owned by the host: the
/// dropdown only requests changes through the paired callback and the host
/// pushes the new value back with the matching `set_*` method.
pub struct DropdownBuilder<I: Item> {
    inner: Dropdown<I>,
}

impl<I: Item> DropdownBuilder<I> {
    /// How items are identified. Defaults to the item's `Display`.
    pub fn with_value_field(mut self, accessor: Accessor<I>) -> Self {
        self.inner.value_field = accessor;
        self
    }

    /// How items are displayed. Defaults to the item's `Display`.
    pub fn with_text_field(mut self, accessor: Accessor<I>) -> Self {
        self.inner.text_field = accessor;
        self
    }

    /// Groups the popup list by this accessor.
    pub fn with_group_by(mut self, accessor: Accessor<I>) -> Self {
        self.inner.group_by = Some(accessor);
        self
    }

    /// Initial value of a widget-owned value.
    pub fn with_value(mut self, value: Value<I>) -> Self {
        self.inner.value = Controllable::uncontrolled(value);
        self
    }

    /// Host-owned value.
    ///
    /// The dropdown never changes a controlled value itself. Commits are
    /// reported through `on_change` and only take effect once the host
    /// pushes the new value with [`Dropdown::set_value`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::{Dropdown, Value};
    /// use std::sync::mpsc;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// let mut dropdown = Dropdown::builder(vec!["Apple", "Banana", "Cherry"])
    ///     .with_controlled_value(Value::Item("Apple"))
    ///     .on_change(move |item| tx.send(*item).unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// dropdown.select(&"Cherry");
    /// assert_eq!(dropdown.value(), &Value::Item("Apple"));
    ///
    /// let requested = rx.recv().unwrap();
    /// dropdown.set_value(Value::Item(requested));
    /// assert_eq!(dropdown.value(), &Value::Item("Cherry"));
    /// ```
    pub fn with_controlled_value(mut self, value: Value<I>) -> Self {
        self.inner.value = Controllable::controlled(value);
        self
    }

    /// Initial open state of a widget-owned open flag.
    pub fn with_open(mut self, open: bool) -> Self {
        self.inner.open = Controllable::uncontrolled(open);
        self
    }

    /// Host-owned open flag.
    ///
    /// Open and close requests are reported through `on_toggle`; the host
    /// applies them with [`Dropdown::set_open`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::Dropdown;
    ///
    /// let mut dropdown = Dropdown::builder(vec!["Apple", "Banana"])
    ///     .with_controlled_open(false)
    ///     .on_toggle(|_open| {})
    ///     .build()
    ///     .unwrap();
    ///
    /// dropdown.open();
    /// assert!(!dropdown.is_open());
    /// dropdown.set_open(true);
    /// assert!(dropdown.is_open());
    /// ```
    pub fn with_controlled_open(mut self, open: bool) -> Self {
        self.inner.open = Controllable::controlled(open);
        self
    }

    /// Initial search term of a widget-owned filter input.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.inner.search_term = Controllable::uncontrolled(term.into());
        self
    }

    /// Host-owned search term.
    ///
    /// Edits of the filter input are reported through `on_search`; the
    /// host applies them with [`Dropdown::set_search_term`]. Building
    /// without `on_search` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::{Dropdown, DropdownError, FilterMode};
    ///
    /// let err = Dropdown::builder(vec!["Apple", "Banana"])
    ///     .with_filter(FilterMode::Contains)
    ///     .with_controlled_search_term("")
    ///     .build()
    ///     .unwrap_err();
    /// assert!(matches!(err, DropdownError::MissingHandler { handler: "on_search", .. }));
    /// ```
    pub fn with_controlled_search_term(mut self, term: impl Into<String>) -> Self {
        self.inner.search_term = Controllable::controlled(term.into());
        self
    }

    /// Filtering strategy. Filtering is off by default.
    pub fn with_filter(mut self, mode: FilterMode<I>) -> Self {
        self.inner.filter.mode = mode;
        self
    }

    /// Case-sensitive filtering.
    pub fn with_case_sensitive(mut self, on: bool) -> Self {
        self.inner.filter.case_sensitive = on;
        self
    }

    /// Minimum term length before the filter applies.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.inner.filter.min_length = len;
        self
    }

    /// Shows the loading marker.
    pub fn with_busy(mut self, busy: bool) -> Self {
        self.inner.busy = busy;
        self
    }

    /// Type-ahead delay. Defaults to 500ms.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.inner.delay = delay;
        self
    }

    /// Focus settle delay. Defaults to zero (next turn of the event loop).
    pub fn with_focus_delay(mut self, delay: Duration) -> Self {
        self.inner.focus_delay = delay;
        self
    }

    /// Disables the widget (`true`) or the listed item keys.
    pub fn with_disabled(mut self, disabled: impl Into<Restriction>) -> Self {
        self.inner.interaction.disabled = disabled.into();
        self
    }

    /// Makes the widget (`true`) or the listed item keys read-only.
    pub fn with_read_only(mut self, read_only: impl Into<Restriction>) -> Self {
        self.inner.interaction.read_only = read_only.into();
        self
    }

    /// Placeholder shown when there is no value.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.inner.placeholder = placeholder.into();
        self
    }

    /// Width of the control line.
    pub fn with_width(mut self, width: usize) -> Self {
        self.inner.width = width;
        self
    }

    /// Maximum rows in the popup.
    pub fn with_max_height(mut self, rows: usize) -> Self {
        self.inner.max_height = rows;
        self
    }

    /// User-facing strings.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.inner.messages = messages;
        self
    }

    /// Styles.
    pub fn with_styles(mut self, styles: DropdownStyles) -> Self {
        self.inner.styles = styles;
        self
    }

    /// Key bindings.
    pub fn with_keymap(mut self, keymap: DropdownKeyMap) -> Self {
        self.inner.keymap = keymap;
        self
    }

    /// Called when the value changes.
    pub fn on_change(mut self, f: impl FnMut(&I) + Send + 'static) -> Self {
        self.inner.handlers.on_change = Some(Box::new(f));
        self
    }

    /// Called when an item is picked from the list, even if it is already
    /// the value.
    pub fn on_select(mut self, f: impl FnMut(&I) + Send + 'static) -> Self {
        self.inner.handlers.on_select = Some(Box::new(f));
        self
    }

    /// Called with the requested open state.
    pub fn on_toggle(mut self, f: impl FnMut(bool) + Send + 'static) -> Self {
        self.inner.handlers.on_toggle = Some(Box::new(f));
        self
    }

    /// Called with the requested search term.
    pub fn on_search(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.inner.handlers.on_search = Some(Box::new(f));
        self
    }

    /// Called when the widget gains focus.
    pub fn on_focus(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.inner.handlers.on_focus = Some(Box::new(f));
        self
    }

    /// Called when the widget loses focus.
    pub fn on_blur(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.inner.handlers.on_blur = Some(Box::new(f));
        self
    }

    /// Called first for every key press. Returning [`KeyOutcome::Handled`]
    /// stops the dropdown from acting on it.
    pub fn on_key_down(mut self, f: impl FnMut(&KeyMsg) -> KeyOutcome + Send + 'static) -> Self {
        self.inner.handlers.on_key_down = Some(Box::new(f));
        self
    }

    /// Called for every click.
    pub fn on_click(mut self, f: impl FnMut(ClickTarget) + Send + 'static) -> Self {
        self.inner.handlers.on_click = Some(Box::new(f));
        self
    }

    /// Validates the configuration and derives the initial state.
    ///
    /// # Errors
    ///
    /// [`DropdownError::MissingHandler`] when a controlled field has no
    /// paired callback.
    pub fn build(self) -> Result<Dropdown<I>> {
        let d = &self.inner;
        let checks = [
            (d.value.is_controlled(), d.handlers.on_change.is_some(), "value", "on_change"),
            (d.open.is_controlled(), d.handlers.on_toggle.is_some(), "open", "on_toggle"),
            (
                d.search_term.is_controlled(),
                d.handlers.on_search.is_some(),
                "search_term",
                "on_search",
            ),
        ];
        if let Some((_, _, field, handler)) = checks
            .into_iter()
            .find(|(controlled, handled, _, _)| *controlled && !handled)
        {
            return Err(DropdownError::MissingHandler { field, handler });
        }

        let mut dropdown = self.inner;
        dropdown.label_open_binding();
        dropdown.sync();
        if dropdown.is_open() && dropdown.filter.mode.is_active() {
            dropdown.focus_target = FocusTarget::Filter;
        }
        Ok(dropdown)
    }
}

impl<I: Item> Dropdown<I> {
    /// Starts configuring a dropdown over `data`.
    ///
    /// Every field starts uncontrolled: the value is empty, the popup is
    /// closed, the search term is empty and filtering is off. Finish with
    /// [`DropdownBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::{Dropdown, FilterMode};
    ///
    /// let dropdown = Dropdown::builder(vec!["Apple", "Banana", "Cherry"])
    ///     .with_filter(FilterMode::StartsWith)
    ///     .with_search_term("b")
    ///     .with_open(true)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(dropdown.visible_items(), vec![&"Banana"]);
    /// ```
    pub fn builder(data: Vec<I>) -> DropdownBuilder<I> {
        DropdownBuilder {
            inner: Self {
                data,
                value_field: Accessor::Display,
                text_field: Accessor::Display,
                group_by: None,
                value: Controllable::uncontrolled(Value::Empty),
                open: Controllable::uncontrolled(false),
                search_term: Controllable::uncontrolled(String::new()),
                filter: FilterOptions::default(),
                interaction: Interaction::default(),
                handlers: Handlers::default(),
                busy: false,
                delay: DEFAULT_DELAY,
                focus_delay: Duration::ZERO,
                placeholder: String::new(),
                width: 0,
                max_height: 0,
                messages: Messages::default(),
                styles: DropdownStyles::default(),
                keymap: DropdownKeyMap::default(),
                filtered: None,
                selected: None,
                focused_item: None,
                focused: false,
                focus_target: FocusTarget::Control,
                pending_focus: None,
                type_ahead: TypeAhead::new(),
                timers: Timers::new(),
            },
        }
    }

    /// An uncontrolled dropdown over `data` with default settings.
    pub fn new(data: Vec<I>) -> Self {
        let mut dropdown = Self::builder(data).inner;
        dropdown.label_open_binding();
        dropdown.sync();
        dropdown
    }

    // --- host property updates --------------------------------------------

    /// Replaces the data.
    pub fn set_data(&mut self, data: Vec<I>) {
        self.data = data;
        self.sync();
    }

    /// Pushes a new value (the host's side of a controlled value).
    ///
    /// Works for uncontrolled values too. A value that is not part of the
    /// data leaves nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::{Dropdown, Value};
    ///
    /// let mut dropdown = Dropdown::new(vec!["Apple", "Banana"]);
    /// dropdown.set_value(Value::Key("Banana".into()));
    /// assert_eq!(dropdown.selected_item(), Some(&"Banana"));
    ///
    /// dropdown.set_value(Value::Key("Mango".into()));
    /// assert_eq!(dropdown.selected_item(), None);
    /// ```
    pub fn set_value(&mut self, value: Value<I>) {
        if self.value.set(value) {
            self.sync();
        }
    }

    /// Pushes a new open state (the host's side of a controlled open flag).
    pub fn set_open(&mut self, open: bool) {
        if self.open.set(open) {
            self.open_changed();
        }
    }

    /// Pushes a new search term (the host's side of a controlled term).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if self.search_term.set(term.into()) {
            self.sync();
        }
    }

    /// Changes the filtering strategy. Turning it off discards the
    /// filtered view.
    pub fn set_filter(&mut self, mode: FilterMode<I>) {
        self.filter.mode = mode;
        if !self.filter.mode.is_active() && self.focus_target == FocusTarget::Filter {
            self.focus_target = FocusTarget::Control;
        }
        self.sync();
    }

    /// Disables the widget (`true`) or the listed item keys.
    pub fn set_disabled(&mut self, disabled: impl Into<Restriction>) {
        self.interaction.disabled = disabled.into();
    }

    /// Makes the widget (`true`) or the listed item keys read-only.
    pub fn set_read_only(&mut self, read_only: impl Into<Restriction>) {
        self.interaction.read_only = read_only.into();
    }

    /// Cancels pending timers. Call when the widget is torn down.
    pub fn dispose(&mut self) {
        self.timers.dispose();
        self.type_ahead.clear();
        self.pending_focus = None;
    }

    // --- queries ----------------------------------------------------------

    /// The data.
    pub fn data(&self) -> &[I] {
        &self.data
    }

    /// The committed value.
    pub fn value(&self) -> &Value<I> {
        self.value.get()
    }

    /// The committed value resolved against the data.
    pub fn value_item(&self) -> Option<I> {
        data_item(&self.data, self.value.get(), &self.value_field)
    }

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// The filter input text.
    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    /// The selected item, when it is part of the relevant view.
    pub fn selected_item(&self) -> Option<&I> {
        self.selected.and_then(|idx| self.data.get(idx))
    }

    /// The item highlighted in the popup.
    pub fn focused_item(&self) -> Option<&I> {
        self.focused_item.and_then(|idx| self.data.get(idx))
    }

    /// Data indices shown in the popup: the filtered view when filtering is
    /// active, otherwise everything.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.filtered
            .clone()
            .unwrap_or_else(|| (0..self.data.len()).collect())
    }

    /// Items shown in the popup, in data order.
    pub fn visible_items(&self) -> Vec<&I> {
        self.visible_indices()
            .into_iter()
            .filter_map(|idx| self.data.get(idx))
            .collect()
    }

    /// Whether the popup is currently showing a filtered view.
    pub fn is_filtering(&self) -> bool {
        self.filtered.is_some()
    }

    /// Which part of the widget holds keyboard focus.
    pub fn focus_target(&self) -> FocusTarget {
        self.focus_target
    }

    /// Whether a type-ahead lookup is pending.
    pub fn is_searching(&self) -> bool {
        !self.type_ahead.word().is_empty()
    }

    // --- state requests ---------------------------------------------------

    /// Requests the popup to open.
    pub fn open(&mut self) {
        self.request_open(true);
    }

    /// Requests the popup to close.
    pub fn close(&mut self) {
        self.request_open(false);
    }

    /// Opens when closed, closes when open.
    pub fn toggle(&mut self) {
        let open = self.is_open();
        self.request_open(!open);
    }

    /// Picks `item` as if it were chosen from the list.
    ///
    /// Items that are not part of the data are ignored.
    pub fn select(&mut self, item: &I) {
        let value = Value::Item(item.clone());
        if let Some(idx) = data_index_of(&self.data, &value, &self.value_field) {
            self.select_index(idx);
        }
    }

    pub(super) fn request_open(&mut self, open: bool) {
        if self.is_open() == open {
            return;
        }
        tracing::debug!(target: "bubbletea_dropdown", open, "toggle requested");
        self.handlers.toggle(open);
        if self.open.request(open) {
            self.open_changed();
        }
    }

    pub(super) fn close_with_focus(&mut self) {
        self.close();
        self.focus_target = FocusTarget::Control;
    }

    pub(super) fn request_search(&mut self, term: String) {
        if *self.search_term.get() == term {
            return;
        }
        self.handlers.search(&term);
        if self.search_term.request(term) {
            self.sync();
        }
    }

    /// Commits the item at data index `idx` as the value.
    pub(super) fn change(&mut self, idx: usize) {
        let Some(item) = self.data.get(idx).cloned() else {
            return;
        };
        if !self.interaction.can_commit(&item, &self.value_field)
            || is_same_value(&item, self.value.get(), &self.value_field)
        {
            return;
        }
        tracing::debug!(target: "bubbletea_dropdown", index = idx, "value change requested");
        self.handlers.change(&item);
        if self.value.request(Value::Item(item)) {
            self.sync();
        }
        self.request_search(String::new());
        self.close();
    }

    /// Picks the item at data index `idx` from the list.
    pub(super) fn select_index(&mut self, idx: usize) {
        let Some(item) = self.data.get(idx).cloned() else {
            return;
        };
        if !self.interaction.can_commit(&item, &self.value_field) {
            return;
        }
        self.close();
        self.handlers.select(&item);
        self.change(idx);
        self.request_search(String::new());
        self.focus_target = FocusTarget::Control;
    }

    fn label_open_binding(&mut self) {
        let label = self.messages.open.clone();
        self.keymap.open.set_help_desc(label);
    }

    fn open_changed(&mut self) {
        self.focus_target = if self.is_open() && self.filter.mode.is_active() {
            FocusTarget::Filter
        } else {
            FocusTarget::Control
        };
        self.sync();
    }

    /// Recomputes derived state from the current props.
    pub(super) fn sync(&mut self) {
        let all: Vec<usize> = (0..self.data.len()).collect();
        // The filtered view only applies while the popup shows it.
        let shown = (self.filter.mode.is_active() && self.is_open()).then(|| {
            filter(
                &self.data,
                &all,
                self.search_term.get(),
                &self.text_field,
                &self.filter,
            )
        });
        let relevant = shown.as_deref().unwrap_or(all.as_slice());

        let idx = data_index_of(&self.data, self.value.get(), &self.value_field);
        self.selected = idx.filter(|i| relevant.contains(i));
        self.focused_item = self.selected.or_else(|| self.list(relevant).first());
        self.filtered = shown;
    }

    /// Navigator over `view`, grouped when a group accessor is set.
    pub(super) fn list<'a>(&'a self, view: &[usize]) -> ListView<'a, I> {
        ListView::new(&self.data, view, &self.text_field, self.group_by.as_ref())
    }
}
