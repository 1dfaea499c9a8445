//! Input handling: keys, clicks, focus and timer firings.

use super::keys::KeyAction;
use super::model::{Dropdown, FOCUS_TIMER};
use super::types::{BlurMsg, ClickMsg, ClickTarget, FocusMsg, FocusTarget, KeyOutcome};
use crate::accessor::Item;
use crate::debounce::TimeoutMsg;
use crate::list::{ListView, Navigator};
use crate::typeahead::SEARCH_TIMER;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

impl<I: Item> Dropdown<I> {
    /// Handles a message.
    ///
    /// Understands `KeyMsg`, [`FocusMsg`], [`BlurMsg`], [`ClickMsg`] and the
    /// dropdown's own [`TimeoutMsg`]s; everything else is ignored. The
    /// returned command arms a debounce timer and must be handed back to
    /// the runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_dropdown::{ClickMsg, ClickTarget, Dropdown, Value};
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut dropdown = Dropdown::new(vec!["Apple", "Banana", "Cherry"]);
    ///
    /// dropdown.update(Box::new(ClickMsg { target: ClickTarget::Control }) as Msg);
    /// assert!(dropdown.is_open());
    ///
    /// let enter = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
    /// dropdown.update(Box::new(enter) as Msg);
    /// assert_eq!(dropdown.value(), &Value::Item("Apple"));
    ///
    /// // typing while closed arms the type-ahead timer
    /// let c = KeyMsg { key: KeyCode::Char('c'), modifiers: KeyModifiers::NONE };
    /// assert!(dropdown.update(Box::new(c) as Msg).is_some());
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(timeout) = msg.downcast_ref::<TimeoutMsg>() {
            self.handle_timeout(timeout);
            return None;
        }
        if let Some(click) = msg.downcast_ref::<ClickMsg>() {
            self.handle_click(click.target);
            return None;
        }
        if msg.downcast_ref::<FocusMsg>().is_some() {
            return self.handle_focus(true);
        }
        if msg.downcast_ref::<BlurMsg>().is_some() {
            return self.handle_focus(false);
        }
        None
    }

    pub(super) fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.interaction.enabled() {
            return None;
        }
        if self.handlers.key_down(key) == KeyOutcome::Handled {
            return None;
        }

        let open = self.is_open();
        let view = self.visible_indices();

        match self.keymap.action(key) {
            Some(KeyAction::Last) => {
                let last = self.list(&view).last();
                self.step_to(&view, last, false);
            }
            Some(KeyAction::First) => {
                let first = self.list(&view).first();
                self.step_to(&view, first, true);
            }
            Some(KeyAction::Cancel) if open => self.close_with_focus(),
            Some(KeyAction::Select) if open => {
                if let Some(idx) = self.focused_item {
                    self.select_index(idx);
                }
            }
            Some(KeyAction::Open) => self.open(),
            Some(KeyAction::Close) => self.close_with_focus(),
            Some(KeyAction::Next) => {
                let anchor = if open { self.focused_item } else { self.selected };
                let next = self.list(&view).next(anchor, None);
                self.step_to(&view, next, true);
            }
            Some(KeyAction::Prev) => {
                let anchor = if open { self.focused_item } else { self.selected };
                let prev = self.list(&view).prev(anchor);
                self.step_to(&view, prev, false);
            }
            _ => return self.handle_text(key),
        }
        None
    }

    /// Keys without a binding: filter input editing, space-to-select and
    /// type-ahead.
    fn handle_text(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        let open = self.is_open();

        if open && self.filter.mode.is_active() {
            self.edit_filter(key);
            return None;
        }

        match key.key {
            KeyCode::Char(' ') if open => {
                if let Some(idx) = self.focused_item {
                    self.select_index(idx);
                }
                None
            }
            KeyCode::Char(c) if !c.is_control() => {
                Some(self.type_ahead.push(c, &mut self.timers, self.delay))
            }
            _ => None,
        }
    }

    fn edit_filter(&mut self, key: &KeyMsg) {
        let mut term = self.search_term().to_string();
        match key.key {
            KeyCode::Char(c) if !c.is_control() => term.push(c),
            KeyCode::Backspace => {
                let Some((cut, _)) = term.grapheme_indices(true).next_back() else {
                    return;
                };
                term.truncate(cut);
            }
            _ => return,
        }
        self.focus_target = FocusTarget::Filter;
        self.request_search(term);
    }

    /// Keyboard navigation to `target`. While closed, items that can not
    /// be committed are stepped over in the direction of travel.
    fn step_to(&mut self, view: &[usize], target: Option<usize>, forward: bool) {
        let target = if self.is_open() {
            target
        } else {
            self.committable(view, target, forward)
        };
        self.focus_or_commit(target);
    }

    fn committable(
        &self,
        view: &[usize],
        mut candidate: Option<usize>,
        forward: bool,
    ) -> Option<usize> {
        let list = self.list(view);
        while let Some(idx) = candidate {
            let item = self.data.get(idx)?;
            if self.interaction.can_commit(item, &self.value_field) {
                return Some(idx);
            }
            candidate = if forward {
                list.next(Some(idx), None)
            } else {
                list.prev(Some(idx))
            };
        }
        None
    }

    /// Moves the highlight when open, commits the value when closed.
    /// `None` leaves everything as is.
    fn focus_or_commit(&mut self, target: Option<usize>) {
        let Some(idx) = target else {
            return;
        };
        if self.is_open() {
            self.focused_item = Some(idx);
        } else {
            self.change(idx);
        }
    }

    pub(super) fn handle_click(&mut self, target: ClickTarget) {
        if !self.interaction.enabled() {
            return;
        }
        let filtering = self.filter.mode.is_active();
        let open = self.is_open();

        match target {
            ClickTarget::Item(idx) => {
                if open && self.visible_indices().contains(&idx) {
                    self.select_index(idx);
                }
            }
            ClickTarget::Filter if filtering && open => {}
            _ if !filtering || !open => self.toggle(),
            _ => self.close(),
        }
        self.handlers.click(target);
    }

    pub(super) fn handle_focus(&mut self, focused: bool) -> Option<Cmd> {
        if !self.interaction.enabled() {
            return None;
        }
        self.pending_focus = Some(focused);
        Some(self.timers.arm(FOCUS_TIMER, self.focus_delay))
    }

    pub(super) fn settle_focus(&mut self) {
        let Some(focused) = self.pending_focus.take() else {
            return;
        };
        if !focused {
            self.close();
        }
        if focused != self.focused {
            tracing::debug!(target: "bubbletea_dropdown", focused, "focus changed");
            self.focused = focused;
            self.handlers.focus(focused);
        }
    }

    fn handle_timeout(&mut self, timeout: &TimeoutMsg) {
        match self.timers.accept(timeout) {
            Some(FOCUS_TIMER) => self.settle_focus(),
            Some(SEARCH_TIMER) => self.finish_search(),
            _ => {}
        }
    }

    fn finish_search(&mut self) {
        let open = self.is_open();
        let anchor = if open { self.focused_item } else { self.selected };
        let view = self.visible_indices();
        let list = ListView::new(&self.data, &view, &self.text_field, self.group_by.as_ref());
        let found = self.type_ahead.resolve(&list, anchor);

        tracing::trace!(target: "bubbletea_dropdown", ?found, "type-ahead resolved");
        self.focus_or_commit(found);
    }
}
