//! Terminal rendering.

use super::model::Dropdown;
use super::style::{BUSY, CARET, POINTER};
use super::types::FocusTarget;
use crate::accessor::{data_text, Item};
use crate::list::{Group, Navigator};
use unicode_width::UnicodeWidthStr;

/// Visible width of a possibly styled string.
fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
}

impl<I: Item> Dropdown<I> {
    /// Renders the control line and, when open, the popup below it.
    pub fn view(&self) -> String {
        let mut lines = vec![self.view_control()];
        if self.is_open() {
            if self.filter.mode.is_active() {
                lines.push(self.view_filter());
            }
            lines.extend(self.view_rows());
        }
        lines.join("\n")
    }

    fn view_control(&self) -> String {
        let styles = &self.styles;
        let text = match self.value_item() {
            Some(item) => {
                let style = if !self.interaction.enabled() {
                    &styles.control_disabled
                } else if self.focused && self.focus_target == FocusTarget::Control {
                    &styles.control_focused
                } else {
                    &styles.control
                };
                style.render(&data_text(&item, &self.text_field))
            }
            None => styles.placeholder.render(&self.placeholder),
        };

        let mut marker = CARET.to_string();
        if self.busy {
            marker = format!("{BUSY} {CARET}");
        }
        let marker = styles.caret.render(&marker);

        let used = visible_width(&text) + visible_width(&marker) + 1;
        let pad = self.width.saturating_sub(used);
        format!("{text}{} {marker}", " ".repeat(pad))
    }

    fn view_filter(&self) -> String {
        let term = self.search_term();
        let body = if term.is_empty() {
            self.styles.placeholder.render(&self.messages.filter_placeholder)
        } else {
            self.styles.filter_text.render(term)
        };
        format!("{}{}", self.styles.filter_prompt.render("> "), body)
    }

    fn view_rows(&self) -> Vec<String> {
        let view = self.visible_indices();
        if view.is_empty() {
            let msg = if self.data.is_empty() {
                &self.messages.empty_list
            } else {
                &self.messages.empty_filter
            };
            return vec![self.styles.empty.render(msg)];
        }

        let list = self.list(&view);
        let rows: Vec<String> = match list.groups() {
            Some(groups) => groups.iter().flat_map(|g| self.view_group(g)).collect(),
            None => list.order().iter().map(|&idx| self.view_item(idx)).collect(),
        };
        self.window(rows)
    }

    fn view_group(&self, group: &Group) -> Vec<String> {
        let mut rows = vec![self.styles.group_header.render(&group.name)];
        rows.extend(group.items.iter().map(|&idx| self.view_item(idx)));
        rows
    }

    fn view_item(&self, idx: usize) -> String {
        let Some(item) = self.data.get(idx) else {
            return String::new();
        };
        let text = data_text(item, &self.text_field);
        if Some(idx) == self.focused_item {
            let style = &self.styles.focused_item;
            return format!("{} {}", style.render(POINTER), style.render(&text));
        }
        if self.interaction.disabled.covers(item, &self.value_field) {
            self.styles.disabled_item.render(&text)
        } else if Some(idx) == self.selected {
            self.styles.selected_item.render(&text)
        } else {
            self.styles.item.render(&text)
        }
    }

    /// Keeps at most `max_height` rows, scrolled so the focused row shows.
    fn window(&self, rows: Vec<String>) -> Vec<String> {
        if self.max_height == 0 || rows.len() <= self.max_height {
            return rows;
        }
        let focused_row = rows
            .iter()
            .position(|row| strip_ansi_escapes::strip_str(row).starts_with(POINTER))
            .unwrap_or(0);
        let start = focused_row
            .saturating_sub(self.max_height - 1)
            .min(rows.len() - self.max_height);
        rows.into_iter().skip(start).take(self.max_height).collect()
    }
}
