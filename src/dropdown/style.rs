//! Styles for the dropdown.
//!
//! All defaults use `AdaptiveColor` so they read well on light and dark
//! terminals.

use lipgloss_extras::prelude::*;

/// Caret shown after the control's value.
pub const CARET: &str = "▾";

/// Marker shown while `busy` is set.
pub const BUSY: &str = "…";

/// Prefix of the focused row in the popup.
pub const POINTER: &str = "›";

/// Styling for every part of the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyles {
    /// The control line.
    pub control: Style,
    /// The control line while focused.
    pub control_focused: Style,
    /// The control line while disabled.
    pub control_disabled: Style,
    /// Placeholder text when there is no value.
    pub placeholder: Style,
    /// The caret and busy marker.
    pub caret: Style,
    /// Prompt in front of the filter input.
    pub filter_prompt: Style,
    /// Text typed into the filter input.
    pub filter_text: Style,
    /// Group headers.
    pub group_header: Style,
    /// Regular rows.
    pub item: Style,
    /// The focused row.
    pub focused_item: Style,
    /// The row holding the committed value.
    pub selected_item: Style,
    /// Rows that cannot be committed.
    pub disabled_item: Style,
    /// Empty list / empty filter message.
    pub empty: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            control: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            control_focused: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#ffffff",
                })
                .bold(true),
            control_disabled: Style::new().foreground(subdued.clone()),
            placeholder: Style::new().foreground(subdued.clone()),
            caret: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_text: Style::new(),
            group_header: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#847A85",
                    Dark: "#979797",
                })
                .bold(true),
            item: Style::new().padding_left(2),
            focused_item: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            selected_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#04B575",
                })
                .padding_left(2),
            disabled_item: Style::new().foreground(subdued).padding_left(2),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
