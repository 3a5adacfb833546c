//! Validated text input, its error tooltip, and accessibility attributes.
//!
//! A field is described by [`InputProps`] and drawn from a [`QueryState`].
//! When the state carries an error the field shows an error border, the
//! tooltip above it shows the message, and [`AriaAttributes`] report the
//! field as invalid and described by the tooltip.

use super::constants::TOOLTIP_HEIGHT;
use super::text::display_width;
use super::theme::Theme;
use crate::model::{FormId, QueryState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

// ===== InputProps =====

/// Field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    /// Header field.
    #[default]
    Lg,
    /// Hero field.
    Xl,
}

/// Static description of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// Element id; also the prefix of the error region id.
    pub id: String,
    /// Accessible name.
    pub label: String,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Presentation size.
    pub size: InputSize,
    /// Whether the field is marked required.
    pub required: bool,
    /// Id of an element describing the field while it is valid.
    pub described_by: Option<String>,
}

impl InputProps {
    /// Props for field `id` with empty label and placeholder.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            placeholder: String::new(),
            size: InputSize::default(),
            required: false,
            described_by: None,
        }
    }

    /// Search field defaults: labelled and described as search.
    pub fn search(id: impl Into<String>, size: InputSize) -> Self {
        Self::new(id)
            .label("Search")
            .placeholder("Search")
            .size(size)
            .described_by("search-help")
    }

    /// Set the accessible name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the size.
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the describing element id used while valid.
    pub fn described_by(mut self, id: impl Into<String>) -> Self {
        self.described_by = Some(id.into());
        self
    }

    /// Id of the error tooltip region, e.g. `header-search-input-error`.
    pub fn error_region_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// Accessibility attributes for the field in `state`.
    pub fn aria(&self, state: &QueryState) -> AriaAttributes {
        let invalid = state.is_invalid();
        AriaAttributes {
            label: self.label.clone(),
            invalid,
            described_by: if invalid {
                Some(self.error_region_id())
            } else {
                self.described_by.clone()
            },
            required: self.required,
        }
    }
}

/// Props for the search field of `form`.
pub fn search_props(form: FormId) -> InputProps {
    let size = match form {
        FormId::Header => InputSize::Lg,
        FormId::Hero => InputSize::Xl,
    };
    InputProps::search(form.input_id(), size)
}

/// Text assistive technology announces for the field, if any.
///
/// The error message while invalid, nothing otherwise.
pub fn accessible_description(state: &QueryState) -> Option<&'static str> {
    state.error().map(|kind| kind.message())
}

// ===== AriaAttributes =====

/// Accessibility attributes of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaAttributes {
    /// `aria-label`.
    pub label: String,
    /// `aria-invalid`.
    pub invalid: bool,
    /// `aria-describedby`.
    pub described_by: Option<String>,
    /// `aria-required`.
    pub required: bool,
}

impl AriaAttributes {
    /// Attribute name/value pairs in document order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("aria-label", self.label.clone()),
            ("aria-invalid", self.invalid.to_string()),
        ];
        if let Some(id) = &self.described_by {
            pairs.push(("aria-describedby", id.clone()));
        }
        pairs.push(("aria-required", self.required.to_string()));
        pairs
    }

    /// Value of the attribute `name`, if present.
    pub fn get(&self, name: &str) -> Option<String> {
        self.pairs()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

// ===== ValidatedTextInput =====

/// Bordered single-line text field.
pub struct ValidatedTextInput<'a> {
    props: &'a InputProps,
    state: &'a QueryState,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ValidatedTextInput<'a> {
    /// Field widget showing `state` with `props`.
    pub fn new(props: &'a InputProps, state: &'a QueryState, theme: &'a Theme) -> Self {
        Self {
            props,
            state,
            cursor: 0,
            focused: false,
            theme,
        }
    }

    /// Cursor position in chars. Only drawn when focused.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Draw the focus border and cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn border_style(&self) -> Style {
        let palette = self.theme.palette();
        if self.state.is_invalid() {
            self.theme.fg(palette.error)
        } else if self.focused {
            self.theme.fg(palette.primary)
        } else {
            match self.props.size {
                InputSize::Lg => self.theme.fg(palette.border),
                InputSize::Xl => self.theme.fg(palette.black),
            }
        }
    }

    fn text_line(&self, width: u16) -> Line<'static> {
        let value = self.state.value();
        if value.is_empty() {
            let placeholder = Span::styled(self.props.placeholder.clone(), self.theme.placeholder());
            if self.focused {
                return Line::from(vec![Span::styled(" ", self.theme.cursor()), placeholder]);
            }
            return Line::from(placeholder);
        }

        let chars: Vec<char> = value.chars().collect();
        if !self.focused {
            return Line::from(value.to_string());
        }

        let cursor = self.cursor.min(chars.len());
        let start = visible_start(&chars, cursor, width);
        let before: String = chars[start..cursor].iter().collect();
        let (cursor_cell, after) = match chars.get(cursor) {
            Some(ch) => (ch.to_string(), chars[cursor + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_cell, self.theme.cursor()),
            Span::raw(after),
        ])
    }
}

/// First char shown so the cursor cell fits in `width` columns.
fn visible_start(chars: &[char], cursor: usize, width: u16) -> usize {
    let width = usize::from(width.max(1));
    let columns = |range: &[char]| -> usize { range.iter().map(|c| c.width().unwrap_or(0)).sum() };
    let mut start = 0;
    // One column is kept for the cursor cell
    while start < cursor && columns(&chars[start..cursor]) + 1 > width {
        start += 1;
    }
    start
}

impl Widget for ValidatedTextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = match self.props.size {
            InputSize::Lg => BorderType::Rounded,
            InputSize::Xl => BorderType::Plain,
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(self.border_style())
            .style(self.theme.fg_bg(self.theme.palette().black, self.theme.palette().white));

        // One column of inner padding on each side
        let text_width = area.width.saturating_sub(4);
        let line = self.text_line(text_width);
        Paragraph::new(line)
            .block(block.padding(Padding::horizontal(1)))
            .render(area, buf);
    }
}

// ===== ErrorTooltip =====

/// Error message shown above an invalid field, with an arrow pointing at it.
pub struct ErrorTooltip<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorTooltip<'a> {
    /// Tooltip showing `message`.
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    /// Where the tooltip for a field at `field` goes, kept inside `bounds`.
    ///
    /// Centered over the field in the `TOOLTIP_HEIGHT` rows above it.
    pub fn area(field: Rect, message: &str, bounds: Rect) -> Rect {
        let width = display_width(message)
            .saturating_add(2)
            .min(bounds.width);
        let center = field.x + field.width / 2;
        let max_x = bounds.right().saturating_sub(width);
        let x = center
            .saturating_sub(width / 2)
            .clamp(bounds.x, max_x.max(bounds.x));
        let y = field.y.saturating_sub(TOOLTIP_HEIGHT).max(bounds.y);
        let height = field.y.saturating_sub(y).min(TOOLTIP_HEIGHT);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ErrorTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let body = Rect { height: 1, ..area };
        Clear.render(body, buf);
        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .style(self.theme.tooltip())
            .render(body, buf);

        if area.height > 1 {
            let arrow = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            Paragraph::new("▼")
                .alignment(Alignment::Center)
                .style(self.theme.fg(self.theme.palette().error))
                .render(arrow, buf);
        }
    }
}

/// Draw a field and, when its state is invalid, the tooltip above it.
///
/// `bounds` limits where the tooltip may be placed.
pub fn render_field(input: ValidatedTextInput<'_>, field: Rect, bounds: Rect, buf: &mut Buffer) {
    let message = accessible_description(input.state);
    let theme = input.theme;
    input.render(field, buf);

    if let Some(message) = message {
        let area = ErrorTooltip::area(field, message, bounds);
        ErrorTooltip::new(message, theme).render(area, buf);
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
