//! Add-task input field widget.
//!
//! A one-line bordered text input. When focused it shows a cursor
//! indicator and a highlighted border; submission and editing are
//! handled by the key dispatch in [`crate::tui::app`], this widget only
//! paints the current buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::Theme;

/// Height of the input field in rows (content line plus borders).
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Widget for rendering the add-task input.
#[derive(Debug)]
pub struct InputFieldWidget<'a> {
    /// Current contents of the input buffer.
    value: &'a str,
    /// Whether the field has keyboard focus.
    focused: bool,
    /// Reference to the theme for styling.
    theme: &'a Theme,
}

impl<'a> InputFieldWidget<'a> {
    /// Creates a new `InputFieldWidget`.
    #[must_use]
    pub fn new(value: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            value,
            focused,
            theme,
        }
    }
}

impl Widget for InputFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let text_style = if self.focused {
            self.theme.input_focused
        } else {
            self.theme.input_unfocused
        };

        // Trailing underscore stands in for the cursor while focused.
        let text = if self.focused {
            format!("{}_", self.value)
        } else {
            self.value.to_string()
        };

        // Keep the tail visible when the buffer outgrows the field.
        let inner_width = area.width.saturating_sub(2) as usize;
        let visible: String = if text.chars().count() > inner_width {
            text.chars()
                .skip(text.chars().count() - inner_width)
                .collect()
        } else {
            text
        };

        let input = Paragraph::new(visible).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Add task ")
                .title_style(self.theme.title),
        );
        input.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn renders_value_and_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let widget = InputFieldWidget::new("buy milk", false, &theme);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Add task"));
        assert!(content.contains("buy milk"));
    }

    #[test]
    fn focused_field_shows_cursor_indicator() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let widget = InputFieldWidget::new("abc", true, &theme);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        assert!(buffer_content(&terminal).contains("abc_"));
    }

    #[test]
    fn long_value_keeps_the_tail_visible() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let long = "a very long task description indeed";

        terminal
            .draw(|f| {
                let widget = InputFieldWidget::new(long, true, &theme);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        // The end of the buffer (with cursor) is what the user sees.
        assert!(buffer_content(&terminal).contains("indeed_"));
    }

    #[test]
    fn zero_area_is_a_noop() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let widget = InputFieldWidget::new("x", false, &theme);
                f.render_widget(widget, Rect::new(0, 0, 0, 0));
            })
            .unwrap();
    }
}
