//! Statistics footer widget.
//!
//! Shows the derived chart numbers — done count, todo count, and the
//! completion percentage — in a single bordered line beneath the chart.
//! Narrow terminals degrade gracefully: separators shrink, then labels
//! abbreviate, and at the minimum only the percentage survives.
//!
//! # Layout
//!
//! ```text
//! ┌─ Summary ────────────────────────────────────────┐
//! │ Done: 2  |  Todo: 3  |  40%                      │
//! └──────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tasks::ChartData;
use crate::tui::app::Theme;

/// Label for the completed count.
const DONE_LABEL: &str = "Done: ";

/// Label for the remaining count.
const TODO_LABEL: &str = "Todo: ";

/// Separator between statistics.
const SEPARATOR: &str = "  |  ";

/// Height of the stats footer widget in rows (content line plus borders).
pub const STATS_FOOTER_HEIGHT: u16 = 3;

/// Widget for displaying the completion statistics.
///
/// Stateless; the chart data is recomputed from the store each frame
/// and passed in by value.
#[derive(Debug)]
pub struct StatsFooterWidget<'a> {
    data: ChartData,
    theme: &'a Theme,
}

impl<'a> StatsFooterWidget<'a> {
    /// Creates a new `StatsFooterWidget`.
    #[must_use]
    pub fn new(data: ChartData, theme: &'a Theme) -> Self {
        Self { data, theme }
    }

    /// Builds the statistics line, degrading with the available width.
    fn stats_line(&self, available_width: usize) -> Line<'a> {
        let done_value = self.data.completed_count.to_string();
        let todo_value = self.data.uncompleted_count.to_string();
        let percent_value = format!("{}%", self.data.percentage);

        let done_segment_len = DONE_LABEL.len() + done_value.len();
        let todo_segment_len = TODO_LABEL.len() + todo_value.len();

        let full_width_needed = done_segment_len
            + SEPARATOR.len()
            + todo_segment_len
            + SEPARATOR.len()
            + percent_value.len();

        if available_width >= full_width_needed {
            return Line::from(vec![
                Span::styled(DONE_LABEL, self.theme.text_muted),
                Span::styled(done_value, self.theme.stat_done),
                Span::styled(SEPARATOR, self.theme.text_muted),
                Span::styled(TODO_LABEL, self.theme.text_muted),
                Span::styled(todo_value, self.theme.stat_todo),
                Span::styled(SEPARATOR, self.theme.text_muted),
                Span::styled(percent_value, self.theme.stat_percent),
            ]);
        }

        // Abbreviated labels with single-space separators.
        let abbrev_width =
            2 + done_value.len() + 1 + 2 + todo_value.len() + 1 + percent_value.len();
        if available_width >= abbrev_width {
            return Line::from(vec![
                Span::styled("D:", self.theme.text_muted),
                Span::styled(done_value, self.theme.stat_done),
                Span::styled(" ", self.theme.text_muted),
                Span::styled("T:", self.theme.text_muted),
                Span::styled(todo_value, self.theme.stat_todo),
                Span::styled(" ", self.theme.text_muted),
                Span::styled(percent_value, self.theme.stat_percent),
            ]);
        }

        // Minimal: the percentage is the headline number.
        Line::from(vec![Span::styled(percent_value, self.theme.stat_percent)])
    }
}

impl Widget for StatsFooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(" Summary ")
            .title_style(self.theme.title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = self.stats_line(inner.width as usize);
        Paragraph::new(line).render(inner, buf);
    }
}
