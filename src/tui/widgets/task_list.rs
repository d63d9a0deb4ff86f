//! Task list widget.
//!
//! Renders the task store as checkbox rows, rebuilt in full from the
//! sorted store on every draw — the buffer is cleared by ratatui each
//! frame, so whatever the store says is exactly what appears. Each row
//! shows a checkbox marker (checked iff completed) and the task text;
//! completed rows carry the dimmed/crossed-out "completed" style.
//!
//! # Layout
//!
//! ```text
//! ┌─ Tasks ───────────────────────┐
//! │ [ ] water the plants          │
//! │ [ ] call the bank             │
//! │ [✓] buy milk                  │
//! └───────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tasks::TaskList;
use crate::tui::app::{Symbols, Theme};

/// Widget for rendering the task list.
///
/// Stateless: the store, selection, and styling are borrowed per frame.
/// When the list is taller than its area the visible window slides so
/// the selected row stays in view.
#[derive(Debug)]
pub struct TaskListWidget<'a> {
    tasks: &'a TaskList,
    /// Selected row index in the sorted order.
    selected: usize,
    /// Whether the list has keyboard focus.
    focused: bool,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> TaskListWidget<'a> {
    /// Creates a new `TaskListWidget`.
    #[must_use]
    pub fn new(
        tasks: &'a TaskList,
        selected: usize,
        focused: bool,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            tasks,
            selected,
            focused,
            theme,
            symbols,
        }
    }

    /// First visible row, chosen so the selection stays inside the window.
    fn window_start(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 || self.tasks.len() <= visible_rows {
            return 0;
        }
        let last_start = self.tasks.len() - visible_rows;
        self.selected
            .saturating_sub(visible_rows / 2)
            .min(last_start)
    }

    fn format_row(&self, index: usize, max_width: usize) -> Line<'a> {
        let Some(task) = self.tasks.get(index) else {
            return Line::default();
        };

        let mark = if task.completed {
            self.symbols.checked
        } else {
            self.symbols.unchecked
        };

        let mut row_style = if task.completed {
            self.theme.task_completed
        } else {
            self.theme.task_pending
        };
        if self.focused && index == self.selected {
            row_style = row_style.patch(self.theme.selection);
        }

        // "[x] " prefix is 4 columns.
        let available = max_width.saturating_sub(4);
        let text: String = if task.text.chars().count() > available {
            task.text.chars().take(available.saturating_sub(1)).collect::<String>() + "…"
        } else {
            task.text.clone()
        };

        Line::from(vec![
            Span::styled(format!("[{mark}] "), row_style),
            Span::styled(text, row_style),
        ])
    }
}

impl Widget for TaskListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Tasks ")
            .title_style(self.theme.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.tasks.is_empty() {
            let empty = Paragraph::new("No tasks yet — add one above").style(self.theme.text_muted);
            empty.render(inner, buf);
            return;
        }

        let visible_rows = inner.height as usize;
        let start = self.window_start(visible_rows);
        let end = (start + visible_rows).min(self.tasks.len());

        let lines: Vec<Line> = (start..end)
            .map(|i| self.format_row(i, inner.width as usize))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{ASCII_SYMBOLS, UNICODE_SYMBOLS};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(tasks: &TaskList, selected: usize, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let widget = TaskListWidget::new(tasks, selected, true, &theme, &UNICODE_SYMBOLS);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn renders_rows_in_store_order() {
        let mut tasks = TaskList::new();
        tasks.add("first");
        tasks.add("second");

        let content = draw(&tasks, 0, 40, 6);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
        let first_pos = content.find("first").unwrap();
        let second_pos = content.find("second").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn completed_task_shows_checked_mark() {
        let mut tasks = TaskList::new();
        tasks.add("done thing");
        tasks.toggle(0);

        let content = draw(&tasks, 0, 40, 6);
        assert!(content.contains(&format!("[{}] done thing", UNICODE_SYMBOLS.checked)));
    }

    #[test]
    fn incomplete_task_shows_unchecked_mark() {
        let mut tasks = TaskList::new();
        tasks.add("pending thing");

        let content = draw(&tasks, 0, 40, 6);
        assert!(content.contains("[ ] pending thing"));
    }

    #[test]
    fn empty_store_shows_hint() {
        let tasks = TaskList::new();
        let content = draw(&tasks, 0, 40, 6);
        assert!(content.contains("No tasks yet"));
    }

    #[test]
    fn window_follows_selection_past_the_fold() {
        let mut tasks = TaskList::new();
        for i in 0..20 {
            tasks.add(&format!("task number {i:02}"));
        }

        // 6 rows tall minus borders leaves 4 visible rows; select the last.
        let content = draw(&tasks, 19, 40, 6);
        assert!(content.contains("task number 19"));
        assert!(!content.contains("task number 00"));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let mut tasks = TaskList::new();
        tasks.add("a task with an impractically long description that cannot fit");

        let content = draw(&tasks, 0, 20, 4);
        assert!(content.contains('…'));
    }

    #[test]
    fn ascii_symbols_render_x_marks() {
        let mut tasks = TaskList::new();
        tasks.add("done");
        tasks.toggle(0);

        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let widget = TaskListWidget::new(&tasks, 0, false, &theme, &ASCII_SYMBOLS);
                f.render_widget(widget, f.area());
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(content.contains("[x] done"));
    }
}
