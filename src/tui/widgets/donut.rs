//! Doughnut chart widget.
//!
//! Draws a two-segment ring ("Done" vs "Todo") directly into the cell
//! buffer: for every cell in the chart area the radial distance decides
//! ring membership between the outer radius and a 70% cutout, and the
//! angle from twelve o'clock, clockwise, decides which segment colors
//! it. Terminal cells are roughly twice as tall as wide, so vertical
//! distances are doubled to keep the ring round on screen.
//!
//! After the ring is drawn the widget recomputes the inner geometry and
//! centers the progress art in the cutout, sized to 80% of the inner
//! diameter — the art stays inside the hole whatever size the chart is
//! given. Areas too small for any ring fall back to a one-line summary,
//! and a zero-sized area skips the widget entirely; the rest of the
//! frame is unaffected either way.
//!
//! # Layout
//!
//! ```text
//! ┌─ Progress ────────────┐
//! │       ███████         │
//! │     ██       ██       │
//! │    ██   (@)   ██      │
//! │     ██  \|/  ██       │
//! │       ███████         │
//! │  ■ Done   ■ Todo      │
//! └───────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tasks::{ChartData, ProgressStage};
use crate::tui::app::{Symbols, Theme};
use crate::tui::widgets::progress_art::ProgressArtWidget;

/// Fraction of the outer radius left hollow (the cutout).
const CUTOUT: f64 = 0.7;

/// Fraction of the inner diameter the overlay may occupy.
const OVERLAY_SCALE: f64 = 0.8;

/// Horizontal units per terminal row; cells are about twice as tall as
/// they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Minimum ring area (columns x rows) below which the widget degrades
/// to a text summary.
const MIN_RING_WIDTH: u16 = 12;
const MIN_RING_HEIGHT: u16 = 6;

/// Ring geometry for one draw, in column units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RingGeometry {
    /// Center, in columns from the ring area's left edge.
    center_x: f64,
    /// Center, in rows from the ring area's top edge.
    center_y: f64,
    outer_radius: f64,
    inner_radius: f64,
}

impl RingGeometry {
    /// Fits the largest ring into `width` columns by `height` rows.
    fn fit(width: u16, height: u16) -> Self {
        let center_x = f64::from(width) / 2.0;
        let center_y = f64::from(height) / 2.0;
        let outer_radius = (f64::from(width).min(f64::from(height) * CELL_ASPECT)) / 2.0;
        Self {
            center_x,
            center_y,
            outer_radius,
            inner_radius: outer_radius * CUTOUT,
        }
    }

    /// The overlay rectangle centered in the cutout, relative to the
    /// ring area: 80% of the inner diameter wide, aspect-corrected rows
    /// tall.
    fn overlay_rect(&self, ring_area: Rect) -> Rect {
        let diameter = self.inner_radius * 2.0 * OVERLAY_SCALE;
        let width = (diameter.floor() as u16).min(ring_area.width);
        let height = ((diameter / CELL_ASPECT).floor() as u16).min(ring_area.height);

        let x = ring_area.x + ((self.center_x - diameter / 2.0).round().max(0.0) as u16);
        let y = ring_area.y
            + ((self.center_y - diameter / CELL_ASPECT / 2.0).round().max(0.0) as u16);
        Rect::new(x, y, width, height)
    }

    /// Whether the cell at (`col`, `row`) lies on the ring, and if so,
    /// its clockwise angular fraction from twelve o'clock in `[0, 1)`.
    fn ring_fraction(&self, col: u16, row: u16) -> Option<f64> {
        let dx = f64::from(col) + 0.5 - self.center_x;
        let dy = (f64::from(row) + 0.5 - self.center_y) * CELL_ASPECT;
        let distance = dx.hypot(dy);
        if distance < self.inner_radius || distance > self.outer_radius {
            return None;
        }

        // atan2(dx, -dy) is 0 at twelve o'clock and grows clockwise.
        let angle = dx.atan2(-dy);
        let fraction = angle / std::f64::consts::TAU;
        Some(if fraction < 0.0 { fraction + 1.0 } else { fraction })
    }
}

/// Widget for rendering the doughnut chart with its overlay.
#[derive(Debug)]
pub struct DonutWidget<'a> {
    data: ChartData,
    stage: ProgressStage,
    theme: &'a Theme,
    symbols: &'a Symbols,
}

impl<'a> DonutWidget<'a> {
    /// Creates a new `DonutWidget` from derived chart data.
    #[must_use]
    pub fn new(
        data: ChartData,
        stage: ProgressStage,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            data,
            stage,
            theme,
            symbols,
        }
    }

    fn total(&self) -> usize {
        self.data.completed_count + self.data.uncompleted_count
    }

    /// Completed share of the ring in `[0, 1]`.
    fn completed_fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.data.completed_count as f64 / total as f64
        }
    }

    fn segment_style(&self, fraction: f64) -> Style {
        if self.total() == 0 {
            self.theme.donut_empty
        } else if fraction < self.completed_fraction() {
            self.theme.donut_done
        } else {
            self.theme.donut_todo
        }
    }

    fn render_ring(&self, ring_area: Rect, buf: &mut Buffer) {
        let geometry = RingGeometry::fit(ring_area.width, ring_area.height);

        for row in 0..ring_area.height {
            for col in 0..ring_area.width {
                if let Some(fraction) = geometry.ring_fraction(col, row) {
                    buf.set_string(
                        ring_area.x + col,
                        ring_area.y + row,
                        self.symbols.ring,
                        self.segment_style(fraction),
                    );
                }
            }
        }

        // Overlay goes in after the ring so it sits on top of the hole.
        let overlay = geometry.overlay_rect(ring_area);
        let art_style = if self.total() == 0 {
            self.theme.donut_empty
        } else {
            self.theme.donut_done
        };
        ProgressArtWidget::new(self.stage, art_style).render(overlay, buf);
    }

    fn legend_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.symbols.swatch, self.theme.donut_done),
            Span::styled(" Done   ", self.theme.text_primary),
            Span::styled(self.symbols.swatch, self.theme.donut_todo),
            Span::styled(" Todo", self.theme.text_primary),
        ])
    }
}

impl Widget for DonutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(" Progress ")
            .title_style(self.theme.title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if inner.width < MIN_RING_WIDTH || inner.height < MIN_RING_HEIGHT {
            // Not enough room for a ring; a number is better than noise.
            let summary = Paragraph::new(format!("{}% done", self.data.percentage))
                .style(self.theme.text_primary)
                .alignment(Alignment::Center);
            summary.render(inner, buf);
            return;
        }

        // Bottom line carries the legend; the ring gets the rest.
        let ring_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        let legend_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

        self.render_ring(ring_area, buf);

        Paragraph::new(self.legend_line())
            .alignment(Alignment::Center)
            .render(legend_area, buf);
    }
}
