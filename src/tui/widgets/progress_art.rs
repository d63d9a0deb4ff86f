//! Progress art for the doughnut cutout.
//!
//! The original of this interface is a table of six images keyed by
//! completion thresholds {0, 20, 40, 60, 80, 100}; here each key maps to
//! a distinct ASCII-art frame of a flower growing out of the ground.
//! Frames come in three sizes and degrade with the available space the
//! same way a logo degrades with terminal width: a multi-line drawing
//! when the cutout is large, a three-line sketch when it is tight, and a
//! single glyph when only a cell or two fit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::tasks::ProgressStage;

// =============================================================================
// Frames
// =============================================================================

const SEED_FULL: &[&str] = &[
    "     ",
    "     ",
    "     ",
    "  .  ",
    "~~~~~",
];

const SPROUT_FULL: &[&str] = &[
    "     ",
    "  ,  ",
    "  |  ",
    " \\|  ",
    "~~~~~",
];

const STEM_FULL: &[&str] = &[
    "  ,  ",
    " ,|  ",
    "  |/ ",
    "  |  ",
    "~~~~~",
];

const LEAVES_FULL: &[&str] = &[
    "   ,   ",
    " \\ | / ",
    "  \\|/  ",
    "   |   ",
    "~~~~~~~",
];

const BUD_FULL: &[&str] = &[
    "  (@)  ",
    " \\ | / ",
    "  \\|/  ",
    "   |   ",
    "~~~~~~~",
];

const BLOOM_FULL: &[&str] = &[
    " \\ @|@ / ",
    " -(@@@)- ",
    " / @|@ \\ ",
    "    |    ",
    "~~~~~~~~~",
];

const SEED_COMPACT: &[&str] = &["   ", " . ", "~~~"];
const SPROUT_COMPACT: &[&str] = &[" , ", " | ", "~~~"];
const STEM_COMPACT: &[&str] = &[" , ", "\\| ", "~~~"];
const LEAVES_COMPACT: &[&str] = &["\\|/", " | ", "~~~"];
const BUD_COMPACT: &[&str] = &["(@)", " | ", "~~~"];
const BLOOM_COMPACT: &[&str] = &["@@@", " | ", "~~~"];

const SEED_MINIMAL: &[&str] = &["."];
const SPROUT_MINIMAL: &[&str] = &[","];
const STEM_MINIMAL: &[&str] = &["i"];
const LEAVES_MINIMAL: &[&str] = &["Y"];
const BUD_MINIMAL: &[&str] = &["o"];
const BLOOM_MINIMAL: &[&str] = &["*"];

// =============================================================================
// Variant selection
// =============================================================================

/// Width of the widest full frame.
const FULL_WIDTH: u16 = 9;
/// Height of the full frames.
const FULL_HEIGHT: u16 = 5;
/// Width of the compact frames.
const COMPACT_WIDTH: u16 = 3;
/// Height of the compact frames.
const COMPACT_HEIGHT: u16 = 3;

/// Art size selected from the available cutout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtVariant {
    /// Multi-line drawing for a roomy cutout.
    Full,
    /// Three-line sketch.
    Compact,
    /// A single glyph.
    Minimal,
}

impl ArtVariant {
    /// Picks the largest variant that fits, or `None` when not even a
    /// single glyph does.
    #[must_use]
    pub fn fit(width: u16, height: u16) -> Option<Self> {
        if width >= FULL_WIDTH && height >= FULL_HEIGHT {
            Some(ArtVariant::Full)
        } else if width >= COMPACT_WIDTH && height >= COMPACT_HEIGHT {
            Some(ArtVariant::Compact)
        } else if width >= 1 && height >= 1 {
            Some(ArtVariant::Minimal)
        } else {
            None
        }
    }
}

/// The frame for a stage at a given size.
#[must_use]
pub fn frame(stage: ProgressStage, variant: ArtVariant) -> &'static [&'static str] {
    match (stage, variant) {
        (ProgressStage::Seed0, ArtVariant::Full) => SEED_FULL,
        (ProgressStage::Sprout20, ArtVariant::Full) => SPROUT_FULL,
        (ProgressStage::Stem40, ArtVariant::Full) => STEM_FULL,
        (ProgressStage::Leaves60, ArtVariant::Full) => LEAVES_FULL,
        (ProgressStage::Bud80, ArtVariant::Full) => BUD_FULL,
        (ProgressStage::Bloom100, ArtVariant::Full) => BLOOM_FULL,

        (ProgressStage::Seed0, ArtVariant::Compact) => SEED_COMPACT,
        (ProgressStage::Sprout20, ArtVariant::Compact) => SPROUT_COMPACT,
        (ProgressStage::Stem40, ArtVariant::Compact) => STEM_COMPACT,
        (ProgressStage::Leaves60, ArtVariant::Compact) => LEAVES_COMPACT,
        (ProgressStage::Bud80, ArtVariant::Compact) => BUD_COMPACT,
        (ProgressStage::Bloom100, ArtVariant::Compact) => BLOOM_COMPACT,

        (ProgressStage::Seed0, ArtVariant::Minimal) => SEED_MINIMAL,
        (ProgressStage::Sprout20, ArtVariant::Minimal) => SPROUT_MINIMAL,
        (ProgressStage::Stem40, ArtVariant::Minimal) => STEM_MINIMAL,
        (ProgressStage::Leaves60, ArtVariant::Minimal) => LEAVES_MINIMAL,
        (ProgressStage::Bud80, ArtVariant::Minimal) => BUD_MINIMAL,
        (ProgressStage::Bloom100, ArtVariant::Minimal) => BLOOM_MINIMAL,
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Widget that centers the stage's art inside its area.
#[derive(Debug)]
pub struct ProgressArtWidget {
    stage: ProgressStage,
    style: Style,
}

impl ProgressArtWidget {
    /// Creates a new `ProgressArtWidget`.
    #[must_use]
    pub fn new(stage: ProgressStage, style: Style) -> Self {
        Self { stage, style }
    }
}

impl Widget for ProgressArtWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(variant) = ArtVariant::fit(area.width, area.height) else {
            return;
        };
        let lines = frame(self.stage, variant);

        let art_width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let art_height = lines.len() as u16;

        let x0 = area.x + area.width.saturating_sub(art_width) / 2;
        let y0 = area.y + area.height.saturating_sub(art_height) / 2;

        for (row, line) in lines.iter().enumerate() {
            let y = y0 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(x0, y, line, area.width as usize, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    const ALL_STAGES: [ProgressStage; 6] = [
        ProgressStage::Seed0,
        ProgressStage::Sprout20,
        ProgressStage::Stem40,
        ProgressStage::Leaves60,
        ProgressStage::Bud80,
        ProgressStage::Bloom100,
    ];

    #[test]
    fn variant_fit_degrades_with_space() {
        assert_eq!(ArtVariant::fit(20, 10), Some(ArtVariant::Full));
        assert_eq!(ArtVariant::fit(9, 5), Some(ArtVariant::Full));
        assert_eq!(ArtVariant::fit(8, 5), Some(ArtVariant::Compact));
        assert_eq!(ArtVariant::fit(3, 3), Some(ArtVariant::Compact));
        assert_eq!(ArtVariant::fit(2, 2), Some(ArtVariant::Minimal));
        assert_eq!(ArtVariant::fit(1, 1), Some(ArtVariant::Minimal));
        assert_eq!(ArtVariant::fit(0, 1), None);
        assert_eq!(ArtVariant::fit(1, 0), None);
    }

    #[test]
    fn every_stage_has_a_distinct_frame_per_variant() {
        for variant in [ArtVariant::Full, ArtVariant::Compact, ArtVariant::Minimal] {
            for (i, a) in ALL_STAGES.iter().enumerate() {
                for b in &ALL_STAGES[i + 1..] {
                    assert_ne!(
                        frame(*a, variant),
                        frame(*b, variant),
                        "stages {a:?} and {b:?} share a {variant:?} frame"
                    );
                }
            }
        }
    }

    #[test]
    fn full_frames_fit_their_declared_bounds() {
        for stage in ALL_STAGES {
            let lines = frame(stage, ArtVariant::Full);
            assert_eq!(lines.len(), FULL_HEIGHT as usize);
            for line in lines {
                assert!(line.chars().count() <= FULL_WIDTH as usize);
            }
        }
    }

    #[test]
    fn compact_frames_fit_their_declared_bounds() {
        for stage in ALL_STAGES {
            let lines = frame(stage, ArtVariant::Compact);
            assert_eq!(lines.len(), COMPACT_HEIGHT as usize);
            for line in lines {
                assert!(line.chars().count() <= COMPACT_WIDTH as usize);
            }
        }
    }

    #[test]
    fn renders_without_panicking_at_any_size() {
        for (w, h) in [(1u16, 1u16), (3, 3), (9, 5), (30, 15)] {
            let backend = TestBackend::new(w, h);
            let mut terminal = Terminal::new(backend).unwrap();
            for stage in ALL_STAGES {
                terminal
                    .draw(|f| {
                        let widget = ProgressArtWidget::new(stage, Style::default());
                        f.render_widget(widget, f.area());
                    })
                    .unwrap();
            }
        }
    }

    #[test]
    fn minimal_glyph_lands_in_the_buffer() {
        let backend = TestBackend::new(1, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let widget = ProgressArtWidget::new(ProgressStage::Bloom100, Style::default());
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
        assert!(content.contains('*'));
    }
}
