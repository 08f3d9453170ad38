//! Panel layout and drawing.
//!
//! Rows are stacked from the bottom of the framebuffer upward. Each row is
//! two text segments on a black background: the label in the label color,
//! then the value in its own color, starting where the label ended.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_12_POINT;

use crate::colors::{BLACK, LABEL_COLOR};
use crate::presenter::StatusRow;

/// Row pitch as a multiple of the font height.
pub const LINE_SPACING: f32 = 1.01;

/// Default panel font.
pub const PANEL_FONT: &MonoFont<'static> = &PROFONT_12_POINT;

/// Bottom-anchored stack of label/value rows.
pub struct SystemInfoPanel {
    font: &'static MonoFont<'static>,
    first_row_y: i32,
    line_pitch: f32,
}

impl SystemInfoPanel {
    /// Panel for a framebuffer of `framebuffer_size`, with the first row
    /// sitting on the bottom edge.
    pub fn new(
        framebuffer_size: Size,
        font: &'static MonoFont<'static>,
    ) -> Self {
        let font_height = font.character_size.height;
        Self {
            font,
            first_row_y: framebuffer_size.height as i32 - font_height as i32,
            line_pitch: font_height as f32 * LINE_SPACING,
        }
    }

    /// Top edge of each of the first `count` rows, bottom row first.
    pub fn row_positions(
        &self,
        count: usize,
    ) -> Vec<i32> {
        (0..count)
            .map(|i| (i as f32).mul_add(-self.line_pitch, self.first_row_y as f32) as i32)
            .collect()
    }

    /// Pixel width of `text` when nothing measured it.
    pub fn text_width(
        &self,
        text: &str,
    ) -> i32 {
        let advance = self.font.character_size.width + self.font.character_spacing;
        (text.chars().count() as u32 * advance) as i32
    }

    /// Draw `rows`, bottom row first.
    pub fn draw<D>(
        &self,
        display: &mut D,
        rows: &[StatusRow],
    ) where
        D: DrawTarget<Color = Rgb888>,
    {
        let label_style = self.style(LABEL_COLOR);

        for (row, y) in rows.iter().zip(self.row_positions(rows.len())) {
            let origin = Point::new(0, y);
            let value_x = Text::with_baseline(row.label, origin, label_style, Baseline::Top)
                .draw(display)
                .map_or_else(|_| self.text_width(row.label), |next| next.x);

            Text::with_baseline(
                row.text.as_str(),
                Point::new(value_x, y),
                self.style(row.color),
                Baseline::Top,
            )
            .draw(display)
            .ok();
        }
    }

    /// Draw a single segment at `origin` (used by the CO readout).
    pub fn draw_text<D>(
        &self,
        display: &mut D,
        text: &str,
        origin: Point,
        color: Rgb888,
    ) where
        D: DrawTarget<Color = Rgb888>,
    {
        Text::with_baseline(text, origin, self.style(color), Baseline::Top)
            .draw(display)
            .ok();
    }

    fn style(
        &self,
        color: Rgb888,
    ) -> MonoTextStyle<'static, Rgb888> {
        MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(color)
            .background_color(BLACK)
            .build()
    }
}

/// Where the CO readout sits: left edge, centered on the upper quarter line.
pub fn co_alert_origin(
    framebuffer_size: Size,
    font: &MonoFont<'_>,
) -> Point {
    let center_y = (framebuffer_size.height >> 2) as i32;
    let half_text = (font.character_size.height >> 1) as i32;
    Point::new(0, center_y - half_text)
}
