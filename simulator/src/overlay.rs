//! Debug overlay: render timing, refresh counters and the event log.
//!
//! Drawn in the top half of the framebuffer so it never covers the panel
//! rows anchored at the bottom.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use hud_diagnostics_common::colors::{GRAY, GREEN, WHITE, YELLOW};
use hud_diagnostics_common::profiling::{DebugLog, LOG_BUFFER_SIZE, TaskTimer};
use hud_diagnostics_common::sampler::{DiagnosticsSampler, MetricId};
use profont::PROFONT_9_POINT;

const PAD_X: i32 = 4;
const HEADER_Y: i32 = 4;
const STATS_Y: i32 = 20;
const LINE_HEIGHT: i32 = 12;

const OVERLAY_BG: Rgb888 = Rgb888::new(8, 16, 8);
const HEADER_COLOR: Rgb888 = GREEN;
const VALUE_COLOR: Rgb888 = WHITE;
const HIGHLIGHT_COLOR: Rgb888 = YELLOW;
const LOG_PROMPT_COLOR: Rgb888 = GREEN;
const LOG_TEXT_COLOR: Rgb888 = Rgb888::new(255, 165, 0);
const DIVIDER_COLOR: Rgb888 = GRAY;

/// Stat lines above the log: render timing plus one per metric.
const STAT_LINES: i32 = 3;

/// Pixel height of the overlay.
pub const OVERLAY_HEIGHT: u32 = (STATS_Y + (STAT_LINES + 1 + LOG_BUFFER_SIZE as i32 + 1) * LINE_HEIGHT) as u32;

pub fn draw_overlay<D>(
    display: &mut D,
    timer: &TaskTimer,
    sampler: &DiagnosticsSampler,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let width = display.bounding_box().size.width;

    Rectangle::new(Point::zero(), Size::new(width, OVERLAY_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(OVERLAY_BG))
        .draw(display)
        .ok();

    draw_line(display, "DEBUG", PAD_X, HEADER_Y, HEADER_COLOR);

    let mut y = STATS_Y;
    draw_line(display, &timer_line(timer), PAD_X, y, HIGHLIGHT_COLOR);
    y += LINE_HEIGHT;

    for id in [MetricId::Address, MetricId::CpuTemp] {
        draw_line(display, &metric_line(sampler, id), PAD_X, y, VALUE_COLOR);
        y += LINE_HEIGHT;
    }

    Line::new(Point::new(2, y + 2), Point::new(width as i32 - 2, y + 2))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
    y += LINE_HEIGHT;

    for line in log.iter() {
        draw_line(display, ">", PAD_X, y, LOG_PROMPT_COLOR);
        draw_line(display, line, PAD_X + 10, y, LOG_TEXT_COLOR);
        y += LINE_HEIGHT;
    }
    draw_line(display, "> _", PAD_X, y, LOG_PROMPT_COLOR);
}

fn draw_line<D>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    Text::with_baseline(text, Point::new(x, y), MonoTextStyle::new(&PROFONT_9_POINT, color), Baseline::Top)
        .draw(display)
        .ok();
}

pub fn timer_line(timer: &TaskTimer) -> String<64> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{}: {:.1}ms min {:.1} max {:.1} avg {:.1}",
        timer.name(),
        timer.last_us as f32 / 1000.0,
        timer.min_us() as f32 / 1000.0,
        timer.max_us as f32 / 1000.0,
        timer.avg_us() as f32 / 1000.0,
    );
    s
}

pub fn metric_line(
    sampler: &DiagnosticsSampler,
    id: MetricId,
) -> String<64> {
    let mut s = String::new();
    let (countdown, period) = sampler.timer(id).map_or((0, 0), |t| (t.countdown(), t.period()));
    let _ = write!(s, "{id}: {} reads, next in {countdown}/{period}", sampler.refresh_count(id));
    s
}
