//! Chart Rendering
//!
//! Draws the actual/projected series onto an HTML5 canvas. Geometry only;
//! all sanitization and axis math happens in the pipeline.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::pipeline::{SeriesPoint, SeriesSet, ValueRange};
use crate::messages;

pub const ACTUAL_COLOR: &str = "#1976d2";
pub const PROJECTED_COLOR: &str = "#9c27b0";

const HALF_DAY_MS: i64 = 12 * 60 * 60 * 1000;

/// Draw the full chart: background, gridlines, both series, axis labels.
pub fn draw_chart(canvas: &HtmlCanvasElement, series: &SeriesSet) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some(range) = series.value_range() else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(messages::CHART_NO_DATA, width / 2.0 - 70.0, height / 2.0);
        return;
    };

    // Time domain across both series; a single instant gets half a day
    // of room on each side so the point sits centered.
    let timestamps = series
        .actual
        .iter()
        .chain(series.projected.iter())
        .map(|p| p.timestamp_ms);
    let t_min = timestamps.clone().min().unwrap_or(0);
    let t_max = timestamps.max().unwrap_or(0);
    let (t_min, t_max) = if t_min == t_max {
        (t_min - HALF_DAY_MS, t_max + HALF_DAY_MS)
    } else {
        (t_min, t_max)
    };
    let time_span = (t_max - t_min) as f64;

    let to_x = |timestamp_ms: i64| {
        margin_left + ((timestamp_ms - t_min) as f64 / time_span) * chart_width
    };
    let to_y = |value: f64| {
        margin_top + ((range.max - value) / range.span()) * chart_height
    };

    draw_grid(&ctx, &range, width, margin_left, margin_right, margin_top, chart_height);
    draw_series(&ctx, &series.actual, ACTUAL_COLOR, false, &to_x, &to_y);
    draw_series(&ctx, &series.projected, PROJECTED_COLOR, true, &to_x, &to_y);
    draw_time_labels(&ctx, t_min, t_max, margin_left, chart_width, height);
}

/// Horizontal gridlines with y-axis value labels.
fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    range: &ValueRange,
    width: f64,
    margin_left: f64,
    margin_right: f64,
    margin_top: f64,
    chart_height: f64,
) {
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = range.max - (i as f64 / 5.0) * range.span();
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }
}

/// One series: polyline plus point markers. The projected series is
/// drawn dashed.
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    points: &[SeriesPoint],
    color: &str,
    dashed: bool,
    to_x: &impl Fn(i64) -> f64,
    to_y: &impl Fn(f64) -> f64,
) {
    if points.is_empty() {
        return;
    }

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    if dashed {
        let pattern = js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0));
        let _ = ctx.set_line_dash(&pattern);
    }

    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = to_x(point.timestamp_ms);
        let y = to_y(point.value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    if dashed {
        let _ = ctx.set_line_dash(&js_sys::Array::new());
    }

    ctx.set_fill_style(&color.into());
    for point in points {
        let x = to_x(point.timestamp_ms);
        let y = to_y(point.value);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Five evenly spaced date labels along the x axis.
fn draw_time_labels(
    ctx: &CanvasRenderingContext2d,
    t_min: i64,
    t_max: i64,
    margin_left: f64,
    chart_width: f64,
    height: f64,
) {
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let num_labels = 5;
    for i in 0..=num_labels {
        let timestamp = t_min + i * (t_max - t_min) / num_labels;
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;

        let date = chrono::DateTime::from_timestamp_millis(timestamp)
            .map(|dt| dt.format("%m/%d").to_string())
            .unwrap_or_default();

        let _ = ctx.fill_text(&date, x - 15.0, height - 10.0);
    }
}
