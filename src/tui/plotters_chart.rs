//! Plotters-powered curve chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call; `render()` only draws.
pub struct CurvePlottersChart<'a> {
    /// Line series for the curve (already restricted to the visible window).
    pub curve: &'a [(f64, f64)],
    /// Optional crosshair point.
    pub crosshair: Option<(f64, f64)>,
    /// X bounds (visible window).
    pub x_bounds: [f64; 2],
    /// Y bounds (padded).
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for CurvePlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let curve_color = RGBColor(0, 255, 255); // cyan
            let crosshair_color = RGBColor(128, 128, 128);
            let marker_color = RGBColor(255, 255, 0); // yellow

            if let Some((cx, cy)) = self.crosshair {
                chart.draw_series(LineSeries::new([(cx, y0), (cx, y1)], &crosshair_color))?;
                chart.draw_series(LineSeries::new([(x0, cy), (x1, cy)], &crosshair_color))?;
            }

            chart.draw_series(LineSeries::new(self.curve.iter().copied(), &curve_color))?;

            // A colored `Pixel` rather than a `Circle`: the backend maps circle
            // radii to canvas units incorrectly.
            if let Some(point) = self.crosshair {
                chart.draw_series(std::iter::once(Pixel::new(point, marker_color)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
