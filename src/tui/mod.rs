//! Ratatui-based terminal UI.
//!
//! The screen mirrors the classic slider dashboard: the curve on the left, the
//! five parameter sliders on the right. Every slider step becomes a
//! `ValueChanged` event handed to the `DisplayController`; the chart always
//! draws the controller's published series.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::{info, warn};

use crate::app::controller::DisplayController;
use crate::cli::ExportFormat;
use crate::config::Config;
use crate::controls::{Slider, SliderPanel};
use crate::domain::{CurveSeries, ValueChanged};
use crate::error::AppError;

mod plotters_chart;
mod view;

use plotters_chart::CurvePlottersChart;
pub use view::ViewWindow;

/// Document title.
pub const TITLE: &str = "Logistic";
/// Chart title.
pub const PLOT_TITLE: &str = "Generalized Logistic Curve";

/// Width of the slider column.
const SLIDER_PANEL_WIDTH: u16 = 46;

/// Start the TUI.
pub fn run(config: &Config) -> Result<(), AppError> {
    // Build the session before touching the terminal so parameter errors are
    // reported on a normal screen.
    let mut app = App::new(config)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::io(format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, SetTitle(TITLE)) {
            let _ = disable_raw_mode();
            return Err(AppError::io(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Info(String),
    Error(String),
}

struct App {
    controller: DisplayController,
    panel: SliderPanel,
    view: ViewWindow,
    /// Index into the published series, when the crosshair is shown.
    crosshair: Option<usize>,
    export_dir: PathBuf,
    status: Status,
}

impl App {
    fn new(config: &Config) -> Result<Self, AppError> {
        let domain = config.domain()?;
        let view = ViewWindow::new(domain.min(), domain.max());
        let mut controller = DisplayController::new(domain, config.params)?;

        // Sliders clamp to their ranges; keep the controller in step with them.
        let panel = SliderPanel::with_params(&config.params);
        let clamped: Vec<ValueChanged> = panel
            .sliders()
            .iter()
            .filter(|s| s.value() != config.params.get(s.name()))
            .map(|s| ValueChanged {
                name: s.name(),
                old: config.params.get(s.name()),
                new: s.value(),
            })
            .collect();
        if !clamped.is_empty() {
            warn!(count = clamped.len(), "initial parameters clamped to slider ranges");
            controller.apply_batch(clamped)?;
        }

        Ok(Self {
            controller,
            panel,
            view,
            crosshair: None,
            export_dir: config.export_dir.clone(),
            status: Status::Info("Ready.".to_string()),
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::io(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::io(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the session should end.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.panel.select_prev(),
            KeyCode::Down => self.panel.select_next(),
            KeyCode::Left => {
                let event = self.panel.nudge(-1);
                self.dispatch(event);
            }
            KeyCode::Right => {
                let event = self.panel.nudge(1);
                self.dispatch(event);
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('d') => self.debug_bundle(),
            KeyCode::Char('c') => self.toggle_crosshair(),
            KeyCode::Char('[') => self.move_crosshair(-1),
            KeyCode::Char(']') => self.move_crosshair(1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.view.zoom_in(),
            KeyCode::Char('-') => self.view.zoom_out(),
            KeyCode::Char('h') => self.view.pan(-1),
            KeyCode::Char('l') => self.view.pan(1),
            KeyCode::Char('0') => self.view.reset(),
            _ => {}
        }
        false
    }

    /// Forward a control event to the controller and report the outcome.
    fn dispatch(&mut self, event: Option<ValueChanged>) {
        let Some(event) = event else {
            let slider = self.panel.selected_slider();
            self.status = Status::Info(format!("{} is at the end of its range.", slider.name()));
            return;
        };
        match self.controller.on_change(event) {
            Ok(_) => {
                self.status = Status::Info(format!("{}: {} → {}", event.name, event.old, event.new));
            }
            Err(err) => {
                self.status = Status::Error(err.to_string());
            }
        }
    }

    fn reset(&mut self) {
        let events = self.panel.reset();
        if events.is_empty() {
            self.status = Status::Info("Already at defaults.".to_string());
            return;
        }
        // Each slider reports its own change, exactly as a manual edit would.
        for event in events {
            self.dispatch(Some(event));
        }
        if let Status::Info(_) = self.status {
            self.status = Status::Info("Reset to defaults.".to_string());
        }
    }

    fn save(&mut self) {
        let ts = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.export_dir.join(format!("logistic_{ts}.json"));
        match crate::app::export_series(&self.controller, &path, ExportFormat::Json) {
            Ok(()) => {
                info!(path = %path.display(), "saved curve");
                self.status = Status::Info(format!("Saved {}", path.display()));
            }
            Err(err) => self.status = Status::Error(format!("Save failed: {err}")),
        }
    }

    fn debug_bundle(&mut self) {
        match crate::debug::write_debug_bundle(&self.export_dir, &self.controller) {
            Ok(path) => self.status = Status::Info(format!("Wrote debug bundle: {}", path.display())),
            Err(err) => self.status = Status::Error(format!("Debug write failed: {err}")),
        }
    }

    fn toggle_crosshair(&mut self) {
        self.crosshair = match self.crosshair {
            Some(_) => None,
            None => {
                let [lo, hi] = self.view.bounds();
                self.controller.series().nearest_index(0.5 * (lo + hi))
            }
        };
    }

    fn move_crosshair(&mut self, delta: isize) {
        let Some(idx) = self.crosshair else {
            return;
        };
        let len = self.controller.series().len();
        if len == 0 {
            return;
        }
        let next = idx.saturating_add_signed(delta).min(len - 1);
        self.crosshair = Some(next);
    }

    fn crosshair_point(&self, series: &CurveSeries) -> Option<(f64, f64)> {
        let idx = self.crosshair?;
        Some((*series.x.get(idx)?, *series.y.get(idx)?))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let series = self.controller.series();
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled(TITLE, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" | y = a + (k - a) / (1 + q·e^(-b·x))^(1/v)"),
        ]));

        let [lo, hi] = self.view.bounds();
        let mut info = format!(
            "{} | x: [{lo:.2}, {hi:.2}] | n={}",
            series.params,
            series.len()
        );
        if let Some((x, y)) = self.crosshair_point(&series) {
            info.push_str(&format!(" | crosshair: x={x:.3}, y={y:.6}"));
        }
        lines.push(Line::from(Span::styled(info, Style::default().fg(Color::Gray))));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SLIDER_PANEL_WIDTH)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_sliders(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(PLOT_TITLE).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let series = self.controller.series();
        let (curve, x_bounds, y_bounds) = chart_series(&series, &self.view);
        if curve.len() < 2 {
            let msg = Paragraph::new("No samples in view (press 0 to reset the view).")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let crosshair = self
            .crosshair_point(&series)
            .filter(|&(x, _)| self.view.contains(x));

        let (chart_rect, insets) = chart_layout(inner);
        let widget = CurvePlottersChart {
            curve: &curve,
            crosshair,
            x_bounds,
            y_bounds,
            x_label: "x",
            y_label: "y",
            fmt_x: fmt_axis,
            fmt_y: fmt_axis,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds);
        }
    }

    fn draw_sliders(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let bar_width = SLIDER_PANEL_WIDTH.saturating_sub(18) as usize;
        let items: Vec<ListItem> = self
            .panel
            .sliders()
            .iter()
            .map(|s| {
                ListItem::new(Text::from(vec![
                    Line::from(Span::styled(s.title(), Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(format!("{} {:>8}", slider_bar(s, bar_width), fmt_slider_value(s))),
                    Line::from(""),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Parameters").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.panel.selected()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  r reset  s save  c crosshair  [/] move  +/- zoom  h/l pan  0 view  d debug  q quit";
        let status = match &self.status {
            Status::Info(msg) => Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
            Status::Error(msg) => Span::styled(
                msg.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            status,
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Text gauge for a slider, e.g. `[=====|--------]`.
fn slider_bar(slider: &Slider, width: usize) -> String {
    let width = width.max(3);
    let inner = width - 2;
    let pos = (slider.fraction() * (inner as f64 - 1.0)).round() as usize;
    let mut bar = String::with_capacity(width);
    bar.push('[');
    for i in 0..inner {
        bar.push(match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '|',
            std::cmp::Ordering::Greater => '-',
        });
    }
    bar.push(']');
    bar
}

fn fmt_slider_value(slider: &Slider) -> String {
    if slider.spec().step >= 1.0 {
        format!("{:.0}", slider.value())
    } else {
        format!("{:.3}", slider.value())
    }
}

/// Visible part of the series, clipped to the view window, plus padded chart bounds.
///
/// The first and last points are interpolated at the window edges, so the line
/// spans the whole window even when no sample falls inside it.
fn chart_series(series: &CurveSeries, view: &ViewWindow) -> (Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let x_bounds = view.bounds();
    let [lo, hi] = x_bounds;
    let finite: Vec<(f64, f64)> = series.points().filter(|&(x, y)| x.is_finite() && y.is_finite()).collect();

    let mut curve = Vec::new();
    if let Some(y) = interpolate_at(&finite, lo) {
        curve.push((lo, y));
    }
    curve.extend(finite.iter().copied().filter(|&(x, _)| x > lo && x < hi));
    if hi > lo {
        if let Some(y) = interpolate_at(&finite, hi) {
            curve.push((hi, y));
        }
    }

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_max - y_min < 1e-9 {
        y_min -= 0.5;
        y_max += 0.5;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (curve, x_bounds, y_bounds)
}

/// Linear interpolation of `points` (sorted by x) at `x`; `None` outside their range.
fn interpolate_at(points: &[(f64, f64)], x: f64) -> Option<f64> {
    let i = points.partition_point(|&(px, _)| px < x);
    let &(x1, y1) = points.get(i)?;
    if x1 == x {
        return Some(y1);
    }
    let &(x0, y0) = points.get(i.checked_sub(1)?)?;
    Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
}

fn fmt_axis(v: f64) -> String {
    format!("{v:.2}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{x_val:.1}");
        let label_len = label.len() as u16;
        let start = x.saturating_sub(label_len / 2);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.2}");
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label_len);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("x")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("y")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
