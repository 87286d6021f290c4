//! Visible x-window of the chart (zoom and pan).
//!
//! The window only changes what is drawn. The sample domain the controller
//! evaluates on is never touched.

/// Fraction of the current span kept on each zoom-in step.
const ZOOM_STEP: f64 = 0.8;
/// Fraction of the current span moved on each pan step.
const PAN_STEP: f64 = 0.1;
/// Smallest span, relative to the full domain.
const MIN_SPAN_FRAC: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    full: [f64; 2],
    lo: f64,
    hi: f64,
}

impl ViewWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            full: [min, max],
            lo: min,
            hi: max,
        }
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn is_full(&self) -> bool {
        self.lo == self.full[0] && self.hi == self.full[1]
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }

    /// Shrink the window around its center.
    pub fn zoom_in(&mut self) {
        let full_span = self.full[1] - self.full[0];
        let span = (self.span() * ZOOM_STEP).max(full_span * MIN_SPAN_FRAC);
        self.set_centered(self.center(), span);
    }

    /// Grow the window around its center, up to the full domain.
    pub fn zoom_out(&mut self) {
        let full_span = self.full[1] - self.full[0];
        let span = (self.span() / ZOOM_STEP).min(full_span);
        self.set_centered(self.center(), span);
    }

    /// Move by `steps` pan increments (negative moves left).
    pub fn pan(&mut self, steps: i32) {
        let span = self.span();
        let shift = span * PAN_STEP * steps as f64;
        self.set_centered(self.center() + shift, span);
    }

    pub fn reset(&mut self) {
        self.lo = self.full[0];
        self.hi = self.full[1];
    }

    fn center(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Place a window of `span` around `center`, kept inside the full domain.
    fn set_centered(&mut self, center: f64, span: f64) {
        let [min, max] = self.full;
        let mut lo = center - 0.5 * span;
        let mut hi = center + 0.5 * span;
        if lo < min {
            hi += min - lo;
            lo = min;
        }
        if hi > max {
            lo -= hi - max;
            hi = max;
        }
        self.lo = lo.max(min);
        self.hi = hi.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_then_out_restores_full_window() {
        let mut v = ViewWindow::new(-10.0, 10.0);
        v.zoom_in();
        assert!((v.span() - 16.0).abs() < 1e-12);
        assert!(!v.is_full());
        for _ in 0..5 {
            v.zoom_out();
        }
        assert_eq!(v.bounds(), [-10.0, 10.0]);
    }

    #[test]
    fn zoom_is_bounded_below() {
        let mut v = ViewWindow::new(-10.0, 10.0);
        for _ in 0..100 {
            v.zoom_in();
        }
        assert!((v.span() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn pan_stays_inside_domain() {
        let mut v = ViewWindow::new(-10.0, 10.0);
        v.zoom_in();
        v.pan(100);
        let [lo, hi] = v.bounds();
        assert!((hi - 10.0).abs() < 1e-12);
        assert!((hi - lo - 16.0).abs() < 1e-9);
        v.pan(-100);
        assert!((v.bounds()[0] + 10.0).abs() < 1e-12);
    }
}
