//! Slider controls.
//!
//! A slider holds one parameter value inside a bounded, steppable range and
//! reports every effective edit as a `ValueChanged` event. The panel groups
//! the five sliders in display order and tracks which one is selected.

use crate::domain::{ParamName, Params, SliderSpec, ValueChanged};

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    value: f64,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn name(&self) -> ParamName {
        self.spec.name
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the value inside the range, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / span).clamp(0.0, 1.0)
    }

    /// Set a new value (clamped to the range).
    ///
    /// Returns `None` when the stored value does not change.
    pub fn set_value(&mut self, new: f64) -> Option<ValueChanged> {
        if !new.is_finite() {
            return None;
        }
        let new = snap(new.clamp(self.spec.min, self.spec.max), self.spec.step);
        let old = self.value;
        if new == old {
            return None;
        }
        self.value = new;
        Some(ValueChanged {
            name: self.spec.name,
            old,
            new,
        })
    }

    /// Move by `steps` increments (negative moves down).
    pub fn step_by(&mut self, steps: i32) -> Option<ValueChanged> {
        self.set_value(self.value + steps as f64 * self.spec.step)
    }

    pub fn increment(&mut self) -> Option<ValueChanged> {
        self.step_by(1)
    }

    pub fn decrement(&mut self) -> Option<ValueChanged> {
        self.step_by(-1)
    }

    pub fn reset(&mut self) -> Option<ValueChanged> {
        self.set_value(self.spec.default)
    }
}

/// Round `value` to the decimal precision of `step` so repeated stepping by
/// 0.1 lands on 0.3 rather than 0.30000000000000004.
fn snap(value: f64, step: f64) -> f64 {
    let decimals = step_decimals(step);
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn step_decimals(step: f64) -> u32 {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 9 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    // Keep a few extra digits so ranges like [0.001, 5] with step 0.1 stay exact
    // at their lower bound.
    decimals + 3
}

/// The five parameter sliders, in display order.
#[derive(Debug, Clone)]
pub struct SliderPanel {
    sliders: Vec<Slider>,
    selected: usize,
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderPanel {
    pub fn new() -> Self {
        Self {
            sliders: ParamName::ALL.iter().map(|n| Slider::new(n.spec())).collect(),
            selected: 0,
        }
    }

    /// Build a panel whose sliders start at `params` (clamped to each range).
    pub fn with_params(params: &Params) -> Self {
        let mut panel = Self::new();
        for slider in &mut panel.sliders {
            slider.set_value(params.get(slider.name()));
        }
        panel
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slider(&self) -> &Slider {
        &self.sliders[self.selected]
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sliders.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Step the selected slider.
    pub fn nudge(&mut self, steps: i32) -> Option<ValueChanged> {
        self.sliders[self.selected].step_by(steps)
    }

    /// Restore every slider to its default; one event per slider that moved.
    pub fn reset(&mut self) -> Vec<ValueChanged> {
        self.sliders.iter_mut().filter_map(Slider::reset).collect()
    }

    /// Current slider values as a parameter set.
    pub fn params(&self) -> Params {
        let mut params = Params::default();
        for slider in &self.sliders {
            params.set(slider.name(), slider.value());
        }
        params
    }
}
