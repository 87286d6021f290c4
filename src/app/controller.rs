//! Reactive display controller.
//!
//! Owns the parameter values, the fixed sample domain, and the currently
//! published series. Controls feed it `ValueChanged` events through the single
//! `on_change` entry point; each accepted event recomputes the curve and swaps
//! in a new series.
//!
//! The series is published as an `Rc<CurveSeries>`. A recompute builds a fresh
//! series and replaces the pointer, so anyone holding the previous snapshot
//! keeps a consistent `(x, y)` pair.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::domain::{CurveSeries, Params, SampleDomain, ValueChanged};
use crate::error::CurveError;
use crate::models::logistic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Awaiting input.
    Idle,
    /// Evaluating the curve for a change event.
    Recomputing,
}

#[derive(Debug)]
pub struct DisplayController {
    domain: SampleDomain,
    params: Params,
    series: Rc<CurveSeries>,
    state: ControllerState,
    recomputes: u64,
}

impl DisplayController {
    /// Create the controller and compute the initial series.
    pub fn new(domain: SampleDomain, params: Params) -> Result<Self, CurveError> {
        let series = Rc::new(compute_series(&domain, &params)?);
        debug!(%params, samples = domain.len(), "controller created");
        Ok(Self {
            domain,
            params,
            series,
            state: ControllerState::Idle,
            recomputes: 0,
        })
    }

    /// Handle one control event.
    ///
    /// The parameter always takes the event's new value so it mirrors the
    /// control. If the resulting set is invalid the published series is left
    /// as it was and the error is returned to the caller.
    pub fn on_change(&mut self, event: ValueChanged) -> Result<Rc<CurveSeries>, CurveError> {
        debug!(name = %event.name, old = event.old, new = event.new, "value changed");
        self.params.set(event.name, event.new);
        self.recompute()
    }

    /// Apply several events, then recompute once.
    pub fn apply_batch<I>(&mut self, events: I) -> Result<Rc<CurveSeries>, CurveError>
    where
        I: IntoIterator<Item = ValueChanged>,
    {
        let mut applied = 0usize;
        for event in events {
            self.params.set(event.name, event.new);
            applied += 1;
        }
        if applied == 0 {
            return Ok(Rc::clone(&self.series));
        }
        debug!(applied, "coalesced value changes");
        self.recompute()
    }

    fn recompute(&mut self) -> Result<Rc<CurveSeries>, CurveError> {
        self.state = ControllerState::Recomputing;
        let result = compute_series(&self.domain, &self.params);
        self.state = ControllerState::Idle;

        match result {
            Ok(series) => {
                self.series = Rc::new(series);
                self.recomputes += 1;
                debug!(params = %self.params, recomputes = self.recomputes, "series replaced");
                Ok(Rc::clone(&self.series))
            }
            Err(err) => {
                warn!(params = %self.params, "rejected parameters: {err}");
                Err(err)
            }
        }
    }

    /// The currently published series.
    pub fn series(&self) -> Rc<CurveSeries> {
        Rc::clone(&self.series)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of successful recomputes since creation (the initial series is not counted).
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Whether the published series reflects the current parameters.
    pub fn is_current(&self) -> bool {
        self.series.params == self.params
    }
}

fn compute_series(domain: &SampleDomain, params: &Params) -> Result<CurveSeries, CurveError> {
    let y = logistic(domain.xs(), params)?;
    Ok(CurveSeries {
        params: *params,
        x: domain.xs().to_vec(),
        y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamName;

    fn controller() -> DisplayController {
        DisplayController::new(SampleDomain::default(), Params::default()).unwrap()
    }

    #[test]
    fn initial_series_covers_domain() {
        let c = controller();
        assert_eq!(c.series().len(), c.domain().len());
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.recompute_count(), 0);
        assert!(c.is_current());
    }

    #[test]
    fn change_replaces_series_and_keeps_x() {
        let mut c = controller();
        let before = c.series();
        let after = c
            .on_change(ValueChanged { name: ParamName::K, old: 1.0, new: 4.0 })
            .unwrap();

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before.x, after.x);
        let expected = logistic(c.domain().xs(), &Params { k: 4.0, ..Params::default() }).unwrap();
        assert_eq!(after.y, expected);
        // The old snapshot is untouched.
        assert_eq!(before.params.k, 1.0);
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn invalid_change_keeps_published_series() {
        let mut c = controller();
        let before = c.series();
        let err = c
            .on_change(ValueChanged { name: ParamName::A, old: 0.0, new: 5.0 })
            .unwrap_err();
        assert!(err.to_string().contains("'k' must be greater than 'a'"));
        assert!(Rc::ptr_eq(&before, &c.series()));
        assert_eq!(c.params().a, 5.0);
        assert!(!c.is_current());
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn batch_recomputes_once() {
        let mut c = controller();
        c.apply_batch([
            ValueChanged { name: ParamName::A, old: 0.0, new: -2.0 },
            ValueChanged { name: ParamName::B, old: 1.0, new: 2.5 },
        ])
        .unwrap();
        assert_eq!(c.recompute_count(), 1);
        assert_eq!(c.series().params, Params { a: -2.0, b: 2.5, ..Params::default() });

        c.apply_batch(std::iter::empty()).unwrap();
        assert_eq!(c.recompute_count(), 1);
    }

    #[test]
    fn new_rejects_invalid_initial_params() {
        let params = Params { v: 0.0, ..Params::default() };
        assert!(DisplayController::new(SampleDomain::default(), params).is_err());
    }
}
