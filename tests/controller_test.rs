use approx::assert_abs_diff_eq;
use logistic_curves::app::{ControllerState, DisplayController};
use logistic_curves::controls::SliderPanel;
use logistic_curves::domain::{ParamName, Params, SampleDomain, ValueChanged};
use logistic_curves::models::logistic;

fn default_controller() -> DisplayController {
    DisplayController::new(SampleDomain::default(), Params::default()).unwrap()
}

#[test]
fn every_slider_edit_republishes_matching_series() {
    let mut controller = default_controller();
    let mut panel = SliderPanel::new();
    let x0 = controller.series().x.clone();

    for (i, name) in ParamName::ALL.iter().enumerate() {
        assert_eq!(panel.selected_slider().name(), *name);
        let event = panel.nudge(if i == 0 { -3 } else { 2 }).unwrap();
        let series = controller.on_change(event).unwrap();

        assert_eq!(series.x, x0);
        assert_eq!(series.params, panel.params());
        assert_eq!(series.y, logistic(&x0, &panel.params()).unwrap());
        assert_eq!(controller.state(), ControllerState::Idle);
        panel.select_next();
    }
    assert_eq!(controller.recompute_count(), 5);
}

#[test]
fn standard_sigmoid_scenario() {
    let domain = SampleDomain::new(-10.0, 10.0, 5).unwrap();
    let controller = DisplayController::new(domain, Params::default()).unwrap();
    let series = controller.series();

    let expected = [4.54e-5, 6.69e-3, 0.5, 0.993, 0.99995];
    for (y, e) in series.y.iter().zip(expected) {
        assert_abs_diff_eq!(*y, e, epsilon = 1e-3);
    }
    assert_abs_diff_eq!(series.y[0], 4.5398e-5, epsilon = 1e-8);
}

#[test]
fn asymptotes_hold_on_wide_domain() {
    let domain = SampleDomain::new(-500.0, 500.0, 1001).unwrap();
    let params = Params { a: -7.0, k: 9.0, q: 4.2, b: 0.3, v: 0.05 };
    let controller = DisplayController::new(domain, params).unwrap();
    let series = controller.series();

    assert_abs_diff_eq!(series.y[0], params.a, epsilon = 1e-6);
    assert_abs_diff_eq!(*series.y.last().unwrap(), params.k, epsilon = 1e-6);
}

#[test]
fn rejected_edit_is_reported_and_recoverable() {
    let mut controller = default_controller();
    let good = controller.series();

    let err = controller
        .on_change(ValueChanged { name: ParamName::A, old: 0.0, new: 5.0 })
        .unwrap_err();
    assert!(err.to_string().contains("'k' must be greater than 'a'"));
    assert_eq!(controller.series(), good);

    // Raising k above a makes the set valid again.
    let series = controller
        .on_change(ValueChanged { name: ParamName::K, old: 1.0, new: 6.0 })
        .unwrap();
    assert_eq!(series.params, Params { a: 5.0, k: 6.0, ..Params::default() });
    assert!(controller.is_current());
}

#[test]
fn zero_v_is_rejected() {
    let mut controller = default_controller();
    let err = controller
        .on_change(ValueChanged { name: ParamName::V, old: 1.0, new: 0.0 })
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter 'v' must be positive: [v=0]");
}
