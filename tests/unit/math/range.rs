use super::*;

fn collect(r: StepRange) -> Vec<f64> {
    r.iter().collect()
}

#[test]
fn bounded_difference_caps_when_asked() {
    assert_eq!(bounded_difference(10.0, 5.0, None), 5.0);
    assert_eq!(bounded_difference(5.0, 10.0, None), 5.0);
    assert_eq!(bounded_difference(1990.0, 2022.0, Some(40.0)), 32.0);
    assert_eq!(bounded_difference(1900.0, 2022.0, Some(40.0)), 40.0);
}

#[test]
fn length_cap_truncates() {
    let r = step_range(0.0, 10.0, Some(5), 1.0).unwrap();
    assert_eq!(collect(r), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn increment_controls_spacing() {
    let r = step_range(0.0, 10.0, None, 2.0).unwrap();
    assert_eq!(r.len(), 6);
    assert_eq!(collect(r), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn equal_bounds_yield_one_element() {
    let r = step_range(2015.0, 2015.0, None, 1.0).unwrap();
    assert_eq!(collect(r), vec![2015.0]);
}

#[test]
fn partial_last_step_is_dropped() {
    let r = step_range(0.0, 1.0, None, 0.3).unwrap();
    assert_eq!(r.len(), 4);
}

#[test]
fn counts_up_from_a_even_when_b_is_smaller() {
    let r = step_range(5.0, 2.0, None, 1.0).unwrap();
    assert_eq!(collect(r), vec![5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn ranges_are_restartable() {
    let r = step_range(0.25, 2.0, None, 0.25).unwrap();
    let first: Vec<f64> = (&r).into_iter().collect();
    let second: Vec<f64> = r.into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
    assert_eq!(r.iter().len(), 8);
    assert_eq!(r.get(7), Some(2.0));
    assert_eq!(r.get(8), None);
}

#[test]
fn zero_cap_is_empty() {
    let r = step_range(0.0, 10.0, Some(0), 1.0).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.iter().next(), None);
}

#[test]
fn rejects_bad_increment() {
    for inc in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            step_range(0.0, 1.0, None, inc),
            Err(ChoroError::Validation(_))
        ));
    }
}
