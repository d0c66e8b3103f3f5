use crate::{Length, range_steps};

#[test]
fn range_steps_exact() {
    assert_eq!(range_steps(0.0, 2.0, 0.5).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn range_steps_excess() {
    assert_eq!(range_steps(0.0, 2.3, 0.5).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.3]);
}

#[test]
fn range_steps_descending() {
    assert_eq!(range_steps(1.0, 0.0, -0.5).collect::<Vec<_>>(), vec![1.0, 0.5, 0.0]);
}

#[test]
fn range_steps_empty() {
    assert_eq!(range_steps(0.3, 0.2, 0.5).collect::<Vec<_>>(), Vec::<f64>::new());
}

#[test]
fn range_steps_lengths() {
    let steps: Vec<_> = range_steps(
        Length::from_meters(0.0),
        Length::from_meters(250.0),
        Length::from_meters(100.0),
    )
    .map(Length::into_meters)
    .collect();
    assert_eq!(steps, vec![0.0, 100.0, 200.0, 250.0]);
}

#[test]
#[should_panic = "must be a finite positive or negative"]
fn range_steps_zero_interval() { _ = range_steps(0.0, 1.0, 0.0); }
