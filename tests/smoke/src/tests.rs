use velitherm::{ErrorKind, GAMMA, Length, Pressure, T0, adiabatic_cooling};

use super::{check_reference_scale, derived_lapse_rate, derived_lapse_rate_hpa};

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn lapse_rate_over_100_meters() {
    init_tracing();
    let rate = derived_lapse_rate(Length::from_meters(100.0)).unwrap();
    assert!((rate - GAMMA).abs().into_kelvins_per_meter() < 1e-5, "{rate:?} vs {GAMMA:?}");
}

#[test]
fn lapse_rate_with_explicit_hpa_reference() {
    init_tracing();
    let rate = derived_lapse_rate_hpa(Length::from_meters(100.0), 1013.25).unwrap();
    assert!((rate - GAMMA).abs().into_kelvins_per_meter() < 1e-5, "{rate:?} vs {GAMMA:?}");

    let implicit = derived_lapse_rate(Length::from_meters(100.0)).unwrap();
    assert_eq!(rate, implicit);
}

#[test]
fn lapse_rate_rejects_zero_height() {
    init_tracing();
    derived_lapse_rate(Length::ZERO).unwrap_err();
}

#[test]
fn zero_pressure_surfaces_domain_error() {
    init_tracing();
    let err = derived_lapse_rate_hpa(Length::from_meters(100.0), 0.0).unwrap_err();
    let err = err.downcast::<velitherm::Error>().unwrap();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err =
        adiabatic_cooling(T0, Pressure::ZERO, Pressure::from_hectopascals(1000.0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn reference_scale() { check_reference_scale().unwrap(); }
