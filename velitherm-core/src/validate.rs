//! Input and output checks shared by the thermodynamic functions.

use crate::{
    Error, Length, Quantity, QuantityBase, STANDARD_LAYER_CEILING, T0, Temp, isa_temp_lapse,
};

pub(crate) fn finite<Base: QuantityBase>(
    value: Quantity<Base>,
    operation: &'static str,
) -> Result<Quantity<Base>, Error> {
    finite_named(value.0, Base::NAME, operation).map(Quantity::new)
}

pub(crate) fn positive<Base: QuantityBase>(
    value: Quantity<Base>,
    operation: &'static str,
) -> Result<Quantity<Base>, Error> {
    positive_named(value.0, Base::NAME, operation).map(Quantity::new)
}

/// Absolute temperatures must lie strictly above absolute zero.
pub(crate) fn absolute_temp(temp: Temp, operation: &'static str) -> Result<Temp, Error> {
    positive_named(temp.into_kelvins(), "Temp", operation).map(Temp::from_kelvins)
}

fn finite_named(value: f64, quantity: &'static str, operation: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(operation, quantity, value, "rejected non-finite input");
        Err(Error::NonFinite { operation, quantity, value })
    }
}

fn positive_named(
    value: f64,
    quantity: &'static str,
    operation: &'static str,
) -> Result<f64, Error> {
    let value = finite_named(value, quantity, operation)?;
    if value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(operation, quantity, value, "rejected non-positive input");
        Err(Error::NonPositive { operation, quantity, value })
    }
}

/// Computes `T(h) / T0` of the standard troposphere,
/// rejecting altitudes where it would not be positive.
///
/// Exactly 1 at zero altitude.
pub(crate) fn standard_temp_ratio(altitude: Length, operation: &'static str) -> Result<f64, Error> {
    let altitude = finite(altitude, operation)?;
    let ratio = temp_ratio_at(altitude);
    if ratio > 0.0 {
        Ok(ratio)
    } else {
        tracing::debug!(
            operation,
            altitude = altitude.into_meters(),
            "altitude beyond standard layer",
        );
        Err(Error::AltitudeBeyondLayer {
            operation,
            altitude_m: altitude.into_meters(),
            ceiling_m: STANDARD_LAYER_CEILING.into_meters(),
        })
    }
}

/// `T(h) / T0` without any check on the sign of the result.
pub(crate) fn temp_ratio_at(altitude: Length) -> f64 {
    1.0 - isa_temp_lapse(altitude) / T0.from_abs_zero()
}

/// Ensures a computed value is finite and strictly positive.
pub(crate) fn positive_result(value: f64, operation: &'static str) -> Result<f64, Error> {
    if !value.is_finite() {
        tracing::debug!(operation, value, "non-finite result");
        Err(Error::NonFiniteResult { operation })
    } else if value <= 0.0 {
        tracing::debug!(operation, value, "degenerate result");
        Err(Error::DegenerateResult { operation, value })
    } else {
        Ok(value)
    }
}

/// Ensures a computed value is finite.
pub(crate) fn finite_result(value: f64, operation: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(operation, value, "non-finite result");
        Err(Error::NonFiniteResult { operation })
    }
}
