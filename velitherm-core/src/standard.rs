//! Pressure and temperature of the standard troposphere as a function of altitude.
//!
//! All functions here model a single layer with the constant lapse rate [`ISA_LAPSE_RATE`].
//! They remain continuous above [`TROPOPAUSE_ALTITUDE`](crate::TROPOPAUSE_ALTITUDE),
//! but lose accuracy there since the real atmosphere becomes isothermal.

use crate::{
    BAROMETRIC_EXPONENT, DRY_AIR_GAS_CONSTANT, Error, ISA_LAPSE_RATE, Length, P0, Pressure,
    STANDARD_LAYER_CEILING, T0, Temp, isa_temp_lapse, validate,
};


/// Computes the pressure at `altitude` above the level where the pressure is `reference_pressure`,
/// using the barometric formula of the standard troposphere:
///
/// ```text
/// p(h) = p_ref * (1 - L h / T0) ^ (g0 / (R L))
/// ```
///
/// The result is in the same scale as `reference_pressure`,
/// and equals it exactly when `altitude` is zero.
/// It strictly decreases as `altitude` increases.
///
/// # Errors
/// - [`Error::NonFinite`] or [`Error::NonPositive`] if the inputs are not finite
///   or `reference_pressure` is not positive.
/// - [`Error::AltitudeBeyondLayer`] if `altitude` is at or above [`STANDARD_LAYER_CEILING`].
/// - [`Error::NonFiniteResult`] if an extremely negative altitude overflows the result.
/// - [`Error::DegenerateResult`] if the result underflows to zero just below the ceiling.
pub fn pressure_from_standard_altitude(
    altitude: Length,
    reference_pressure: Pressure,
) -> Result<Pressure, Error> {
    const OPERATION: &str = "pressure_from_standard_altitude";

    let reference_pressure = validate::positive(reference_pressure, OPERATION)?;
    let ratio = validate::standard_temp_ratio(altitude, OPERATION)?;

    let pascals = reference_pressure.into_pascals() * ratio.powf(BAROMETRIC_EXPONENT);
    validate::positive_result(pascals, OPERATION).map(Pressure::from_pascals)
}

/// [`pressure_from_standard_altitude`] relative to the standard sea level pressure [`P0`].
pub fn standard_pressure(altitude: Length) -> Result<Pressure, Error> {
    pressure_from_standard_altitude(altitude, P0)
}

/// Computes the temperature of the standard troposphere at `altitude` above mean sea level.
///
/// # Errors
/// Returns [`Error::AltitudeBeyondLayer`] if the temperature would not be above absolute zero.
pub fn temperature_from_standard_altitude(altitude: Length) -> Result<Temp, Error> {
    const OPERATION: &str = "temperature_from_standard_altitude";

    validate::standard_temp_ratio(altitude, OPERATION)?;
    Ok(T0 - isa_temp_lapse(altitude))
}

/// Inverts [`pressure_from_standard_altitude`]:
/// computes the altitude above the `reference_pressure` level at which the pressure is `pressure`.
///
/// With `reference_pressure` set to [`P0`],
/// this is the pressure altitude read by an altimeter set to standard pressure.
/// The result is always an altitude that [`pressure_from_standard_altitude`] accepts,
/// i.e. below [`STANDARD_LAYER_CEILING`].
///
/// # Errors
/// - [`Error::NonFinite`] or [`Error::NonPositive`] if either pressure is not finite and positive.
/// - [`Error::DegenerateResult`] if `pressure` is so small relative to `reference_pressure`
///   that the altitude rounds onto the ceiling.
/// - [`Error::NonFiniteResult`] if an extreme pressure ratio overflows the result.
pub fn altitude_from_standard_pressure(
    pressure: Pressure,
    reference_pressure: Pressure,
) -> Result<Length, Error> {
    const OPERATION: &str = "altitude_from_standard_pressure";

    let pressure = validate::positive(pressure, OPERATION)?;
    let reference_pressure = validate::positive(reference_pressure, OPERATION)?;

    let temp_ratio = (pressure / reference_pressure).powf(BAROMETRIC_EXPONENT.recip());
    let meters = STANDARD_LAYER_CEILING.into_meters() * (1.0 - temp_ratio);
    let altitude = Length::from_meters(validate::finite_result(meters, OPERATION)?);

    // `1 - temp_ratio` rounds to 1 for tiny pressure ratios
    validate::positive_result(validate::temp_ratio_at(altitude), OPERATION)?;
    Ok(altitude)
}

/// Computes the density of dry air in kg/m^3 from the ideal gas law.
pub fn air_density(pressure: Pressure, temp: Temp) -> Result<f64, Error> {
    const OPERATION: &str = "air_density";

    let pressure = validate::positive(pressure, OPERATION)?;
    let temp = validate::absolute_temp(temp, OPERATION)?;

    validate::positive_result(
        pressure.into_pascals() / (DRY_AIR_GAS_CONSTANT * temp.into_kelvins()),
        OPERATION,
    )
}
