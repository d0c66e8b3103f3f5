//! Dry adiabatic processes.

use crate::{Error, POISSON_EXPONENT, POTENTIAL_TEMPERATURE_REFERENCE, Pressure, Temp, validate};


/// Computes the temperature of a dry air parcel
/// after it is moved adiabatically from `reference_pressure` to `pressure`,
/// given its `temperature` at `reference_pressure`.
///
/// This is the Poisson relation `T = T_ref * (p / p_ref) ^ (R / cp)`.
/// A rising parcel (`pressure < reference_pressure`) cools and a sinking one warms.
/// The two pressures may be in any scale as long as they are the same,
/// which [`Pressure`] guarantees.
///
/// The temperature is returned unchanged when both pressures are equal.
///
/// # Errors
/// - [`Error::NonPositive`] or [`Error::NonFinite`] if `temperature` is not above absolute zero
///   or either pressure is not positive.
/// - [`Error::NonFiniteResult`] or [`Error::DegenerateResult`]
///   if the pressure ratio is too extreme to be represented.
pub fn adiabatic_cooling(
    temperature: Temp,
    pressure: Pressure,
    reference_pressure: Pressure,
) -> Result<Temp, Error> {
    const OPERATION: &str = "adiabatic_cooling";

    let temperature = validate::absolute_temp(temperature, OPERATION)?;
    let pressure = validate::positive(pressure, OPERATION)?;
    let reference_pressure = validate::positive(reference_pressure, OPERATION)?;

    let ratio = pressure / reference_pressure;
    let kelvins = temperature.into_kelvins() * ratio.powf(POISSON_EXPONENT);
    validate::positive_result(kelvins, OPERATION).map(Temp::from_kelvins)
}

/// Computes the potential temperature of a dry air parcel at `pressure`,
/// i.e. its temperature once brought adiabatically to 1000 hPa.
pub fn potential_temperature(temperature: Temp, pressure: Pressure) -> Result<Temp, Error> {
    adiabatic_cooling(temperature, POTENTIAL_TEMPERATURE_REFERENCE, pressure)
}

/// Inverts [`potential_temperature`]:
/// computes the actual temperature at `pressure` of a parcel with the given potential temperature.
pub fn temperature_from_potential(potential: Temp, pressure: Pressure) -> Result<Temp, Error> {
    adiabatic_cooling(potential, pressure, POTENTIAL_TEMPERATURE_REFERENCE)
}
