//! Scenarios that use velitherm the way downstream code does,
//! composing the pressure model with the adiabatic model.

use anyhow::{Context, Result, ensure};
use velitherm::{
    LapseRate, Length, P0, Pressure, T0, adiabatic_cooling, pressure_from_standard_altitude,
    standard_pressure,
};

#[cfg(test)]
mod tests;

/// Recovers the dry adiabatic lapse rate by lifting a parcel at `T0`
/// from sea level through `height` of standard atmosphere.
pub fn derived_lapse_rate(height: Length) -> Result<LapseRate> {
    ensure!(height.is_positive(), "height must be positive, got {height:?}");

    let top = standard_pressure(height).context("pressure at top of lift")?;
    let bottom = standard_pressure(Length::ZERO).context("pressure at bottom of lift")?;
    let lifted = adiabatic_cooling(T0, top, bottom).context("lifting parcel")?;

    let rate = (T0 - lifted) / height;
    tracing::debug!(?height, ?rate, "derived lapse rate");
    Ok(rate)
}

/// Same as [`derived_lapse_rate`], but with the reference pressure passed explicitly
/// in hectopascals, as a hectopascal-based caller would.
pub fn derived_lapse_rate_hpa(height: Length, reference_hpa: f64) -> Result<LapseRate> {
    let reference = Pressure::from_hectopascals(reference_hpa);
    let top = pressure_from_standard_altitude(height, reference)?;
    let bottom = pressure_from_standard_altitude(Length::ZERO, reference)?;
    ensure!(bottom == reference, "reference level pressure drifted: {bottom:?} != {reference:?}");

    let lifted = adiabatic_cooling(T0, top, bottom)?;
    Ok((T0 - lifted) / height)
}

/// Checks that the standard sea level pressure is the documented 1013.25 hPa.
pub fn check_reference_scale() -> Result<()> {
    let hpa = P0.into_hectopascals();
    ensure!((hpa - 1013.25).abs() < 1e-9, "P0 is {hpa} hPa");
    Ok(())
}
