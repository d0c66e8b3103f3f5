//! Physical constants of the ICAO standard atmosphere and of dry air.
//!
//! Everything here is a `const`, so it is shared by every thread without synchronization.

use crate::{LapseRate, Length, Pressure, Temp, TempDelta};

/// Standard sea level temperature.
pub const T0: Temp = Temp::from_kelvins(288.15);

/// Standard sea level pressure (QNE), 1013.25 hPa.
pub const P0: Pressure = Pressure::from_pascals(101325.0);

/// Dry adiabatic lapse rate, i.e. the cooling per meter of a rising dry air parcel.
///
/// Equal to `g0 / cp`, about 9.76 K/km.
/// This is *not* the lapse rate of the standard atmosphere itself, see [`ISA_LAPSE_RATE`].
pub const GAMMA: LapseRate =
    LapseRate::from_kelvins_per_meter(STANDARD_GRAVITY / DRY_AIR_SPECIFIC_HEAT);

/// Temperature lapse rate of the standard atmosphere in the troposphere.
///
/// Consider using [`isa_temp_lapse`] instead for better dimensional safety.
pub const ISA_LAPSE_RATE: LapseRate = LapseRate::from_kelvins_per_km(6.5);

/// Standard gravity at Earth's surface, in m/s^2.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Specific gas constant for dry air, in SI unit (J/kg/K).
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.052874;

/// Specific heat of dry air at constant pressure, in J/kg/K.
///
/// Dry air is treated as an ideal diatomic gas, so `cp = 7/2 R`.
pub const DRY_AIR_SPECIFIC_HEAT: f64 = 3.5 * DRY_AIR_GAS_CONSTANT;

/// `R / cp`, the exponent of the Poisson relation for dry air.
pub const POISSON_EXPONENT: f64 = DRY_AIR_GAS_CONSTANT / DRY_AIR_SPECIFIC_HEAT;

/// g0 / R.
pub const G_OVER_R: f64 = STANDARD_GRAVITY / DRY_AIR_GAS_CONSTANT;

/// g0 / RL, in SI units, used as the exponent in the barometric formula in the troposphere.
pub const BAROMETRIC_EXPONENT: f64 = G_OVER_R / ISA_LAPSE_RATE.into_kelvins_per_meter();

/// Altitude of the tropopause, the upper limit of the accuracy of the single-layer model.
pub const TROPOPAUSE_ALTITUDE: Length = Length::from_meters(11000.0);

/// Standard temperature at tropopause.
pub const TROPOPAUSE_TEMPERATURE: Temp =
    Temp::from_kelvins(T0.into_kelvins() - isa_temp_lapse(TROPOPAUSE_ALTITUDE).into_kelvins());

/// Standard pressure at tropopause.
//
// The value needs to be hardcoded because powf is not const yet
pub const TROPOPAUSE_PRESSURE: Pressure = Pressure::from_pascals(22632.1);

/// Altitude at which the linearly extrapolated standard temperature reaches absolute zero.
///
/// The barometric formula has no real value at or above this altitude.
pub const STANDARD_LAYER_CEILING: Length =
    Length::from_meters(T0.into_kelvins() / ISA_LAPSE_RATE.into_kelvins_per_meter());

/// Reference level of potential temperature, 1000 hPa.
pub const POTENTIAL_TEMPERATURE_REFERENCE: Pressure = Pressure::from_hectopascals(1000.0);

/// Air density at standard sea level conditions, in kg/m^3.
pub const ISA_SEA_LEVEL_AIR_DENSITY: f64 =
    P0.into_pascals() / (DRY_AIR_GAS_CONSTANT * T0.into_kelvins());

/// Computes the ISA temperature change over a given distance.
///
/// The input and output have the same sign.
/// That is, if `distance` is positive, the output is positive,
/// indicating the temperature increase when altitude decreases by `distance`.
#[must_use]
pub const fn isa_temp_lapse(distance: Length) -> TempDelta { ISA_LAPSE_RATE.over(distance) }

/// Computes the cooling of a dry air parcel rising by `distance`,
/// using the linear approximation of the dry adiabat.
///
/// Use [`adiabatic_cooling`](crate::adiabatic_cooling) for the exact Poisson relation.
#[must_use]
pub const fn dry_adiabatic_lapse(distance: Length) -> TempDelta { GAMMA.over(distance) }
