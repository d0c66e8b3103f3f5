//! Configurable standard atmosphere referenced to a local altimeter setting.

use crate::{
    Error, ISA_SEA_LEVEL_AIR_DENSITY, Length, P0, Pressure, PressureMetadata,
    TROPOPAUSE_ALTITUDE, Temp, adiabatic_cooling, air_density, altitude_from_standard_pressure,
    pressure_from_standard_altitude, range_steps, temperature_from_standard_altitude, validate,
};


/// The standard troposphere, shifted so that the pressure at zero altitude is `reference_pressure`.
///
/// Setting `reference_pressure` to the QNH of an aerodrome
/// models the local atmosphere as an altimeter set to QNH sees it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct StandardAtmosphere {
    /// Pressure at zero altitude.
    pub reference_pressure: Pressure,
}

impl Default for StandardAtmosphere {
    fn default() -> Self { Self { reference_pressure: P0 } }
}

impl StandardAtmosphere {
    /// Creates an atmosphere with the given pressure at zero altitude.
    pub fn new(reference_pressure: Pressure) -> Result<Self, Error> {
        let this = Self { reference_pressure };
        this.validate()?;
        Ok(this)
    }

    /// Checks that the configuration can be used for computation.
    ///
    /// Reference pressures outside the range ever observed at sea level
    /// are accepted with a warning, since the reference level need not be at sea level.
    pub fn validate(&self) -> Result<(), Error> {
        validate::positive(self.reference_pressure, "StandardAtmosphere::validate")?;

        let metadata = PressureMetadata::default();
        if !metadata.contains(&self.reference_pressure) {
            tracing::warn!(
                reference_hpa = self.reference_pressure.into_hectopascals(),
                min_hpa = metadata.min.into_hectopascals(),
                max_hpa = metadata.max.into_hectopascals(),
                "reference pressure is outside the range observed at sea level",
            );
        }
        Ok(())
    }

    /// Whether `altitude` lies in the range where the single-layer model is accurate.
    #[must_use]
    pub fn is_within_troposphere(altitude: Length) -> bool {
        altitude.is_finite() && altitude <= TROPOPAUSE_ALTITUDE
    }

    /// Pressure at `altitude` above the reference level.
    pub fn pressure_at(&self, altitude: Length) -> Result<Pressure, Error> {
        pressure_from_standard_altitude(altitude, self.reference_pressure)
    }

    /// Standard temperature at `altitude`.
    pub fn temperature_at(&self, altitude: Length) -> Result<Temp, Error> {
        temperature_from_standard_altitude(altitude)
    }

    /// Altitude above the reference level at which the pressure is `pressure`.
    pub fn altitude_at(&self, pressure: Pressure) -> Result<Length, Error> {
        altitude_from_standard_pressure(pressure, self.reference_pressure)
    }

    /// Temperature of a dry parcel lifted from the reference level to `altitude`,
    /// starting at `surface_temp`.
    pub fn lifted_parcel_temperature(
        &self,
        surface_temp: Temp,
        altitude: Length,
    ) -> Result<Temp, Error> {
        adiabatic_cooling(surface_temp, self.pressure_at(altitude)?, self.reference_pressure)
    }

    /// Computes the barometrics at `altitude`.
    pub fn barometrics(&self, altitude: Length) -> Result<Barometrics, Error> {
        compute_barometric(altitude, self.reference_pressure)
    }

    /// Barometrics from `start` to `end` in steps of `interval`, always including `end`.
    ///
    /// # Panics
    /// Panics if `interval` is not a finite positive or negative value.
    pub fn profile(
        &self,
        start: Length,
        end: Length,
        interval: Length,
    ) -> impl Iterator<Item = Result<Barometrics, Error>> + '_ {
        range_steps(start, end, interval).map(|altitude| self.barometrics(altitude))
    }
}

/// Computes the barometrics at an airborne position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barometrics {
    /// Altitude above the reference level.
    pub altitude:          Length,
    /// Atmospheric pressure at the given altitude.
    pub pressure:          Pressure,
    /// Indicated pressure altitude at the given altitude, i.e. altitude relative to [`P0`].
    pub pressure_altitude: Length,
    /// Outside temperature at the given altitude.
    pub temp:              Temp,
    /// Air density in kg/m^3.
    pub air_density:       f64,
    /// Ratio of TAS/IAS at the given altitude.
    /// Equal to `sqrt(sea_level_air_density / air_density)`.
    pub tas_ias_ratio:     f64,
}

impl Barometrics {
    /// Computes the true airspeed from indicated airspeed, in any speed unit.
    #[must_use]
    pub fn true_airspeed(&self, indicated_airspeed: f64) -> f64 {
        indicated_airspeed * self.tas_ias_ratio
    }

    /// Computes the indicated airspeed from true airspeed, in any speed unit.
    #[must_use]
    pub fn indicated_airspeed(&self, true_airspeed: f64) -> f64 {
        true_airspeed / self.tas_ias_ratio
    }
}

/// Computes pressure, temperature and density at `altitude`
/// above the level where the pressure is `reference_pressure`.
pub fn compute_barometric(
    altitude: Length,
    reference_pressure: Pressure,
) -> Result<Barometrics, Error> {
    let pressure = pressure_from_standard_altitude(altitude, reference_pressure)?;
    let temp = temperature_from_standard_altitude(altitude)?;
    let pressure_altitude = altitude_from_standard_pressure(pressure, P0)?;
    let air_density = air_density(pressure, temp)?;
    let tas_ias_ratio = (ISA_SEA_LEVEL_AIR_DENSITY / air_density).sqrt();

    Ok(Barometrics { altitude, pressure, pressure_altitude, temp, air_density, tas_ias_ratio })
}
