use std::marker::PhantomData;
use std::{cmp, fmt, iter, ops};

mod display;
pub use display::{Formatted, LengthUnit, PressureUnit, TempUnit, UnitEnum};
mod temp;
pub use temp::{Temp, TempDelta};

#[cfg(test)]
mod tests;

/// Converts meters to feet.
pub const FEET_PER_METER: f64 = 1.0 / 0.3048;
/// Converts hectopascals to pascals.
pub const PASCALS_PER_HECTOPASCAL: f64 = 100.;
/// Converts kilopascals to pascals.
pub const PASCALS_PER_KILOPASCAL: f64 = 1000.;
/// Converts inches of mercury (at 0 °C) to pascals.
pub const PASCALS_PER_INHG: f64 = 3386.389;
/// Converts millimeters of mercury to pascals.
pub const PASCALS_PER_MMHG: f64 = 133.322387415;

/// A scalar physical quantity in double precision.
///
/// The raw value is always stored in the SI unit of `Base`,
/// e.g. meters for [`Length`] and pascals for [`Pressure`].
pub struct Quantity<Base>(pub f64, pub PhantomData<Base>);

/// Describes the dimension of a [`Quantity`].
pub trait QuantityBase {
    /// Human-readable name of the dimension, used in diagnostics.
    const NAME: &'static str;
    /// Symbol of the SI unit the raw value is stored in.
    const SYMBOL: &'static str;
}

impl<Base> Quantity<Base> {
    pub const ZERO: Self = Self(0., PhantomData);

    pub const fn new(value: f64) -> Self { Self(value, PhantomData) }
}

pub trait QuantityTrait: Sized {
    fn into_raw(self) -> f64;
    fn from_raw(value: f64) -> Self;
}

impl<Base> QuantityTrait for Quantity<Base> {
    fn into_raw(self) -> f64 { self.0 }

    fn from_raw(value: f64) -> Self { Self(value, PhantomData) }
}

impl<Base> Default for Quantity<Base> {
    fn default() -> Self { Self::ZERO }
}

impl<Base> num_traits::Zero for Quantity<Base> {
    fn zero() -> Self { Self::ZERO }

    fn is_zero(&self) -> bool { self.0 == 0. }
}

impl<Base> Clone for Quantity<Base> {
    fn clone(&self) -> Self { *self }
}

impl<Base> Copy for Quantity<Base> {}

impl<Base> PartialEq for Quantity<Base> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<Base> PartialOrd for Quantity<Base> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<Base: QuantityBase> fmt::Debug for Quantity<Base> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} {})", Base::NAME, self.0, Base::SYMBOL)
    }
}

impl<Base> ops::Add for Quantity<Base> {
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<Base> ops::AddAssign for Quantity<Base> {
    fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl<Base> ops::Sub for Quantity<Base> {
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<Base> ops::SubAssign for Quantity<Base> {
    fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl<Base> ops::Mul<f64> for Quantity<Base> {
    type Output = Self;

    fn mul(self, other: f64) -> Self { Self(self.0 * other, PhantomData) }
}

impl<Base> ops::MulAssign<f64> for Quantity<Base> {
    fn mul_assign(&mut self, other: f64) { self.0 *= other; }
}

impl<Base> ops::Div<f64> for Quantity<Base> {
    type Output = Self;

    fn div(self, other: f64) -> Self { Self(self.0 / other, PhantomData) }
}

impl<Base> ops::DivAssign<f64> for Quantity<Base> {
    fn div_assign(&mut self, other: f64) { self.0 /= other; }
}

/// Dividing two quantities of the same dimension yields a dimensionless ratio.
impl<Base> ops::Div for Quantity<Base> {
    type Output = f64;

    fn div(self, other: Self) -> f64 { self.0 / other.0 }
}

impl<Base> ops::Neg for Quantity<Base> {
    type Output = Self;

    fn neg(self) -> Self { Self(-self.0, PhantomData) }
}

impl<Base> iter::Sum for Quantity<Base> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |sum, value| sum + value)
    }
}

impl<Base> Quantity<Base> {
    #[must_use]
    pub fn is_positive(self) -> bool { self.0 > 0. }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    #[must_use]
    pub fn min(self, other: Self) -> Self { Self(self.0.min(other.0), PhantomData) }

    #[must_use]
    pub fn max(self, other: Self) -> Self { Self(self.0.max(other.0), PhantomData) }

    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0), PhantomData)
    }
}

impl<Base: QuantityBase> Quantity<Base> {
    /// Asserts that the quantity is within `epsilon` of `other`.
    ///
    /// # Errors
    /// If the absolute difference between `self` and `other` is greater than `epsilon`.
    pub fn assert_approx(
        self,
        other: Self,
        epsilon: Self,
    ) -> Result<(), AssertApproxError<Self, Self>> {
        if (self - other).abs() > epsilon || !self.is_finite() {
            Err(AssertApproxError { actual: self, expect: other, epsilon })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("expected {expect:?} \u{b1} {epsilon:?}, got {actual:?}")]
pub struct AssertApproxError<T: fmt::Debug, E: fmt::Debug> {
    pub actual:  T,
    pub expect:  T,
    pub epsilon: E,
}

pub struct LengthBase;

impl QuantityBase for LengthBase {
    const NAME: &'static str = "Length";
    const SYMBOL: &'static str = "m";
}

/// A vertical or horizontal distance, stored in meters.
///
/// Altitudes are lengths above a reference level and may be negative.
pub type Length = Quantity<LengthBase>;

impl Length {
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self { Self::new(meters) }

    #[must_use]
    pub const fn into_meters(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_km(km: f64) -> Self { Self::new(km * 1000.) }

    #[must_use]
    pub const fn into_km(self) -> f64 { self.0 / 1000. }

    #[must_use]
    pub const fn from_feet(feet: f64) -> Self { Self::new(feet / FEET_PER_METER) }

    #[must_use]
    pub const fn into_feet(self) -> f64 { self.0 * FEET_PER_METER }
}

pub struct PressureBase;

impl QuantityBase for PressureBase {
    const NAME: &'static str = "Pressure";
    const SYMBOL: &'static str = "Pa";
}

/// Atmospheric pressure, stored in pascals.
pub type Pressure = Quantity<PressureBase>;

impl Pressure {
    #[must_use]
    pub const fn from_pascals(pascals: f64) -> Self { Self::new(pascals) }

    #[must_use]
    pub const fn into_pascals(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_hectopascals(hpa: f64) -> Self { Self::new(hpa * PASCALS_PER_HECTOPASCAL) }

    #[must_use]
    pub const fn into_hectopascals(self) -> f64 { self.0 / PASCALS_PER_HECTOPASCAL }

    #[must_use]
    pub const fn from_kilopascals(kpa: f64) -> Self { Self::new(kpa * PASCALS_PER_KILOPASCAL) }

    #[must_use]
    pub const fn into_kilopascals(self) -> f64 { self.0 / PASCALS_PER_KILOPASCAL }

    #[must_use]
    pub const fn from_inhg(inhg: f64) -> Self { Self::new(inhg * PASCALS_PER_INHG) }

    #[must_use]
    pub const fn into_inhg(self) -> f64 { self.0 / PASCALS_PER_INHG }

    #[must_use]
    pub const fn from_mmhg(mmhg: f64) -> Self { Self::new(mmhg * PASCALS_PER_MMHG) }

    #[must_use]
    pub const fn into_mmhg(self) -> f64 { self.0 / PASCALS_PER_MMHG }
}

pub struct LapseRateBase;

impl QuantityBase for LapseRateBase {
    const NAME: &'static str = "LapseRate";
    const SYMBOL: &'static str = "K/m";
}

/// Rate of temperature decrease per unit of altitude gained, in K/m.
///
/// Positive values mean the air cools with height.
pub type LapseRate = Quantity<LapseRateBase>;

impl LapseRate {
    #[must_use]
    pub const fn from_kelvins_per_meter(rate: f64) -> Self { Self::new(rate) }

    #[must_use]
    pub const fn into_kelvins_per_meter(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_kelvins_per_km(rate: f64) -> Self { Self::new(rate / 1000.) }

    #[must_use]
    pub const fn into_kelvins_per_km(self) -> f64 { self.0 * 1000. }

    /// Temperature change accumulated over `distance`.
    ///
    /// The output has the same sign as `distance`.
    #[must_use]
    pub const fn over(self, distance: Length) -> TempDelta {
        TempDelta::from_kelvins(self.0 * distance.into_meters())
    }
}

impl ops::Mul<Length> for LapseRate {
    type Output = TempDelta;

    fn mul(self, rhs: Length) -> TempDelta { self.over(rhs) }
}

impl ops::Mul<LapseRate> for Length {
    type Output = TempDelta;

    fn mul(self, rhs: LapseRate) -> TempDelta { rhs.over(self) }
}

/// Average lapse rate between two temperatures separated by `distance`.
impl ops::Div<Length> for TempDelta {
    type Output = LapseRate;

    fn div(self, rhs: Length) -> LapseRate {
        LapseRate::from_kelvins_per_meter(self.into_kelvins() / rhs.into_meters())
    }
}

impl<Base> serde::Serialize for Quantity<Base> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, Base> serde::Deserialize<'de> for Quantity<Base> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}

#[cfg(feature = "schema")]
impl<Base: QuantityBase> schemars::JsonSchema for Quantity<Base> {
    fn schema_name() -> std::borrow::Cow<'static, str> { Base::NAME.into() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <f64 as schemars::JsonSchema>::json_schema(generator)
    }
}

/// Default, bounds and display unit of a configurable quantity.
#[derive(Clone)]
pub struct QuantityMetadataWithUnit<T, U> {
    pub default:   T,
    pub unit:      U,
    pub min:       T,
    pub max:       T,
    pub precision: Option<T>,
}

impl<T: PartialOrd, U> QuantityMetadataWithUnit<T, U> {
    /// Whether `value` lies within `min..=max`.
    pub fn contains(&self, value: &T) -> bool { *value >= self.min && *value <= self.max }
}

pub type PressureMetadata = QuantityMetadataWithUnit<Pressure, PressureUnit>;

/// Sea level pressures ever observed lie well within this range.
impl Default for PressureMetadata {
    fn default() -> Self {
        Self {
            default:   Pressure::from_hectopascals(1013.25),
            unit:      PressureUnit::Hectopascals,
            min:       Pressure::from_hectopascals(870.0),
            max:       Pressure::from_hectopascals(1085.0),
            precision: Some(Pressure::from_hectopascals(0.01)),
        }
    }
}
