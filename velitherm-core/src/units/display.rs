use std::fmt;

use crate::{Length, Pressure, QuantityTrait, Temp};

pub trait UnitEnum: Copy + Eq + strum::IntoEnumIterator {
    type Quantity: QuantityTrait;

    fn to_str(self) -> &'static str;

    fn float_to_quantity(self) -> fn(f64) -> Self::Quantity;
    fn quantity_to_float(self) -> fn(Self::Quantity) -> f64;

    /// Displays `quantity` in this unit, rounded to `decimals` places.
    fn format(self, quantity: Self::Quantity, decimals: usize) -> Formatted {
        Formatted { value: self.quantity_to_float()(quantity), decimals, unit: self.to_str() }
    }
}

/// A quantity converted to a display unit.
pub struct Formatted {
    value:    f64,
    decimals: usize,
    unit:     &'static str,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*} {}", self.decimals, self.value, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum PressureUnit {
    Pascals,
    Hectopascals,
    Kilopascals,
    InchesOfMercury,
    MillimetersOfMercury,
}

impl UnitEnum for PressureUnit {
    type Quantity = Pressure;

    fn to_str(self) -> &'static str {
        match self {
            Self::Pascals => "Pa",
            Self::Hectopascals => "hPa",
            Self::Kilopascals => "kPa",
            Self::InchesOfMercury => "inHg",
            Self::MillimetersOfMercury => "mmHg",
        }
    }

    #[inline]
    fn float_to_quantity(self) -> fn(f64) -> Pressure {
        match self {
            Self::Pascals => Pressure::from_pascals,
            Self::Hectopascals => Pressure::from_hectopascals,
            Self::Kilopascals => Pressure::from_kilopascals,
            Self::InchesOfMercury => Pressure::from_inhg,
            Self::MillimetersOfMercury => Pressure::from_mmhg,
        }
    }

    #[inline]
    fn quantity_to_float(self) -> fn(Pressure) -> f64 {
        match self {
            Self::Pascals => Pressure::into_pascals,
            Self::Hectopascals => Pressure::into_hectopascals,
            Self::Kilopascals => Pressure::into_kilopascals,
            Self::InchesOfMercury => Pressure::into_inhg,
            Self::MillimetersOfMercury => Pressure::into_mmhg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
}

impl UnitEnum for LengthUnit {
    type Quantity = Length;

    fn to_str(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Feet => "ft",
        }
    }

    #[inline]
    fn float_to_quantity(self) -> fn(f64) -> Length {
        match self {
            Self::Meters => Length::from_meters,
            Self::Kilometers => Length::from_km,
            Self::Feet => Length::from_feet,
        }
    }

    #[inline]
    fn quantity_to_float(self) -> fn(Length) -> f64 {
        match self {
            Self::Meters => Length::into_meters,
            Self::Kilometers => Length::into_km,
            Self::Feet => Length::into_feet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum TempUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl UnitEnum for TempUnit {
    type Quantity = Temp;

    fn to_str(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "\u{b0}C",
            Self::Fahrenheit => "\u{b0}F",
        }
    }

    #[inline]
    fn float_to_quantity(self) -> fn(f64) -> Temp {
        match self {
            Self::Kelvin => Temp::from_kelvins,
            Self::Celsius => Temp::from_celsius,
            Self::Fahrenheit => Temp::from_fahrenheit,
        }
    }

    #[inline]
    fn quantity_to_float(self) -> fn(Temp) -> f64 {
        match self {
            Self::Kelvin => Temp::into_kelvins,
            Self::Celsius => Temp::into_celsius,
            Self::Fahrenheit => Temp::into_fahrenheit,
        }
    }
}
