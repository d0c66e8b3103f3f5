use serde::Deserialize;
use serde::de::IntoDeserializer;
use serde::de::value::F64Deserializer;
use strum::IntoEnumIterator;

use crate::{
    Length, LengthUnit, Pressure, PressureMetadata, PressureUnit, Temp, TempDelta, TempUnit,
    UnitEnum,
};

#[test]
fn pressure_conversions() {
    let standard = Pressure::from_hectopascals(1013.25);
    assert_eq!(standard.into_pascals(), 101325.0);
    standard.assert_approx(Pressure::from_inhg(29.92), Pressure::from_pascals(5.0)).unwrap();
    standard.assert_approx(Pressure::from_mmhg(760.0), Pressure::from_pascals(0.1)).unwrap();
    standard
        .assert_approx(Pressure::from_kilopascals(101.325), Pressure::from_pascals(1e-6))
        .unwrap();
}

#[test]
fn length_conversions() {
    Length::from_feet(36089.24)
        .assert_approx(Length::from_meters(11000.0), Length::from_meters(0.01))
        .unwrap();
    assert!((Length::from_km(1.5).into_feet() - 4921.26).abs() < 0.01);
}

#[test]
fn temp_conversions() {
    let epsilon = TempDelta::from_kelvins(1e-9);
    Temp::from_celsius(15.0).assert_approx(Temp::from_kelvins(288.15), epsilon).unwrap();
    Temp::from_fahrenheit(59.0).assert_approx(Temp::from_celsius(15.0), epsilon).unwrap();
    assert!((Temp::ABSOLUTE_ZERO.into_celsius() + 273.15).abs() < 1e-9);
}

#[test]
fn temp_arithmetic() {
    let warm = Temp::from_kelvins(300.0);
    let cool = warm - TempDelta::from_kelvins(12.5);
    assert_eq!(warm - cool, TempDelta::from_kelvins(12.5));
    assert_eq!(cool + TempDelta::from_kelvins(12.5), warm);
}

#[test]
fn lapse_rate_over_length() {
    let rate = TempDelta::from_kelvins(6.5) / Length::from_km(1.0);
    assert!((rate.into_kelvins_per_meter() - 0.0065).abs() < 1e-12);
    (rate * Length::from_meters(-100.0))
        .assert_approx(TempDelta::from_kelvins(-0.65), TempDelta::from_kelvins(1e-12))
        .unwrap();
    assert_eq!(Length::from_meters(100.0) * rate, rate.over(Length::from_meters(100.0)));
}

#[test]
fn assert_approx_rejects_outliers() {
    let err = Pressure::from_pascals(100.0)
        .assert_approx(Pressure::from_pascals(90.0), Pressure::from_pascals(1.0))
        .unwrap_err();
    assert_eq!(err.actual, Pressure::from_pascals(100.0));
    assert!(err.to_string().contains("Pressure(90 Pa)"), "{err}");

    Pressure::from_pascals(f64::NAN)
        .assert_approx(Pressure::from_pascals(90.0), Pressure::from_pascals(1.0))
        .unwrap_err();
}

#[test]
fn unit_enums_round_trip() {
    for unit in PressureUnit::iter() {
        let pascals = Pressure::from_pascals(1234.5);
        let pressure = unit.float_to_quantity()(unit.quantity_to_float()(pascals));
        pressure.assert_approx(pascals, Pressure::from_pascals(1e-6)).unwrap();
    }
    for unit in LengthUnit::iter() {
        let length = unit.float_to_quantity()(unit.quantity_to_float()(Length::from_meters(-42.0)));
        length.assert_approx(Length::from_meters(-42.0), Length::from_meters(1e-9)).unwrap();
    }
    for unit in TempUnit::iter() {
        let temp = unit.float_to_quantity()(unit.quantity_to_float()(Temp::from_kelvins(250.0)));
        temp.assert_approx(Temp::from_kelvins(250.0), TempDelta::from_kelvins(1e-9)).unwrap();
    }
}

#[test]
fn format_with_unit() {
    assert_eq!(
        PressureUnit::Hectopascals.format(Pressure::from_pascals(101325.0), 2).to_string(),
        "1013.25 hPa"
    );
    assert_eq!(LengthUnit::Feet.format(Length::from_meters(0.3048), 0).to_string(), "1 ft");
    assert_eq!(TempUnit::Celsius.format(Temp::from_kelvins(288.15), 1).to_string(), "15.0 \u{b0}C");
}

#[test]
fn pressure_metadata_bounds() {
    let metadata = PressureMetadata::default();
    assert!(metadata.contains(&metadata.default));
    assert!(!metadata.contains(&Pressure::from_hectopascals(500.0)));
    assert_eq!(metadata.unit, PressureUnit::Hectopascals);
}

#[test]
fn deserialize_rejects_non_finite() {
    let pressure: Pressure = serde_json::from_str("101325.0").unwrap();
    assert_eq!(pressure, Pressure::from_pascals(101325.0));

    // serde_json refuses out-of-range literals before they reach the quantity
    serde_json::from_str::<Pressure>("1e400").unwrap_err();

    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let deserializer: F64Deserializer<serde::de::value::Error> = value.into_deserializer();
        let err = Pressure::deserialize(deserializer).unwrap_err();
        assert_eq!(err.to_string(), "non-finite quantity");
    }

    let deserializer: F64Deserializer<serde::de::value::Error> = 850.0_f64.into_deserializer();
    assert_eq!(Length::deserialize(deserializer).unwrap(), Length::from_meters(850.0));
}
