//! Unit conversions applied before station readings reach the binner, so
//! they line up with the metric sensor columns they get joined against.

/// Degrees Fahrenheit to degrees Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(deg_f: f64) -> f64 {
    (5.0 / 9.0) * (deg_f - 32.0)
}

/// Inches of mercury to millibars.
#[must_use]
pub fn inches_hg_to_millibar(inhg: f64) -> f64 {
    33.863_753 * inhg
}

/// How a requested column maps onto the station's raw export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Column is already in the desired unit.
    Identity,
    /// Raw column is °F, requested column is °C.
    FahrenheitToCelsius,
    /// Raw column is inHg, requested column is mbar.
    InchesHgToMillibar,
}

impl Conversion {
    /// Apply the conversion to a raw cell value. NaN passes through.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::FahrenheitToCelsius => fahrenheit_to_celsius(value),
            Self::InchesHgToMillibar => inches_hg_to_millibar(value),
        }
    }
}

/// Resolve a requested column to the raw export column it is served from and
/// the conversion to apply. Unknown columns pass through under their own name.
#[must_use]
pub fn source_column(requested: &str) -> (&str, Conversion) {
    match requested {
        "Temperature" => ("TemperatureF", Conversion::FahrenheitToCelsius),
        "Dewpoint" => ("DewpointF", Conversion::FahrenheitToCelsius),
        "Pressure" => ("PressureIn", Conversion::InchesHgToMillibar),
        other => (other, Conversion::Identity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_fixed_points() {
        assert!((fahrenheit_to_celsius(32.0)).abs() < 1e-12);
        assert!((fahrenheit_to_celsius(212.0) - 100.0).abs() < 1e-12);
        assert!((fahrenheit_to_celsius(-40.0) + 40.0).abs() < 1e-12);
    }

    #[test]
    fn standard_atmosphere_in_millibars() {
        // 29.92 inHg is the standard atmosphere, ~1013.2 mbar.
        assert!((inches_hg_to_millibar(29.92) - 1013.203).abs() < 0.05);
    }

    #[test]
    fn requested_columns_map_to_raw_export_columns() {
        assert_eq!(
            source_column("Temperature"),
            ("TemperatureF", Conversion::FahrenheitToCelsius)
        );
        assert_eq!(
            source_column("Pressure"),
            ("PressureIn", Conversion::InchesHgToMillibar)
        );
        assert_eq!(source_column("Humidity"), ("Humidity", Conversion::Identity));
    }

    #[test]
    fn conversions_pass_nan_through() {
        assert!(Conversion::FahrenheitToCelsius.apply(f64::NAN).is_nan());
        assert!(Conversion::InchesHgToMillibar.apply(f64::NAN).is_nan());
    }
}
