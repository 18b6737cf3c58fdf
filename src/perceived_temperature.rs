use serde::Deserialize;

/// Which value to present as "real feel"
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RealFeel {
    /// Humidex from temperature and relative humidity
    #[default]
    Humidex,
    /// Echo the air temperature
    Ambient,
}

impl RealFeel {
    /// Returns the real feel temperature in Celsius rounded to the nearest tenth.
    ///
    /// `None` if the temperature is absent, or if Humidex is asked for without a usable
    /// humidity (absent or zero).
    ///
    /// # Arguments
    ///
    /// * 'temp' - temperature in Celsius
    /// * 'humidity' - relative humidity in percentage
    pub fn real_feel(self, temp: Option<f64>, humidity: Option<f64>) -> Option<f64> {
        let temp = temp.filter(|t| t.is_finite())?;
        match self {
            RealFeel::Ambient => Some(round_tenth(temp)),
            RealFeel::Humidex => {
                let humidity = humidity.filter(|h| *h > 0.0)?;
                Some(round_tenth(apparent_temperature(temp, humidity)))
            }
        }
    }
}

/// Calculates the apparent temperature (Humidex) in Celsius.
/// The dew point is approximated with the Magnus formula and fed into the
/// Environment Canada humidex equation.
/// https://en.wikipedia.org/wiki/Humidex
///
/// Humidity must be within (0, 100], zero makes the logarithm undefined.
///
/// # Arguments
///
/// * 'temp' - temperature in Celsius
/// * 'humidity' - relative humidity in percentage
pub fn apparent_temperature(temp: f64, humidity: f64) -> f64 {
    let vapour_pressure = 6.11 * (5417.753 * (1.0 / 273.16 - 1.0 / (273.15 + dew_point(temp, humidity)))).exp();

    temp + 0.5555 * (vapour_pressure - 10.0)
}

/// Calculates the dew point in Celsius.
///
/// # Arguments
///
/// * 'temp' - temperature in Celsius
/// * 'humidity' - relative humidity in percentage
fn dew_point(temp: f64, humidity: f64) -> f64 {
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    let alpha = (A * temp) / (B + temp) + (humidity / 100.0).ln();
    B * alpha / (A - alpha)
}

/// Rounds to the nearest tenth
///
/// # Arguments
///
/// * 'value' - value to round
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
