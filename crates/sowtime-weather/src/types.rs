use serde::{Deserialize, Serialize};

/// A fixed geographic point to fetch weather for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One day's conditions at one point. Created fresh on every request,
/// never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Precipitation sum for the day, in inches.
    pub precipitation_inches: f64,
    /// Daily maximum temperature, in degrees Fahrenheit.
    pub max_temperature_f: f64,
}

impl WeatherSnapshot {
    /// The zero-valued snapshot substituted when the fetch fails.
    pub const fn fallback() -> Self {
        Self {
            precipitation_inches: 0.0,
            max_temperature_f: 0.0,
        }
    }
}

/// Fail-soft fetch result: either live data, or the fallback snapshot
/// with a human-readable reason the weather is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub unavailable: Option<String>,
}

impl WeatherReport {
    pub fn live(snapshot: WeatherSnapshot) -> Self {
        Self {
            snapshot,
            unavailable: None,
        }
    }

    pub fn fallback(reason: String) -> Self {
        Self {
            snapshot: WeatherSnapshot::fallback(),
            unavailable: Some(reason),
        }
    }

    pub fn is_live(&self) -> bool {
        self.unavailable.is_none()
    }
}
