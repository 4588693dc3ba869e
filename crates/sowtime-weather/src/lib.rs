//! Weather lookup for Sowtime.
//!
//! Fetches one day's precipitation and high temperature from the
//! Open-Meteo forecast API. Failures never propagate past this crate:
//! callers get a zero-valued snapshot plus an unavailability message.

pub mod error;
pub mod provider;
pub mod types;

pub use error::WeatherError;
pub use provider::{WeatherProvider, OPEN_METEO_URL};
pub use types::{Coordinates, WeatherReport, WeatherSnapshot};
