//! Weather-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather API error: {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response missing daily field: {0}")]
    MissingDaily(&'static str),
}

impl WeatherError {
    /// User-friendly message for display next to the reminders.
    /// Every variant makes clear that reminders are calendar-only.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => {
                "Weather unavailable (offline). Reminders shown without adjustments."
            }
            Self::Api { .. } => {
                "Weather service error. Reminders shown without adjustments."
            }
            Self::Parse(_) | Self::MissingDaily(_) => {
                "Weather data incomplete. Reminders shown without adjustments."
            }
        }
    }
}
