//! The reminder engine: merge the planting calendar with one day's
//! weather into per-crop instructions.

use serde::Serialize;
use sowtime_catalog::PlantRecord;
use sowtime_weather::WeatherSnapshot;

/// Above this daily rainfall, watering and fertilizing are skipped.
pub const HEAVY_RAIN_INCHES: f64 = 1.0;
/// Below this daily rainfall, supplemental watering is suggested.
pub const LIGHT_RAIN_INCHES: f64 = 0.2;
/// Above this daily high, heat mitigation is suggested.
pub const HIGH_HEAT_F: f64 = 90.0;

// Clauses carry a leading space; they are appended directly to the base
// reminder text.
pub const HEAVY_RAIN_CLAUSE: &str =
    " Avoid watering today due to expected rainfall. Delay fertilizing to prevent nutrient runoff.";
pub const DRY_SPELL_CLAUSE: &str =
    " Light rainfall expected \u{2014} consider supplemental watering.";
pub const HEAT_CLAUSE: &str = " Consider shade cloth or extra irrigation due to high heat.";
pub const FERTILIZE_CLAUSE: &str =
    " Time to fertilize \u{2014} use a balanced fertilizer appropriate for this crop.";

/// One composed instruction for one crop. Transient: recomputed whenever
/// the month or weather changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub plant_name: String,
    pub message: String,
}

/// Build the reminder list for a month, adjusted by one day's weather.
///
/// Deterministic and idempotent; output order is catalog order. `month`
/// must be 1-12 (out-of-range months simply match no crop). An empty
/// result is a valid state, not an error: nothing is planted that month.
pub fn build_reminders(
    month: u32,
    weather: &WeatherSnapshot,
    catalog: &[PlantRecord],
) -> Vec<Reminder> {
    catalog
        .iter()
        .filter(|plant| plant.plantable_in(month))
        .map(|plant| {
            let mut message = plant.reminder_text.clone();

            // Rain clauses are mutually exclusive; the band between the
            // thresholds appends neither.
            if weather.precipitation_inches > HEAVY_RAIN_INCHES {
                message.push_str(HEAVY_RAIN_CLAUSE);
            } else if weather.precipitation_inches < LIGHT_RAIN_INCHES {
                message.push_str(DRY_SPELL_CLAUSE);
            }
            if weather.max_temperature_f > HIGH_HEAT_F {
                message.push_str(HEAT_CLAUSE);
            }
            if plant.fertilize_due_in(month) {
                message.push_str(FERTILIZE_CLAUSE);
            }

            Reminder {
                plant_name: plant.name.clone(),
                message,
            }
        })
        .collect()
}
