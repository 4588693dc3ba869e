//! Reminder composition for Sowtime.
//!
//! Pure calendar-plus-weather logic: no I/O, no clock, no hidden state.

pub mod engine;

pub use engine::{
    build_reminders, Reminder, DRY_SPELL_CLAUSE, FERTILIZE_CLAUSE, HEAT_CLAUSE, HEAVY_RAIN_CLAUSE,
    HEAVY_RAIN_INCHES, HIGH_HEAT_F, LIGHT_RAIN_INCHES,
};
