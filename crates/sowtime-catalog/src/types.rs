use serde::{Deserialize, Serialize};

/// A single crop entry: planting calendar plus cultivation attributes.
///
/// Months are calendar numbers 1-12 and may wrap the year boundary
/// (e.g. carrots sow September through February). `companions`,
/// `antagonists` and `succession_interval_days` are informational only;
/// no computation consumes them yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Stable identifier, e.g. "sweet_corn".
    pub id: String,
    /// Display name, e.g. "Sweet Corn".
    pub name: String,
    /// Months suitable for direct sowing.
    pub sow_months: Vec<u32>,
    /// Months suitable for transplanting; empty for direct-sow-only crops.
    pub transplant_months: Vec<u32>,
    /// Months a side-dress or feeding application is recommended.
    pub fertilize_months: Vec<u32>,
    pub companions: Vec<String>,
    pub antagonists: Vec<String>,
    pub days_to_harvest: u32,
    pub spacing_inches: f64,
    pub planting_depth_inches: f64,
    pub succession_interval_days: u32,
    /// Base instruction shown in sow/transplant months.
    pub reminder_text: String,
    /// Freeform cultivation notes.
    pub notes: String,
}

impl PlantRecord {
    /// True when the month calls for sowing or transplanting this crop.
    pub fn plantable_in(&self, month: u32) -> bool {
        self.sow_months.contains(&month) || self.transplant_months.contains(&month)
    }

    /// True when a feeding is due this month.
    pub fn fertilize_due_in(&self, month: u32) -> bool {
        self.fertilize_months.contains(&month)
    }
}
