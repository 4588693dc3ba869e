//! Presentation boundary.
//!
//! The core hands rendering to a collaborator: anything that can show
//! conditions, reminders and catalog entries. The terminal adapter is the
//! shipped implementation; a web view or JSON responder would implement
//! the same trait without touching the engine.

use sowtime_catalog::{month, PlantRecord};
use sowtime_reminders::Reminder;
use sowtime_weather::WeatherReport;

pub trait Renderer {
    fn render_conditions(&self, report: &WeatherReport);
    fn render_reminders(&self, month_name: &str, reminders: &[Reminder]);
    fn render_catalog(&self, records: &[&PlantRecord]);
}

pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render_conditions(&self, report: &WeatherReport) {
        match &report.unavailable {
            Some(reason) => println!("{reason}"),
            None => println!(
                "Rain today: {} in \u{2022} High: {}\u{b0}F",
                report.snapshot.precipitation_inches, report.snapshot.max_temperature_f
            ),
        }
    }

    fn render_reminders(&self, month_name: &str, reminders: &[Reminder]) {
        println!("\nReminders for {month_name}:");
        if reminders.is_empty() {
            // An empty month is a valid state and gets an explicit notice.
            println!("  Nothing to plant or transplant this month.");
            return;
        }
        for reminder in reminders {
            println!("  {}: {}", reminder.plant_name, reminder.message);
        }
    }

    fn render_catalog(&self, records: &[&PlantRecord]) {
        if records.is_empty() {
            println!("No plants match that search.");
            return;
        }
        for plant in records {
            println!("{} [{} days]", plant.name, plant.days_to_harvest);
            println!(
                "  Spacing {}\" \u{2022} Depth {}\"",
                plant.spacing_inches, plant.planting_depth_inches
            );
            println!("  Sow: {}", month::months_label(&plant.sow_months));
            println!(
                "  Transplant: {}",
                month::months_label(&plant.transplant_months)
            );
            println!("  {}", plant.notes);
            println!();
        }
    }
}
