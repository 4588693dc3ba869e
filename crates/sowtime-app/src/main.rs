mod render;

use anyhow::{Context, Result};

use render::{Renderer, TerminalRenderer};
use sowtime_catalog::{month, PlantCatalog};
use sowtime_core::{AppError, Config};
use sowtime_reminders::build_reminders;
use sowtime_weather::WeatherProvider;

const USAGE: &str = "Usage:
  sowtime [MONTH]          reminders for a month (1-12, default: current)
  sowtime catalog [QUERY]  browse the plant catalog, optionally filtered";

fn parse_month(raw: &str) -> Result<u32> {
    let month: u32 = raw
        .parse()
        .with_context(|| format!("invalid month '{raw}', expected a number 1-12"))?;
    anyhow::ensure!(
        (1..=12).contains(&month),
        "month must be between 1 and 12, got {month}"
    );
    Ok(month)
}

async fn show_reminders(config: &Config, renderer: &impl Renderer, month: u32) -> Result<()> {
    let catalog = PlantCatalog::central_florida();

    let provider = WeatherProvider::new(config.weather.api_url.clone())?;
    let report = provider.fetch_today_or_fallback(config.coordinates()).await;

    renderer.render_conditions(&report);

    let reminders = build_reminders(month, &report.snapshot, catalog.all());
    let month_name = month::month_name(month).unwrap_or("month");
    renderer.render_reminders(month_name, &reminders);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    sowtime_core::init()?;

    let config = match Config::load_validated() {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::from(e);
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    tracing::info!("Sowtime started");

    let renderer = TerminalRenderer;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("catalog") => {
            let catalog = PlantCatalog::central_florida();
            let query = args.get(1).map(String::as_str).unwrap_or("");
            renderer.render_catalog(&catalog.search(query));
        }
        Some("help" | "--help" | "-h") => {
            println!("{USAGE}");
        }
        Some(raw) => {
            let month = parse_month(raw).with_context(|| USAGE.to_string())?;
            show_reminders(&config, &renderer, month).await?;
        }
        None => {
            show_reminders(&config, &renderer, month::current_month()).await?;
        }
    }

    Ok(())
}
