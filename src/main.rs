use std::io::{self, Write};
use std::time::Duration;

use thrill_compass::cli;
use thrill_compass::config::Settings;
use thrill_compass::core::Recommender;
use thrill_compass::models::HeightTable;
use thrill_compass::services::QueueTimesClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging; LOG_LEVEL/LOG_FORMAT override the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting ThrillCompass...");

    let client = QueueTimesClient::new(
        settings.provider.endpoint.clone(),
        Duration::from_secs(settings.provider.timeout_secs),
    );

    info!(
        "Queue-Times client initialized (park {})",
        settings.provider.park_id
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "Welcome to ThrillCompass!")?;
    writeln!(output, "Powered by Queue-Times.com")?;

    // Fetch live queue times and flatten them for the core
    let response = match client.park_queue_times(settings.provider.park_id).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch queue times: {}", e);
            return Err(e.into());
        }
    };

    let waits = response.flatten_waits();
    if waits.is_empty() {
        writeln!(output, "\nNo ride data available for this park right now.")?;
        return Ok(());
    }

    writeln!(output, "\nCurrent waits:")?;
    cli::write_wait_summary(&mut output, &response)?;

    // Collect the visitor's ratings, then their height
    let ride_names: Vec<String> = waits.iter().map(|ride| ride.name.clone()).collect();
    let preferences = cli::prompt_preferences(&mut input, &mut output, &ride_names)?;
    let visitor_height = cli::prompt_height(&mut input, &mut output)?;

    // Filter and rank; the bundled height table covers the default park
    let recommender = Recommender::new(HeightTable::islands_of_adventure());
    let result = recommender.recommend(waits, visitor_height, &preferences);

    info!(
        "{} of {} rides eligible",
        result.eligible_count, result.total_rides
    );

    cli::write_recommendation(&mut output, &result)?;

    Ok(())
}
