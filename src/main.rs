use kidsweather::{KidsWeatherConfig, VERSION, logging, web};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = KidsWeatherConfig::load()?;
    logging::init(&config.logging)?;
    info!(version = VERSION, "Starting KidsWeather");

    web::run(&config).await
}
