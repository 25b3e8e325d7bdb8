use gundagardi::app;
use gundagardi::config::AppConfig;

/// Main entry point for the web application
///
/// Reads the configuration from the environment (SheetDB URL, dictionary
/// API URL, bind address, database directory) and runs the HTTP surface.
/// With no SheetDB URL configured the feedback endpoints serve mock data
/// in development mode.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::from_env();
    app::run(config).await
}
