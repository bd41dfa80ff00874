//! goodwe-export - Export history reports and realtime data from the GoodWe portal
//! Every request is awaited before the next one, so a single thread is enough.
use clap::Parser;
use envconfig::Envconfig;
use goodwe_export::app;
use goodwe_export::core::cli::Cli;
use goodwe_export::core::config::{Config, configure_logger};
use goodwe_export::core::station::load_station_file;

enum ExitCode {
    Success = 0,
    RuntimeError = 1,
    ConfigError = 2,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    configure_logger();

    let config = match Config::init_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(ExitCode::ConfigError as i32);
        }
    };

    let station = match load_station_file(&config.station_file) {
        Ok(station) => station,
        Err(e) => {
            log::error!("Failed to load station file: {e}");
            std::process::exit(ExitCode::ConfigError as i32);
        }
    };

    match app(&config, station, cli.command).await {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(ExitCode::RuntimeError as i32);
        }
    }
}
