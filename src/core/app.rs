//! Core application logic for goodwe-export
use anyhow::{Context, bail};

use super::cli::{Command, ExportArgs};
use super::config::{APP_NAME, APP_VERSION, Config};
use crate::integration::goodwe::{Session, StationConfig};
use crate::services::HistoryExportService;

/// Open a portal session for `station` and run `command` on it.
pub async fn app(config: &Config, station: StationConfig, command: Command) -> anyhow::Result<()> {
    log::info!("{APP_NAME} v{APP_VERSION} started");
    let session = Session::connect(
        config.goodwe_url.clone(),
        station,
        config.request_timeout.into(),
    )
    .await
    .context("cannot open portal session")?;

    match command {
        Command::Export(args) => export(config, &session, args).await?,
        Command::Realtime => {
            let data = session
                .realtime()
                .await
                .context("cannot read realtime data")?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }
    log::info!("{APP_NAME} finished");
    Ok(())
}

async fn export(config: &Config, session: &Session, args: ExportArgs) -> anyhow::Result<()> {
    if args.from_month > args.to_month {
        bail!(
            "first month {} is after last month {}",
            args.from_month,
            args.to_month
        );
    }
    let folder = args
        .folder
        .unwrap_or_else(|| config.download_folder.clone());
    let summary = HistoryExportService::new(session, folder)
        .export_year(args.year, args.from_month..=args.to_month)
        .await
        .context("history export failed")?;
    for date in &summary.skipped {
        log::warn!("Export for {date} failed on the portal side");
    }
    Ok(())
}
