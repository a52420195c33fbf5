mod app;
mod batch;
mod cli;
mod client;
mod clipboard;
mod config;
mod request;
mod selection;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        // Keep stdout clean for piping; logs only surface with -v or RUST_LOG
        init_logging(if cli.output.verbose { "scribe=debug,info" } else { "warn" });

        if let Err(e) = cli::run(command, &cli.output).await {
            cli::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    init_logging("scribe=debug,info");
    tracing::info!("Starting Scribe");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 820.0])
        .with_min_inner_size([520.0, 480.0])
        .with_title("Scribe");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Scribe",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ScribeApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
