use anyhow::Result;
use clap::Parser;
use console::style;
use log::{info, warn};
use sprite_sheet_generator::cli::{Cli, run};
use sprite_sheet_generator::init;
use sprite_sheet_generator::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();
    let cli = Cli::parse();
    let shutdown_signal = setup_shutdown_signal()?;

    match run(cli, shutdown_signal) {
        Ok(result) => {
            info!(
                "Program exited normally ({} of {} videos succeeded)",
                result.successful, result.total_videos
            );
            Ok(())
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}
