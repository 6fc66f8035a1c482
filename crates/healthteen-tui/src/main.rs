use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use healthteen_core::tracing_setup::init_tracing;
use healthteen_core::{AppController, CoreConfig, Persistence};
use healthteen_tui::runtime::run_app;
use healthteen_tui::ui::{self, App};

#[derive(Parser, Debug)]
#[command(name = "healthteen")]
#[command(about = "Health Teen: track steps, sleep and calories from the terminal")]
struct Args {
    /// Directory for the persisted health history and feed
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Run without durable storage; every launch starts from seed data
    #[arg(long)]
    ephemeral: bool,

    /// Append logs to this file (or set HEALTHTEEN_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn core_config(&self) -> CoreConfig {
        let config = match &self.data_dir {
            Some(dir) => CoreConfig::new(dir),
            None => CoreConfig::default(),
        };
        if self.ephemeral {
            config.with_persistence(Persistence::Unavailable)
        } else {
            config
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let config = args.core_config();
    tracing::info!(data_dir = %config.data_dir.display(), persistence = ?config.persistence, "starting");
    let controller = AppController::from_config(&config)?;
    let mut app = App::new(controller);

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_flag() {
        let args = Args::parse_from(["healthteen", "--data-dir", "/tmp/ht"]);
        let config = args.core_config();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ht"));
        assert_eq!(config.persistence, Persistence::Durable);
    }

    #[test]
    fn test_ephemeral_flag() {
        let args = Args::parse_from(["healthteen", "--ephemeral"]);
        assert_eq!(args.core_config().persistence, Persistence::Unavailable);
    }

    #[test]
    fn test_ephemeral_controller_starts_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let args = Args::parse_from([
            "healthteen".to_string(),
            "--ephemeral".to_string(),
            "--data-dir".to_string(),
            data_dir.display().to_string(),
        ]);
        let controller = AppController::from_config(&args.core_config()).unwrap();
        assert_eq!(controller.data().posts().len(), 3);
        assert!(!data_dir.exists());
    }
}
