use clap::Parser;
use minibranch::core::config;
use minibranch::tui;
use minibranch::{Language, ScreenId};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "minibranch", about = "Banking-correspondent mini branch TUI")]
struct Args {
    /// Screen to show at startup
    #[arg(short, long, value_enum)]
    screen: Option<ScreenId>,

    /// Label language
    #[arg(short, long, value_enum)]
    language: Option<Language>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to minibranch.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("minibranch.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("config unusable ({e}), continuing with defaults");
            config::MiniBranchConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.screen, args.language);

    log::info!(
        "starting on {} ({})",
        resolved.start_screen.name(),
        resolved.language.label()
    );

    tui::run(resolved)
}
