use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use switchback::UnwindMissPolicy;
use switchback::core::config;

#[derive(Parser)]
#[command(name = "switchback", about = "Interactive demo for the switchback navigation engine")]
struct Args {
    /// What UnwindToView does when the target view is missing
    #[arg(long, value_enum)]
    unwind_policy: Option<UnwindMissPolicy>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to switchback.log in the current
    // directory. Filter at Trace here; the effective level comes from
    // the resolved config below via set_max_level.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("switchback.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("switchback: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.unwind_policy);
    log::set_max_level(parse_level(&resolved.log_level));

    log::info!("Switchback demo starting up");
    switchback::tui::run(resolved)
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => {
            log::warn!("Unknown log level '{other}', falling back to debug");
            LevelFilter::Debug
        }
    }
}
