#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

mod command;
mod session;
mod settings;

use session::Session;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Command script to run, reads commands from stdin if omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Grid side length
    #[arg(short, long)]
    size: Option<usize>,

    /// JSON grid file to load before running commands
    #[arg(short, long, value_name = "FILE")]
    open: Option<PathBuf>,

    /// Settings file to use instead of the one in the config directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Store the effective settings in the config directory and exit
    #[arg(long)]
    write_settings: bool,
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn start_logger() -> Option<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info").ok()?;
    let handle = if let Some(log_dir) = get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("pixel_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    } else {
        eprintln!("Failed to create log file");
        logger.log_to_stderr().start()
    };
    handle.ok()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(size) = args.size {
        settings.default_size = size;
    }

    if args.write_settings {
        settings.store()?;
        log::info!("Settings stored");
        return Ok(());
    }

    let mut session = Session::new(settings.default_size, &settings)?;
    log::info!("Starting pixel_draw with a {0}x{0} grid", settings.default_size);

    if let Some(path) = &args.open {
        session.state_mut().load_json(path)?;
    }

    let mut stdout = io::stdout().lock();
    let failures = match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| anyhow::anyhow!("Failed to open script {}: {e}", path.display()))?;
            session.run(BufReader::new(file), &mut stdout)?
        }
        None => session.run(io::stdin().lock(), &mut stdout)?,
    };

    if failures > 0 {
        log::warn!("{failures} command(s) failed");
    }
    Ok(())
}

