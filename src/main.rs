use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use wtzcode::app::{Session, Shell};
use wtzcode::kernel::services::adapters::{AsyncRuntime, SettingsService};

mod logging;

/// Edit game-server resources in memory with an AI assistant.
#[derive(Debug, Parser)]
#[command(name = "wtzcode", version)]
struct Args {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Assistant endpoint, overriding the settings file.
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Directory `export` writes to when given no argument.
    #[arg(long, value_name = "DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Archives to import before the prompt opens.
    archives: Vec<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let mut settings = SettingsService::load(args.settings);
    if let Some(endpoint) = args.endpoint {
        settings.settings_mut().assistant.endpoint = endpoint;
    }

    let runtime = Arc::new(AsyncRuntime::new()?);
    let session = Session::new(settings, runtime).map_err(io::Error::other)?;

    let stdout = io::stdout();
    let mut shell = Shell::new(session, stdout.lock()).with_export_dir(args.export_dir);
    for archive in args.archives {
        shell.import(archive)?;
    }

    tracing::info!("shell started");
    shell.run(io::stdin().lock())?;
    tracing::info!("shell exited");
    Ok(())
}
