use std::{
    env,
    ffi::OsString,
    fs::OpenOptions,
    io,
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use env_logger::{Builder, Target};
use inference::{InferenceAdapter, ModelStore, StoreConfig};
use log::info;

mod app;
mod state;
mod ui;

/// Redirects logs to a file, the TUI owns stdout.
const LOG_FILE_VAR: &str = "MEDICOST_LOG_FILE";

const USAGE: &str = "usage: medicost [predict <age> <bmi> <No|Yes> <children>]";

/// Where log records end up.
#[derive(Debug, PartialEq, Eq)]
enum LogSink {
    Stderr,
    File(PathBuf),
    /// The TUI owns the terminal and no log file was given.
    Discard,
}

impl LogSink {
    fn choose(interactive: bool, log_file: Option<OsString>) -> Self {
        match log_file.filter(|p| !p.is_empty()) {
            Some(path) => LogSink::File(path.into()),
            None if interactive => LogSink::Discard,
            None => LogSink::Stderr,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    init_logging(LogSink::choose(args.is_empty(), env::var_os(LOG_FILE_VAR)))?;

    let cfg = StoreConfig::from_env();
    info!("model artifact at {}", cfg.artifact_path().display());
    let adapter = InferenceAdapter::new(Arc::new(ModelStore::from_config(&cfg)));

    match args.as_slice() {
        [] => {
            app::run::run(adapter)?;
            Ok(ExitCode::SUCCESS)
        }
        [cmd, rest @ ..] if cmd == "predict" => app::predict::run(&adapter, rest),
        _ => bail!("{USAGE}"),
    }
}

fn init_logging(sink: LogSink) -> Result<()> {
    let mut builder = Builder::from_default_env();

    match sink {
        LogSink::Stderr => {}
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogSink::Discard => {
            builder.target(Target::Pipe(Box::new(io::sink())));
        }
    }

    builder.init();
    Ok(())
}
