//! icoforge - turn images into multi-resolution ICO icons
//!
//! Run without arguments for the interactive prompt, or pass a path (and
//! `--ext` for folders) to use it from scripts.

use anyhow::Result;
use clap::Parser;
use icoforge::cli::{run_session, Prompter};
use icoforge::utils::{ConverterSettings, ResizeFilter};
use icoforge::Converter;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// File or folder to convert; asked for interactively when omitted
    path: Option<String>,

    /// Extension to convert when PATH is a folder (`.*` for every file)
    #[arg(long)]
    ext: Option<String>,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of files converted in parallel
    #[arg(long)]
    jobs: Option<usize>,

    /// Resampling filter: nearest, triangle, catmullrom, gaussian, lanczos3
    #[arg(long)]
    filter: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not wait for ENTER before exiting (interactive mode)
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let interactive = args.path.is_none();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let code = match load_settings(&args) {
        Ok(settings) => {
            let converter = Converter::from_settings(&settings)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_session(
                &converter,
                &mut prompter,
                args.path.clone(),
                args.ext.clone(),
            ))?
        }
        Err(e) => {
            prompter.say(&e)?;
            2
        }
    };

    if interactive {
        if !args.no_pause {
            prompter.pause()?;
        }
        io::stdout().flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    Ok(ExitCode::from(code))
}

fn load_settings(args: &Args) -> Result<ConverterSettings> {
    let mut settings = ConverterSettings::load(args.config.as_deref())?;

    if let Some(jobs) = args.jobs {
        settings.max_concurrent = jobs;
    }
    if let Some(name) = &args.filter {
        settings.resize_filter = ResizeFilter::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown resize filter: {}", name))?;
    }

    Ok(settings.validate()?)
}
