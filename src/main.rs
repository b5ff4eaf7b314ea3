use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use sheet_slicer::cli::{CliArgs, Command, CommonArgs, InitArgs};
use sheet_slicer::config::{LoadedConfig, SlicerConfig, save_config};
use sheet_slicer::job::{ButtonJob, CellsJob, MinimapJob, OutputSettings, load_config};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Minimap(args) => {
            let (loaded, output) = start(&args.common)?;
            MinimapJob::resolve(args, &loaded).run(&output)?;
        }
        Command::Cells(args) => {
            let (loaded, output) = start(&args.common)?;
            CellsJob::resolve(args, &loaded).run(&output)?;
        }
        Command::Button(args) => {
            let (loaded, output) = start(&args.common)?;
            ButtonJob::resolve(args, &loaded).run(&output)?;
        }
        Command::Init(args) => return run_init(args),
    }

    info!("Done!");
    Ok(())
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Load config and output settings, then start logging. CLI arguments
/// always take precedence over config values.
fn start(args: &CommonArgs) -> Result<(LoadedConfig, OutputSettings)> {
    // Config is loaded before the logger so its errors reach stderr directly
    let loaded = load_config(args)?;
    let output = OutputSettings::resolve(args, &loaded)?;

    init_logging(args.verbose);
    info!("Sheet slicer v{}", env!("CARGO_PKG_VERSION"));

    output.prepare()?;
    Ok((loaded, output))
}

fn run_init(args: &InitArgs) -> Result<()> {
    init_logging(false);

    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    save_config(&SlicerConfig::default(), &args.path)?;
    info!("Wrote default config to {}", args.path.display());

    Ok(())
}
