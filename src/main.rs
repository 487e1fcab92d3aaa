use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sheetslice::atlas::recommend_max_size;
use sheetslice::cli::{CliArgs, Command, RecommendArgs, SliceArgs};
use sheetslice::config::LoadedConfig;
use sheetslice::import::{DEFAULT_MAX_SIZE, SheetImporter, SheetSource, import_sheets};
use sheetslice::output::write_json;
use sheetslice::sprite::read_image_size;

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
        Command::Slice(args) => slice(args),
        Command::Recommend(args) => recommend(args),
    }
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

fn slice(args: &SliceArgs) -> Result<()> {
    let merged = merge_config_with_args(args)?;

    init_logging(merged.verbose);
    info!("Sheetslice v{}", env!("CARGO_PKG_VERSION"));

    if merged.sheets.is_empty() {
        anyhow::bail!("no sheets to import");
    }

    if !merged.output.exists() {
        fs::create_dir_all(&merged.output)?;
    }

    let importer = SheetImporter::new(merged.max_size).fix_max_size(merged.fix_max_size);
    let sheets = import_sheets(&merged.sheets, &importer)?;

    for (source, sheet) in merged.sheets.iter().zip(&sheets) {
        let path = write_json(sheet, &source.image, &merged.output, &source.name)?;
        info!("Saved {}", path.display());
    }

    info!("Done!");

    Ok(())
}

fn recommend(args: &RecommendArgs) -> Result<()> {
    init_logging(args.verbose);

    let size = read_image_size(&args.image)?;
    let bound = recommend_max_size(size.longest_side())
        .with_context(|| format!("no max size fits {}", args.image.display()))?;

    info!(
        "{}: {}x{}, recommended max size {}",
        args.image.display(),
        size.width,
        size.height,
        bound
    );

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    sheets: Vec<SheetSource>,
    output: PathBuf,
    max_size: u32,
    fix_max_size: bool,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &SliceArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Sheets: a manifest on the command line replaces the config's list
    let sheets = match (&args.manifest, &args.image) {
        (Some(manifest), Some(image)) => {
            let mut source = SheetSource::new(manifest.clone(), image.clone());
            if let Some(name) = &args.name {
                source.name = name.clone();
            }
            vec![source]
        }
        (Some(manifest), None) => {
            anyhow::bail!("no image given for manifest {}", manifest.display())
        }
        (None, _) => loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_sheets)
            .unwrap_or_default(),
    };

    // Output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let max_size = args.max_size.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.max_size)
            .unwrap_or(DEFAULT_MAX_SIZE)
    });

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let fix_max_size = if args.fix_max_size {
        true
    } else if let Some(ref lc) = loaded_config {
        lc.config.fix_max_size
    } else {
        false
    };

    Ok(MergedConfig {
        sheets,
        output,
        max_size,
        fix_max_size,
        verbose: args.verbose,
    })
}
