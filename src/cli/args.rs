use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetslice")]
#[command(version, about = "Slice XML sprite sheets into named sprite rects", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert an atlas manifest into bottom-left-origin sprite metadata (JSON)
    Slice(SliceArgs),
    /// Report the smallest texture max size that fits an image
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Atlas manifest (TextureAtlas XML)
    #[arg(required_unless_present = "config", requires = "image")]
    pub manifest: Option<PathBuf>,

    /// Sheet image described by the manifest
    #[arg(short, long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Load sheets and settings from a .slice config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for metadata files [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base name for the output file [default: manifest file stem]
    #[arg(short = 'n', long, requires = "manifest")]
    pub name: Option<String>,

    /// Max size currently configured for the texture [default: 2048]
    #[arg(long, value_name = "PIXELS")]
    pub max_size: Option<u32>,

    /// Replace a non-optimal max size with the recommended one
    #[arg(long)]
    pub fix_max_size: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Image to measure
    pub image: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
