use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheet-slicer")]
#[command(version, about = "Slice sprite sheets into named game assets", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rebuild the minimap strip with smaller bordered tiles
    Minimap(MinimapArgs),
    /// Split the minimap strip into one file per cell
    Cells(CellsArgs),
    /// Cut the corner and edge pieces out of the whole-button images
    Button(ButtonArgs),
    /// Write a config file holding the default settings
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for sliced files [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,
}

#[derive(Args, Debug, Clone)]
pub struct MinimapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source strip of square tiles [default: sheet_minimap.png]
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Source tile size in pixels [default: strip height]
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Output tile size in pixels, must be even [default: 20]
    #[arg(long)]
    pub output_tile_size: Option<u32>,

    /// Number of tiles in the strip [default: 12]
    #[arg(long)]
    pub tile_count: Option<u32>,

    /// Output file name [default: sheet_minimap_new.png]
    #[arg(long, value_name = "NAME")]
    pub out_file: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CellsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source strip of cells [default: sheet_minimap.png]
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Cell width in pixels [default: 20]
    #[arg(long)]
    pub cell_width: Option<u32>,

    /// Comma-separated cell names in strip order [default: open,1,...,8,hide,flag,mine]
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// File name prefix for each cell [default: cell_]
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ButtonArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Whole button in its normal state [default: button_whole_normal.png]
    #[arg(long, value_name = "FILE")]
    pub normal: Option<PathBuf>,

    /// Whole button in its selected state [default: button_whole_selected.png]
    #[arg(long, value_name = "FILE")]
    pub selected: Option<PathBuf>,

    /// Corner size in pixels [default: 10]
    #[arg(long)]
    pub corner_size: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(default_value = "slicer.json")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(CompressionLevel::from_level)
        }
    }
}

impl CompressionLevel {
    /// Validate a numeric level
    pub fn from_level(n: u8) -> Result<Self, String> {
        if n <= 6 {
            Ok(CompressionLevel::Level(n))
        } else {
            Err(format!("compression level must be 0-6 or 'max', got {}", n))
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
