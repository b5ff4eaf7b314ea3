use serde::{Deserialize, Serialize};

use crate::slice::{DEFAULT_CELL_WIDTH, DEFAULT_CORNER_SIZE, MinimapParams, default_cell_names};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Settings for rebuilding the minimap strip with smaller bordered tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Source strip of square tiles
    pub source: String,
    /// Output file name, written into the output directory
    pub output: String,
    /// Source tile side in pixels; the strip height when unset
    pub tile_size: Option<u32>,
    /// Output tile side in pixels (even)
    pub output_tile_size: u32,
    /// Number of tiles expected in the source strip
    pub tile_count: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        let params = MinimapParams::default();
        Self {
            source: "sheet_minimap.png".to_string(),
            output: "sheet_minimap_new.png".to_string(),
            tile_size: params.tile_size,
            output_tile_size: params.output_tile_size,
            tile_count: params.tile_count,
        }
    }
}

/// Settings for splitting the minimap strip into one file per cell
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellsConfig {
    pub source: String,
    pub cell_width: u32,
    /// Cell names in strip order
    pub names: Vec<String>,
    /// Prepended to each cell name to form the file name
    pub prefix: String,
}

impl Default for CellsConfig {
    fn default() -> Self {
        Self {
            source: "sheet_minimap.png".to_string(),
            cell_width: DEFAULT_CELL_WIDTH,
            names: default_cell_names(),
            prefix: "cell_".to_string(),
        }
    }
}

/// Settings for cutting 9-slice border pieces out of the button images
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Whole button in its normal state
    pub normal: String,
    /// Whole button in its selected state
    pub selected: String,
    pub corner_size: u32,
    pub normal_prefix: String,
    pub selected_prefix: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            normal: "button_whole_normal.png".to_string(),
            selected: "button_whole_selected.png".to_string(),
            corner_size: DEFAULT_CORNER_SIZE,
            normal_prefix: "button_normal_".to_string(),
            selected_prefix: "button_selected_".to_string(),
        }
    }
}

/// Slicer configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Output directory for sliced files
    pub output_dir: String,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    pub minimap: MinimapConfig,
    pub cells: CellsConfig,
    pub button: ButtonConfig,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            output_dir: ".".to_string(),
            compress: None,
            minimap: MinimapConfig::default(),
            cells: CellsConfig::default(),
            button: ButtonConfig::default(),
        }
    }
}
