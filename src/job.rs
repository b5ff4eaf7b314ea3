//! Slicing jobs built from CLI arguments and config values.
//!
//! Every setting follows the same precedence: a CLI flag wins over the
//! config file, and the config file (or its built-in defaults) wins over
//! nothing. Paths from the config resolve against the config directory;
//! paths from the CLI are used as given.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use image::DynamicImage;
use log::info;

use crate::cli::{ButtonArgs, CellsArgs, CommonArgs, CompressionLevel, MinimapArgs};
use crate::config::{CompressConfig, LoadedConfig};
use crate::output::{output_filename, save_png};
use crate::slice::{MinimapParams, remake_minimap, split_button_pair, split_cells};
use crate::source::load_image;

/// Load the config file named on the command line, or the built-in defaults.
pub fn load_config(args: &CommonArgs) -> Result<LoadedConfig> {
    match &args.config {
        Some(path) => LoadedConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None => Ok(LoadedConfig::defaults()),
    }
}

/// Where sliced files go and how they are compressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub dir: PathBuf,
    pub compress: Option<CompressionLevel>,
}

impl OutputSettings {
    pub fn resolve(args: &CommonArgs, loaded: &LoadedConfig) -> Result<Self> {
        let compress = match args.compress {
            Some(level) => Some(level),
            None => loaded
                .config
                .compress
                .as_ref()
                .map(parse_compress)
                .transpose()?,
        };
        let dir = args
            .output
            .clone()
            .unwrap_or_else(|| loaded.resolve_output_dir());

        Ok(Self { dir, compress })
    }

    /// Create the output directory if it doesn't exist
    pub fn prepare(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("failed to create output directory: {}", self.dir.display())
            })?;
        }
        Ok(())
    }

    fn save(&self, file_name: &str, image: &DynamicImage) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        save_png(image, &path, self.compress)?;
        info!("Saved {}", path.display());
        Ok(path)
    }
}

fn parse_compress(config: &CompressConfig) -> Result<CompressionLevel> {
    match config {
        CompressConfig::Level(n) => CompressionLevel::from_level(*n).map_err(anyhow::Error::msg),
        CompressConfig::Max(s) => s
            .parse::<CompressionLevel>()
            .map_err(|e| anyhow!("invalid compress value '{}' in config file: {}", s, e)),
    }
}

/// Rebuild the minimap strip with smaller bordered tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimapJob {
    pub source: PathBuf,
    pub params: MinimapParams,
    pub out_file: String,
}

impl MinimapJob {
    pub fn resolve(args: &MinimapArgs, loaded: &LoadedConfig) -> Self {
        let cfg = &loaded.config.minimap;
        Self {
            source: args
                .source
                .clone()
                .unwrap_or_else(|| loaded.resolve_path(&cfg.source)),
            params: MinimapParams {
                tile_size: args.tile_size.or(cfg.tile_size),
                output_tile_size: args.output_tile_size.unwrap_or(cfg.output_tile_size),
                tile_count: args.tile_count.unwrap_or(cfg.tile_count),
            },
            out_file: args.out_file.clone().unwrap_or_else(|| cfg.output.clone()),
        }
    }

    pub fn run(&self, output: &OutputSettings) -> Result<Vec<PathBuf>> {
        let sheet = load_image(&self.source)?.into_rgba8();
        let strip = remake_minimap(&sheet, &self.params).with_context(|| {
            format!("failed to remake minimap strip {}", self.source.display())
        })?;
        info!(
            "Remade {} tiles at {}x{}",
            self.params.tile_count, self.params.output_tile_size, self.params.output_tile_size
        );

        let path = output.save(&self.out_file, &DynamicImage::ImageRgba8(strip))?;
        Ok(vec![path])
    }
}

/// Split the minimap strip into one file per named cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellsJob {
    pub source: PathBuf,
    pub cell_width: u32,
    pub names: Vec<String>,
    pub prefix: String,
}

impl CellsJob {
    pub fn resolve(args: &CellsArgs, loaded: &LoadedConfig) -> Self {
        let cfg = &loaded.config.cells;
        Self {
            source: args
                .source
                .clone()
                .unwrap_or_else(|| loaded.resolve_path(&cfg.source)),
            cell_width: args.cell_width.unwrap_or(cfg.cell_width),
            names: args.names.clone().unwrap_or_else(|| cfg.names.clone()),
            prefix: args.prefix.clone().unwrap_or_else(|| cfg.prefix.clone()),
        }
    }

    pub fn run(&self, output: &OutputSettings) -> Result<Vec<PathBuf>> {
        let sheet = load_image(&self.source)?;
        let cells = split_cells(&sheet, self.cell_width, &self.names)
            .with_context(|| format!("failed to split {}", self.source.display()))?;

        let written = cells
            .iter()
            .map(|cell| output.save(&output_filename(&self.prefix, &cell.name), &cell.image))
            .collect::<Result<Vec<_>>>()?;
        info!("Generated {} cell images", written.len());

        Ok(written)
    }
}

/// Cut the 9-slice border pieces out of both button states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonJob {
    pub normal: PathBuf,
    pub selected: PathBuf,
    pub corner_size: u32,
    pub normal_prefix: String,
    pub selected_prefix: String,
}

impl ButtonJob {
    pub fn resolve(args: &ButtonArgs, loaded: &LoadedConfig) -> Self {
        let cfg = &loaded.config.button;
        Self {
            normal: args
                .normal
                .clone()
                .unwrap_or_else(|| loaded.resolve_path(&cfg.normal)),
            selected: args
                .selected
                .clone()
                .unwrap_or_else(|| loaded.resolve_path(&cfg.selected)),
            corner_size: args.corner_size.unwrap_or(cfg.corner_size),
            normal_prefix: cfg.normal_prefix.clone(),
            selected_prefix: cfg.selected_prefix.clone(),
        }
    }

    pub fn run(&self, output: &OutputSettings) -> Result<Vec<PathBuf>> {
        let normal = load_image(&self.normal)?;
        let selected = load_image(&self.selected)?;
        let parts = split_button_pair(&normal, &selected, self.corner_size).with_context(|| {
            format!(
                "failed to split buttons {} and {}",
                self.normal.display(),
                self.selected.display()
            )
        })?;

        let mut written = Vec::with_capacity(parts.len() * 2);
        for part in &parts {
            written.push(output.save(
                &output_filename(&self.normal_prefix, &part.name),
                &part.normal,
            )?);
            written.push(output.save(
                &output_filename(&self.selected_prefix, &part.name),
                &part.selected,
            )?);
        }
        info!("Generated {} button pieces", written.len());

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliArgs, Command};
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn parse(args: &[&str]) -> Command {
        CliArgs::try_parse_from(std::iter::once("sheet-slicer").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn minimap_args(args: &[&str]) -> MinimapArgs {
        match parse(&[&["minimap"][..], args].concat()) {
            Command::Minimap(a) => a,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn cells_args(args: &[&str]) -> CellsArgs {
        match parse(&[&["cells"][..], args].concat()) {
            Command::Cells(a) => a,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn button_args(args: &[&str]) -> ButtonArgs {
        match parse(&[&["button"][..], args].concat()) {
            Command::Button(a) => a,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn config(json: &str, dir: &str) -> LoadedConfig {
        LoadedConfig::parse(json, PathBuf::from(dir)).unwrap()
    }

    fn write_image(path: &Path, width: u32, height: u32) {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 5, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_no_flags_use_original_file_names() {
        let loaded = LoadedConfig::defaults();

        let minimap = MinimapJob::resolve(&minimap_args(&[]), &loaded);
        assert_eq!(minimap.source, PathBuf::from("sheet_minimap.png"));
        assert_eq!(minimap.out_file, "sheet_minimap_new.png");
        assert_eq!(minimap.params, MinimapParams::default());

        let cells = CellsJob::resolve(&cells_args(&[]), &loaded);
        assert_eq!(cells.source, PathBuf::from("sheet_minimap.png"));
        assert_eq!(cells.cell_width, 20);
        assert_eq!(cells.prefix, "cell_");
        assert_eq!(cells.names.len(), 12);

        let button = ButtonJob::resolve(&button_args(&[]), &loaded);
        assert_eq!(button.normal, PathBuf::from("button_whole_normal.png"));
        assert_eq!(button.selected, PathBuf::from("button_whole_selected.png"));
        assert_eq!(button.corner_size, 10);
        assert_eq!(button.normal_prefix, "button_normal_");
        assert_eq!(button.selected_prefix, "button_selected_");

        let output = OutputSettings::resolve(&minimap_args(&[]).common, &loaded).unwrap();
        assert_eq!(output.dir, PathBuf::from("."));
        assert_eq!(output.compress, None);
    }

    #[test]
    fn test_cli_flag_beats_config_value() {
        let loaded = config(
            r#"{ "minimap": { "source": "strip.png", "tile_size": 24, "output_tile_size": 16 } }"#,
            "gfx",
        );

        let job = MinimapJob::resolve(
            &minimap_args(&["--source", "other.png", "--tile-size", "30"]),
            &loaded,
        );

        assert_eq!(job.source, PathBuf::from("other.png"));
        assert_eq!(job.params.tile_size, Some(30));
        assert_eq!(job.params.output_tile_size, 16);
    }

    #[test]
    fn test_config_value_beats_default() {
        let loaded = config(
            r#"{ "cells": { "cell_width": 16, "names": ["a", "b"], "prefix": "tile_" } }"#,
            "gfx",
        );

        let job = CellsJob::resolve(&cells_args(&["--prefix", "cli_"]), &loaded);

        assert_eq!(job.source, PathBuf::from("gfx/sheet_minimap.png"));
        assert_eq!(job.cell_width, 16);
        assert_eq!(job.names, ["a", "b"]);
        assert_eq!(job.prefix, "cli_");
    }

    #[test]
    fn test_output_settings_precedence() {
        let loaded = config(r#"{ "output_dir": "out", "compress": "max" }"#, "gfx");

        let from_config = OutputSettings::resolve(&cells_args(&[]).common, &loaded).unwrap();
        assert_eq!(from_config.dir, PathBuf::from("gfx/out"));
        assert_eq!(from_config.compress, Some(CompressionLevel::Max));

        let args = cells_args(&["-o", "elsewhere", "--compress", "3"]);
        let from_cli = OutputSettings::resolve(&args.common, &loaded).unwrap();
        assert_eq!(from_cli.dir, PathBuf::from("elsewhere"));
        assert_eq!(from_cli.compress, Some(CompressionLevel::Level(3)));
    }

    #[test]
    fn test_bad_compress_in_config() {
        let loaded = config(r#"{ "compress": "fastest" }"#, ".");

        assert!(OutputSettings::resolve(&cells_args(&[]).common, &loaded).is_err());
    }

    #[test]
    fn test_button_prefixes_from_config_name_outputs() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir.path().join("normal.png"), 40, 30);
        write_image(&dir.path().join("selected.png"), 40, 30);
        let config_path = dir.path().join("slicer.json");
        fs::write(
            &config_path,
            r#"{
                "output_dir": "out",
                "button": {
                    "normal": "normal.png",
                    "selected": "selected.png",
                    "normal_prefix": "btn_n_",
                    "selected_prefix": "btn_s_"
                }
            }"#,
        )
        .unwrap();
        let config_arg = config_path.to_string_lossy().into_owned();
        let args = button_args(&["-c", &config_arg]);

        let loaded = load_config(&args.common).unwrap();
        let output = OutputSettings::resolve(&args.common, &loaded).unwrap();
        output.prepare().unwrap();
        let written = ButtonJob::resolve(&args, &loaded).run(&output).unwrap();

        let out = dir.path().join("out");
        assert_eq!(written.len(), 16);
        assert_eq!(written[0], out.join("btn_n_top_left.png"));
        assert_eq!(written[1], out.join("btn_s_top_left.png"));
        assert!(out.join("btn_n_vertical_right.png").exists());
        assert!(out.join("btn_s_vertical_right.png").exists());
        assert!(!out.join("button_normal_top_left.png").exists());
    }

    #[test]
    fn test_cells_job_writes_every_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("strip.png");
        write_image(&source, 60, 20);
        let source_arg = source.to_string_lossy().into_owned();
        let args = cells_args(&["--source", &source_arg, "--names", "x,y,z"]);
        let output = OutputSettings {
            dir: dir.path().to_path_buf(),
            compress: None,
        };

        let written = CellsJob::resolve(&args, &LoadedConfig::defaults())
            .run(&output)
            .unwrap();

        assert_eq!(
            written,
            ["cell_x.png", "cell_y.png", "cell_z.png"].map(|f| dir.path().join(f))
        );
    }

    #[test]
    fn test_minimap_job_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputSettings {
            dir: dir.path().to_path_buf(),
            compress: None,
        };
        let job = MinimapJob::resolve(
            &minimap_args(&["--source", "no/such/sheet.png"]),
            &LoadedConfig::defaults(),
        );

        let err = job.run(&output).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<crate::SlicerError>(),
            Some(crate::SlicerError::InputNotFound(_))
        ));
    }
}
