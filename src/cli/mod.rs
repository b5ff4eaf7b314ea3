mod args;

pub use args::{
    ButtonArgs, CellsArgs, CliArgs, Command, CommonArgs, CompressionLevel, InitArgs, MinimapArgs,
};
