pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod job;
pub mod output;
pub mod slice;
pub mod source;

pub use cli::{CliArgs, Command, CommonArgs, CompressionLevel};
pub use error::SlicerError;
pub use geometry::Rect;
pub use slice::{MinimapParams, NamedImage, NamedRect};
