mod format;

pub use format::{output_filename, save_png};
