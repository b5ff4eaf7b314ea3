mod loader;

pub use loader::load_image;
