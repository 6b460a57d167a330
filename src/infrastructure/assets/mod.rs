pub mod image_fetcher;

pub use image_fetcher::{EmbeddedImage, fetch_image, read_image_file};
