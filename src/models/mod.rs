pub mod config;

pub use config::{ThumbnailConfig, DEFAULT_LOWRES_WIDTH};
