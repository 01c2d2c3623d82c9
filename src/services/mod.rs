pub mod thumbnail;

pub use thumbnail::{generate_thumbnail, render, ThumbnailReport};
