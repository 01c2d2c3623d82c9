//! Nearest-neighbor decimation of scanline sources.
//!
//! Each axis is mapped independently: destination coordinate `d` on an axis
//! of length `dst_len` samples source coordinate
//! `round(d / dst_len * src_len)`. No filtering is applied, so aliasing is
//! expected.
//!
//! Only the source rows that are actually sampled are read, each exactly
//! once, through a single reused scanline buffer.

mod nearest;

pub use nearest::{lowres_height, resample_nearest, source_index};
