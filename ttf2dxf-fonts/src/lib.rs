//! Font loading, metrics, and glyph outline extraction for `ttf2dxf`.
//!
//! Wraps `ttf-parser` for face parsing, glyph lookup, advances, and
//! outline decomposition, and `fontdue` for the monochrome rasterization
//! behind bitmap-tracing mode. Intentionally independent of
//! `ttf2dxf-graphics` — everything at this boundary is plain
//! `f64`/`i64`/`u16` values; bridging happens in the consuming crates.

pub mod data;
pub mod error;
pub mod outline;
pub mod raster;

pub use data::{Advance, FontData, OUTPUT_UNITS_PER_EM};
pub use error::FontError;
pub use outline::OutlineSink;
pub use raster::{MonoBitmap, Rasterizer};
