//! Monochrome glyph rasterization for bitmap-tracing mode.
//!
//! `ttf-parser` does not rasterize. Bitmap mode renders through `fontdue`
//! and thresholds its 8-bit coverage into a packed 1-bit bitmap, which is
//! the shape the span tracer consumes.

use crate::error::FontError;

/// Coverage at or above this value becomes a set bit.
const COVERAGE_THRESHOLD: u8 = 128;

/// A packed monochrome bitmap.
#[derive(Debug, Clone)]
pub struct MonoBitmap {
    /// Number of pixel rows.
    pub rows: usize,
    /// Bytes per row.
    pub pitch: usize,
    /// `rows * pitch` bytes, row-major, MSB-first within each byte.
    pub buffer: Vec<u8>,
    /// Leftmost pixel column relative to the pen position, in pixels.
    pub left: i64,
    /// Rows above the baseline, in pixels.
    pub top: i64,
}

impl MonoBitmap {
    /// Whether the pixel at (`row`, `col`) is set.
    ///
    /// `col` may range over the full pitch (`pitch * 8` columns); padding
    /// bits beyond the glyph width are always unset.
    #[must_use]
    pub fn bit(&self, row: usize, col: usize) -> bool {
        self.buffer[row * self.pitch + col / 8] & (0x80 >> (col % 8)) != 0
    }
}

/// Monochrome rasterizer for bitmap-tracing mode.
#[derive(Debug)]
pub struct Rasterizer {
    font: fontdue::Font,
}

impl Rasterizer {
    /// Load a font for rasterization.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Raster`] if `fontdue` rejects the bytes.
    pub fn new(bytes: &[u8]) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(FontError::Raster)?;
        Ok(Self { font })
    }

    /// Rasterize `ch` at `px` pixels per em.
    ///
    /// Returns `None` when the character has no glyph or the glyph
    /// covers no pixels (whitespace).
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn glyph(&self, ch: char, px: u32) -> Option<MonoBitmap> {
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(ch, px as f32);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }

        let pitch = metrics.width.div_ceil(8);
        let mut buffer = vec![0u8; pitch * metrics.height];
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                if coverage[row * metrics.width + col] >= COVERAGE_THRESHOLD {
                    buffer[row * pitch + col / 8] |= 0x80 >> (col % 8);
                }
            }
        }

        Some(MonoBitmap {
            rows: metrics.height,
            pitch,
            buffer,
            left: i64::from(metrics.xmin),
            top: i64::from(metrics.ymin) + metrics.height as i64,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
