//! Font data wrapper around `ttf-parser`.

use std::sync::Arc;

use crate::error::FontError;
use crate::outline::OutlineSink;

/// Output coordinate basis: 26.6 fixed-point at 64 px/em, i.e. 4096
/// units per em. All emitted geometry, advances, and extents live in
/// this space (times the user scale factor).
pub const OUTPUT_UNITS_PER_EM: f64 = 4096.0;

/// Pen displacement after drawing a glyph, in truncated output units.
///
/// Layout metadata only — never feeds back into the geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    pub x: i64,
    pub y: i64,
}

/// Parsed font data.
///
/// Stores owned font bytes and the cached em size. Creates a
/// `ttf_parser::Face` on demand for individual queries — parsing is
/// header validation and offset-table construction only, no allocation.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&bytes, 0).map_err(FontError::Parse)?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            bytes,
        })
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[allow(clippy::expect_used, reason = "bytes were validated at construction")]
        let face = ttf_parser::Face::parse(&self.bytes, 0)
            .expect("font bytes validated at construction");
        face
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Scale factor from design units to output units, times `extra`.
    #[must_use]
    pub fn unit_scale(&self, extra: f64) -> f64 {
        extra * OUTPUT_UNITS_PER_EM / f64::from(self.units_per_em)
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Pen advance for a glyph, scaled to output units.
    ///
    /// The vertical advance is zero for fonts without vertical metrics,
    /// which covers ordinary horizontal layout.
    #[allow(clippy::cast_possible_truncation, reason = "metrics are integral by contract")]
    #[must_use]
    pub fn advance(&self, glyph_id: u16, scale: f64) -> Advance {
        let face = self.face();
        let gid = ttf_parser::GlyphId(glyph_id);
        Advance {
            x: face
                .glyph_hor_advance(gid)
                .map_or(0, |a| (f64::from(a) * scale) as i64),
            y: face
                .glyph_ver_advance(gid)
                .map_or(0, |a| (f64::from(a) * scale) as i64),
        }
    }

    /// Extract a glyph outline into the given sink.
    ///
    /// Coordinates are multiplied by `scale` and then shifted right by
    /// `offset_x` output units (the text-mode pen position). Returns
    /// `false` if the glyph has no outline (e.g. a space).
    pub fn outline(
        &self,
        glyph_id: u16,
        scale: f64,
        offset_x: f64,
        sink: &mut dyn OutlineSink,
    ) -> bool {
        let face = self.face();
        let mut adapter = OutlineAdapter {
            sink,
            scale,
            offset_x,
        };
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut adapter)
            .is_some()
    }
}

/// Adapter from [`OutlineSink`] to `ttf_parser::OutlineBuilder`,
/// applying the unit scale and pen offset on the way through.
struct OutlineAdapter<'a> {
    sink: &'a mut dyn OutlineSink,
    scale: f64,
    offset_x: f64,
}

impl OutlineAdapter<'_> {
    fn x(&self, x: f32) -> f64 {
        f64::from(x).mul_add(self.scale, self.offset_x)
    }

    fn y(&self, y: f32) -> f64 {
        f64::from(y) * self.scale
    }
}

impl ttf_parser::OutlineBuilder for OutlineAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink.move_to(self.x(x), self.y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink.line_to(self.x(x), self.y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.sink.quad_to(self.x(x1), self.y(y1), self.x(x), self.y(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.sink.curve_to(
            self.x(x1),
            self.y(y1),
            self.x(x2),
            self.y(y2),
            self.x(x),
            self.y(y),
        );
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
