//! DXF document assembly for glyph rendering.
//!
//! [`DxfRenderer`] owns the output stream and the per-line state, and
//! renders one character at a time: bitmap strokes (when enabled),
//! outline contours, then metric dimension records. Output is streamed
//! record by record — nothing buffers a whole glyph.

pub mod bitmap;
pub mod records;
pub mod trace;

use std::fmt;
use std::io::{self, Write};

use ttf2dxf_fonts::{Advance, FontData, FontError, Rasterizer};
use ttf2dxf_graphics::extents::Extents;
use ttf2dxf_graphics::flatten::FlattenParams;

pub use records::{DxfWriter, LayerPolicy, Metric};

use trace::GlyphTracer;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options controlling DXF output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Curve flattening knobs (length-sample resolution, arc spacing).
    pub flatten: FlattenParams,
    /// Extra scale applied on top of the 4096-units/em output basis.
    pub scale: f64,
    /// Bitmap-tracing rows per em; 0 disables the bitmap pass.
    pub linescale: u32,
    /// Layer tagging policy.
    pub layers: LayerPolicy,
    /// Emit per-glyph dimension records (font-generation mode).
    pub dimensions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            flatten: FlattenParams::default(),
            scale: 1.0,
            linescale: 0,
            layers: LayerPolicy::None,
            dimensions: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from rendering a glyph stream.
#[derive(Debug)]
pub enum RenderError {
    /// Writing a record to the output stream failed.
    Io(io::Error),
    /// The font collaborator failed.
    Font(FontError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "output error: {e}"),
            Self::Font(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FontError> for RenderError {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Streams a sequence of glyphs into one DXF entities section.
pub struct DxfRenderer<W: Write> {
    writer: DxfWriter<W>,
    opts: RenderOptions,
    /// Extents accumulated across every glyph rendered so far (the
    /// per-line box). Reset once at construction, never per glyph.
    line_extents: Extents,
    /// Bitmap row parity latch; spans alternate direction across rows
    /// and glyphs.
    bitmap_odd: bool,
}

impl<W: Write> DxfRenderer<W> {
    pub fn new(out: W, opts: RenderOptions) -> Self {
        Self {
            writer: DxfWriter::new(out),
            opts,
            line_extents: Extents::EMPTY,
            bitmap_odd: false,
        }
    }

    /// Write the file preamble.
    pub fn begin(&mut self) -> io::Result<()> {
        self.writer.begin_entities()
    }

    /// Write the postamble and hand back the underlying stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.end_of_file()?;
        Ok(self.writer.into_inner())
    }

    /// Extents accumulated across all rendered glyphs.
    #[must_use]
    pub const fn line_extents(&self) -> Extents {
        self.line_extents
    }

    /// Render one character at pen position `offset_x` (output units).
    ///
    /// Returns the glyph's advance, or `None` — with no output and no
    /// extents change — when the character has no glyph in the font.
    ///
    /// # Errors
    ///
    /// I/O failures on the output stream. Degenerate geometry is never
    /// an error; it degrades to straight vertices inside the fitter.
    #[allow(clippy::cast_precision_loss)]
    pub fn render_char(
        &mut self,
        font: &FontData,
        raster: Option<&Rasterizer>,
        ch: char,
        offset_x: i64,
    ) -> Result<Option<Advance>, RenderError> {
        let Some(glyph) = font.glyph_id(ch) else {
            // Unrenderable characters are skipped silently.
            return Ok(None);
        };

        let scale = font.unit_scale(self.opts.scale);
        let layer = self.opts.layers.tag_for(ch);
        let mut tracer = GlyphTracer::new(&mut self.writer, layer.as_deref(), self.opts.flatten);

        if self.opts.linescale > 0 {
            if let Some(raster) = raster {
                if let Some(bm) = raster.glyph(ch, self.opts.linescale) {
                    bitmap::trace_spans(
                        &bm,
                        i64::from(self.opts.linescale),
                        offset_x,
                        &mut self.bitmap_odd,
                        &mut tracer,
                    );
                }
            }
        }

        font.outline(glyph, scale, offset_x as f64, &mut tracer);
        let glyph_extents = tracer.finish()?;

        let advance = font.advance(glyph, scale);
        self.line_extents.add_extents(&glyph_extents);

        if self.opts.dimensions {
            self.dimensions(&glyph_extents, advance, layer.as_deref())?;
        }
        Ok(Some(advance))
    }

    /// The six dimension records, in fixed order, each tagged with the
    /// glyph's layer.
    fn dimensions(
        &mut self,
        e: &Extents,
        adv: Advance,
        layer: Option<&str>,
    ) -> io::Result<()> {
        let records = [
            (Metric::MinX, e.min_x),
            (Metric::MaxX, e.max_x),
            (Metric::MinY, e.min_y),
            (Metric::MaxY, e.max_y),
            (Metric::AdvX, adv.x),
            (Metric::AdvY, adv.y),
        ];
        for (metric, value) in records {
            self.writer.dimension(metric, value)?;
            if let Some(layer) = layer {
                self.writer.layer(layer)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
