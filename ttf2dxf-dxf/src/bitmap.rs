//! Bitmap span tracing: monochrome glyph bitmaps → straight strokes.
//!
//! The secondary input path. Each bitmap row is scanned for runs of set
//! pixels; every run becomes one `move_to` + `line_to` stroke through
//! the same walker the outline path uses, so layer tags and extents come
//! along for free. Curves never appear here.

use std::io::Write;

use ttf2dxf_fonts::{MonoBitmap, OutlineSink};

use crate::trace::GlyphTracer;

/// Output units per em (26.6 fixed-point at 64 px/em).
const UNITS_PER_EM_OUT: i64 = 4096;

/// Horizontal inset applied to each span end, in output units, pulling
/// strokes inside the pixel edges.
const SPAN_INSET: i64 = 8;

/// Stroke the set-pixel spans of `bitmap` as alternating-direction
/// polylines.
///
/// `linescale` is the rasterization height in rows per em; `offset_x`
/// shifts every span right by the text-mode pen position, in output
/// units. `odd` is the row parity latch: alternate rows emit their spans
/// in reverse order and direction, so adjacent scanline strokes read as
/// one zig-zag path. The latch deliberately persists across rows *and*
/// glyphs.
///
/// Rows whose spans come out narrower than twice the inset are dropped,
/// matching the span-validity rule of the edge scan. Connectivity on
/// rows with several disjoint spans is a known heuristic; preserve its
/// behavior as-is.
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn trace_spans<W: Write>(
    bitmap: &MonoBitmap,
    linescale: i64,
    offset_x: i64,
    odd: &mut bool,
    tracer: &mut GlyphTracer<'_, W>,
) {
    let to_units = |px: i64| px * UNITS_PER_EM_OUT / linescale;
    // Span x coordinates, interleaved start/end. Grows as needed; rows
    // of real glyph bitmaps rarely exceed a handful of spans.
    let mut spans: Vec<i64> = Vec::new();

    for row in 0..bitmap.rows {
        let y = to_units(bitmap.top - row as i64) - UNITS_PER_EM_OUT / 2 / linescale;

        spans.clear();
        let mut prev_set = false;
        let mut span_start = 0i64;
        let cols = bitmap.pitch * 8;
        for col in 0..cols {
            let set = bitmap.bit(row, col);
            let x = to_units(bitmap.left + col as i64) + offset_x;
            if set && !prev_set {
                span_start = x + SPAN_INSET;
                spans.push(span_start);
            }
            if prev_set && !set {
                let end = x - SPAN_INSET;
                if span_start < end {
                    spans.push(end);
                } else {
                    // Narrower than the insets allow: drop the start too.
                    spans.pop();
                }
            }
            prev_set = set;
        }
        if prev_set {
            // Row ended inside a span; close it at the last column.
            let x = to_units(bitmap.left + (cols - 1) as i64) + offset_x;
            spans.push(x - SPAN_INSET);
        }

        *odd = !*odd;
        let pairs = spans.len() / 2;
        if *odd {
            for i in (0..pairs).rev() {
                tracer.move_to(spans[2 * i + 1] as f64, y as f64);
                tracer.line_to(spans[2 * i] as f64, y as f64);
            }
        } else {
            for i in 0..pairs {
                tracer.move_to(spans[2 * i] as f64, y as f64);
                tracer.line_to(spans[2 * i + 1] as f64, y as f64);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
