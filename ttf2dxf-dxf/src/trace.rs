//! Glyph outline walking: font outline events → DXF polyline records.

use std::io::{self, Write};

use ttf2dxf_fonts::OutlineSink;
use ttf2dxf_graphics::bezier::{CubicSegment, QuadSegment};
use ttf2dxf_graphics::biarc::PolyVertex;
use ttf2dxf_graphics::extents::Extents;
use ttf2dxf_graphics::flatten::{self, FlattenParams};
use ttf2dxf_graphics::types::Point;

use crate::records::DxfWriter;

/// Walks one glyph's outline events, streaming records as they arrive.
///
/// Holds the state the event stream threads between callbacks: the
/// cursor (last point), the accumulated glyph extents, and the layer tag
/// resolved for this glyph. A fresh tracer per glyph is the per-glyph
/// extents reset.
///
/// [`OutlineSink`] events cannot fail, so the first I/O error is latched
/// and reported by [`finish`](Self::finish); later events become no-ops.
pub struct GlyphTracer<'a, W: Write> {
    writer: &'a mut DxfWriter<W>,
    layer: Option<&'a str>,
    params: FlattenParams,
    cursor: Point,
    extents: Extents,
    error: Option<io::Error>,
}

impl<'a, W: Write> GlyphTracer<'a, W> {
    pub fn new(
        writer: &'a mut DxfWriter<W>,
        layer: Option<&'a str>,
        params: FlattenParams,
    ) -> Self {
        Self {
            writer,
            layer,
            params,
            cursor: Point::ZERO,
            extents: Extents::EMPTY,
            error: None,
        }
    }

    /// Surface the first I/O error hit inside the event callbacks, or
    /// hand back the glyph extents accumulated across all events.
    pub fn finish(self) -> io::Result<Extents> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.extents),
        }
    }

    fn record(&mut self, r: io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = r {
                self.error = Some(e);
            }
        }
    }

    /// Run a flattener over the shared emit/extents state.
    fn run_flattener(
        &mut self,
        run: impl FnOnce(&FlattenParams, &mut Extents, &mut dyn FnMut(PolyVertex)),
    ) {
        let Self {
            writer,
            extents,
            error,
            params,
            ..
        } = self;
        let mut emit = |v: PolyVertex| {
            if error.is_none() {
                let r = match v.bulge {
                    Some(b) => writer.arc_vertex(b, v.end),
                    None => writer.curve_vertex(v.end),
                };
                if let Err(e) = r {
                    *error = Some(e);
                }
            }
        };
        run(params, extents, &mut emit);
    }
}

impl<W: Write> OutlineSink for GlyphTracer<'_, W> {
    fn move_to(&mut self, x: f64, y: f64) {
        // Every move after the first starts a new polyline entity; the
        // previous record ends implicitly at the next 0 group.
        let p = Point::new(x, y);
        let r = self.writer.polyline_start(p);
        self.record(r);
        if let Some(layer) = self.layer {
            let r = self.writer.layer(layer);
            self.record(r);
        }
        self.cursor = p;
        self.extents.add_point(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        let r = self.writer.vertex(p);
        self.record(r);
        self.cursor = p;
        self.extents.add_point(p);
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let seg = QuadSegment::new(self.cursor, Point::new(x1, y1), Point::new(x, y));
        self.run_flattener(|params, extents, emit| {
            flatten::flatten_quad(&seg, params, extents, emit);
        });
        self.cursor = seg.p2;
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let seg = CubicSegment::new(
            self.cursor,
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x, y),
        );
        self.run_flattener(|params, extents, emit| {
            flatten::flatten_cubic(&seg, params, extents, emit);
        });
        self.cursor = seg.p3;
    }

    fn close(&mut self) {
        // Contours close implicitly; the record stream has no terminator.
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(layer: Option<&str>, events: impl FnOnce(&mut GlyphTracer<'_, Vec<u8>>)) -> String {
        let mut writer = DxfWriter::new(Vec::new());
        let mut tracer = GlyphTracer::new(&mut writer, layer, FlattenParams::default());
        events(&mut tracer);
        tracer.finish().expect("no I/O errors on a Vec");
        String::from_utf8(writer.into_inner()).expect("records are ASCII")
    }

    #[test]
    fn straight_contour_has_no_bulges() {
        let s = trace(Some("l"), |t| {
            t.move_to(0.0, 0.0);
            t.line_to(0.0, 2048.0);
            t.line_to(128.0, 2048.0);
            t.line_to(128.0, 0.0);
            t.close();
        });
        assert!(s.starts_with("  0\nLWPOLYLINE\n  10\n0.000\n 20\n0.000\n  8\nl\n"));
        assert!(!s.contains("42"), "line-only glyph must not emit bulges: {s}");
        assert_eq!(s.matches("LWPOLYLINE").count(), 1);
    }

    #[test]
    fn each_move_starts_a_new_polyline() {
        // Two contours, as in "o": outer ring and inner ring.
        let s = trace(Some("o"), |t| {
            t.move_to(0.0, 0.0);
            t.line_to(100.0, 0.0);
            t.move_to(25.0, 25.0);
            t.line_to(75.0, 25.0);
        });
        assert_eq!(s.matches("LWPOLYLINE").count(), 2);
        assert_eq!(s.matches("  8\no\n").count(), 2);
    }

    #[test]
    fn curves_emit_arc_vertices() {
        let s = trace(None, |t| {
            t.move_to(0.0, 0.0);
            t.quad_to(400.0, 800.0, 800.0, 0.0);
        });
        assert!(s.contains("\n  42\n"), "expected bulge records: {s}");
    }

    #[test]
    fn no_layer_policy_emits_no_layer_group() {
        let s = trace(None, |t| {
            t.move_to(5.0, 5.0);
            t.line_to(6.0, 6.0);
        });
        assert!(!s.contains("  8\n"), "unexpected layer tag: {s}");
    }

    #[test]
    fn extents_track_all_events() {
        let mut writer = DxfWriter::new(Vec::new());
        let mut tracer = GlyphTracer::new(&mut writer, None, FlattenParams::default());
        tracer.move_to(10.0, 20.0);
        tracer.line_to(-5.0, 300.0);
        let e = tracer.finish().unwrap();
        assert_eq!((e.min_x, e.max_x), (-5, 10));
        assert_eq!((e.min_y, e.max_y), (20, 300));
    }

    #[test]
    fn curve_extents_cover_the_apex() {
        let mut writer = DxfWriter::new(Vec::new());
        let mut tracer = GlyphTracer::new(&mut writer, None, FlattenParams::default());
        tracer.move_to(0.0, 0.0);
        // Parabola apex at y = 400, above both endpoints.
        tracer.quad_to(500.0, 800.0, 1000.0, 0.0);
        let e = tracer.finish().unwrap();
        assert!(e.max_y >= 399, "max_y = {}", e.max_y);
    }

    #[test]
    fn io_errors_are_latched_until_finish() {
        struct FailingWriter;
        impl io::Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = DxfWriter::new(FailingWriter);
        let mut tracer = GlyphTracer::new(&mut writer, None, FlattenParams::default());
        tracer.move_to(0.0, 0.0);
        tracer.line_to(1.0, 1.0);
        let err = tracer.finish().expect_err("broken pipe must surface");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
