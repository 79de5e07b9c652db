//! Streaming DXF group-code records.
//!
//! The record layout — field spacing included — is exactly what the
//! OpenSCAD DXF importer and similar CAM consumers have been parsing for
//! years. Every byte is load-bearing; do not normalize the formatting.

use std::io::{self, Write};

use ttf2dxf_graphics::types::{Point, Scalar};

// ---------------------------------------------------------------------------
// Layer policy
// ---------------------------------------------------------------------------

/// How emitted entities are tagged with layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerPolicy {
    /// One synthetic layer per glyph, derived from the character code.
    PerGlyph,
    /// A single fixed layer name for everything.
    Fixed(String),
    /// No layer tags.
    None,
}

impl LayerPolicy {
    /// Resolve the layer tag for one glyph, chosen once before any of
    /// its geometry is emitted.
    ///
    /// Printable ASCII characters name their own layer; anything else
    /// gets an underscore-prefixed decimal code.
    #[must_use]
    pub fn tag_for(&self, ch: char) -> Option<String> {
        match self {
            Self::PerGlyph => Some(if (' '..='~').contains(&ch) {
                ch.to_string()
            } else {
                format!("_{}", u32::from(ch))
            }),
            Self::Fixed(name) => Some(name.clone()),
            Self::None => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dimension metrics
// ---------------------------------------------------------------------------

/// Per-glyph metric carried by an auxiliary dimension record, listed in
/// emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MinX,
    MaxX,
    MinY,
    MaxY,
    AdvX,
    AdvY,
}

struct MetricFields {
    name: &'static str,
    flag: &'static str,
    /// Group code for the value, spacing included; `minx` carries a
    /// leading space the others lack.
    value_tag: &'static str,
}

impl Metric {
    /// Exact field layout per metric: horizontal metrics are flagged 70
    /// with the value in group 13, vertical ones flagged 6 in group 23.
    const fn fields(self) -> MetricFields {
        match self {
            Self::MinX => MetricFields {
                name: "minx",
                flag: "70",
                value_tag: " 13",
            },
            Self::MaxX => MetricFields {
                name: "maxx",
                flag: "70",
                value_tag: "13",
            },
            Self::MinY => MetricFields {
                name: "miny",
                flag: "6",
                value_tag: "23",
            },
            Self::MaxY => MetricFields {
                name: "maxy",
                flag: "6",
                value_tag: "23",
            },
            Self::AdvX => MetricFields {
                name: "advx",
                flag: "70",
                value_tag: "13",
            },
            Self::AdvY => MetricFields {
                name: "advy",
                flag: "6",
                value_tag: "23",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Streaming writer for the DXF entity records this tool emits.
///
/// Every method appends to the underlying stream immediately; nothing is
/// buffered per glyph.
#[derive(Debug)]
pub struct DxfWriter<W: Write> {
    out: W,
}

impl<W: Write> DxfWriter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// File preamble: open the entities section.
    pub fn begin_entities(&mut self) -> io::Result<()> {
        self.out.write_all(b"  0\nSECTION\n  2\nENTITIES\n")
    }

    /// File postamble: close the section and end the file.
    pub fn end_of_file(&mut self) -> io::Result<()> {
        self.out.write_all(b"  0\nENDSEC\n  0\nEOF\n")
    }

    /// Start a new lightweight polyline at `p`.
    ///
    /// Outline event coordinates are integral font units; three decimals
    /// is the precision consumers expect for them.
    pub fn polyline_start(&mut self, p: Point) -> io::Result<()> {
        write!(
            self.out,
            "  0\nLWPOLYLINE\n  10\n{:.3}\n 20\n{:.3}\n",
            p.x, p.y
        )
    }

    /// Plain vertex at an outline event point (three decimals).
    pub fn vertex(&mut self, p: Point) -> io::Result<()> {
        write!(self.out, "  10\n{:.3}\n 20\n{:.3}\n", p.x, p.y)
    }

    /// Plain vertex at a flattened curve point (four decimals).
    pub fn curve_vertex(&mut self, p: Point) -> io::Result<()> {
        write!(self.out, "  10\n{:.4}\n 20\n{:.4}\n", p.x, p.y)
    }

    /// Arc vertex: the bulge for the arc ending at `p`, then `p` itself.
    /// In the group-code stream the bulge attaches to the previously
    /// emitted vertex.
    pub fn arc_vertex(&mut self, bulge: Scalar, p: Point) -> io::Result<()> {
        write!(
            self.out,
            "  42\n{:.4}\n 10\n{:.4}\n  20\n{:.4}\n",
            bulge, p.x, p.y
        )
    }

    /// Layer tag for the preceding entity.
    pub fn layer(&mut self, name: &str) -> io::Result<()> {
        write!(self.out, "  8\n{name}\n")
    }

    /// One auxiliary dimension record.
    pub fn dimension(&mut self, metric: Metric, value: i64) -> io::Result<()> {
        let f = metric.fields();
        write!(
            self.out,
            " 0\nDIMENSION\n 70\n{}\n 1\n{}\n{}\n{}\n",
            f.flag, f.name, f.value_tag, value
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut DxfWriter<Vec<u8>>)) -> String {
        let mut w = DxfWriter::new(Vec::new());
        f(&mut w);
        String::from_utf8(w.into_inner()).expect("records are ASCII")
    }

    #[test]
    fn preamble_and_postamble() {
        let s = written(|w| {
            w.begin_entities().unwrap();
            w.end_of_file().unwrap();
        });
        assert_eq!(s, "  0\nSECTION\n  2\nENTITIES\n  0\nENDSEC\n  0\nEOF\n");
    }

    #[test]
    fn polyline_start_uses_three_decimals() {
        let s = written(|w| w.polyline_start(Point::new(128.0, -64.0)).unwrap());
        assert_eq!(s, "  0\nLWPOLYLINE\n  10\n128.000\n 20\n-64.000\n");
    }

    #[test]
    fn vertex_uses_three_decimals() {
        let s = written(|w| w.vertex(Point::new(1.5, 2.0)).unwrap());
        assert_eq!(s, "  10\n1.500\n 20\n2.000\n");
    }

    #[test]
    fn curve_vertex_uses_four_decimals() {
        let s = written(|w| w.curve_vertex(Point::new(1.5, 2.0)).unwrap());
        assert_eq!(s, "  10\n1.5000\n 20\n2.0000\n");
    }

    #[test]
    fn arc_vertex_leads_with_bulge() {
        let s = written(|w| w.arc_vertex(0.4142, Point::new(10.0, 0.0)).unwrap());
        assert_eq!(s, "  42\n0.4142\n 10\n10.0000\n  20\n0.0000\n");
    }

    #[test]
    fn layer_record() {
        let s = written(|w| w.layer("A").unwrap());
        assert_eq!(s, "  8\nA\n");
    }

    #[test]
    fn dimension_records_field_layout() {
        let s = written(|w| w.dimension(Metric::MinX, 42).unwrap());
        assert_eq!(s, " 0\nDIMENSION\n 70\n70\n 1\nminx\n 13\n42\n");

        let s = written(|w| w.dimension(Metric::MaxX, -7).unwrap());
        assert_eq!(s, " 0\nDIMENSION\n 70\n70\n 1\nmaxx\n13\n-7\n");

        let s = written(|w| w.dimension(Metric::MinY, 0).unwrap());
        assert_eq!(s, " 0\nDIMENSION\n 70\n6\n 1\nminy\n23\n0\n");

        let s = written(|w| w.dimension(Metric::AdvY, 9).unwrap());
        assert_eq!(s, " 0\nDIMENSION\n 70\n6\n 1\nadvy\n23\n9\n");
    }

    #[test]
    fn per_glyph_layer_tags() {
        let p = LayerPolicy::PerGlyph;
        assert_eq!(p.tag_for('A').as_deref(), Some("A"));
        assert_eq!(p.tag_for(' ').as_deref(), Some(" "));
        assert_eq!(p.tag_for('~').as_deref(), Some("~"));
        assert_eq!(p.tag_for('\u{1}').as_deref(), Some("_1"));
        assert_eq!(p.tag_for('\u{e9}').as_deref(), Some("_233"));
    }

    #[test]
    fn fixed_and_absent_layer_tags() {
        assert_eq!(
            LayerPolicy::Fixed("cut".to_owned()).tag_for('A').as_deref(),
            Some("cut")
        );
        assert_eq!(LayerPolicy::None.tag_for('A'), None);
    }
}
