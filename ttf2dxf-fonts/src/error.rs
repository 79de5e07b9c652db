//! Font loading and rasterization errors.

use std::fmt;

/// Errors that can occur when loading or querying fonts.
#[derive(Debug, Clone, Copy)]
pub enum FontError {
    /// The font data could not be parsed as an OpenType/TrueType face.
    Parse(ttf_parser::FaceParsingError),
    /// The rasterizer rejected the font data (bitmap-tracing mode only).
    Raster(&'static str),
}

impl FontError {
    /// Stable numeric code for use as a process exit status.
    ///
    /// The parser reports unnumbered error variants; each gets a fixed
    /// small code so callers can distinguish failure causes from the
    /// exit status alone. 99 is reserved for usage errors, 0/1 for
    /// success and generic failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        use ttf_parser::FaceParsingError as E;
        match self {
            Self::Parse(e) => match e {
                E::MalformedFont => 2,
                E::UnknownMagic => 3,
                E::FaceIndexOutOfBounds => 4,
                E::NoHeadTable => 5,
                E::NoHheaTable => 6,
                E::NoMaxpTable => 7,
            },
            Self::Raster(_) => 8,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "font parse error: {e}"),
            Self::Raster(msg) => write!(f, "font rasterizer error: {msg}"),
        }
    }
}

impl std::error::Error for FontError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
