//! `ttf2dxf` CLI — convert TrueType glyph outlines to a layered DXF file.
//!
//! In font-generation mode (`-F`) every printable ASCII character lands
//! on its own layer with six dimension records (`minx`, `maxx`, `miny`,
//! `maxy`, `advx`, `advy`); otherwise the positional text is rendered
//! with an advancing pen. DXF records stream to stdout; diagnostics stay
//! on stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use ttf2dxf_dxf::{DxfRenderer, LayerPolicy, RenderError, RenderOptions};
use ttf2dxf_fonts::{FontData, FontError, Rasterizer};
use ttf2dxf_graphics::flatten::FlattenParams;
use ttf2dxf_graphics::types::{ARC_SPACING, CURVE_STEPS};

/// Exit status for usage and initialization failures.
const EXIT_USAGE: i32 = 99;

/// Bitmap mode renders at least this many rows per em; coarser bitmaps
/// produce too few spans to trace.
const MIN_LINESCALE: u32 = 24;

#[derive(Parser)]
#[command(version, about = "Convert TrueType glyph outlines to a layered DXF file")]
struct Cli {
    /// Approximate curve length, in font units, per biarc pair
    #[arg(short = 's', long = "spacing", value_name = "UNITS", default_value_t = ARC_SPACING)]
    spacing: f64,

    /// TrueType/OpenType font file to read
    #[arg(short = 'f', long = "font", value_name = "FILE")]
    font: Option<PathBuf>,

    /// Scale factor applied to all output coordinates
    #[arg(short = 'c', long = "scale", value_name = "FACTOR", default_value_t = 1.0)]
    scale: f64,

    /// Also trace the rendered bitmap as strokes, at N rows per em
    #[arg(short = 'l', long = "linescale", value_name = "ROWS", default_value_t = 0)]
    linescale: u32,

    /// Fixed layer name for all entities
    #[arg(short = 'L', long = "layer", value_name = "NAME")]
    layer: Option<String>,

    /// Render every printable ASCII character on its own layer, with
    /// dimension records
    #[arg(short = 'F', long = "genfont")]
    genfont: bool,

    /// Text to render (extra characters beyond ASCII in genfont mode)
    #[arg(value_name = "TEXT")]
    text: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; only real usage
            // errors get the failure status.
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if !cli.spacing.is_finite() || cli.spacing <= 0.0 {
        eprintln!("--spacing must be a positive number of font units");
        process::exit(EXIT_USAGE);
    }

    let Some(font_path) = cli.font.as_deref() else {
        eprintln!("Please use -f to specify a font file");
        process::exit(EXIT_USAGE);
    };

    let bytes: Arc<[u8]> = match fs::read(font_path) {
        Ok(b) => Arc::from(b),
        Err(e) => {
            eprintln!("Cannot read {}: {e}", font_path.display());
            process::exit(EXIT_USAGE);
        }
    };

    let font = match FontData::from_bytes(Arc::clone(&bytes)) {
        Ok(f) => f,
        Err(e) => fatal_font_error("parsing", &e),
    };
    log::debug!(
        "loaded {} ({} units/em)",
        font_path.display(),
        font.units_per_em()
    );

    let linescale = if cli.linescale > 0 {
        cli.linescale.max(MIN_LINESCALE)
    } else {
        0
    };
    let raster = if linescale > 0 {
        match Rasterizer::new(&bytes) {
            Ok(r) => Some(r),
            Err(e) => fatal_font_error("rasterizer setup", &e),
        }
    } else {
        None
    };

    let opts = RenderOptions {
        flatten: FlattenParams {
            curve_steps: CURVE_STEPS,
            arc_spacing: cli.spacing,
        },
        scale: cli.scale,
        linescale,
        layers: if cli.genfont {
            LayerPolicy::PerGlyph
        } else if let Some(name) = cli.layer.clone() {
            LayerPolicy::Fixed(name)
        } else {
            LayerPolicy::None
        },
        dimensions: cli.genfont,
    };

    let stdout = io::stdout();
    let renderer = DxfRenderer::new(io::BufWriter::new(stdout.lock()), opts);

    if let Err(e) = run(renderer, &font, raster.as_ref(), cli.genfont, cli.text.as_deref()) {
        match e {
            RenderError::Io(e) => {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
            RenderError::Font(e) => fatal_font_error("rendering", &e),
        }
    }
}

/// Report a fatal font-library failure and terminate with its code.
fn fatal_font_error(operation: &str, err: &FontError) -> ! {
    eprintln!("Fatal error in {operation}: {err}");
    process::exit(err.exit_code());
}

/// Render the requested character set and close out the file.
fn run<W: Write>(
    mut renderer: DxfRenderer<W>,
    font: &FontData,
    raster: Option<&Rasterizer>,
    genfont: bool,
    text: Option<&str>,
) -> Result<(), RenderError> {
    renderer.begin()?;

    if genfont {
        // The whole printable ASCII range, every glyph at the origin.
        for ch in ' '..='~' {
            if renderer.render_char(font, raster, ch, 0)?.is_none() {
                log::debug!("no glyph for {ch:?}, skipped");
            }
        }
    }

    if let Some(text) = text {
        let mut offset: i64 = 0;
        for ch in text.chars() {
            match renderer.render_char(font, raster, ch, offset)? {
                Some(advance) => {
                    if !genfont {
                        offset += advance.x;
                    }
                }
                None => log::debug!("no glyph for {ch:?}, skipped"),
            }
        }
    }

    let e = renderer.line_extents();
    log::debug!(
        "line extents: x [{}, {}] y [{}, {}]",
        e.min_x,
        e.max_x,
        e.min_y,
        e.max_y
    );

    let mut out = renderer.finish()?;
    out.flush()?;
    Ok(())
}
