//! Geometry engine for `ttf2dxf`.
//!
//! Turns Bezier glyph-outline segments into sequences of tangent-continuous
//! circular arcs (biarcs) suitable for DXF polyline-arc emission, and tracks
//! integer bounding boxes over the sampled geometry.

pub mod bezier;
pub mod biarc;
pub mod extents;
pub mod flatten;
pub mod types;
