//! Error types with rich diagnostics using miette
//!
//! Every variant here signals a broken precondition in the calling code.
//! Degenerate geometry (zero-length connectors, overlapping boxes) is a
//! normal nothing-to-draw outcome and is never reported as an error.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::RectError;

/// Errors that occur while computing connector geometry
#[derive(Error, Diagnostic, Debug)]
pub enum GeometryError {
    #[error("clip origin ({x}, {y}) lies outside the clip rectangle")]
    #[diagnostic(
        code(tether::clip::origin_outside),
        help("the starting point must be inside the rectangle, usually its center")
    )]
    ClipOriginOutside { x: f64, y: f64 },

    #[error("arrow size {value} is not a positive finite number")]
    #[diagnostic(code(tether::decorate::invalid_arrow_size))]
    InvalidArrowSize { value: f64 },

    #[error("invalid rectangle: {0}")]
    #[diagnostic(code(tether::types::invalid_rect))]
    InvalidRect(#[from] RectError),
}
