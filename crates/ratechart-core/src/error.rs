// File: crates/ratechart-core/src/error.rs
// Summary: Library error taxonomy for chart construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The two input sequences differ in length. Raised before any drawing.
    #[error("mismatched input lengths: xs has {xs} points, ys has {ys}")]
    MismatchedLengths { xs: usize, ys: usize },

    /// At least one sample point is required.
    #[error("empty input: at least one sample point is required")]
    EmptyData,

    /// No render surface could be created. Fatal; there is no fallback.
    #[error("failed to create raster surface")]
    SurfaceUnavailable,

    /// PNG encoding of the finished surface failed.
    #[error("encode PNG failed")]
    Encode,

    #[error("writing chart output failed")]
    Io(#[from] std::io::Error),
}
