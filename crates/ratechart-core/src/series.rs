// File: crates/ratechart-core/src/series.rs
// Summary: Series model for line-with-marker data built from parallel x/y sequences.

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    /// Filled circle at every vertex.
    Circle,
}

/// One plotted sequence. The polyline visits vertices in input order, not
/// sorted order. Duplicate x values are allowed and simply overlap.
#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, marker: Marker::None }
    }

    /// Zip two parallel sequences into a series, enforcing the render
    /// preconditions: equal lengths and at least one point.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::MismatchedLengths { xs: xs.len(), ys: ys.len() });
        }
        if xs.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self { data_xy: data, marker: Marker::None })
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
