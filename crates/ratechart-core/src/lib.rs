// File: crates/ratechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod error;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{render_line_chart, Chart, RenderOptions};
pub use series::{Marker, Series};
pub use axis::Axis;
pub use error::ChartError;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
