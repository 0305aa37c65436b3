//! Layout engine for charts that place labelled thumbnails along a logarithmic distance axis.
//!
//! - Model: `PlacementItem` (fixed x-centre and size, y-base assigned by the packer) and its bbox/overlap rules
//! - Packer: greedy first-fit vertical stacking, widest items first, deterministic
//! - Bounds: canvas size, decade gridlines and boundary marker positions
//! - Pipeline: `layout_chart` validates records, packs them and reports rejects
//!
//! Rendering, image decoding and font measurement are left to the caller; the core
//! only produces positions.
//!
//! Quick example:
//! ```
//! use distance_chart_core::{ChartConfig, ChartRecord, layout_chart};
//! # fn main() -> distance_chart_core::Result<()> {
//! let records = vec![
//!     ChartRecord::new("M31", 110, 130, 2_500_000.0),
//!     ChartRecord::new("M33", 110, 130, 2_700_000.0),
//! ];
//! let cfg = ChartConfig::default();
//! let layout = layout_chart(records, &cfg)?;
//! println!("canvas: {}x{}", layout.canvas.width, layout.canvas.height);
//! # Ok(()) }
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use bounds::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `distance_chart_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::bounds::{CanvasBounds, MAX_DECADES, compute_bounds};
    pub use crate::config::{BoundaryMarker, ChartConfig, ChartConfigBuilder, SortOrder};
    pub use crate::error::{ChartError, Result};
    pub use crate::model::{
        BBox, CanvasSize, ChartLayout, ChartRecord, Gridline, LabelledThumbnail, LayoutStats,
        MAX_DIMENSION, PlacedItem, PlacementItem, RejectedRecord,
    };
    pub use crate::packer::{
        GreedyVerticalPacker, PackerStats, VerticalPacker, pack_items, sort_for_packing,
    };
    pub use crate::{layout_chart, layout_items, to_json};
}
