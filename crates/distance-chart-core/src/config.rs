use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::{MAX_DIMENSION, check_distance};

/// Order in which items are offered to the packer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Widest first; ties keep input order (stable).
    WidthDesc,
    /// Keep input order.
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "width_desc" => Ok(Self::WidthDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// A named vertical line drawn at a fixed distance (e.g. the edge of the Milky Way).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundaryMarker {
    pub label: String,
    /// Distance in the same unit as the item records (light years by default).
    pub distance: f64,
}

impl BoundaryMarker {
    pub fn new(label: impl Into<String>, distance: f64) -> Self {
        Self {
            label: label.into(),
            distance,
        }
    }
}

/// Chart layout configuration.
/// Key notes:
///   - `log_step_width` is the pixel width of one decade along the distance axis
///   - `margin` surrounds the whole canvas; gridline labels are drawn in it
///   - `border` and `thumbnail_size` only matter for labelled-thumbnail sizing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Margin around the whole canvas in pixels.
    pub margin: i64,
    /// Pixels per order of magnitude along x.
    pub log_step_width: i64,
    /// Border around thumbnail and label in pixels.
    #[serde(default = "default_border")]
    pub border: i64,
    /// Max thumbnail side in pixels.
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
    /// Boundary lines, reported in this order.
    #[serde(default = "default_boundaries")]
    pub boundaries: Vec<BoundaryMarker>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 20,
            log_step_width: 500,
            border: default_border(),
            thumbnail_size: default_thumbnail_size(),
            sort_order: default_sort_order(),
            boundaries: default_boundaries(),
        }
    }
}

impl ChartConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - `log_step_width` is not positive
    /// - `margin` or `border` is negative, or `thumbnail_size` is zero
    /// - `log_step_width`, `margin` or `border` exceeds `MAX_DIMENSION`
    /// - a boundary marker has a distance the log mapping cannot handle
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ChartError;

        if self.log_step_width <= 0 {
            return Err(ChartError::InvalidConfig(format!(
                "log_step_width must be positive, got {}",
                self.log_step_width
            )));
        }
        if self.margin < 0 {
            return Err(ChartError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.border < 0 {
            return Err(ChartError::InvalidConfig(format!(
                "border must not be negative, got {}",
                self.border
            )));
        }
        for (name, v) in [
            ("log_step_width", self.log_step_width),
            ("margin", self.margin),
            ("border", self.border),
        ] {
            if v > MAX_DIMENSION {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be at most {MAX_DIMENSION}, got {v}"
                )));
            }
        }
        if self.thumbnail_size == 0 {
            return Err(ChartError::InvalidConfig(
                "thumbnail_size must be at least 1".into(),
            ));
        }
        for marker in &self.boundaries {
            check_distance(&marker.label, marker.distance)?;
        }
        Ok(())
    }

    /// Maps a distance onto the x axis: `round(log10(distance) * log_step_width)`.
    ///
    /// Halves round to even. The distance is not checked here; callers validate first.
    pub fn distance_to_x(&self, distance: f64) -> i64 {
        (distance.log10() * self.log_step_width as f64).round_ties_even() as i64
    }
}

fn default_border() -> i64 {
    5
}
fn default_thumbnail_size() -> u32 {
    100
}
fn default_sort_order() -> SortOrder {
    SortOrder::WidthDesc
}
fn default_boundaries() -> Vec<BoundaryMarker> {
    vec![
        BoundaryMarker::new("Milky Way", 110_000.0),
        BoundaryMarker::new("Local Group", 5_000_000.0),
        BoundaryMarker::new("Virgo Supercluster", 60_000_000.0),
    ]
}

/// Builder for `ChartConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct ChartConfigBuilder {
    cfg: ChartConfig,
}

impl ChartConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: ChartConfig::default(),
        }
    }
    pub fn margin(mut self, v: i64) -> Self {
        self.cfg.margin = v;
        self
    }
    pub fn log_step_width(mut self, v: i64) -> Self {
        self.cfg.log_step_width = v;
        self
    }
    pub fn border(mut self, v: i64) -> Self {
        self.cfg.border = v;
        self
    }
    pub fn thumbnail_size(mut self, v: u32) -> Self {
        self.cfg.thumbnail_size = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    /// Replaces the boundary marker list (use an empty vec to draw none).
    pub fn boundaries(mut self, v: Vec<BoundaryMarker>) -> Self {
        self.cfg.boundaries = v;
        self
    }
    pub fn boundary(mut self, label: impl Into<String>, distance: f64) -> Self {
        self.cfg.boundaries.push(BoundaryMarker::new(label, distance));
        self
    }
    pub fn build(self) -> ChartConfig {
        self.cfg
    }
}

impl ChartConfig {
    /// Create a fluent builder for `ChartConfig`.
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }
}
