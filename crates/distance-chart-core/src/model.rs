use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::{ChartError, Result};

/// Axis-aligned bounding box used for overlap tests. Y grows upward, so `bottom <= top`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BBox {
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
    pub top: i64,
}

impl BBox {
    fn centred(x: i64, y: i64, width: i64, height: i64) -> Self {
        let half_width = width / 2;
        Self {
            left: x.saturating_sub(half_width),
            bottom: y,
            right: x.saturating_add(half_width),
            top: y.saturating_add(height),
        }
    }

    /// True if the two boxes share interior area. Touching edges do not count.
    pub fn intersects(&self, other: &BBox) -> bool {
        !(self.right <= other.left
            || other.right <= self.left
            || self.top <= other.bottom
            || other.top <= self.bottom)
    }
}

/// Largest accepted item width or height. Keeps every canvas sum inside `i64`.
pub const MAX_DIMENSION: i64 = i32::MAX as i64;

/// External input record: a sized item and the distance that fixes its x position.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord<K = String> {
    pub label: K,
    pub width: i64,
    pub height: i64,
    /// Distance along the log axis; must be positive and finite.
    pub distance: f64,
}

impl<K> ChartRecord<K> {
    pub fn new(label: K, width: i64, height: i64, distance: f64) -> Self {
        Self {
            label,
            width,
            height,
            distance,
        }
    }
}

impl<K: ToString> ChartRecord<K> {
    /// Checks the distance first, then the size.
    pub fn validate(&self) -> Result<()> {
        check_distance(&self.label.to_string(), self.distance)?;
        check_dimensions(&self.label, self.width, self.height)
    }
}

/// A rectangle with a fixed x-centre and size whose y-base is assigned by the packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementItem<K = String> {
    pub label: K,
    width: i64,
    height: i64,
    x: i64,
    y: i64,
}

impl<K: ToString> PlacementItem<K> {
    /// Creates an unplaced item (`y = 0`). Width and height must be in `1..=MAX_DIMENSION`.
    pub fn new(label: K, width: i64, height: i64, x: i64) -> Result<Self> {
        check_dimensions(&label, width, height)?;
        Ok(Self {
            label,
            width,
            height,
            x,
            y: 0,
        })
    }

    /// Validates a record and maps its distance onto the x axis.
    pub fn from_record(record: ChartRecord<K>, cfg: &ChartConfig) -> Result<Self> {
        record.validate()?;
        Ok(Self::from_checked_record(record, cfg))
    }
}

impl<K> PlacementItem<K> {
    /// Builds an item from a record that already passed `ChartRecord::validate`.
    pub(crate) fn from_checked_record(record: ChartRecord<K>, cfg: &ChartConfig) -> Self {
        Self {
            x: cfg.distance_to_x(record.distance),
            label: record.label,
            width: record.width,
            height: record.height,
            y: 0,
        }
    }
}

impl<K> PlacementItem<K> {
    pub fn width(&self) -> i64 {
        self.width
    }
    pub fn height(&self) -> i64 {
        self.height
    }
    /// Horizontal centre.
    pub fn x(&self) -> i64 {
        self.x
    }
    /// Vertical base (y grows upward).
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Bounding box `(x - w/2, y, x + w/2, y + h)` with `w/2` floored.
    ///
    /// For odd widths the box is one unit narrower than the item.
    pub fn bbox(&self) -> BBox {
        BBox::centred(self.x, self.y, self.width, self.height)
    }

    /// Returns `None` when the boxes are apart on either axis, otherwise the top of
    /// `other`: the lowest y-base that clears it while `other` stays put.
    pub fn overlaps(&self, other: &PlacementItem<K>) -> Option<i64> {
        let a = self.bbox();
        let b = other.bbox();
        if a.intersects(&b) { Some(b.top) } else { None }
    }

    /// Raises the y-base. Only the packer moves items, and only upward.
    pub(crate) fn raise_to(&mut self, y: i64) {
        debug_assert!(y > self.y, "y-base must strictly increase ({} -> {})", self.y, y);
        self.y = y;
    }

    /// Freezes the item into its output record.
    pub fn into_placed(self) -> PlacedItem<K> {
        PlacedItem {
            label: self.label,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Final placement handed to a renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedItem<K = String> {
    pub label: K,
    /// Horizontal centre on the log axis (before the canvas margin).
    pub x: i64,
    /// Vertical base, y up.
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl<K> PlacedItem<K> {
    pub fn bbox(&self) -> BBox {
        BBox::centred(self.x, self.y, self.width, self.height)
    }

    /// Top-left pixel for a raster canvas whose y axis points down.
    pub fn raster_origin(&self, canvas_height: i64, margin: i64) -> (i64, i64) {
        (
            margin + self.x - self.width / 2,
            canvas_height - margin - self.y - self.height,
        )
    }
}

/// A labelled vertical line in canvas coordinates (margin included).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gridline {
    pub label: String,
    pub x: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i64,
    pub height: i64,
}

/// A record that failed validation and was left out of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord<K = String> {
    pub label: K,
    pub reason: ChartError,
}

/// Statistics about a layout run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutStats {
    /// Number of placed items.
    pub num_items: usize,
    /// Number of records rejected by validation.
    pub num_rejected: usize,
    /// Pairwise overlap tests performed by the packer.
    pub overlap_tests: u64,
    /// Times an item's y-base was raised.
    pub raises: u64,
    /// Rightmost bbox edge (0 when empty).
    pub x_max: i64,
    /// Highest bbox top (0 when empty).
    pub y_max: i64,
    /// Item area / canvas area (0.0 to 1.0).
    pub occupancy: f64,
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Rejected: {}, Overlap tests: {}, Raises: {}, Extent: {}x{}, Occupancy: {:.2}%",
            self.num_items,
            self.num_rejected,
            self.overlap_tests,
            self.raises,
            self.x_max,
            self.y_max,
            self.occupancy * 100.0,
        )
    }
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone)]
pub struct ChartLayout<K = String> {
    /// Placed items in placement order.
    pub items: Vec<PlacedItem<K>>,
    pub canvas: CanvasSize,
    /// Decade lines `10^0 .. 10^n`.
    pub gridlines: Vec<Gridline>,
    /// Configured boundary markers, in configuration order.
    pub boundaries: Vec<Gridline>,
    pub rejected: Vec<RejectedRecord<K>>,
    pub stats: LayoutStats,
}

/// Thumbnail plus caption measurements, as supplied by the image and font collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelledThumbnail {
    /// Source image size `(w, h)` before thumbnailing.
    pub thumbnail: (u32, u32),
    /// Rendered caption size `(w, h)`.
    pub text: (u32, u32),
}

impl LabelledThumbnail {
    /// Item size: thumbnail above caption, framed by `border` on every side and between them.
    pub fn size(&self, cfg: &ChartConfig) -> (i64, i64) {
        let (tw, th) = fit_thumbnail(self.thumbnail, cfg.thumbnail_size);
        let width = i64::from(tw.max(self.text.0)).saturating_add(cfg.border.saturating_mul(2));
        let height =
            (i64::from(th) + i64::from(self.text.1)).saturating_add(cfg.border.saturating_mul(3));
        (width, height)
    }
}

/// Shrinks `(w, h)` to fit a `max_side` square, keeping aspect ratio. Never upscales.
pub fn fit_thumbnail((w, h): (u32, u32), max_side: u32) -> (u32, u32) {
    if w <= max_side && h <= max_side {
        return (w, h);
    }
    let scale_short = |short: u32, long: u32| -> u32 {
        let v = (f64::from(short) * f64::from(max_side) / f64::from(long)).round();
        (v as u32).max(1)
    };
    if w >= h {
        (max_side, scale_short(h, w))
    } else {
        (scale_short(w, h), max_side)
    }
}

pub(crate) fn check_distance(label: &str, distance: f64) -> Result<()> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(ChartError::InvalidDistance {
            label: label.to_string(),
            distance,
        });
    }
    Ok(())
}

fn check_dimensions<K: ToString>(label: &K, width: i64, height: i64) -> Result<()> {
    let in_range = |v: i64| (1..=MAX_DIMENSION).contains(&v);
    if !in_range(width) || !in_range(height) {
        return Err(ChartError::InvalidDimensions {
            label: label.to_string(),
            width,
            height,
        });
    }
    Ok(())
}
