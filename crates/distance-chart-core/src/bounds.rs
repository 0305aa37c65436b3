use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::model::{BBox, CanvasSize, Gridline, PlacedItem};

/// Most decade gridlines a canvas may carry. Distances representable as `f64`
/// span about 630 decades, so only items far wider than the step width reach it.
pub const MAX_DECADES: i64 = 4096;

/// Canvas extent and axis lines derived from a finished placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasBounds {
    /// Rightmost bbox edge over all items (0 when empty).
    pub x_max: i64,
    /// Highest bbox top over all items (0 when empty).
    pub y_max: i64,
    /// Number of decade gridlines, origin included.
    pub decade_count: i64,
    pub canvas: CanvasSize,
    pub gridlines: Vec<Gridline>,
    pub boundaries: Vec<Gridline>,
}

/// Computes canvas size, decade gridlines and boundary marker positions.
///
/// - decade count is `ceil(x_max / step) + 1`, never below 1
/// - canvas is `(decade_count * step + 2 * margin, y_max + 2 * margin)`
/// - an empty set gets a margin-only canvas and just the origin gridline
///
/// Fails with `CanvasTooLarge` when the decade count exceeds `MAX_DECADES` or a
/// canvas side does not fit in `i64`. The config must already be validated
/// (`ChartConfig::validate`).
pub fn compute_bounds<K>(items: &[PlacedItem<K>], cfg: &ChartConfig) -> Result<CanvasBounds> {
    let step = cfg.log_step_width;
    let boxes: Vec<BBox> = items.iter().map(PlacedItem::bbox).collect();
    let x_max = boxes.iter().map(|b| b.right).max().unwrap_or(0);
    let y_max = boxes.iter().map(|b| b.top).max().unwrap_or(0);
    let too_large = || ChartError::CanvasTooLarge { x_max, y_max };

    let decade_count = ceil_div(x_max, step)
        .max(0)
        .checked_add(1)
        .filter(|&n| n <= MAX_DECADES)
        .ok_or_else(too_large)?;
    let two_margin = cfg.margin.checked_mul(2).ok_or_else(too_large)?;
    let canvas = if boxes.is_empty() {
        CanvasSize {
            width: two_margin,
            height: two_margin,
        }
    } else {
        CanvasSize {
            width: decade_count
                .checked_mul(step)
                .and_then(|w| w.checked_add(two_margin))
                .ok_or_else(too_large)?,
            height: y_max.checked_add(two_margin).ok_or_else(too_large)?,
        }
    };

    let gridlines = (0..decade_count)
        .map(|i| Gridline {
            label: format!("10^{i}"),
            x: cfg.margin + i * step,
        })
        .collect();
    let boundaries = cfg
        .boundaries
        .iter()
        .map(|m| Gridline {
            label: m.label.clone(),
            x: cfg.margin.saturating_add(cfg.distance_to_x(m.distance)),
        })
        .collect();

    Ok(CanvasBounds {
        x_max,
        y_max,
        decade_count,
        canvas,
        gridlines,
        boundaries,
    })
}

/// `ceil(a / b)` for `b > 0`, correct for negative `a`.
fn ceil_div(a: i64, b: i64) -> i64 {
    let q = a.div_euclid(b);
    if a.rem_euclid(b) == 0 { q } else { q + 1 }
}
