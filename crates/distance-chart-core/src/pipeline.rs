use crate::bounds::compute_bounds;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::model::{ChartLayout, ChartRecord, LayoutStats, PlacedItem, PlacementItem, RejectedRecord};
use crate::packer::{VerticalPacker, pack_items};
use tracing::{debug, instrument, warn};

#[instrument(skip_all, fields(records = records.len()))]
/// Validates `records`, places the valid ones and computes the canvas.
///
/// Notes:
/// - Records with a bad distance or size are returned in `rejected` and left out;
///   they never fail the whole layout.
/// - Sorting is stable, so equal-width items keep their input order and results
///   are reproducible.
/// - An empty (or fully rejected) input yields a margin-only canvas.
pub fn layout_chart<K: ToString>(
    records: Vec<ChartRecord<K>>,
    cfg: &ChartConfig,
) -> Result<ChartLayout<K>> {
    cfg.validate()?;

    let mut items = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for record in records {
        if let Err(reason) = record.validate() {
            warn!(
                label = %record.label.to_string(),
                width = record.width,
                height = record.height,
                distance = record.distance,
                error = %reason,
                "reject record"
            );
            rejected.push(RejectedRecord {
                label: record.label,
                reason,
            });
            continue;
        }
        items.push(PlacementItem::from_checked_record(record, cfg));
    }

    let mut layout = layout_items(items, cfg)?;
    layout.stats.num_rejected = rejected.len();
    layout.rejected = rejected;
    Ok(layout)
}

/// Places items whose x-centres are already fixed and computes the canvas.
pub fn layout_items<K>(items: Vec<PlacementItem<K>>, cfg: &ChartConfig) -> Result<ChartLayout<K>> {
    cfg.validate()?;

    let packer = pack_items(items, cfg.sort_order);
    let packer_stats = packer.stats();
    let placed: Vec<PlacedItem<K>> = packer
        .into_placed()
        .into_iter()
        .map(PlacementItem::into_placed)
        .collect();

    let bounds = compute_bounds(&placed, cfg)?;
    let canvas_area = (bounds.canvas.width as f64) * (bounds.canvas.height as f64);
    let item_area: f64 = placed
        .iter()
        .map(|p| (p.width as f64) * (p.height as f64))
        .sum();
    let stats = LayoutStats {
        num_items: placed.len(),
        num_rejected: 0,
        overlap_tests: packer_stats.overlap_tests,
        raises: packer_stats.raises,
        x_max: bounds.x_max,
        y_max: bounds.y_max,
        occupancy: if canvas_area > 0.0 {
            item_area / canvas_area
        } else {
            0.0
        },
    };
    debug!(
        items = stats.num_items,
        overlap_tests = stats.overlap_tests,
        raises = stats.raises,
        canvas_w = bounds.canvas.width,
        canvas_h = bounds.canvas.height,
        decades = bounds.decade_count,
        "layout packed"
    );

    Ok(ChartLayout {
        items: placed,
        canvas: bounds.canvas,
        gridlines: bounds.gridlines,
        boundaries: bounds.boundaries,
        rejected: Vec::new(),
        stats,
    })
}
