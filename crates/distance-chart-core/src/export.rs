use crate::config::ChartConfig;
use crate::model::ChartLayout;
use serde_json::{Value, json};

/// Serialize a finished layout as a JSON object
/// `{ canvas, items, gridlines, boundaries, rejected, stats, meta }`.
///
/// Each item carries both its layout coordinates (`x` centre, `y` base, y up) and
/// `left`/`top`, the raster origin on a y-down canvas, so renderers can paste directly.
pub fn to_json<K: ToString>(layout: &ChartLayout<K>, cfg: &ChartConfig) -> Value {
    let items: Vec<Value> = layout
        .items
        .iter()
        .map(|it| {
            let (left, top) = it.raster_origin(layout.canvas.height, cfg.margin);
            json!({
                "label": it.label.to_string(),
                "x": it.x,
                "y": it.y,
                "w": it.width,
                "h": it.height,
                "left": left,
                "top": top,
            })
        })
        .collect();
    let rejected: Vec<Value> = layout
        .rejected
        .iter()
        .map(|r| json!({"label": r.label.to_string(), "reason": r.reason.to_string()}))
        .collect();
    json!({
        "canvas": {"w": layout.canvas.width, "h": layout.canvas.height},
        "items": items,
        "gridlines": &layout.gridlines,
        "boundaries": &layout.boundaries,
        "rejected": rejected,
        "stats": &layout.stats,
        "meta": {
            "schemaVersion": "1",
            "app": "distance-chart",
            "version": env!("CARGO_PKG_VERSION"),
            "stepWidth": cfg.log_step_width,
            "margin": cfg.margin,
        },
    })
}
