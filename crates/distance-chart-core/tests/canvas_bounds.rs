use distance_chart_core::prelude::*;

fn placed(label: &'static str, x: i64, y: i64, width: i64, height: i64) -> PlacedItem<&'static str> {
    PlacedItem {
        label,
        x,
        y,
        width,
        height,
    }
}

fn cfg_no_markers() -> ChartConfig {
    ChartConfig::builder()
        .margin(20)
        .log_step_width(500)
        .boundaries(Vec::new())
        .build()
}

#[test]
fn canvas_rounds_up_to_next_decade() {
    // right edge 1000 + 50 = 1050
    let items = vec![placed("a", 1000, 0, 100, 80), placed("b", 200, 80, 60, 40)];
    let b = compute_bounds(&items, &cfg_no_markers()).expect("bounds");
    assert_eq!(b.x_max, 1050);
    assert_eq!(b.y_max, 120);
    assert_eq!(b.decade_count, 4);
    assert_eq!(b.canvas, CanvasSize { width: 2040, height: 160 });
    let xs: Vec<i64> = b.gridlines.iter().map(|g| g.x).collect();
    assert_eq!(xs, vec![20, 520, 1020, 1520]);
    assert_eq!(b.gridlines[0].label, "10^0");
    assert_eq!(b.gridlines[3].label, "10^3");
}

#[test]
fn exact_decade_edge_does_not_add_extra() {
    let items = vec![placed("a", 950, 0, 100, 10)];
    let b = compute_bounds(&items, &cfg_no_markers()).expect("bounds");
    assert_eq!(b.x_max, 1000);
    assert_eq!(b.decade_count, 3);
    assert_eq!(b.canvas.width, 3 * 500 + 40);
}

#[test]
fn empty_set_is_margin_only() {
    let items: Vec<PlacedItem<&str>> = Vec::new();
    let b = compute_bounds(&items, &cfg_no_markers()).expect("bounds");
    assert_eq!((b.x_max, b.y_max), (0, 0));
    assert_eq!(b.canvas, CanvasSize { width: 40, height: 40 });
    assert_eq!(b.gridlines.len(), 1);
    assert_eq!(b.gridlines[0].x, 20);
}

#[test]
fn items_left_of_origin_keep_origin_gridline() {
    let items = vec![placed("near", -700, 0, 100, 30)];
    let b = compute_bounds(&items, &cfg_no_markers()).expect("bounds");
    assert_eq!(b.x_max, -650);
    assert_eq!(b.decade_count, 1);
    assert_eq!(b.gridlines.len(), 1);
}

#[test]
fn default_boundary_markers_positions() {
    let cfg = ChartConfig::default();
    let items = vec![placed("a", 0, 0, 10, 10)];
    let b = compute_bounds(&items, &cfg).expect("bounds");
    let got: Vec<(&str, i64)> = b
        .boundaries
        .iter()
        .map(|g| (g.label.as_str(), g.x))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Milky Way", 2541),
            ("Local Group", 3369),
            ("Virgo Supercluster", 3909)
        ]
    );
}

#[test]
fn layout_chart_empty_input() {
    let records: Vec<ChartRecord<String>> = Vec::new();
    let layout = layout_chart(records, &cfg_no_markers()).expect("empty is fine");
    assert!(layout.items.is_empty());
    assert_eq!(layout.canvas, CanvasSize { width: 40, height: 40 });
    assert_eq!(layout.gridlines.len(), 1);
    assert_eq!(layout.stats.occupancy, 0.0);
}

#[test]
fn layout_stats_are_consistent() {
    let records = vec![
        ChartRecord::new("A", 100, 50, 1.0),
        ChartRecord::new("B", 100, 50, 10f64.powf(0.1)),
    ];
    let layout = layout_chart(records, &cfg_no_markers()).expect("layout");
    // B centre: round(0.1 * 500) = 50, so it stacks on A
    assert_eq!(layout.items[1].x, 50);
    assert_eq!(layout.items[1].y, 50);
    assert_eq!(layout.stats.num_items, 2);
    assert_eq!(layout.stats.raises, 1);
    assert_eq!(layout.stats.y_max, 100);
    assert_eq!(layout.canvas.height, 140);
    assert!(layout.stats.occupancy > 0.0 && layout.stats.occupancy <= 1.0);
    assert!(layout.stats.summary().contains("Items: 2"));
}

#[test]
fn too_many_decades_is_an_error() {
    // step 1 turns a 10000-wide item into ~5000 decades
    let cfg = ChartConfig::builder().log_step_width(1).boundaries(Vec::new()).build();
    let items = vec![placed("wide", 0, 0, 10_000, 10)];
    assert!(matches!(
        compute_bounds(&items, &cfg),
        Err(ChartError::CanvasTooLarge { x_max: 5000, y_max: 10 })
    ));
}

#[test]
fn tall_stack_near_dimension_limit_fits() {
    let records = vec![
        ChartRecord::new("a", 10, MAX_DIMENSION, 1000.0),
        ChartRecord::new("b", 10, MAX_DIMENSION, 1000.0),
    ];
    let layout = layout_chart(records, &cfg_no_markers()).expect("layout");
    assert_eq!(layout.items[1].y, MAX_DIMENSION);
    assert_eq!(layout.canvas.height, 2 * MAX_DIMENSION + 40);
}
