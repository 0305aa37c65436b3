use distance_chart_core::prelude::*;
use rand::{Rng, SeedableRng};

fn random_records(seed: u64, n: usize) -> Vec<ChartRecord<String>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            // thumbnails are ~110px wide; long captions widen some of them
            let w = rng.gen_range(60..=220);
            let h = rng.gen_range(40..=140);
            let exponent: f64 = rng.gen_range(0.5..8.5);
            ChartRecord::new(format!("obj{}", i), w, h, 10f64.powf(exponent))
        })
        .collect()
}

fn assert_disjoint(items: &[PlacedItem<String>]) {
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let a = items[i].bbox();
            let b = items[j].bbox();
            assert!(
                !a.intersects(&b),
                "{} {:?} overlaps {} {:?}",
                items[i].label,
                a,
                items[j].label,
                b
            );
        }
    }
}

#[test]
fn random_layouts_never_overlap() {
    let cfg = ChartConfig::default();
    for seed in [1u64, 7, 42, 2022] {
        let layout = layout_chart(random_records(seed, 150), &cfg).expect("layout");
        assert_eq!(layout.items.len(), 150);
        assert!(layout.rejected.is_empty());
        assert_disjoint(&layout.items);
        assert!(layout.items.iter().all(|p| p.y >= 0));
    }
}

#[test]
fn dense_cluster_never_overlaps() {
    // everything within a fraction of a decade: forces deep stacks
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let records: Vec<ChartRecord<String>> = (0..80)
        .map(|i| {
            let d = 1_000.0 * rng.gen_range(1.0..1.5);
            ChartRecord::new(format!("c{}", i), rng.gen_range(21..=121), 25, d)
        })
        .collect();
    let layout = layout_chart(records, &ChartConfig::default()).expect("layout");
    assert_disjoint(&layout.items);
    assert!(layout.stats.raises > 0);
    assert!(layout.stats.y_max >= 25 * 2);
}

#[test]
fn repeated_runs_are_identical() {
    let cfg = ChartConfig::default();
    let first = layout_chart(random_records(42, 120), &cfg).expect("layout");
    for _ in 0..3 {
        let again = layout_chart(random_records(42, 120), &cfg).expect("layout");
        assert_eq!(first.items, again.items);
        assert_eq!(first.canvas, again.canvas);
        assert_eq!(first.stats, again.stats);
    }
}

#[test]
fn placement_order_is_widest_first() {
    let cfg = ChartConfig::default();
    let layout = layout_chart(random_records(5, 60), &cfg).expect("layout");
    let widths: Vec<i64> = layout.items.iter().map(|p| p.width).collect();
    assert!(widths.windows(2).all(|w| w[0] >= w[1]));
}
