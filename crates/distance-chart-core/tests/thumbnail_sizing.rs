use distance_chart_core::prelude::*;
use distance_chart_core::model::fit_thumbnail;

#[test]
fn small_images_are_not_upscaled() {
    assert_eq!(fit_thumbnail((64, 48), 100), (64, 48));
    assert_eq!(fit_thumbnail((100, 100), 100), (100, 100));
}

#[test]
fn large_images_keep_aspect() {
    assert_eq!(fit_thumbnail((4000, 3000), 100), (100, 75));
    assert_eq!(fit_thumbnail((3000, 4000), 100), (75, 100));
    // very thin images keep at least one pixel
    assert_eq!(fit_thumbnail((10_000, 20), 100), (100, 1));
}

#[test]
fn labelled_size_adds_borders() {
    let cfg = ChartConfig::default();
    // thumbnail wider than caption
    let a = LabelledThumbnail {
        thumbnail: (4000, 3000),
        text: (40, 14),
    };
    assert_eq!(a.size(&cfg), (100 + 10, 75 + 14 + 15));

    // caption wider than thumbnail
    let b = LabelledThumbnail {
        thumbnail: (800, 800),
        text: (180, 14),
    };
    assert_eq!(b.size(&cfg), (180 + 10, 100 + 14 + 15));
}
