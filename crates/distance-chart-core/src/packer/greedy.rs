use super::VerticalPacker;
use crate::model::PlacementItem;
use tracing::trace;

/// Counters collected while packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackerStats {
    pub overlap_tests: u64,
    pub raises: u64,
}

/// First-fit vertical packer.
///
/// Each new item starts at its current y-base and is lifted to the highest top
/// among the placed items it overlaps, repeating until it overlaps nothing.
/// Every lift lands on the top of some placed item and strictly increases y, so an
/// item is lifted at most `placed.len()` times; total work is O(n²) overlap tests.
/// Inputs are catalog-sized, so the rescan is kept instead of a skyline index.
pub struct GreedyVerticalPacker<K> {
    placed: Vec<PlacementItem<K>>,
    stats: PackerStats,
}

impl<K> Default for GreedyVerticalPacker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> GreedyVerticalPacker<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            placed: Vec::with_capacity(n),
            stats: PackerStats::default(),
        }
    }

    pub fn stats(&self) -> PackerStats {
        self.stats
    }

    /// Highest clearance y demanded by any placed item, or `None` if `item` collides with nothing.
    fn required_y(&mut self, item: &PlacementItem<K>) -> Option<i64> {
        self.stats.overlap_tests += self.placed.len() as u64;
        self.placed.iter().filter_map(|p| item.overlaps(p)).max()
    }
}

impl<K> VerticalPacker<K> for GreedyVerticalPacker<K> {
    fn place(&mut self, mut item: PlacementItem<K>) -> &PlacementItem<K> {
        while let Some(y) = self.required_y(&item) {
            trace!(from = item.y(), to = y, x = item.x(), width = item.width(), "raise");
            item.raise_to(y);
            self.stats.raises += 1;
        }
        self.placed.push(item);
        &self.placed[self.placed.len() - 1]
    }

    fn placed(&self) -> &[PlacementItem<K>] {
        &self.placed
    }

    fn into_placed(self) -> Vec<PlacementItem<K>> {
        self.placed
    }
}
