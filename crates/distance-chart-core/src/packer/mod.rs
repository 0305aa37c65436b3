use crate::config::SortOrder;
use crate::model::PlacementItem;

pub mod greedy;

pub use greedy::{GreedyVerticalPacker, PackerStats};

/// A packer assigns the y-base of one item at a time against everything placed before it.
///
/// Implementations must leave x, width and height untouched, must never lower an
/// item's y-base, and must never move an item once it has been placed.
pub trait VerticalPacker<K> {
    /// Places `item` and returns it as stored in the placed list.
    fn place(&mut self, item: PlacementItem<K>) -> &PlacementItem<K>;
    /// Items placed so far, in placement order.
    fn placed(&self) -> &[PlacementItem<K>];
    fn into_placed(self) -> Vec<PlacementItem<K>>;
}

/// Orders items for packing. `Vec::sort_by` is stable, so equal widths keep input order.
pub fn sort_for_packing<K>(items: &mut [PlacementItem<K>], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::WidthDesc => items.sort_by(|a, b| b.width().cmp(&a.width())),
    }
}

/// Sorts and places every item. The returned packer holds the items in placement
/// order along with its counters.
pub fn pack_items<K>(
    mut items: Vec<PlacementItem<K>>,
    order: SortOrder,
) -> GreedyVerticalPacker<K> {
    sort_for_packing(&mut items, order);
    let mut packer = GreedyVerticalPacker::with_capacity(items.len());
    for item in items {
        packer.place(item);
    }
    packer
}
