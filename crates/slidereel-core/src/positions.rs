//! Rest offsets for every strip slot.
//!
//! The table is rebuilt from scratch whenever the mask or item width
//! changes, never patched incrementally.

use tracing::debug;

use crate::geometry::Geometry;
use crate::strip::Strip;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionTable {
    offsets: Vec<f64>,
}

impl PositionTable {
    /// Initial layout: place items left to right from `center`, then rotate
    /// the last `side_items` items to the head so a backward step always has
    /// material to reveal. Every offset includes the strip lead.
    pub fn build(strip: &mut Strip, geometry: &Geometry) -> Self {
        let count = strip.len();
        let width = geometry.item_width;
        let origin = geometry.lead + geometry.center;

        for slot in 0..count {
            let item = strip.get(slot).map(|s| s.item).unwrap_or(slot);
            strip.set_offset(slot, origin + item as f64 * width);
        }

        if count == 1 {
            strip.set_offset(0, geometry.lead);
        }

        if geometry.pads_strip(count) {
            for i in 0..geometry.side_items {
                strip.rotate_backward();
                strip.set_offset(0, origin - (i + 1) as f64 * width);
            }
            debug!(
                "Prepended {} items at the beginning of the strip",
                geometry.side_items
            );
        }

        let table = Self {
            offsets: strip.offsets(),
        };
        debug!("Item positions: {:?}", table.offsets);
        table
    }

    /// Rebuild the table around `central_slot` after a width change and move
    /// every slot to its new rest offset
    pub fn reposition(strip: &mut Strip, geometry: &Geometry, central_slot: usize) -> Self {
        let origin = geometry.lead + geometry.center;
        let offsets: Vec<f64> = (0..strip.len())
            .map(|i| origin + (i as f64 - central_slot as f64) * geometry.item_width)
            .collect();

        for (slot, offset) in offsets.iter().enumerate() {
            strip.set_offset(slot, *offset);
        }

        Self { offsets }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.offsets.get(slot).copied()
    }

    /// Rest offset of the head slot
    pub fn first(&self) -> Option<f64> {
        self.offsets.first().copied()
    }

    /// Rest offset of the tail slot
    pub fn last(&self) -> Option<f64> {
        self.offsets.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.offsets
    }
}
