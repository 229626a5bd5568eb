//! Strip geometry: centering offset, items per screen and side padding.

/// Measured and derived layout values for one carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Outer width of the visible mask
    pub mask_width: f64,
    /// Outer width of a single item
    pub item_width: f64,
    /// Offset of the centered item (0 when items are not centered)
    pub center: f64,
    /// Items needed to fully cover the mask
    pub items_per_screen: usize,
    /// Items buffered on each side of the centered item
    pub side_items: usize,
    /// Total width of the strip at rest
    pub strip_width: f64,
    /// Left offset of the strip when it is narrower than the mask
    pub lead: f64,
}

impl Geometry {
    /// The mask is wider than the whole strip; layout is best-effort
    pub fn overflows(&self) -> bool {
        self.mask_width > self.strip_width
    }

    /// Whether the strip gets `side_items` rotated from its tail to its head at init
    pub fn pads_strip(&self, item_count: usize) -> bool {
        self.items_per_screen > 1 && item_count > self.side_items
    }
}

/// Compute the geometry for `item_count` items of `item_width` inside `mask_width`
pub fn compute_geometry(
    mask_width: f64,
    item_width: f64,
    item_count: usize,
    center_items: bool,
) -> Geometry {
    let items_per_screen = if item_width > 0.0 {
        1 + (mask_width / item_width).ceil().max(0.0) as usize
    } else {
        1
    };
    let side_items = 1 + (items_per_screen - 1).div_ceil(2);

    let center = if center_items {
        (mask_width - item_width) / 2.0
    } else {
        0.0
    };

    let strip_width = item_count as f64 * item_width;
    let lead = if strip_width < mask_width {
        (mask_width - strip_width) / 2.0
    } else {
        0.0
    };

    Geometry {
        mask_width,
        item_width,
        center,
        items_per_screen,
        side_items,
        strip_width,
        lead,
    }
}
