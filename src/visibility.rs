use crate::layout::Rect;

/// Whether a tile overlaps the viewport grown by one tile height above and below.
///
/// The slack keeps tiles that are about to scroll in already animating, so they
/// do not pop in at the edge. Both bounds are strict.
pub fn is_visible(tile: &Rect, scroll_offset: f64, viewport_height: f64) -> bool {
    tile.y > scroll_offset - tile.height
        && tile.y < scroll_offset + viewport_height + tile.height
}
