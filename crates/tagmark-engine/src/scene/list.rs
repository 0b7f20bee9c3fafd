use super::{DrawCmd, ZIndex};

/// Paint-order key: `z` back-to-front, then insertion order within a layer.
///
/// Field order matters; the derived `Ord` compares `z` first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1). Paint-order iteration sorts an internal index buffer
/// lazily and reuses it across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey { z, order }, cmd });
        self.sorted_dirty = true;
    }

    /// Iterates commands in paint order (back-to-front) without cloning them.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawCmd> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i].cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::path::Path;
    use crate::scene::StrokeStyle;

    fn stroke(x: f32) -> DrawCmd {
        let path = Path::from_points([Vec2::new(x, 0.0), Vec2::new(x, 1.0)]);
        DrawCmd::Stroke(crate::scene::StrokeCmd { path, style: StrokeStyle::new(1.0, Color::WHITE) })
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(2), stroke(0.0));
        list.push(ZIndex::new(1), stroke(1.0));
        list.push(ZIndex::new(2), stroke(2.0));

        let order: Vec<_> = list.iter_in_paint_order().cloned().collect();
        assert_eq!(order, vec![stroke(1.0), stroke(0.0), stroke(2.0)]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), stroke(0.0));
        list.clear();
        assert!(list.is_empty());
        list.push(ZIndex::new(0), stroke(3.0));
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(list.iter_in_paint_order().count(), 1);
    }
}
