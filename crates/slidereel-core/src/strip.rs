//! Slot ring for the carousel strip.
//!
//! The strip is a rotation of the original item order. Rotating moves an
//! item between the head and the tail of the ring; the rendering host maps
//! every slot to its visual element and places it at the slot's offset.

use std::collections::VecDeque;

use crate::positions::PositionTable;

/// One position in the live strip ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Original index of the item shown in this slot
    pub item: usize,
    /// Temporary copy added for a direct jump
    pub clone: bool,
    /// Current horizontal offset
    pub offset: f64,
}

impl Slot {
    fn original(item: usize) -> Self {
        Self {
            item,
            clone: false,
            offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Strip {
    slots: VecDeque<Slot>,
}

impl Strip {
    /// Strip holding items `0..count` in their original order
    pub fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(Slot::original).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Slot> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Original indices in slot order
    pub fn items(&self) -> Vec<usize> {
        self.slots.iter().map(|s| s.item).collect()
    }

    /// Offsets in slot order
    pub fn offsets(&self) -> Vec<f64> {
        self.slots.iter().map(|s| s.offset).collect()
    }

    /// Slot currently holding the original (non-clone) copy of `item`
    pub fn slot_of(&self, item: usize) -> Option<usize> {
        self.slots.iter().position(|s| s.item == item && !s.clone)
    }

    pub fn clone_count(&self) -> usize {
        self.slots.iter().filter(|s| s.clone).count()
    }

    pub fn set_offset(&mut self, slot: usize, offset: f64) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.offset = offset;
        }
    }

    /// Move every slot horizontally by `dx`
    pub fn shift(&mut self, dx: f64) {
        for slot in &mut self.slots {
            slot.offset += dx;
        }
    }

    /// Move the head slot to the tail and return its item
    pub fn rotate_forward(&mut self) -> Option<usize> {
        let head = self.slots.pop_front()?;
        let item = head.item;
        self.slots.push_back(head);
        Some(item)
    }

    /// Move the tail slot to the head and return its item
    pub fn rotate_backward(&mut self) -> Option<usize> {
        let tail = self.slots.pop_back()?;
        let item = tail.item;
        self.slots.push_front(tail);
        Some(item)
    }

    /// Rotate by `steps` slots; positive moves head items to the tail
    pub fn rotate(&mut self, steps: isize) {
        if self.slots.is_empty() {
            return;
        }
        let n = steps.unsigned_abs() % self.slots.len();
        if steps >= 0 {
            self.slots.rotate_left(n);
        } else {
            self.slots.rotate_right(n);
        }
    }

    pub fn push_clone_back(&mut self, item: usize, offset: f64) {
        self.slots.push_back(Slot {
            item,
            clone: true,
            offset,
        });
    }

    pub fn push_clone_front(&mut self, item: usize, offset: f64) {
        self.slots.push_front(Slot {
            item,
            clone: true,
            offset,
        });
    }

    /// Drop every cloned slot and return how many were removed
    pub fn retire_clones(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !s.clone);
        before - self.slots.len()
    }

    /// Place every slot at its rest offset from the position table
    pub fn snap(&mut self, positions: &PositionTable) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Some(rest) = positions.get(i) {
                slot.offset = rest;
            }
        }
    }
}
