//! The two fixed identity slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two persistent tracking roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Left, Slot::Right];

    pub fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Right => 1,
        }
    }

    pub fn other(self) -> Slot {
        match self {
            Slot::Left => Slot::Right,
            Slot::Right => Slot::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per slot, indexable by [`Slot`] or by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotPair<T> {
    pub left: T,
    pub right: T,
}

impl<T> SlotPair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &T {
        &self.left
    }

    pub fn right(&self) -> &T {
        &self.right
    }

    pub fn get(&self, slot: Slot) -> &T {
        &self[slot]
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self[slot]
    }

    /// Iterate `(slot, value)` left first.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        [(Slot::Left, &self.left), (Slot::Right, &self.right)].into_iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Slot, &T) -> U) -> SlotPair<U> {
        SlotPair {
            left: f(Slot::Left, &self.left),
            right: f(Slot::Right, &self.right),
        }
    }
}

impl<T> Index<Slot> for SlotPair<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &T {
        match slot {
            Slot::Left => &self.left,
            Slot::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Slot> for SlotPair<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut T {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
        }
    }
}
