use std::fmt;

use itertools::Itertools;

use crate::error::CombinationError;
use crate::mask::Mask;
use crate::order::Order;

/// Token printed in place of an element that is not part of a combination.
pub const ABSENT_MARKER: &str = "-";

/// One position of a rendered [`Combination`].
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    Present(&'a T),
    Absent,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    pub fn element(self) -> Option<&'a T> {
        match self {
            Slot::Present(element) => Some(element),
            Slot::Absent => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Slot::Present(_))
    }
}

impl<T: fmt::Display> fmt::Display for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Present(element) => fmt::Display::fmt(element, f),
            Slot::Absent => f.write_str(ABSENT_MARKER),
        }
    }
}

/// A subset of the universe laid out over all `n` positions.
///
/// Absent elements keep their slot, so every combination of a universe has
/// the same width regardless of how many elements it contains. Displays as
/// the slots separated by single spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination<'a, T> {
    slots: Vec<Slot<'a, T>>,
}

impl<'a, T> Combination<'a, T> {
    /// Number of slots, always the universe size.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot<'a, T>] {
        &self.slots
    }

    /// Elements in the combination, in slot order.
    pub fn present(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.slots.iter().filter_map(|slot| slot.element())
    }

    /// Number of elements in the combination.
    pub fn size(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_present()).count()
    }
}

impl<T: fmt::Display> fmt::Display for Combination<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slots.iter().format(" "))
    }
}

/// Lay out the subset selected by `mask` over the universe.
///
/// In machine order slot `j` holds element `j` iff bit `j` is set. In human
/// order bit `j` decides slot `n - 1 - j`, so the most significant bit, which
/// changes slowest during a descending scan, decides the first element.
///
/// Bits at or above `universe.len()` are ignored; see [`try_render`].
pub fn render<'a, T, M: Mask>(universe: &'a [T], mask: &M, order: Order) -> Combination<'a, T> {
    let n = universe.len();
    let mut slots = vec![Slot::Absent; n];
    for bit in 0..n {
        if mask.bit(bit) {
            let slot = order.slot_for_bit(bit, n);
            slots[slot] = Slot::Present(&universe[slot]);
        }
    }
    Combination { slots }
}

/// Like [`render`], but rejects masks that are not below `2^n`.
pub fn try_render<'a, T, M: Mask>(
    universe: &'a [T],
    mask: &M,
    order: Order,
) -> Result<Combination<'a, T>, CombinationError> {
    let n = universe.len();
    // A native mask too narrow for 2^n cannot hold an out of range value.
    if M::supports(n) && *mask >= M::universe(n) {
        return Err(CombinationError::MaskOutOfRange { universe: n });
    }
    Ok(render(universe, mask, order))
}
