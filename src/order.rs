use std::fmt;

/// Direction in which a scan walks the masks of a universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `0, 1, ..., 2^n - 1`
    Ascending,
    /// `2^n - 1, ..., 1, 0`
    Descending,
}

/// Order in which combinations are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Descending masks, rendered mirrored so that the first element varies
    /// slowest.
    Human,
    /// Ascending masks (binary counting), rendered in natural index order.
    Machine,
}

pub const ALL_ORDERS: &[Order] = &[Order::Human, Order::Machine];

impl Order {
    pub fn direction(self) -> Direction {
        match self {
            Order::Human => Direction::Descending,
            Order::Machine => Direction::Ascending,
        }
    }

    /// Output slot that shows the element selected by mask bit `bit`.
    pub fn slot_for_bit(self, bit: usize, universe: usize) -> usize {
        debug_assert!(bit < universe);
        match self {
            Order::Human => universe - 1 - bit,
            Order::Machine => bit,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Human => write!(f, "human order"),
            Order::Machine => write!(f, "machine order"),
        }
    }
}
