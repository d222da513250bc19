//! Enumerate the combinations of a set of distinguishable elements by
//! scanning all `2^n` subset bitmasks and keeping those with the wanted
//! number of bits set.
//!
//! Two presentation orders are supported. Human order walks the masks from
//! the top down, so the first element varies slowest. Machine order walks
//! them in binary counting order. The scan is brute force and its cost grows
//! as `2^n`.
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! let mut lines = Vec::new();
//! combinations::enumerate_m_human(&["a", "b", "c"], 2, |combination| {
//!     lines.push(combination.to_string());
//!     ControlFlow::<()>::Continue(())
//! })
//! .unwrap();
//! assert_eq!(lines, ["a b -", "a - c", "- b c"]);
//! ```

pub mod binomial;
pub mod combination;
pub mod enumerate;
pub mod error;
pub mod mask;
pub mod order;
pub mod subset_scan;

pub use binomial::{binomial, pascal_row};
pub use combination::{ABSENT_MARKER, Combination, Slot, render, try_render};
pub use enumerate::{
    Selection, enumerate, enumerate_all_human, enumerate_all_machine, enumerate_m_human,
    enumerate_m_machine, enumerate_with,
};
pub use error::CombinationError;
pub use mask::Mask;
pub use order::{ALL_ORDERS, Direction, Order};
pub use subset_scan::SubsetScan;
