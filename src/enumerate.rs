use std::ops::ControlFlow;

use num_bigint::BigUint;

use crate::combination::{Combination, render};
use crate::error::CombinationError;
use crate::mask::Mask;
use crate::order::Order;
use crate::subset_scan::SubsetScan;

/// Which subset sizes an enumeration covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every size from `0` to `n`.
    All,
    /// Only subsets with exactly this many elements.
    Size(usize),
}

/// Feed every selected combination of `elements` to `sink`, in `order`.
///
/// Combinations are rendered one at a time and only borrowed by the sink;
/// nothing is collected. The sink can stop the enumeration early by
/// returning [`ControlFlow::Break`], whose value is passed back to the caller.
///
/// * Human order, all sizes: one descending scan per size `0..=n`.
/// * Machine order, all sizes: a single ascending scan of every mask.
/// * A single size: one scan filtered on that size, in the order's direction.
///
/// Universes below 64 elements are scanned with native masks, larger ones
/// with arbitrary precision. Either way the work grows as `2^n`.
pub fn enumerate<T, B, F>(
    elements: &[T],
    order: Order,
    selection: Selection,
    sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    if <u64 as Mask>::supports(elements.len()) {
        enumerate_with::<u64, _, _, _>(elements, order, selection, sink)
    } else {
        enumerate_with::<BigUint, _, _, _>(elements, order, selection, sink)
    }
}

/// [`enumerate`] with an explicit mask representation.
pub fn enumerate_with<M, T, B, F>(
    elements: &[T],
    order: Order,
    selection: Selection,
    mut sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    M: Mask,
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    let n = elements.len();
    if !M::supports(n) {
        return Err(CombinationError::UniverseTooLarge { universe: n });
    }
    if let Selection::Size(size) = selection {
        if size > n {
            return Err(CombinationError::SizeExceedsUniverse { size, universe: n });
        }
    }

    let direction = order.direction();
    let sizes = match (selection, order) {
        (Selection::Size(size), _) => size..=size,
        (Selection::All, Order::Human) => 0..=n,
        (Selection::All, Order::Machine) => {
            let scan = SubsetScan::<M>::all(n, direction)?;
            return Ok(drain(scan, elements, order, &mut sink));
        }
    };
    for size in sizes {
        let scan = SubsetScan::<M>::with_size(n, size, direction)?;
        if let ControlFlow::Break(value) = drain(scan, elements, order, &mut sink) {
            return Ok(ControlFlow::Break(value));
        }
    }
    Ok(ControlFlow::Continue(()))
}

fn drain<M, T, B, F>(
    scan: SubsetScan<M>,
    elements: &[T],
    order: Order,
    sink: &mut F,
) -> ControlFlow<B>
where
    M: Mask,
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    for mask in scan {
        sink(&render(elements, &mask, order))?;
    }
    ControlFlow::Continue(())
}

/// Every combination of every size, in human order.
pub fn enumerate_all_human<T, B, F>(
    elements: &[T],
    sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    enumerate(elements, Order::Human, Selection::All, sink)
}

/// Every combination of every size, in machine order.
pub fn enumerate_all_machine<T, B, F>(
    elements: &[T],
    sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    enumerate(elements, Order::Machine, Selection::All, sink)
}

/// Every combination of `m` elements, in human order.
pub fn enumerate_m_human<T, B, F>(
    elements: &[T],
    m: usize,
    sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    enumerate(elements, Order::Human, Selection::Size(m), sink)
}

/// Every combination of `m` elements, in machine order.
pub fn enumerate_m_machine<T, B, F>(
    elements: &[T],
    m: usize,
    sink: F,
) -> Result<ControlFlow<B>, CombinationError>
where
    F: FnMut(&Combination<'_, T>) -> ControlFlow<B>,
{
    enumerate(elements, Order::Machine, Selection::Size(m), sink)
}
