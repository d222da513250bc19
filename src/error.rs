use thiserror::Error;

/// Invalid arguments rejected at the entry of a public operation.
///
/// Once a scan has started nothing can fail, so every variant is reported
/// before the first combination reaches the sink.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// Asked for subsets larger than the universe.
    #[error("cannot choose {size} elements from a universe of {universe}")]
    SizeExceedsUniverse { size: usize, universe: usize },
    /// 2^n does not fit the selected mask representation.
    #[error("a universe of {universe} elements does not fit the mask representation")]
    UniverseTooLarge { universe: usize },
    /// The mask has bits set at or above the universe size.
    #[error("mask is out of range for a universe of {universe} elements")]
    MaskOutOfRange { universe: usize },
}
