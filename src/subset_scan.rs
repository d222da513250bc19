use crate::binomial::binomial;
use crate::error::CombinationError;
use crate::mask::Mask;
use crate::order::Direction;

/// Restricts a scan to masks of one population count.
#[derive(Clone, Debug)]
struct PopulationFilter<M> {
    population: u64,
    target: M,
    matched: M,
}

/// Brute-force walk over the `2^n` masks of an `n` element universe.
///
/// A scan always starts at a boundary of the range (`0` when ascending,
/// `2^n - 1` when descending) and is finite. When built with
/// [`SubsetScan::with_size`], only masks with exactly `m` bits set are
/// yielded, and the scan stops as soon as all `C(n, m)` of them have been
/// found, even if the far boundary has not been reached.
///
/// The cost is exponential in `n`: an unfiltered scan evaluates `2^n` masks
/// and a filtered one may evaluate nearly as many. Nothing caps `n`.
#[derive(Clone, Debug)]
pub struct SubsetScan<M> {
    /// Next mask to evaluate, `None` once the boundary has been passed.
    cursor: Option<M>,
    /// `2^n`
    end: M,
    direction: Direction,
    filter: Option<PopulationFilter<M>>,
    evaluated: u64,
}

impl<M: Mask> SubsetScan<M> {
    /// Every mask of an `universe` element set, in the given direction.
    pub fn all(universe: usize, direction: Direction) -> Result<Self, CombinationError> {
        if !M::supports(universe) {
            return Err(CombinationError::UniverseTooLarge { universe });
        }
        let end = M::universe(universe);
        let cursor = match direction {
            Direction::Ascending => M::zero(),
            Direction::Descending => {
                let mut top = end.clone();
                top.decrement();
                top
            }
        };
        Ok(Self {
            cursor: Some(cursor),
            end,
            direction,
            filter: None,
            evaluated: 0,
        })
    }

    /// Masks with exactly `size` bits set, in the given direction.
    pub fn with_size(
        universe: usize,
        size: usize,
        direction: Direction,
    ) -> Result<Self, CombinationError> {
        let target = binomial(universe, size)?;
        let mut scan = Self::all(universe, direction)?;
        // C(n, m) <= 2^n, so any type that holds 2^n holds the target.
        let target =
            M::from_count(&target).ok_or(CombinationError::UniverseTooLarge { universe })?;
        scan.filter = Some(PopulationFilter {
            population: size as u64,
            target,
            matched: M::zero(),
        });
        Ok(scan)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of masks examined so far, matching or not.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Population count the scan is filtered on.
    pub fn population(&self) -> Option<u64> {
        self.filter.as_ref().map(|filter| filter.population)
    }

    /// Number of masks the filtered scan will yield in total.
    pub fn target(&self) -> Option<&M> {
        self.filter.as_ref().map(|filter| &filter.target)
    }

    /// Number of matching masks yielded so far.
    pub fn matched(&self) -> Option<&M> {
        self.filter.as_ref().map(|filter| &filter.matched)
    }

    fn advance(&self, mask: &M) -> Option<M> {
        let mut next = mask.clone();
        match self.direction {
            Direction::Ascending => {
                next.increment();
                (next < self.end).then_some(next)
            }
            Direction::Descending => {
                if next == M::zero() {
                    return None;
                }
                next.decrement();
                Some(next)
            }
        }
    }
}

impl<M: Mask> Iterator for SubsetScan<M> {
    type Item = M;

    fn next(&mut self) -> Option<M> {
        loop {
            if let Some(filter) = &self.filter {
                if filter.matched == filter.target {
                    self.cursor = None;
                    return None;
                }
            }

            let mask = self.cursor.take()?;
            self.cursor = self.advance(&mask);
            self.evaluated += 1;

            let Some(filter) = &mut self.filter else {
                return Some(mask);
            };
            if mask.count_ones() == filter.population {
                filter.matched.increment();
                return Some(mask);
            }
        }
    }
}
