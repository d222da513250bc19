use num_bigint::BigUint;
use num_traits::One;

use crate::error::CombinationError;

/// Row `n` of Pascal's triangle: `C(n, 0), C(n, 1), ..., C(n, n)`.
///
/// The row is accumulated in place, one row at a time. Within a row the
/// entries are updated from the right so that `counters[j - 1]` still holds
/// the previous row's value when `counters[j]` reads it.
pub fn pascal_row(n: usize) -> Vec<BigUint> {
    let mut counters = Vec::with_capacity(n + 1);
    counters.push(BigUint::one());
    for i in 1..=n {
        counters.push(BigUint::one());
        for j in (1..i).rev() {
            let (lower, upper) = counters.split_at_mut(j);
            upper[0] += &lower[j - 1];
        }
    }
    counters
}

/// Exact binomial coefficient `C(n, m)`.
///
/// Uses O(n²) big-integer additions and no division, so the result is exact
/// for any `n`.
pub fn binomial(n: usize, m: usize) -> Result<BigUint, CombinationError> {
    if m > n {
        return Err(CombinationError::SizeExceedsUniverse {
            size: m,
            universe: n,
        });
    }
    let mut row = pascal_row(n);
    Ok(row.swap_remove(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;
    use proptest::prelude::*;

    /// Multiplicative formula, independent of the triangle accumulation.
    fn reference(n: usize, m: usize) -> BigUint {
        let mut result = BigUint::one();
        for i in 0..m {
            result = result * BigUint::from(n - i) / BigUint::from(i + 1);
        }
        result
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(0, 0).unwrap(), BigUint::from(1u32));
        assert_eq!(binomial(3, 2).unwrap(), BigUint::from(3u32));
        assert_eq!(binomial(5, 2).unwrap(), BigUint::from(10u32));
        assert_eq!(binomial(20, 10).unwrap(), BigUint::from(184_756u32));
    }

    #[test]
    fn binomial_exceeds_native_width() {
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(binomial(100, 50).unwrap(), expected);
    }

    #[test]
    fn rejects_size_above_universe() {
        assert_eq!(
            binomial(5, 6),
            Err(CombinationError::SizeExceedsUniverse {
                size: 6,
                universe: 5
            })
        );
        assert!(binomial(0, 1).is_err());
    }

    #[test]
    fn small_rows() {
        let rows: Vec<Vec<u32>> = (0..6)
            .map(|n| {
                pascal_row(n)
                    .iter()
                    .map(|c| c.to_u32().unwrap())
                    .collect()
            })
            .collect();
        insta::assert_debug_snapshot!(rows, @r"
        [
            [
                1,
            ],
            [
                1,
                1,
            ],
            [
                1,
                2,
                1,
            ],
            [
                1,
                3,
                3,
                1,
            ],
            [
                1,
                4,
                6,
                4,
                1,
            ],
            [
                1,
                5,
                10,
                10,
                5,
                1,
            ],
        ]
        ");
    }

    proptest! {
        #[test]
        fn row_sums_to_power_of_two(n in 0usize..200) {
            let sum: BigUint = pascal_row(n).iter().sum();
            prop_assert_eq!(sum, BigUint::one() << n);
        }

        #[test]
        fn symmetric((n, m) in (0usize..150).prop_flat_map(|n| (Just(n), 0..=n))) {
            prop_assert_eq!(binomial(n, m).unwrap(), binomial(n, n - m).unwrap());
        }

        #[test]
        fn pascals_rule((n, m) in (2usize..150).prop_flat_map(|n| (Just(n), 1..n))) {
            let expected = reference(n - 1, m - 1) + reference(n - 1, m);
            prop_assert_eq!(binomial(n, m).unwrap(), expected);
        }

        #[test]
        fn matches_multiplicative_formula((n, m) in (0usize..150).prop_flat_map(|n| (Just(n), 0..=n))) {
            prop_assert_eq!(binomial(n, m).unwrap(), reference(n, m));
        }
    }
}
