use std::io::{self, Write};

use anyhow::{Context, Result};
use combinations::{binomial, pascal_row};
use num_bigint::BigUint;

pub(crate) fn run_binomial(n: usize, m: usize) -> Result<()> {
    let value = binomial(n, m).with_context(|| format!("cannot compute C({n}, {m})"))?;
    println!("{value}");
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, universe: usize, size: Option<usize>) -> Result<()> {
    if let Some(size) = size {
        let count = binomial(universe, size)?;
        writeln!(out, "m={size}: {count}")?;
        return Ok(());
    }

    let row = pascal_row(universe);
    for (size, count) in row.iter().enumerate() {
        writeln!(out, "m={size}: {count}")?;
    }
    let total: BigUint = row.iter().sum();
    writeln!(out, "total: {total}")?;
    Ok(())
}

pub(crate) fn run_count(universe: usize, size: Option<usize>) -> Result<()> {
    let mut out = io::stdout().lock();
    write_counts(&mut out, universe, size)
        .with_context(|| format!("cannot count combinations of {universe} elements"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn counts(universe: usize, size: Option<usize>) -> Result<String> {
        let mut out = Vec::new();
        write_counts(&mut out, universe, size)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn counts_every_size() {
        assert_snapshot!(counts(4, None).unwrap(), @r"
        m=0: 1
        m=1: 4
        m=2: 6
        m=3: 4
        m=4: 1
        total: 16
        ");
    }

    #[test]
    fn counts_one_size() {
        assert_snapshot!(counts(60, Some(30)).unwrap(), @"m=30: 118264581564861424");
    }

    #[test]
    fn rejects_oversized_count() {
        assert!(counts(2, Some(3)).is_err());
    }
}
