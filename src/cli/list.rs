use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use combinations::{ALL_ORDERS, Order, Selection, binomial, enumerate};

/// Write the selected combinations to `out`, one per line.
fn write_combinations<W: Write>(
    out: &mut W,
    elements: &[String],
    order: Order,
    selection: Selection,
) -> Result<()> {
    let flow = enumerate(elements, order, selection, |combination| {
        match writeln!(out, "{combination}") {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => ControlFlow::Break(err),
        }
    })?;
    if let ControlFlow::Break(err) = flow {
        return Err(err).context("failed to write combination");
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, elements: &[String], size: usize) -> Result<()> {
    // Reject an impossible size before anything is printed.
    binomial(elements.len(), size)
        .with_context(|| format!("invalid size for the report: {size}"))?;

    for &order in ALL_ORDERS {
        writeln!(out, "{order}, m=0 to m=n:")?;
        write_combinations(out, elements, order, Selection::All)?;
        writeln!(out)?;
    }
    for (i, &order) in ALL_ORDERS.iter().enumerate() {
        writeln!(out, "{order}, m={size} for example:")?;
        write_combinations(out, elements, order, Selection::Size(size))?;
        if i + 1 < ALL_ORDERS.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) fn run_report(elements: &[String], size: usize) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&mut out, elements, size)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn run_all(elements: &[String], order: Order) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    write_combinations(&mut out, elements, order, Selection::All)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn run_size(elements: &[String], size: usize, order: Order) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    write_combinations(&mut out, elements, order, Selection::Size(size))
        .with_context(|| format!("cannot list combinations of size {size}"))?;
    out.flush()?;
    Ok(())
}
