mod count;
mod list;

use clap::{Parser, Subcommand, ValueEnum};

use anyhow::{Result, bail};
use combinations::{ABSENT_MARKER, Order};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every combination in both orders, then the combinations of one size in both orders.
    Report {
        /// Size of the combinations listed in the second half of the report.
        #[arg(long, short = 'm', default_value_t = 2)]
        size: usize,
        /// Elements, from most to least prominent.
        #[arg(value_parser = parse_element)]
        elements: Vec<String>,
    },
    /// Print the combinations of every size.
    All {
        #[arg(long, value_enum, default_value_t = OrderArg::Human)]
        order: OrderArg,
        /// Elements, from most to least prominent.
        #[arg(value_parser = parse_element)]
        elements: Vec<String>,
    },
    /// Print the combinations with exactly `size` elements.
    Size {
        size: usize,
        #[arg(long, value_enum, default_value_t = OrderArg::Human)]
        order: OrderArg,
        /// Elements, from most to least prominent.
        #[arg(value_parser = parse_element)]
        elements: Vec<String>,
    },
    /// Print the binomial coefficient C(n, m).
    Binomial { n: usize, m: usize },
    /// Print how many combinations each size has, without enumerating them.
    Count {
        /// Only count combinations of this size.
        #[arg(long, short = 'm')]
        size: Option<usize>,
        /// Elements, from most to least prominent.
        #[arg(value_parser = parse_element)]
        elements: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Human,
    Machine,
}

impl From<OrderArg> for Order {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Human => Order::Human,
            OrderArg::Machine => Order::Machine,
        }
    }
}

/// Elements are printed space separated next to the absent marker, so they
/// must be non-empty, free of whitespace and distinct from the marker.
fn parse_element(value: &str) -> Result<String> {
    if value.is_empty() {
        bail!("elements must not be empty");
    }
    if value.chars().any(char::is_whitespace) {
        bail!("element {value:?} contains whitespace");
    }
    if value == ABSENT_MARKER {
        bail!("{ABSENT_MARKER:?} is reserved for absent elements");
    }
    Ok(value.to_string())
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { size, elements } => {
            list::run_report(&elements, size)?;
        }
        Commands::All { order, elements } => {
            list::run_all(&elements, order.into())?;
        }
        Commands::Size {
            size,
            order,
            elements,
        } => {
            list::run_size(&elements, size, order.into())?;
        }
        Commands::Binomial { n, m } => {
            count::run_binomial(n, m)?;
        }
        Commands::Count { size, elements } => {
            count::run_count(elements.len(), size)?;
        }
    }

    Ok(())
}
