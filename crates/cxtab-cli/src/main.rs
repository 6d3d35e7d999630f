use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use cxtab_core::{render, Projection, Table};

#[derive(Parser)]
#[command(
    name = "cxtab",
    version,
    about = "Generate reference tables of complex math functions"
)]
struct Cli {
    /// Tables to print, in the order given (default: all six, in fixed order)
    #[arg(value_enum)]
    tables: Vec<CliTable>,

    /// Print aligned tables as magnitude/angle pairs instead of real/imaginary
    #[arg(long)]
    polar: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliTable {
    InverseTrig,
    Trig,
    Log,
    Sqrt,
    Exp,
    Angle,
}

impl From<CliTable> for Table {
    fn from(val: CliTable) -> Self {
        match val {
            CliTable::InverseTrig => Table::InverseTrig,
            CliTable::Trig => Table::Trig,
            CliTable::Log => Table::Log,
            CliTable::Sqrt => Table::Sqrt,
            CliTable::Exp => Table::Exp,
            CliTable::Angle => Table::Angle,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let projection = if cli.polar {
        Projection::Polar
    } else {
        Projection::Cartesian
    };
    let tables: Vec<Table> = if cli.tables.is_empty() {
        Table::ALL.to_vec()
    } else {
        cli.tables.into_iter().map(Table::from).collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for table in tables {
        let lines = render(table, projection)
            .with_context(|| format!("rendering {} table", table.name()))?;
        debug!(table = table.name(), rows = lines.len(), "rendered table");
        for line in &lines {
            writeln!(out, "{line}")?;
        }
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
