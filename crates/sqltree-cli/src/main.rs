//! sqltree CLI
//!
//! Parses SQL statements and prints their AST as JSON.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use sqltree_core::Statement;

/// Parse SQL statements into a nested AST.
#[derive(Parser)]
#[command(name = "sqltree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement to parse. Reads one statement per line from stdin if not
    /// specified.
    sql: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Print canonical SQL instead of JSON.
    #[arg(long = "sql")]
    sql_output: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render(&self, stmt: &Statement) -> anyhow::Result<String> {
        if self.sql_output {
            return Ok(stmt.to_string());
        }
        let value = stmt.to_value()?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    fn run(&self, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let stmt = sqltree_core::parse(input).inspect_err(|e| error!("{e}"))?;
        debug!(kind = %stmt.kind(), "rendering statement");
        writeln!(out, "{}", self.render(&stmt)?)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(sql) = &cli.sql {
        return cli
            .run(sql, &mut out)
            .with_context(|| format!("failed to parse {sql:?}"));
    }

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        cli.run(&line, &mut out)
            .with_context(|| format!("failed to parse line {}", index + 1))?;
    }
    Ok(())
}
