//! seesaw: check that evaluating one partition of a weight list evaluates
//! all of them, through a shared invertible transformation.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use seesaw_math::{bits_to_partition, partition_evaluator, Partition};
use seesaw_verify::{
    check_partition, render_row, sweep_all_partitions, write_table, CandidateFilter, TABLE_HEADER,
};

mod config;
mod interactive;

#[derive(Parser, Debug)]
#[command(
    name = "seesaw",
    version,
    about = "Verifies that every partition of a weight list is evaluated by one shared linear transformation",
    long_about = None
)]
struct Cli {
    /// Weight-list file (created with defaults if missing)
    #[arg(long = "numbers", default_value = "numbers.txt")]
    numbers: PathBuf,

    /// Reference-partition file (created with defaults if missing)
    #[arg(long = "partition", default_value = "partition.txt")]
    partition: PathBuf,

    /// Results table path for exhaustive sweeps
    #[arg(short = 'o', long = "out", default_value = "test-results.tsv")]
    out: PathBuf,

    /// Log verbosity
    #[arg(long = "log-level", default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep all 2^n partitions, write the results table, report the verdict
    All {
        /// Emit the full report as JSON on stdout instead of writing the table
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },
    /// Check a single candidate partition
    Check {
        /// Candidate bits; characters other than '0'/'1' are discarded
        bits: String,
        /// Emit the check record as JSON instead of the one-row table
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },
}

fn format_tuple(values: &[i64]) -> String {
    let mut s = String::from("(");
    for (i, value) in values.iter().enumerate() {
        s.push_str(&value.to_string());
        s.push(if i + 1 == values.len() { ')' } else { ',' });
    }
    s
}

fn cmd_all(v: &[i64], w0: &Partition, out: &Path, json: bool) -> Result<()> {
    let report = sweep_all_partitions(v, w0)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let file =
            File::create(out).with_context(|| format!("creating {}", out.display()))?;
        write_table(BufWriter::new(file), &report.checks)
            .with_context(|| format!("writing {}", out.display()))?;
    }
    if report.all_matched {
        if !json {
            println!(
                "All alternatives were found! The results are saved in \"{}\". \
                 It can be opened as a spreadsheet or as a text file.",
                out.display()
            );
        }
        Ok(())
    } else {
        anyhow::bail!("verification failed: transformed and direct evaluations diverged")
    }
}

fn cmd_check(v: &[i64], w0: &Partition, raw: &str, json: bool) -> Result<()> {
    let mut filter = CandidateFilter::new(v.len());
    let Some(bits) = filter.push(raw) else {
        anyhow::bail!(
            "candidate needs {} binary digits, got {}",
            v.len(),
            v.len() - filter.pending()
        );
    };
    let evaluator_w0 = partition_evaluator(v, w0)?;
    let check = check_partition(v, w0, &evaluator_w0, &bits)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        println!("{TABLE_HEADER}");
        println!("{}", render_row(&check));
    }
    if check.matched {
        if !json {
            println!("Verification successful!");
        }
        Ok(())
    } else {
        anyhow::bail!("verification failed for candidate {bits}")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let v = config::load_weights(&cli.numbers)?;
    ensure!(
        !v.is_empty(),
        "weight list in {} is empty; nothing to partition",
        cli.numbers.display()
    );
    let w0 = bits_to_partition(&config::load_reference(&cli.partition)?);
    ensure!(
        w0.len() == v.len(),
        "reference partition in {} has {} entries, weight list has {}",
        cli.partition.display(),
        w0.len(),
        v.len()
    );

    println!("v = {}", format_tuple(&v));
    println!("w0 = {}", format_tuple(w0.signs()));

    match cli.command {
        Some(Commands::All { json }) => cmd_all(&v, &w0, &cli.out, json),
        Some(Commands::Check { bits, json }) => cmd_check(&v, &w0, &bits, json),
        None => interactive::run(io::stdin().lock(), io::stdout(), &v, &w0, &cli.out),
    }
}
