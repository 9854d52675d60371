//! The interactive dispatcher: a poll-and-dispatch loop over an abstract
//! token stream, so it runs against stdin in production and a buffer in
//! tests. Two states only: reading commands, or done.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use seesaw_math::{partition_evaluator, Partition};
use seesaw_verify::{
    check_partition, render_row, sweep_all_partitions, write_table, CandidateFilter, TABLE_HEADER,
};

/// Pulls whitespace-delimited tokens from a line-based reader.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Help:")?;
    writeln!(out, "Press \"i\" to input a partition to test.")?;
    writeln!(
        out,
        "Press \"a\" to test that all possible partitions are verified simultaneously."
    )?;
    writeln!(out, "Press \"x\" to exit.")
}

fn run_sweep<W: Write>(
    out: &mut W,
    v: &[i64],
    w0: &Partition,
    results_path: &Path,
) -> Result<()> {
    let report = sweep_all_partitions(v, w0)?;
    let file = File::create(results_path)
        .with_context(|| format!("creating {}", results_path.display()))?;
    write_table(BufWriter::new(file), &report.checks)
        .with_context(|| format!("writing {}", results_path.display()))?;
    if report.all_matched {
        writeln!(
            out,
            "All alternatives were found! The results are saved in \"{}\". \
             It can be opened as a spreadsheet or as a text file.",
            results_path.display()
        )?;
    } else {
        writeln!(out, "Verification failed.")?;
    }
    Ok(())
}

fn run_candidate<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
    v: &[i64],
    w0: &Partition,
) -> Result<bool> {
    writeln!(out, "Please input {} bits (with values '0' or '1')", v.len())?;
    let mut filter = CandidateFilter::new(v.len());
    let bits = loop {
        match reader.next_token()? {
            Some(token) => {
                if let Some(bits) = filter.push(&token) {
                    break bits;
                }
            }
            // Input ran out mid-candidate: treat as exit.
            None => return Ok(false),
        }
    };

    let evaluator_w0 = partition_evaluator(v, w0)?;
    let check = check_partition(v, w0, &evaluator_w0, &bits)?;
    writeln!(out, "{TABLE_HEADER}")?;
    writeln!(out, "{}", render_row(&check))?;
    if check.matched {
        writeln!(out, "Verification successful!")?;
    } else {
        writeln!(out, "Verification failed.")?;
    }
    Ok(true)
}

/// Run the command loop until `x` or end of input.
///
/// Commands: `a` sweeps every partition and saves the results table, `i`
/// reads a candidate partition and checks it, `x` exits. Anything else is
/// a no-op, matching the forgiving key handling of the menu.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    v: &[i64],
    w0: &Partition,
    results_path: &Path,
) -> Result<()> {
    let mut reader = TokenReader::new(input);
    print_help(&mut out)?;

    while let Some(token) = reader.next_token()? {
        match token.to_ascii_lowercase().as_str() {
            "a" => run_sweep(&mut out, v, w0, results_path)?,
            "i" => {
                if !run_candidate(&mut reader, &mut out, v, w0)? {
                    break;
                }
            }
            "x" => break,
            _ => {}
        }
    }
    Ok(())
}
