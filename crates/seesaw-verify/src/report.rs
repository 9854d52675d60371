use std::io::{self, Write};

use crate::check::PartitionCheck;

/// Header row of the results table.
pub const TABLE_HEADER: &str = "Partition\tTransformed\tDirect\tCorrect\tFair";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// One tab-separated table row for a check record.
pub fn render_row(check: &PartitionCheck) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        check.bits,
        check.transformed,
        check.direct,
        yes_no(check.matched),
        yes_no(check.fair)
    )
}

/// The full table, header included, one line per record.
pub fn render_table(checks: &[PartitionCheck]) -> String {
    let mut out = String::from(TABLE_HEADER);
    out.push('\n');
    for check in checks {
        out.push_str(&render_row(check));
        out.push('\n');
    }
    out
}

/// Write the table to any sink. The format doubles as a spreadsheet import
/// and a plain text file.
pub fn write_table<W: Write>(mut out: W, checks: &[PartitionCheck]) -> io::Result<()> {
    out.write_all(render_table(checks).as_bytes())
}
