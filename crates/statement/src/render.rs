//! Plain-text statement rendering.
//!
//! Output format is a compatibility contract with existing consumers; change
//! it only together with them.

use core::fmt::Write;

use crate::statement::StatementResult;

/// Render the statement report, one `\n`-terminated line per row.
pub fn render_plain_text(statement: &StatementResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Statement for {}", statement.customer);
    for line in &statement.lines {
        let _ = writeln!(
            out,
            "  {}: {} ({} seats)",
            line.play_name, line.amount, line.audience
        );
    }
    let _ = writeln!(out, "Amount owed is {}", statement.total_amount);
    let _ = writeln!(out, "You earned {} credits", statement.total_volume_credits);
    out
}
