use anyhow::{Context, Result};
use std::io::Write;

use crate::report::BalanceRow;
use crate::ui::util::format_signed;

const HEADER: [&str; 5] = ["date", "description", "type", "amount", "balance"];

/// Write the history view as CSV, one row per record in file order.
pub(crate) fn write_history_csv(rows: &[BalanceRow], writer: impl Write) -> Result<usize> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(HEADER)
        .context("Failed to write CSV header")?;

    for row in rows {
        let amount = format_signed(row.signed_amount);
        let balance = format_signed(row.balance);
        csv.write_record([
            row.transaction.date.as_str(),
            row.transaction.description.as_str(),
            row.transaction.transaction_type.as_str(),
            amount.as_str(),
            balance.as_str(),
        ])
        .context("Failed to write CSV record")?;
    }

    csv.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}
