use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::report::{BalanceRow, Summary};
use crate::ui::theme::Theme;
use crate::ui::util::{format_amount, format_signed, pad_right};

const DATE_COL: usize = 12;
const DESCRIPTION_COL: usize = 20;
const AMOUNT_COL: usize = 10;

pub(crate) fn render_history(
    out: &mut impl Write,
    rows: &[BalanceRow],
    summary: &Summary,
    theme: Theme,
) -> io::Result<()> {
    writeln!(out, "{}", theme.heading("=== Transaction History ==="))?;

    if rows.is_empty() {
        writeln!(out, "{}", theme.warning("No transactions found."))?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<DATE_COL$} {:<DESCRIPTION_COL$} {:>AMOUNT_COL$} {:>AMOUNT_COL$}",
        "Date", "Description", "Amount", "Balance"
    )?;
    writeln!(out, "{}", "-".repeat(DATE_COL + DESCRIPTION_COL + 2 * AMOUNT_COL + 3))?;

    for row in rows {
        let amount = format!("{:>AMOUNT_COL$}", format_signed(row.signed_amount));
        let amount = if row.transaction.is_income() {
            theme.income(amount)
        } else {
            theme.expense(amount)
        };
        writeln!(
            out,
            "{} {} {} {}",
            theme.text(pad_right(&row.transaction.date, DATE_COL)),
            theme.warning(pad_right(&row.transaction.description, DESCRIPTION_COL)),
            amount,
            theme.balance(format!("{:>AMOUNT_COL$}", format_signed(row.balance))),
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}{}",
        theme.text("Total transactions: "),
        theme.warning(summary.count.to_string())
    )?;
    writeln!(
        out,
        "{}{}",
        theme.text("Current balance: "),
        balance_colored(summary.final_balance, theme)
    )?;
    Ok(())
}

pub(crate) fn render_summary(out: &mut impl Write, summary: &Summary, theme: Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.heading("=== Wallet Summary ==="))?;
    writeln!(out, "  Transactions: {}", summary.count)?;
    writeln!(
        out,
        "  Income:       {}",
        theme.income(format_amount(summary.total_income))
    )?;
    writeln!(
        out,
        "  Expenses:     {}",
        theme.expense(format_amount(summary.total_expenses))
    )?;
    writeln!(
        out,
        "  Balance:      {}",
        balance_colored(summary.final_balance, theme)
    )?;
    Ok(())
}

fn balance_colored(balance: Decimal, theme: Theme) -> String {
    let text = format_signed(balance);
    if balance >= Decimal::ZERO {
        theme.income(text)
    } else {
        theme.expense(text)
    }
}
