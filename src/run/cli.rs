use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::export::write_history_csv;
use crate::ledger::Ledger;
use crate::report;
use crate::ui::render::{render_history, render_summary};
use crate::ui::Theme;
use crate::validate;

const DEFAULT_EXPORT_PATH: &str = "wallet-export.csv";

pub(crate) fn as_cli(args: &[String], ledger: &Ledger, theme: Theme) -> Result<()> {
    let mut out = io::stdout().lock();
    dispatch(args, ledger, theme, &mut out)
}

fn dispatch(args: &[String], ledger: &Ledger, theme: Theme, out: &mut impl Write) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], ledger, out),
        "list" | "l" | "history" => cli_list(ledger, theme, out),
        "summary" | "s" => cli_summary(ledger, theme, out),
        "export" => cli_export(&args[2..], ledger, out),
        "--help" | "-h" | "help" => {
            print_usage(out)?;
            Ok(())
        }
        "--version" | "-V" | "version" => {
            writeln!(out, "ewallet {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "EWallet - income/expense ledger with a running balance")?;
    writeln!(out)?;
    writeln!(out, "Usage: ewallet [--file <path>] [--no-color] [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Interactive menu")?;
    writeln!(out, "  add                           Append a transaction")?;
    writeln!(out, "    --amount <n>                Positive amount (required)")?;
    writeln!(out, "    --type <I|E>                Income or expense (required)")?;
    writeln!(out, "    --description <text>        Label, max 49 chars (required)")?;
    writeln!(out, "    --date <dd/mm/yyyy>         Date (default: today)")?;
    writeln!(out, "  list                          Show history with running balance")?;
    writeln!(out, "  summary                       Show totals and current balance")?;
    writeln!(out, "  export [path]                 Write history to CSV (default: {DEFAULT_EXPORT_PATH})")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(out, "The ledger file is taken from --file, then $EWALLET_FILE, then the data directory.")?;
    Ok(())
}

fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.windows(2)
        .find(|w| names.contains(&w[0].as_str()))
        .map(|w| w[1].as_str())
}

fn cli_add(args: &[String], ledger: &Ledger, out: &mut impl Write) -> Result<()> {
    let usage = "Usage: ewallet add --amount <n> --type <I|E> --description <text> [--date dd/mm/yyyy]";
    let amount = flag_value(args, &["--amount"]).with_context(|| usage.to_string())?;
    let kind = flag_value(args, &["--type", "-t"]).with_context(|| usage.to_string())?;
    let description =
        flag_value(args, &["--description", "-d"]).with_context(|| usage.to_string())?;
    let date = flag_value(args, &["--date"]).unwrap_or("");

    let transaction =
        validate::validate_transaction(date, description, amount, kind, validate::today())
            .context("Transaction rejected")?;
    ledger
        .append(&transaction)
        .context("Error saving transaction")?;

    writeln!(
        out,
        "Saved {} {:.2} on {}: {}",
        transaction.transaction_type.as_str().to_lowercase(),
        transaction.abs_amount(),
        transaction.date,
        transaction.description
    )?;
    Ok(())
}

fn cli_list(ledger: &Ledger, theme: Theme, out: &mut impl Write) -> Result<()> {
    let transactions = read_ledger(ledger)?;
    let (rows, summary) = report::history(transactions);
    render_history(out, &rows, &summary, theme)?;
    Ok(())
}

fn cli_summary(ledger: &Ledger, theme: Theme, out: &mut impl Write) -> Result<()> {
    let transactions = read_ledger(ledger)?;
    let summary = report::summarize(&transactions);
    render_summary(out, &summary, theme)?;
    Ok(())
}

fn cli_export(args: &[String], ledger: &Ledger, out: &mut impl Write) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| super::shellexpand(a))
        .unwrap_or_else(|| DEFAULT_EXPORT_PATH.to_string());

    let transactions = read_ledger(ledger)?;
    let (rows, _) = report::history(transactions);

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("Failed to create {output_path}"))?;
    let count = write_history_csv(&rows, file)?;
    if count == 0 {
        writeln!(out, "No transactions to export")?;
    } else {
        writeln!(out, "Exported {count} transactions to {output_path}")?;
    }
    Ok(())
}

fn read_ledger(ledger: &Ledger) -> Result<Vec<crate::models::Transaction>> {
    ledger
        .read_all()
        .with_context(|| format!("Failed to read ledger {}", ledger.path().display()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
