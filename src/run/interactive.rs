use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{cursor::MoveTo, queue, terminal};
use std::io::{self, BufRead, Write};
use tracing::error;

use crate::error::ValidationError;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::report;
use crate::ui::render::render_history;
use crate::ui::Theme;
use crate::validate;

/// The numbered menu loop on stdin/stdout.
pub(crate) fn as_interactive(ledger: &Ledger, theme: Theme) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), theme);
    session.clear_screen = theme.color;
    session.run(ledger)
}

/// Leading digits after optional whitespace, so `"1abc"` picks option 1.
fn menu_choice(input: &str) -> Option<u32> {
    let input = input.trim_start();
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input[..end].parse().ok()
}

enum Flow {
    Continue,
    Quit,
}

pub(crate) struct Session<R, W> {
    input: R,
    out: W,
    theme: Theme,
    clear_screen: bool,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, out: W, theme: Theme) -> Self {
        Self {
            input,
            out,
            theme,
            clear_screen: false,
            today: validate::today,
        }
    }

    /// Runs until the user picks Exit or stdin closes.
    pub(crate) fn run(&mut self, ledger: &Ledger) -> Result<()> {
        loop {
            self.clear()?;
            self.show_menu()?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            let flow = match menu_choice(&choice) {
                Some(1) => self.add_transaction(ledger)?,
                Some(2) => self.view_transactions(ledger)?,
                Some(3) => {
                    self.clear()?;
                    let bye = self.theme.success("Thank you for using Electronic Wallet System!");
                    writeln!(self.out, "{bye}")?;
                    return Ok(());
                }
                _ => {
                    let msg = self.theme.error("Invalid choice! Please select 1-3.");
                    writeln!(self.out, "{msg}")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                return Ok(());
            }

            write!(self.out, "\nPress Enter to continue...")?;
            self.out.flush()?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.theme.title("=== Electronic Wallet System ==="))?;
        for (key, label) in [("1", "Add Transaction"), ("2", "View Transactions"), ("3", "Exit")] {
            writeln!(self.out, "{}{label}", self.theme.heading(format!("{key}. ")))?;
        }
        write!(self.out, "\n{}", self.theme.success("Select an option: "))?;
        self.out.flush()?;
        Ok(())
    }

    fn add_transaction(&mut self, ledger: &Ledger) -> Result<Flow> {
        self.clear()?;
        writeln!(self.out, "{}", self.theme.heading("=== Add New Transaction ==="))?;

        let today = (self.today)();
        let Some(date) = self.prompt("Transaction date (dd/mm/yyyy) [today]: ", |s| {
            validate::parse_date(s, today)
        })?
        else {
            return Ok(Flow::Quit);
        };
        let description_prompt = format!("Description (max {} chars): ", crate::codec::DESCRIPTION_MAX);
        let Some(description) = self.prompt(&description_prompt, validate::parse_description)? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Amount (positive number): ", validate::parse_amount)? else {
            return Ok(Flow::Quit);
        };
        let Some(transaction_type) =
            self.prompt("Type (I)ncome or (E)xpense: ", validate::parse_type)?
        else {
            return Ok(Flow::Quit);
        };

        let transaction = Transaction {
            date,
            description,
            amount,
            transaction_type,
        };
        match ledger.append(&transaction) {
            Ok(()) => {
                let msg = self.theme.success("Transaction saved successfully!");
                writeln!(self.out, "\n{msg}")?;
            }
            Err(e) => {
                error!(error = %e, "failed to save transaction");
                let msg = self.theme.error(format!("Error saving transaction! {e}"));
                writeln!(self.out, "{msg}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view_transactions(&mut self, ledger: &Ledger) -> Result<Flow> {
        self.clear()?;
        match ledger.read_all() {
            Ok(transactions) => {
                let (rows, summary) = report::history(transactions);
                render_history(&mut self.out, &rows, &summary, self.theme)?;
            }
            Err(e) => {
                let msg = self.theme.error(format!("Could not read transactions: {e}"));
                writeln!(self.out, "{msg}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Ask until `parse` accepts. `None` means stdin closed.
    fn prompt<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.out, "{label}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    let msg = self.theme.error(e.to_string());
                    writeln!(self.out, "{msg}")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(self.out, terminal::Clear(terminal::ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
