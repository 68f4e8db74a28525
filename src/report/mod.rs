//! Running balance and totals over the ledger, in file order.

use rust_decimal::Decimal;

use crate::models::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BalanceRow {
    pub(crate) transaction: Transaction,
    /// `+amount` for income, `-amount` for expenses.
    pub(crate) signed_amount: Decimal,
    /// Balance after applying this row.
    pub(crate) balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub(crate) count: usize,
    pub(crate) total_income: Decimal,
    /// Positive magnitude of all expenses.
    pub(crate) total_expenses: Decimal,
    pub(crate) final_balance: Decimal,
}

impl Summary {
    fn add(&mut self, transaction: &Transaction) {
        let amount = transaction.abs_amount();
        if transaction.is_expense() {
            self.total_expenses = self.total_expenses.saturating_add(amount);
        } else {
            self.total_income = self.total_income.saturating_add(amount);
        }
        self.final_balance = self
            .final_balance
            .saturating_add(transaction.signed_amount());
        self.count += 1;
    }
}

/// Pair every transaction with the balance after it. No reordering, no skipping.
pub(crate) fn running_balances<I>(transactions: I) -> impl Iterator<Item = BalanceRow>
where
    I: IntoIterator<Item = Transaction>,
{
    transactions
        .into_iter()
        .scan(Decimal::ZERO, |balance, transaction| {
            let signed_amount = transaction.signed_amount();
            *balance = balance.saturating_add(signed_amount);
            Some(BalanceRow {
                transaction,
                signed_amount,
                balance: *balance,
            })
        })
}

pub(crate) fn summarize<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Summary::default(), |mut summary, transaction| {
            summary.add(transaction);
            summary
        })
}

/// Balance rows and their summary in a single pass.
pub(crate) fn history<I>(transactions: I) -> (Vec<BalanceRow>, Summary)
where
    I: IntoIterator<Item = Transaction>,
{
    let rows: Vec<BalanceRow> = running_balances(transactions).collect();
    let summary = summarize(rows.iter().map(|row| &row.transaction));
    (rows, summary)
}
