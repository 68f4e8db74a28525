mod transaction;

pub(crate) use transaction::{Transaction, TransactionType};

#[cfg(test)]
mod tests;
