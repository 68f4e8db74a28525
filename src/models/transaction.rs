use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// The single ASCII byte used in the ledger file.
    pub(crate) fn as_byte(&self) -> u8 {
        match self {
            Self::Income => b'I',
            Self::Expense => b'E',
        }
    }

    pub(crate) fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'I' => Some(Self::Income),
            b'E' => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    /// `dd/mm/yyyy`
    pub(crate) date: String,
    pub(crate) description: String,
    /// Always positive; the sign comes from `transaction_type`.
    pub(crate) amount: f32,
    pub(crate) transaction_type: TransactionType,
}

impl Transaction {
    pub(crate) fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount as a decimal, using the shortest representation that round-trips the `f32`.
    ///
    /// Values beyond `Decimal` range saturate; NaN reads as zero.
    pub(crate) fn abs_amount(&self) -> Decimal {
        match Decimal::from_f32(self.amount) {
            Some(amount) => amount,
            None if self.amount.is_nan() => Decimal::ZERO,
            None if self.amount.is_sign_negative() => Decimal::MIN,
            None => Decimal::MAX,
        }
    }

    /// `+amount` for income, `-amount` for expenses.
    pub(crate) fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.abs_amount(),
            TransactionType::Expense => -self.abs_amount(),
        }
    }
}
