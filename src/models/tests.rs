#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_txn(amount: f32, transaction_type: TransactionType) -> Transaction {
    Transaction {
        date: "15/01/2024".into(),
        description: "Test".into(),
        amount,
        transaction_type,
    }
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(100.0, TransactionType::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(50.0, TransactionType::Expense);
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_signed_amount() {
    assert_eq!(make_txn(42.99, TransactionType::Income).signed_amount(), dec!(42.99));
    assert_eq!(make_txn(42.99, TransactionType::Expense).signed_amount(), dec!(-42.99));
}

#[test]
fn test_abs_amount_uses_shortest_representation() {
    // 12.3 is not exact in binary32; the decimal must not carry the float noise.
    assert_eq!(make_txn(12.3, TransactionType::Expense).abs_amount(), dec!(12.3));
    assert_eq!(make_txn(0.01, TransactionType::Income).abs_amount(), dec!(0.01));
}

#[test]
fn test_abs_amount_beyond_decimal_range_saturates() {
    assert_eq!(make_txn(1e30, TransactionType::Income).abs_amount(), Decimal::MAX);
    assert_eq!(make_txn(f32::MAX, TransactionType::Expense).signed_amount(), -Decimal::MAX);
}

#[test]
fn test_abs_amount_of_nan_is_zero() {
    assert_eq!(make_txn(f32::NAN, TransactionType::Income).abs_amount(), Decimal::ZERO);
}

// ── TransactionType ───────────────────────────────────────────

#[test]
fn test_type_byte_mapping() {
    assert_eq!(TransactionType::Income.as_byte(), b'I');
    assert_eq!(TransactionType::Expense.as_byte(), b'E');
    assert_eq!(TransactionType::from_byte(b'I'), Some(TransactionType::Income));
    assert_eq!(TransactionType::from_byte(b'E'), Some(TransactionType::Expense));
    assert_eq!(TransactionType::from_byte(b'i'), None);
    assert_eq!(TransactionType::from_byte(0), None);
}

#[test]
fn test_type_display() {
    assert_eq!(TransactionType::Income.to_string(), "Income");
    assert_eq!(TransactionType::Expense.to_string(), "Expense");
}
