#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

// ── Date ──────────────────────────────────────────────────────

#[test]
fn test_date_valid() {
    assert_eq!(parse_date("15/01/2024", fixed_today()).unwrap(), "15/01/2024");
    assert_eq!(parse_date("01/12/1900", fixed_today()).unwrap(), "01/12/1900");
    assert_eq!(parse_date("31/12/2100", fixed_today()).unwrap(), "31/12/2100");
}

#[test]
fn test_date_trailing_newline_trimmed() {
    assert_eq!(parse_date("15/01/2024\n", fixed_today()).unwrap(), "15/01/2024");
    assert_eq!(parse_date("15/01/2024\r\n", fixed_today()).unwrap(), "15/01/2024");
}

#[test]
fn test_date_empty_defaults_to_today() {
    assert_eq!(parse_date("", fixed_today()).unwrap(), "07/03/2024");
    assert_eq!(parse_date("\n", fixed_today()).unwrap(), "07/03/2024");
}

#[test]
fn test_date_invalid_month() {
    assert_eq!(parse_date("31/13/2020", fixed_today()), Err(ValidationError::Date));
    assert_eq!(parse_date("01/00/2020", fixed_today()), Err(ValidationError::Date));
}

#[test]
fn test_date_invalid_day() {
    assert_eq!(parse_date("00/01/2020", fixed_today()), Err(ValidationError::Date));
    assert_eq!(parse_date("32/01/2020", fixed_today()), Err(ValidationError::Date));
}

#[test]
fn test_date_year_out_of_range() {
    assert_eq!(parse_date("01/01/1899", fixed_today()), Err(ValidationError::Date));
    assert_eq!(parse_date("01/01/2101", fixed_today()), Err(ValidationError::Date));
}

#[test]
fn test_date_wrong_shape() {
    for input in [
        "1/1/2020",
        "2020-01-01",
        "01-01-2020",
        "01/01/20",
        "01/01/20200",
        "aa/bb/cccc",
        " 1/01/2020",
        "01/01/2020 ",
    ] {
        assert_eq!(
            parse_date(input, fixed_today()),
            Err(ValidationError::Date),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_date_impossible_calendar_day_is_accepted() {
    assert_eq!(parse_date("31/02/2024", fixed_today()).unwrap(), "31/02/2024");
    assert_eq!(parse_date("29/02/2023", fixed_today()).unwrap(), "29/02/2023");
}

// ── Description ───────────────────────────────────────────────

#[test]
fn test_description_valid() {
    assert_eq!(parse_description("Groceries\n").unwrap(), "Groceries");
}

#[test]
fn test_description_empty_rejected() {
    assert_eq!(parse_description(""), Err(ValidationError::EmptyDescription));
    assert_eq!(parse_description("\n"), Err(ValidationError::EmptyDescription));
}

#[test]
fn test_description_nul_rejected() {
    assert_eq!(parse_description("a\0b"), Err(ValidationError::DescriptionNul));
}

#[test]
fn test_description_capped() {
    let long = "x".repeat(80);
    assert_eq!(parse_description(&long).unwrap().len(), DESCRIPTION_MAX);
}

#[test]
fn test_description_cap_respects_char_boundary() {
    // 48 ASCII bytes followed by a 3-byte char: only 49 bytes fit, so the char is dropped.
    let input = format!("{}€", "a".repeat(48));
    assert_eq!(parse_description(&input).unwrap(), "a".repeat(48));
}

#[test]
fn test_cap_bytes() {
    assert_eq!(cap_bytes("hello", 10), "hello");
    assert_eq!(cap_bytes("hello", 3), "hel");
    assert_eq!(cap_bytes("日本語", 4), "日");
}

// ── Amount ────────────────────────────────────────────────────

#[test]
fn test_amount_valid() {
    assert_eq!(parse_amount("12.5").unwrap(), 12.5);
    assert_eq!(parse_amount(" 100\n").unwrap(), 100.0);
    assert_eq!(parse_amount("0.01").unwrap(), 0.01);
}

#[test]
fn test_amount_non_positive_rejected() {
    assert_eq!(parse_amount("-5"), Err(ValidationError::Amount));
    assert_eq!(parse_amount("0"), Err(ValidationError::Amount));
    assert_eq!(parse_amount("-0.0"), Err(ValidationError::Amount));
}

#[test]
fn test_amount_unparsable_rejected() {
    assert_eq!(parse_amount(""), Err(ValidationError::Amount));
    assert_eq!(parse_amount("abc"), Err(ValidationError::Amount));
    assert_eq!(parse_amount("12,50"), Err(ValidationError::Amount));
}

#[test]
fn test_amount_non_finite_rejected() {
    assert_eq!(parse_amount("inf"), Err(ValidationError::Amount));
    assert_eq!(parse_amount("NaN"), Err(ValidationError::Amount));
    // Overflows binary32 and parses as infinity.
    assert_eq!(parse_amount("1e39"), Err(ValidationError::Amount));
}

#[test]
fn test_amount_large_finite_accepted() {
    assert_eq!(parse_amount("1e16").unwrap(), 1e16);
    assert_eq!(parse_amount("1e30").unwrap(), 1e30);
    assert_eq!(parse_amount("3.4e38").unwrap(), 3.4e38);
}

// ── Type ──────────────────────────────────────────────────────

#[test]
fn test_type_income() {
    assert_eq!(parse_type("i").unwrap(), TransactionType::Income);
    assert_eq!(parse_type("I").unwrap(), TransactionType::Income);
    assert_eq!(parse_type("income\n").unwrap(), TransactionType::Income);
}

#[test]
fn test_type_expense() {
    assert_eq!(parse_type("e").unwrap(), TransactionType::Expense);
    assert_eq!(parse_type("Expense").unwrap(), TransactionType::Expense);
}

#[test]
fn test_type_rejected() {
    assert_eq!(parse_type("x"), Err(ValidationError::Type));
    assert_eq!(parse_type(""), Err(ValidationError::Type));
    assert_eq!(parse_type("\n"), Err(ValidationError::Type));
}

// ── Whole transaction ─────────────────────────────────────────

#[test]
fn test_validate_transaction() {
    let txn = validate_transaction("", "Salary", "2500", "i", fixed_today()).unwrap();
    assert_eq!(
        txn,
        Transaction {
            date: "07/03/2024".into(),
            description: "Salary".into(),
            amount: 2500.0,
            transaction_type: TransactionType::Income,
        }
    );
}

#[test]
fn test_validate_transaction_first_failure_wins() {
    let err = validate_transaction("99/99/9999", "", "-1", "x", fixed_today()).unwrap_err();
    assert_eq!(err, ValidationError::Date);
    let err = validate_transaction("01/01/2024", "Rent", "-1", "x", fixed_today()).unwrap_err();
    assert_eq!(err, ValidationError::Amount);
}
