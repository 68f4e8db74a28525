//! Accept/reject predicates for user-supplied transaction fields.
//!
//! These run before a record is encoded; nothing here is consulted when reading.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::codec::DESCRIPTION_MAX;
use crate::error::ValidationError;
use crate::models::{Transaction, TransactionType};

pub(crate) const DATE_FORMAT: &str = "%d/%m/%Y";

fn date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").ok())
        .as_ref()
}

fn trim_newline(input: &str) -> &str {
    input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(input)
}

/// Today's local date in ledger format.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `dd/mm/yyyy` date. Empty input means `today`.
///
/// Days are only checked against 1..=31, so `31/02/2024` passes.
pub(crate) fn parse_date(input: &str, today: NaiveDate) -> Result<String, ValidationError> {
    let input = trim_newline(input);
    if input.is_empty() {
        return Ok(today.format(DATE_FORMAT).to_string());
    }
    if !date_pattern().is_some_and(|re| re.is_match(input)) {
        return Err(ValidationError::Date);
    }

    let mut parts = input.split('/').map(str::parse::<u32>);
    let (Some(Ok(day)), Some(Ok(month)), Some(Ok(year))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(ValidationError::Date);
    };

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2100).contains(&year) {
        return Err(ValidationError::Date);
    }
    Ok(input.to_string())
}

/// Non-empty label, silently capped at the storage width.
pub(crate) fn parse_description(input: &str) -> Result<String, ValidationError> {
    let input = trim_newline(input);
    if input.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if input.contains('\0') {
        return Err(ValidationError::DescriptionNul);
    }
    Ok(cap_bytes(input, DESCRIPTION_MAX).to_string())
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub(crate) fn cap_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub(crate) fn parse_amount(input: &str) -> Result<f32, ValidationError> {
    let amount: f32 = input.trim().parse().map_err(|_| ValidationError::Amount)?;
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ValidationError::Amount)
    }
}

/// Only the first character counts: `"income"`, `"i"` and `"I"` are all income.
pub(crate) fn parse_type(input: &str) -> Result<TransactionType, ValidationError> {
    match input.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('I') => Ok(TransactionType::Income),
        Some('E') => Ok(TransactionType::Expense),
        _ => Err(ValidationError::Type),
    }
}

/// Run every field check, returning the first rejection.
pub(crate) fn validate_transaction(
    date: &str,
    description: &str,
    amount: &str,
    transaction_type: &str,
    today: NaiveDate,
) -> Result<Transaction, ValidationError> {
    Ok(Transaction {
        date: parse_date(date, today)?,
        description: parse_description(description)?,
        amount: parse_amount(amount)?,
        transaction_type: parse_type(transaction_type)?,
    })
}

#[cfg(test)]
mod tests;
