//! Fixed-width on-disk record layout.
//!
//! | field       | offset | width | encoding                         |
//! |-------------|--------|-------|----------------------------------|
//! | date        | 0      | 11    | ASCII `dd/mm/yyyy`, NUL-padded   |
//! | description | 11     | 50    | UTF-8, NUL-padded, <= 49 used    |
//! | amount      | 61     | 4     | IEEE-754 binary32, little-endian |
//! | type        | 65     | 1     | ASCII `I` or `E`                 |
//!
//! No header, no version, no padding between fields.

use crate::error::LedgerError;
use crate::models::{Transaction, TransactionType};
use crate::validate::cap_bytes;

pub(crate) const DATE_WIDTH: usize = 11;
pub(crate) const DESCRIPTION_WIDTH: usize = 50;
pub(crate) const AMOUNT_WIDTH: usize = 4;
pub(crate) const TYPE_WIDTH: usize = 1;

const DATE_OFFSET: usize = 0;
const DESCRIPTION_OFFSET: usize = DATE_OFFSET + DATE_WIDTH;
const AMOUNT_OFFSET: usize = DESCRIPTION_OFFSET + DESCRIPTION_WIDTH;
const TYPE_OFFSET: usize = AMOUNT_OFFSET + AMOUNT_WIDTH;

pub(crate) const RECORD_LEN: usize = TYPE_OFFSET + TYPE_WIDTH;

/// Longest description that still leaves a NUL terminator.
pub(crate) const DESCRIPTION_MAX: usize = DESCRIPTION_WIDTH - 1;

pub(crate) type RecordBytes = [u8; RECORD_LEN];

pub(crate) fn encode(transaction: &Transaction) -> RecordBytes {
    let mut block = [0u8; RECORD_LEN];
    put_text(&mut block[DATE_OFFSET..DESCRIPTION_OFFSET], &transaction.date);
    put_text(
        &mut block[DESCRIPTION_OFFSET..AMOUNT_OFFSET],
        &transaction.description,
    );
    block[AMOUNT_OFFSET..TYPE_OFFSET].copy_from_slice(&transaction.amount.to_le_bytes());
    block[TYPE_OFFSET] = transaction.transaction_type.as_byte();
    block
}

/// Decode one record. `offset` is only used to locate errors.
///
/// Bytes past `RECORD_LEN` are ignored.
pub(crate) fn decode(bytes: &[u8], offset: u64) -> Result<Transaction, LedgerError> {
    if bytes.len() < RECORD_LEN {
        return Err(LedgerError::corrupt(
            offset,
            format!("expected {RECORD_LEN} bytes, got {}", bytes.len()),
        ));
    }

    let mut amount_bytes = [0u8; AMOUNT_WIDTH];
    amount_bytes.copy_from_slice(&bytes[AMOUNT_OFFSET..TYPE_OFFSET]);
    let amount = f32::from_le_bytes(amount_bytes);
    if !(amount.is_finite() && amount > 0.0) {
        return Err(LedgerError::corrupt(offset, format!("invalid amount {amount}")));
    }

    let type_byte = bytes[TYPE_OFFSET];
    let transaction_type = TransactionType::from_byte(type_byte).ok_or_else(|| {
        LedgerError::corrupt(offset, format!("unknown transaction type byte 0x{type_byte:02x}"))
    })?;

    Ok(Transaction {
        date: take_text(&bytes[DATE_OFFSET..DESCRIPTION_OFFSET]),
        description: take_text(&bytes[DESCRIPTION_OFFSET..AMOUNT_OFFSET]),
        amount,
        transaction_type,
    })
}

/// Copy `text` into `field`, always leaving at least one trailing NUL.
fn put_text(field: &mut [u8], text: &str) {
    let text = cap_bytes(text, field.len() - 1);
    field[..text.len()].copy_from_slice(text.as_bytes());
}

fn take_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
