use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::codec::{self, RECORD_LEN};
use crate::error::LedgerError;
use crate::models::Transaction;

/// Handle on an append-only ledger file. Holds no open file between calls.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub(crate) fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = %path.display(), "using ledger file");
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record under an exclusive lock.
    ///
    /// Either the whole record lands on disk or the file is left at its previous length.
    pub(crate) fn append(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        let block = codec::encode(transaction);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.lock().map_err(|e| self.io_error(e))?;

        let start = self.drop_truncated_tail(&file)?;

        if let Err(e) = file.write_all(&block).and_then(|()| file.sync_data()) {
            error!(path = %self.path.display(), error = %e, "append failed, rolling back");
            if let Err(rollback) = file.set_len(start) {
                warn!(path = %self.path.display(), error = %rollback, "rollback failed");
            }
            return Err(self.io_error(e));
        }

        debug!(
            path = %self.path.display(),
            offset = start,
            kind = %transaction.transaction_type,
            "appended record"
        );
        Ok(())
    }

    /// A short tail left by an interrupted write would misalign every later record.
    /// Cut it back to the last whole record and return the resulting length.
    fn drop_truncated_tail(&self, file: &File) -> Result<u64, LedgerError> {
        let len = file.metadata().map_err(|e| self.io_error(e))?.len();
        let whole = len - len % RECORD_LEN as u64;
        if whole != len {
            warn!(
                path = %self.path.display(),
                dropped = len - whole,
                "discarding truncated tail before append"
            );
            file.set_len(whole).map_err(|e| self.io_error(e))?;
        }
        Ok(whole)
    }

    /// Lazily decode every record in file order.
    ///
    /// A missing file reads as an empty ledger. Each call starts again from the top.
    pub(crate) fn records(&self) -> Result<Records, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file missing, treating as empty");
                return Ok(Records::empty(self.path.clone()));
            }
            Err(e) => return Err(self.io_error(e)),
        };
        file.lock_shared().map_err(|e| self.io_error(e))?;

        Ok(Records {
            reader: Some(BufReader::new(file)),
            path: self.path.clone(),
            offset: 0,
        })
    }

    pub(crate) fn read_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.records()?.collect()
    }

    fn io_error(&self, source: io::Error) -> LedgerError {
        LedgerError::io(&self.path, source)
    }
}

/// Iterator returned by [`Ledger::records`]. Releases the file once exhausted or dropped.
pub(crate) struct Records {
    reader: Option<BufReader<File>>,
    path: PathBuf,
    offset: u64,
}

impl Records {
    fn empty(path: PathBuf) -> Self {
        Self {
            reader: None,
            path,
            offset: 0,
        }
    }
}

impl Iterator for Records {
    type Item = Result<Transaction, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        let mut block = [0u8; RECORD_LEN];

        match read_block(reader, &mut block) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(n) if n < RECORD_LEN => {
                warn!(
                    path = %self.path.display(),
                    offset = self.offset,
                    bytes = n,
                    "ignoring truncated record at end of ledger"
                );
                self.reader = None;
                None
            }
            Ok(_) => {
                let record = codec::decode(&block, self.offset);
                self.offset += RECORD_LEN as u64;
                Some(record)
            }
            Err(e) => {
                self.reader = None;
                Some(Err(LedgerError::io(&self.path, e)))
            }
        }
    }
}

/// Fill `buf` as far as the reader allows. Returns the number of bytes read,
/// which is less than `buf.len()` only at end of file.
fn read_block(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
