use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::record::CombinedRecord;

/// Append-only CSV store. The header row is the record's field names and
/// is written exactly once, when the file is first created.
///
/// Creation goes through a temp file in the same directory followed by an
/// atomic rename, and later rows are true line appends, so a crash
/// mid-write never truncates rows that were already durable.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the store if it does not exist yet.
    pub fn append(&self, record: &CombinedRecord) -> Result<()> {
        if self.is_missing_or_empty()? {
            self.create_with(record)
        } else {
            self.append_row(record)
        }
    }

    /// All rows currently in the store. A missing file reads as an empty
    /// store, not an error.
    pub fn read_records(&self) -> Result<Vec<CombinedRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    pub fn row_count(&self) -> Result<usize> {
        Ok(self.read_records()?.len())
    }

    fn is_missing_or_empty(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    fn create_with(&self, record: &CombinedRecord) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::Writer::from_writer(tmp.as_file());
            writer.serialize(record)?;
            writer.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), "created store");
        Ok(())
    }

    fn append_row(&self, record: &CombinedRecord) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(path = %self.path.display(), city = %record.city, "appended row");
        Ok(())
    }
}
