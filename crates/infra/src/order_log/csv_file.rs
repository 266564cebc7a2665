use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use lemonpos_sales::Order;

use super::r#trait::{OrderLog, PersistenceError};
use super::schema::{OrderRowV1, SchemaVersion};

/// CSV-file-backed order log.
///
/// The first row is the schema header; each following row is one order. The
/// file (and its parent directory) is created on first append. Rows are only
/// ever appended.
#[derive(Debug, Clone)]
pub struct CsvOrderLog {
    path: PathBuf,
}

impl CsvOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy the raw log to `dest`, returning the number of bytes written.
    ///
    /// A log that does not exist yet exports as a header-only file. `dest` must
    /// not be the log itself.
    pub fn export_to(&self, dest: &Path) -> Result<u64, PersistenceError> {
        if self.is_same_file(dest) {
            return Err(PersistenceError::ExportOntoLog {
                path: dest.to_path_buf(),
            });
        }

        if self.is_blank()? {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_path(dest)
                .map_err(|source| csv_err(dest, source))?;
            writer
                .write_record(SchemaVersion::CURRENT.header())
                .map_err(|source| csv_err(dest, source))?;
            writer.flush().map_err(|source| io_err(dest, source))?;
            return fs::metadata(dest)
                .map(|m| m.len())
                .map_err(|source| io_err(dest, source));
        }

        let bytes = fs::copy(&self.path, dest).map_err(|source| io_err(dest, source))?;
        tracing::info!(
            from = %self.path.display(),
            to = %dest.display(),
            bytes,
            "order log exported"
        );
        Ok(bytes)
    }

    fn is_same_file(&self, other: &Path) -> bool {
        match (fs::canonicalize(&self.path), fs::canonicalize(other)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// True when the file is missing or has zero length.
    fn is_blank(&self) -> Result<bool, PersistenceError> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(source) => Err(io_err(&self.path, source)),
        }
    }

    fn open_reader(&self) -> Result<Option<csv::Reader<File>>, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(io_err(&self.path, source)),
        };

        // Row lengths are checked per record so a short row reports its position.
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        Ok(Some(reader))
    }

    fn read_header(
        &self,
        records: &mut csv::StringRecordsIter<'_, File>,
    ) -> Result<Option<SchemaVersion>, PersistenceError> {
        let header: StringRecord = match records.next() {
            None => return Ok(None),
            Some(rec) => rec.map_err(|source| csv_err(&self.path, source))?,
        };

        SchemaVersion::detect(&header)
            .map(Some)
            .ok_or_else(|| PersistenceError::SchemaMismatch {
                path: self.path.clone(),
                found: header.iter().collect::<Vec<_>>().join(","),
            })
    }

    /// Schema of the existing file, `None` if it has no header yet.
    fn existing_schema(&self) -> Result<Option<SchemaVersion>, PersistenceError> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(None);
        };
        let mut records = reader.records();
        self.read_header(&mut records)
    }
}

impl OrderLog for CsvOrderLog {
    fn append(&self, order: &Order) -> Result<(), PersistenceError> {
        // Only append under a recognised header; a file holding nothing but
        // blank lines gets one first.
        let schema = if self.is_blank()? {
            None
        } else {
            self.existing_schema()?
        };
        let needs_header = schema.is_none();

        let parent = self
            .path
            .parent()
            .filter(|p| needs_header && !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).map_err(|source| io_err(parent, source))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| io_err(&self.path, source))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer
                .write_record(SchemaVersion::CURRENT.header())
                .map_err(|source| csv_err(&self.path, source))?;
            tracing::info!(path = %self.path.display(), "created order log");
        }
        writer
            .serialize(OrderRowV1::from_order(order)?)
            .map_err(|source| csv_err(&self.path, source))?;
        writer.flush().map_err(|source| io_err(&self.path, source))?;

        tracing::info!(
            path = %self.path.display(),
            items = order.item_count(),
            total = %order.total(),
            "order appended"
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Order>, PersistenceError> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };
        let mut records = reader.records();

        let Some(version) = self.read_header(&mut records)? else {
            return Ok(Vec::new());
        };

        let expected = version.header().len();
        let mut orders = Vec::new();
        for (idx, rec) in records.enumerate() {
            let row = idx as u64 + 1;
            let rec = rec.map_err(|source| csv_err(&self.path, source))?;
            if rec.len() != expected {
                return Err(PersistenceError::Corrupt {
                    row,
                    reason: format!("expected {expected} fields, found {}", rec.len()),
                });
            }

            let order = match version {
                SchemaVersion::V1 => rec
                    .deserialize::<OrderRowV1>(None)
                    .map_err(|e| PersistenceError::Corrupt {
                        row,
                        reason: e.to_string(),
                    })?
                    .into_order(row)?,
            };
            orders.push(order);
        }

        tracing::debug!(path = %self.path.display(), orders = orders.len(), "order log loaded");
        Ok(orders)
    }
}

fn io_err(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_err(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
