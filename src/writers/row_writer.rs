use crate::error::{ProcessingError, Result};
use crate::schema::Tabular;
use crate::utils::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_DELIMITER};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes entities as delimiter-joined rows, one per line.
///
/// Fields are written verbatim: quoting is switched off, so a value that
/// contains the delimiter is not escaped. Every row must have as many fields
/// as the header.
pub struct RowWriter {
    delimiter: u8,
    write_header: bool,
    batch_size: usize,
}

impl RowWriter {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER as u8,
            write_header: false,
            batch_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() || delimiter == '\n' || delimiter == '\r' {
            return Err(ProcessingError::Config(format!(
                "Unsupported delimiter: {:?}",
                delimiter
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    pub fn with_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Write records to a file, creating parent directories as needed.
    pub fn write_records<T: Tabular>(&self, records: &[T], path: &Path) -> Result<RowFileInfo> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let rows_written = self.write_to(records, file)?;
        let file_size = std::fs::metadata(path)?.len();

        info!(path = %path.display(), rows = rows_written, "Wrote rows");

        Ok(RowFileInfo {
            path: path.to_path_buf(),
            rows_written,
            header_written: self.write_header,
            file_size,
        })
    }

    /// Write records to any sink. Returns the number of data rows written.
    pub fn write_to<T: Tabular, W: Write>(&self, records: &[T], sink: W) -> Result<usize> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        if self.write_header {
            let header = match records.first() {
                Some(record) => record.header_columns(""),
                None => T::KIND.header_columns(""),
            };
            write_row(&mut writer, &header)?;
        }

        let mut rows_written = 0;
        for batch in records.chunks(self.batch_size) {
            for record in batch {
                write_row(&mut writer, &record.value_columns())?;
            }
            rows_written += batch.len();
            writer.flush()?;
            debug!(rows = rows_written, "Flushed row batch");
        }

        writer.flush()?;
        Ok(rows_written)
    }
}

// csv quotes a record with no fields as `""`; a field-less entity renders as
// an empty line instead.
fn write_row<W: Write>(writer: &mut csv::Writer<W>, fields: &[String]) -> Result<()> {
    if fields.is_empty() {
        writer.flush()?;
        writer.get_mut().write_all(b"\n")?;
    } else {
        writer.write_record(fields)?;
    }
    Ok(())
}

impl Default for RowWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct RowFileInfo {
    pub path: PathBuf,
    pub rows_written: usize,
    pub header_written: bool,
    pub file_size: u64,
}

impl RowFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Output File Summary:\n\
            - Path: {}\n\
            - Rows: {}\n\
            - Header row: {}\n\
            - File size: {:.2} MB",
            self.path.display(),
            self.rows_written,
            if self.header_written { "yes" } else { "no" },
            self.file_size as f64 / 1_048_576.0, // Convert to MB
        )
    }
}
