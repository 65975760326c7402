use crate::{CoreError, CoreResult, RegistrationRecord};

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_FILENAME: &str = "registrations.csv";
pub const CSV_HEADER: [&str; 2] = ["Email", "Registration Date"];

/// A rendered `Email,Registration Date` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    contents: String,
    rows: usize,
}

impl CsvExport {
    /// Build the document, or `None` when there is nothing to export.
    ///
    /// `format_date` renders each record's timestamp column.
    pub fn build<F>(records: &[RegistrationRecord], format_date: F) -> Option<Self>
    where
        F: Fn(&RegistrationRecord) -> String,
    {
        if records.is_empty() {
            return None;
        }

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(CSV_HEADER.join(","));

        for record in records {
            let date = format_date(record);
            lines.push(format!(
                "{},{}",
                escape_field(&record.email),
                escape_field(&date)
            ));
        }

        Some(Self {
            contents: lines.join("\n"),
            rows: records.len(),
        })
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Data rows, header excluded.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Write `registrations.csv` into `dir`, replacing any previous export.
    pub fn write_to_dir(&self, dir: &Path) -> CoreResult<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| CoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let path = dir.join(CSV_FILENAME);
        fs::write(&path, self.contents.as_bytes())
            .map_err(|e| CoreError::export_write(path.clone(), e))?;

        Ok(path)
    }
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
