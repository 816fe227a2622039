use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use crate::core::{errors::BooksError, utils::ensure_dir};

use super::{RecordStore, Result};

const SHEET_EXTENSION: &str = "csv";

/// Worksheet store backed by one CSV file per sheet beneath a data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root).map_err(|err| {
            BooksError::StoreWrite(format!(
                "cannot create data directory `{}`: {err}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(crate::core::utils::books_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(sheet), SHEET_EXTENSION))
    }

    fn data_row_count(&self, sheet: &str) -> Result<usize> {
        Ok(self.read_all_rows(sheet)?.len().saturating_sub(1))
    }
}

impl RecordStore for CsvStore {
    fn read_all_rows(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(BooksError::StoreRead(format!(
                "worksheet `{}` not found at {}",
                sheet,
                path.display()
            )));
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|err| read_error(sheet, err))?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| read_error(sheet, err))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn append_row(&self, sheet: &str, fields: &[String]) -> Result<()> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Err(BooksError::StoreWrite(format!(
                "worksheet `{}` does not exist; create it before appending",
                sheet
            )));
        }
        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|err| write_error(sheet, err))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        writer
            .write_record(fields)
            .map_err(|err| write_error(sheet, err))?;
        writer.flush().map_err(|err| write_error(sheet, err))?;
        Ok(())
    }

    fn conditional_append_row(
        &self,
        sheet: &str,
        fields: &[String],
        expected_data_rows: usize,
    ) -> Result<()> {
        let current = self.data_row_count(sheet)?;
        if current != expected_data_rows {
            return Err(BooksError::StoreWrite(format!(
                "worksheet `{}` changed underneath the append: expected {} data rows, found {}",
                sheet, expected_data_rows, current
            )));
        }
        self.append_row(sheet, fields)
    }

    fn ensure_worksheet(&self, name: &str, header: &[String]) -> Result<()> {
        let path = self.sheet_path(name);
        if path.exists() {
            return Ok(());
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|err| write_error(name, err))?;
        writer
            .write_record(header)
            .map_err(|err| write_error(name, err))?;
        writer.flush().map_err(|err| write_error(name, err))?;
        tracing::info!(sheet = name, path = %path.display(), "worksheet created");
        Ok(())
    }
}

fn read_error(sheet: &str, err: impl std::fmt::Display) -> BooksError {
    BooksError::StoreRead(format!("worksheet `{sheet}`: {err}"))
}

fn write_error(sheet: &str, err: impl std::fmt::Display) -> BooksError {
    BooksError::StoreWrite(format!("worksheet `{sheet}`: {err}"))
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "sheet".into()
    } else {
        sanitized
    }
}
