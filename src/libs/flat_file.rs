//! Comma-separated record files used by the task tracker.
//!
//! Reading is lenient: whitespace around fields is trimmed, so legacy
//! `a, b, c` lines parse the same as `a,b,c`, and records the parser cannot
//! decode are skipped with a warning. Writing produces standard CSV, quoting
//! fields that contain a delimiter, quote or line break.

use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::msg_warning;
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Creates `path` with `contents` when it does not exist yet. Returns whether it was created.
pub fn ensure_file(path: &Path, contents: &str) -> Result<bool, AppError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::storage(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| AppError::storage(path, e))?;
    Ok(true)
}

/// One record as found on disk.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Line the record starts on, counting from 1
    pub line: u64,
    /// Original bytes of the record without line terminators
    pub raw: Vec<u8>,
    /// Trimmed fields, or why they could not be decoded
    pub fields: Result<StringRecord, String>,
}

/// Reads every non-blank record together with its source text. A missing file reads as empty.
pub fn read_source_records(path: &Path) -> Result<Vec<SourceRecord>, AppError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(AppError::storage(path, e)),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data.as_slice());

    let mut records = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        let start = reader.position().clone();
        if !reader.read_byte_record(&mut record).map_err(|e| AppError::csv(path, e))? {
            break;
        }
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let end = reader.position().byte() as usize;
        let raw = line_text(data.get(start.byte() as usize..end).unwrap_or_default());
        let line = record.position().map(|p| p.line()).unwrap_or(start.line());

        records.push(SourceRecord {
            line,
            raw,
            fields: StringRecord::from_byte_record(record.clone()).map_err(|e| e.to_string()),
        });
    }

    Ok(records)
}

// Strips the line terminators (and any blank lines) around a record's bytes
fn line_text(bytes: &[u8]) -> Vec<u8> {
    let mut text = bytes;
    while let [b'\r' | b'\n', rest @ ..] = text {
        text = rest;
    }
    while let [rest @ .., b'\r' | b'\n'] = text {
        text = rest;
    }
    text.to_vec()
}

/// Reads every decodable record, warning about the rest. A missing file reads as empty.
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>, AppError> {
    let mut records = Vec::new();
    for source in read_source_records(path)? {
        match source.fields {
            Ok(record) => records.push(record),
            Err(reason) => warn_skipped(path, source.line, reason),
        }
    }
    Ok(records)
}

pub fn warn_skipped(path: &Path, line: u64, reason: String) {
    msg_warning!(Message::SkippedRecord {
        file: path.display().to_string(),
        line,
        reason,
    });
}

/// Line number of a record as reported in warnings.
pub fn record_line(record: &StringRecord, fallback: usize) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(fallback as u64 + 1)
}

/// Replaces the whole file with `records`, followed by `verbatim` lines written exactly as given.
pub fn write_records(path: &Path, records: &[Vec<String>], verbatim: &[Vec<u8>]) -> Result<(), AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::csv(path, e))?;

    for record in records {
        writer.write_record(record).map_err(|e| AppError::csv(path, e))?;
    }
    writer.flush().map_err(|e| AppError::storage(path, e))?;

    let mut file = writer.into_inner().map_err(|e| AppError::storage(path, e.into_error()))?;
    for line in verbatim {
        file.write_all(line).map_err(|e| AppError::storage(path, e))?;
        file.write_all(b"\n").map_err(|e| AppError::storage(path, e))?;
    }
    file.flush().map_err(|e| AppError::storage(path, e))?;

    Ok(())
}

/// Appends a single record, starting a new line first if the file lacks a trailing newline.
pub fn append_record(path: &Path, record: &[String]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| AppError::storage(path, e))?;
    ensure_trailing_newline(&mut file).map_err(|e| AppError::storage(path, e))?;

    let mut writer = WriterBuilder::new().has_headers(false).flexible(true).from_writer(file);
    writer.write_record(record).map_err(|e| AppError::csv(path, e))?;
    writer.flush().map_err(|e| AppError::storage(path, e))?;

    Ok(())
}

fn ensure_trailing_newline(file: &mut File) -> io::Result<()> {
    if file.metadata()?.len() == 0 {
        return Ok(());
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_lines_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        fs::write(&path, "admin, admin\n\nbob, pw1").unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "bob");
        assert_eq!(&records[1][1], "pw1");
    }

    #[test]
    fn test_append_after_missing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.txt");
        fs::write(&path, "admin, admin").unwrap();

        append_record(&path, &["carol".to_string(), "secret, with comma".to_string()]).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][1], "secret, with comma");
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_records(&dir.path().join("absent.txt")).unwrap().is_empty());
    }
}
