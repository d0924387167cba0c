//! Append-only contact log.
//!
//! Contact-form submissions land in a flat CSV file with a fixed
//! three-column header written once on first use. Appends are serialized
//! behind a mutex so concurrent submissions never interleave rows.

use std::fs::OpenOptions;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

/// A single contact-form submission.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Errors while persisting contact records.
#[derive(Debug, Error)]
pub enum ContactLogError {
    #[error("failed to write contact log: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write contact log: {0}")]
    Csv(#[from] csv::Error),
}

/// Serialized writer for the contact CSV.
pub struct ContactLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ContactLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Append one record, writing the header row if the file is new.
    ///
    /// The exists-check and the append happen under one lock so two
    /// concurrent first writes cannot both emit a header.
    pub async fn append(&self, record: &ContactRecord) -> Result<(), ContactLogError> {
        let _guard = self.write_lock.lock().await;

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_new {
            writer.write_record(["Name", "Email", "Message"])?;
        }
        writer.write_record([&record.name, &record.email, &record.message])?;
        writer.flush()?;

        info!(name = %record.name, "Recorded contact submission");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            message: "Please call me back".to_string(),
        }
    }

    #[tokio::test]
    async fn header_is_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::new(dir.path().join("contacts.csv"));

        log.append(&record("alice")).await.unwrap();
        log.append(&record("bob")).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("contacts.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Email,Message");
        assert!(lines[1].starts_with("alice,"));
        assert!(lines[2].starts_with("bob,"));
    }

    #[tokio::test]
    async fn concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(ContactLog::new(dir.path().join("contacts.csv")));

        let a = {
            let log = log.clone();
            tokio::spawn(async move { log.append(&record("alice")).await })
        };
        let b = {
            let log = log.clone();
            tokio::spawn(async move { log.append(&record("bob")).await })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let content = std::fs::read_to_string(dir.path().join("contacts.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Email,Message");
        let mut names: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::new(dir.path().join("contacts.csv"));
        log.append(&ContactRecord {
            name: "Smith, Jane".into(),
            email: "jane@example.com".into(),
            message: "Re: lease".into(),
        })
        .await
        .unwrap();

        let content = std::fs::read_to_string(dir.path().join("contacts.csv")).unwrap();
        assert!(content.contains("\"Smith, Jane\""));
    }
}
