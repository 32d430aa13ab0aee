//! Append-only audit trail.
//!
//! One human-readable line per mutating action, prefixed with an ISO-8601
//! timestamp. Writes are best-effort: a failed append is logged at debug
//! level and never surfaces to the caller, so an unwritable audit file can
//! never fail or roll back the operation it describes.

use std::path::PathBuf;

use jiff::Timestamp;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one line to the audit trail. Never fails.
    pub async fn record(&self, line: impl AsRef<str>) {
        let entry = format!("[{}] {}\n", Timestamp::now(), line.as_ref());

        if let Err(error) = self.append(entry.as_bytes()).await {
            debug!("audit log write failed: {error}");
        }
    }

    async fn append(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(bytes).await
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn record_appends_timestamped_lines() -> TestResult {
        let dir = tempfile::tempdir()?;
        let log = AuditLog::new(dir.path().join("audit.log"));

        log.record("ADD PRODUCT abc").await;
        log.record("TX def sale").await;

        let contents = tokio::fs::read_to_string(dir.path().join("audit.log")).await?;
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2, "expected one line per record call");
        assert!(lines[0].starts_with('['), "missing timestamp prefix");
        assert!(lines[0].ends_with("ADD PRODUCT abc"));
        assert!(lines[1].ends_with("TX def sale"));

        // The prefix parses back as a timestamp.
        let stamp = lines[0]
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .expect("bracketed timestamp prefix");
        stamp.parse::<Timestamp>()?;

        Ok(())
    }

    #[tokio::test]
    async fn record_swallows_write_failures() {
        // A directory that does not exist makes the append fail.
        let log = AuditLog::new("/nonexistent-stockroom-dir/audit.log");

        // Must not panic or return an error.
        log.record("TX never-written").await;
    }
}
