//! Audit Config

use std::path::PathBuf;

use clap::Args;

/// Audit trail settings.
#[derive(Debug, Args)]
pub struct AuditConfig {
    /// Path of the append-only audit log file
    #[arg(long, env = "AUDIT_LOG_PATH", default_value = "transactions.log")]
    pub audit_log_path: PathBuf,
}
