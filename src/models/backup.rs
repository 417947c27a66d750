//! Store backups and the automatic backup schedule.

use serde::{Deserialize, Serialize};

/// One stored backup archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    /// Backup ID
    pub id: u64,
    /// Archive file name
    pub name: String,
    /// Human-readable archive size as reported by the backend
    #[serde(default)]
    pub size: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: String,
    /// "auto" for scheduled backups, "manual" for on-demand ones
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Backup {
    /// Whether this backup was produced by the schedule rather than by hand.
    pub fn is_automatic(&self) -> bool {
        self.kind == "auto"
    }
}

/// Automatic backup schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    /// Master switch for scheduled backups
    pub auto_backup_enabled: bool,
    /// How often a backup is taken: "daily", "weekly" or "monthly"
    pub backup_frequency: String,
    /// How many days backups are kept before rotation, as a digit string
    pub backup_retention: String,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            auto_backup_enabled: true,
            backup_frequency: "daily".to_string(),
            backup_retention: "30".to_string(),
        }
    }
}
