use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A single completed scan with its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub label: String,
    pub confidence: f64,
    pub file_name: String,
    pub timestamp: String,
}

/// Persistent scan history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub total_scans: usize,
    #[serde(default)]
    pub records: Vec<ScanRecord>,
}

impl History {
    /// Directory: ~/.local/share/fruit-guardian/
    fn dir() -> PathBuf {
        let mut p = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("fruit-guardian");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("history.json")
    }

    /// Load from disk, returning defaults if missing.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Record a completed scan.
    pub fn record_scan(&mut self, label: &str, confidence: f64, file_name: &str) {
        self.total_scans += 1;
        self.records.push(ScanRecord {
            label: label.to_string(),
            confidence,
            file_name: file_name.to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_scan_appends_and_counts() {
        let mut history = History::default();
        history.record_scan("Healthy", 0.9231, "fruit.jpg");
        history.record_scan("Alternaria", 0.61, "spots.png");

        assert_eq!(history.total_scans, 2);
        assert_eq!(history.records.len(), 2);
        assert_eq!(history.records[0].label, "Healthy");
        assert_eq!(history.records[1].file_name, "spots.png");
    }

    #[test]
    fn records_field_defaults_when_absent() {
        let history: History = serde_json::from_str(r#"{"total_scans":3}"#).unwrap();
        assert_eq!(history.total_scans, 3);
        assert!(history.records.is_empty());
    }
}
