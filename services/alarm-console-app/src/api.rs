//! Alarm API data types
//!
//! These types mirror the JSON bodies returned by the alarm API
//! (`/api/alarms` and `/api/health`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Alarm severity, from least to most urgent.
///
/// The API only ever sends the four known values. Anything else is kept
/// verbatim in [`Severity::Other`] so a single unexpected row does not fail
/// the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Info,
    Warn,
    Major,
    Critical,
    Other(String),
}

impl Severity {
    /// The known severities, most urgent first
    pub const KNOWN: [Severity; 4] = [
        Severity::Critical,
        Severity::Major,
        Severity::Warn,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Other(raw) => raw,
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "INFO" => Severity::Info,
            "WARN" => Severity::Warn,
            "MAJOR" => Severity::Major,
            "CRITICAL" => Severity::Critical,
            _ => Severity::Other(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an alarm
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlarmStatus {
    Open,
    Cleared,
    Ack,
    Other(String),
}

impl AlarmStatus {
    pub const KNOWN: [AlarmStatus; 3] = [AlarmStatus::Open, AlarmStatus::Cleared, AlarmStatus::Ack];

    pub fn as_str(&self) -> &str {
        match self {
            AlarmStatus::Open => "OPEN",
            AlarmStatus::Cleared => "CLEARED",
            AlarmStatus::Ack => "ACK",
            AlarmStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for AlarmStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPEN" => AlarmStatus::Open,
            "CLEARED" => AlarmStatus::Cleared,
            "ACK" => AlarmStatus::Ack,
            _ => AlarmStatus::Other(raw),
        }
    }
}

impl From<AlarmStatus> for String {
    fn from(status: AlarmStatus) -> Self {
        match status {
            AlarmStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single alarm as returned by /api/alarms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: i64,
    pub site_id: String,
    pub site_name: String,
    pub alarm_code: String,
    pub alarm_label: String,
    pub severity: Severity,
    pub status: AlarmStatus,
    pub started_at: String,
    #[serde(default)]
    pub cleared_at: Option<String>,
    #[serde(default)]
    pub acked_at: Option<String>,
}

/// One page of alarms. `total` is the server's count of all matching
/// alarms, not just the ones in `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmListResponse {
    pub items: Vec<Alarm>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

/// Liveness response from /api/health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}
