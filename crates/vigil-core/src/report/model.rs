//! Report domain models.

use serde::{Deserialize, Serialize};
use vigil_db::queries::reports::{ReportRow, StatsRow};

/// A submitted incident report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub reporter_id: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub status: ReportStatus,
    pub created_at: String,
}

impl Report {
    /// Create a Report from a database row.
    pub fn from_row(row: ReportRow) -> Self {
        Self {
            id: row.id,
            reporter_id: row.reporter_id,
            category: row.category,
            description: row.description,
            location: row.location,
            // Rows only ever hold validated status strings.
            status: ReportStatus::from_str(&row.status).unwrap_or(ReportStatus::Pending),
            created_at: row.created_at,
        }
    }
}

/// Report lifecycle status.
///
/// Any status may move to any other, including itself. The original
/// system never restricted transitions and that permissiveness is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ReportStatus {
    /// Parse from string. Returns `None` for anything outside the enum.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

/// Aggregate report counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

impl ReportStats {
    /// Create stats from a database snapshot row.
    pub fn from_row(row: StatsRow) -> Self {
        Self {
            total: row.total,
            pending: row.pending,
            in_progress: row.in_progress,
            resolved: row.resolved,
        }
    }
}

/// Admin dashboard view: every report plus a consistent stats snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminView {
    pub reports: Vec<Report>,
    pub stats: ReportStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "in_progress", "resolved"] {
            assert_eq!(ReportStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(ReportStatus::from_str("closed").is_none());
        assert!(ReportStatus::from_str("PENDING").is_none());
        assert!(ReportStatus::from_str("").is_none());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = Report {
            id: 1,
            reporter_id: "USER_AB12CD34E".into(),
            category: "fire".into(),
            description: "smoke near gate 3".into(),
            location: "terminal B".into(),
            status: ReportStatus::Pending,
            created_at: "2024-01-01 00:00:00".into(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reporterId"], "USER_AB12CD34E");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["createdAt"], "2024-01-01 00:00:00");
    }
}
