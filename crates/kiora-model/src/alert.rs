//! Alerts as served by the Kiora API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The label set attached to an alert.
pub type Labels = HashMap<String, String>;

/// The lifecycle status of an alert.
///
/// Alerts enter the system firing and leave it resolved or timed out;
/// in between they may be acknowledged by an operator or suppressed by a
/// silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// The alert condition is active.
    Firing,
    /// The alert is firing but an operator has acknowledged it.
    Acked,
    /// The alert condition has cleared.
    Resolved,
    /// The alert stopped being refreshed and timed out.
    #[serde(rename = "timed out")]
    TimedOut,
    /// The alert is suppressed by a silence.
    Silenced,
}

impl AlertStatus {
    /// Returns the status as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firing => "firing",
            Self::Acked => "acked",
            Self::Resolved => "resolved",
            Self::TimedOut => "timed out",
            Self::Silenced => "silenced",
        }
    }

    /// Returns true if the underlying condition is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Firing | Self::Acked)
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator's acknowledgement of an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Who acknowledged the alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Why the alert was acknowledged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A firing or historical alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier assigned by the server.
    pub id: String,
    /// Labels identifying the alert.
    pub labels: Labels,
    /// Annotations providing more context.
    pub annotations: HashMap<String, String>,
    /// The current lifecycle status.
    pub status: AlertStatus,
    /// The acknowledgement, if an operator has acked the alert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<Acknowledgement>,
    /// When the alert started firing.
    pub starts_at: DateTime<Utc>,
    /// When the alert resolved (absent while active).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    /// When the alert times out if not refreshed.
    pub timeout_deadline: DateTime<Utc>,
}

impl Alert {
    /// Returns true if the alert is still active (firing or acked).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the value of the given label, if present.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }
}
