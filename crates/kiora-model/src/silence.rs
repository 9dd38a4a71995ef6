//! Silences that suppress matching alerts for a time window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::Labels;
use crate::matcher::Matcher;

/// A time-bounded rule suppressing alerts that match a set of matchers.
///
/// This struct is also the silence-creation request body: a new silence is
/// submitted with an empty `id`, and the server assigns one on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Silence {
    /// Unique identifier assigned by the server (empty on creation).
    pub id: String,
    /// Who created the silence.
    pub creator: String,
    /// Comment explaining the silence.
    pub comment: String,
    /// When the silence starts.
    pub starts_at: DateTime<Utc>,
    /// When the silence ends.
    pub ends_at: DateTime<Utc>,
    /// Alerts matching all of these matchers are silenced.
    pub matchers: Vec<Matcher>,
}

impl Silence {
    /// Returns true if the silence is in effect at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now >= self.starts_at && now < self.ends_at
    }

    /// Checks whether the given label set is covered by this silence.
    ///
    /// All matchers must match. Whether the silence is currently in effect
    /// is a separate question, answered by [`Silence::is_active`], so that
    /// previews can match against silences that have not started yet.
    #[must_use]
    pub fn matches(&self, labels: &Labels) -> bool {
        self.matchers.iter().all(|matcher| matcher.matches(labels))
    }
}
