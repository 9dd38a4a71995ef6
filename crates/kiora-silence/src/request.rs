//! Construction of request payloads for the Kiora API.

use chrono::{DateTime, TimeZone, Utc};
use kiora_model::{Matcher, Silence};
use serde::{Deserialize, Serialize};

use crate::duration::silence_end;
use crate::error::{Result, SilenceError};
use crate::matcher::parse_matcher;

/// The duration the silence form starts out with.
pub const DEFAULT_DURATION: &str = "1h";

/// Builder for a silence-creation request.
///
/// Collects the raw user inputs from the silence form and validates them
/// into a [`Silence`] payload. Any invalid input blocks the build; nothing
/// is sent to the server with a failed client-side validation. The silence
/// ID is left empty, the server assigns one on creation.
#[derive(Debug, Clone)]
pub struct SilenceRequest {
    duration: String,
    matchers: Vec<String>,
    creator: String,
    comment: String,
}

impl Default for SilenceRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl SilenceRequest {
    /// Creates an empty request with the default duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_DURATION.to_string(),
            matchers: Vec::new(),
            creator: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the relative duration of the silence, e.g. `30m` or `2d`.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Adds a textual matcher, e.g. `env="prod"`.
    #[must_use]
    pub fn matcher(mut self, matcher: impl Into<String>) -> Self {
        self.matchers.push(matcher.into());
        self
    }

    /// Replaces the full set of textual matchers.
    #[must_use]
    pub fn matchers<I, S>(mut self, matchers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matchers = matchers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets who is creating the silence.
    #[must_use]
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Sets the comment explaining the silence.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Validates the collected inputs and builds the silence payload.
    ///
    /// The duration is resolved against `now` in its own timezone, so
    /// day and week durations follow the caller's calendar; the payload
    /// timestamps are normalized to UTC.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` if the duration string does not resolve,
    /// `InvalidMatcher` for the first matcher string that does not parse,
    /// and `MissingField` if the creator or comment is empty.
    pub fn build<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Result<Silence> {
        let ends_at =
            silence_end(&self.duration, now.clone()).ok_or_else(|| SilenceError::InvalidDuration {
                input: self.duration.clone(),
            })?;

        let mut matchers = Vec::with_capacity(self.matchers.len());
        for raw in &self.matchers {
            let matcher = parse_matcher(raw).ok_or_else(|| SilenceError::InvalidMatcher {
                input: raw.clone(),
            })?;
            matchers.push(matcher);
        }

        if self.creator.is_empty() {
            return Err(SilenceError::MissingField { field: "creator" });
        }

        if self.comment.is_empty() {
            return Err(SilenceError::MissingField { field: "comment" });
        }

        Ok(Silence {
            id: String::new(),
            creator: self.creator.clone(),
            comment: self.comment.clone(),
            starts_at: now.with_timezone(&Utc),
            ends_at: ends_at.with_timezone(&Utc),
            matchers,
        })
    }

    /// Re-parses the collected matcher strings without building, for
    /// previewing which alerts the silence would cover.
    #[must_use]
    pub fn parsed_matchers(&self) -> Vec<Option<Matcher>> {
        self.matchers.iter().map(|raw| parse_matcher(raw)).collect()
    }
}

/// Request payload acknowledging an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgementRequest {
    /// The ID of the alert being acknowledged.
    #[serde(rename = "alertID")]
    pub alert_id: String,
    /// Who is acknowledging the alert.
    pub creator: String,
    /// Why the alert is acknowledged.
    pub comment: String,
}

impl AcknowledgementRequest {
    /// Creates a validated acknowledgement request.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the creator or comment is empty.
    pub fn new(
        alert_id: impl Into<String>,
        creator: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<Self> {
        let creator = creator.into();
        if creator.is_empty() {
            return Err(SilenceError::MissingField { field: "creator" });
        }

        let comment = comment.into();
        if comment.is_empty() {
            return Err(SilenceError::MissingField { field: "comment" });
        }

        Ok(Self {
            alert_id: alert_id.into(),
            creator,
            comment,
        })
    }
}
