//! Label matchers used to select alerts.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::alert::Labels;

/// A single label matcher: a (label, operator, value) triple selecting
/// alerts by label equality or regex match.
///
/// `is_regex` and `is_negative` are derived from the operator token by the
/// parser and together determine it: `=` (plain equality), `!=` (negated
/// equality), `=~` (regex match), `!~` (negated regex match). A matcher is
/// plain data and immutable once constructed; it is serialized verbatim
/// into silence-creation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matcher {
    /// The label name this matcher applies to.
    pub label: String,
    /// The literal value or regex pattern to compare against.
    pub value: String,
    /// True if `value` is a regular expression rather than a literal.
    #[serde(rename = "isRegex")]
    pub is_regex: bool,
    /// True if the match result is inverted.
    #[serde(rename = "isNegative")]
    pub is_negative: bool,
}

impl Matcher {
    /// Creates a matcher requiring `label` to equal `value` exactly.
    #[must_use]
    pub fn equal(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            is_regex: false,
            is_negative: false,
        }
    }

    /// Creates a matcher requiring `label` to match the given regex.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] if the pattern does not
    /// compile.
    pub fn regex(
        label: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        Regex::new(&pattern)?;

        Ok(Self {
            label: label.into(),
            value: pattern,
            is_regex: true,
            is_negative: false,
        })
    }

    /// Inverts the matcher.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.is_negative = !self.is_negative;
        self
    }

    /// Returns the textual operator for this matcher.
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        match (self.is_regex, self.is_negative) {
            (false, false) => "=",
            (false, true) => "!=",
            (true, false) => "=~",
            (true, true) => "!~",
        }
    }

    /// Checks whether the given label set satisfies this matcher.
    ///
    /// A label that is absent never matches, regardless of negation. Regex
    /// matchers compile their pattern on demand; a pattern that does not
    /// compile matches nothing (the parser validates patterns up front, so
    /// this path is cold).
    #[must_use]
    pub fn matches(&self, labels: &Labels) -> bool {
        let Some(actual) = labels.get(&self.label) else {
            return false;
        };

        let result = if self.is_regex {
            Regex::new(&self.value).is_ok_and(|regex| regex.is_match(actual))
        } else {
            actual == &self.value
        };

        result != self.is_negative
    }
}

impl std::fmt::Display for Matcher {
    /// Renders the matcher in its textual form, e.g. `env=~"prod.*"`.
    ///
    /// For values containing no `"`, re-parsing the rendered form yields an
    /// equal matcher.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\"{}\"", self.label, self.operator(), self.value)
    }
}
