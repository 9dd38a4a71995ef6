//! Silence construction for the Kiora alerting UI.
//!
//! `kiora-silence` provides the client-side logic behind the silence form:
//! parsing textual label matchers, resolving relative duration strings into
//! absolute end timestamps, and assembling validated request payloads for
//! the Kiora API.
//!
//! # Features
//!
//! - **Matcher parsing**: `env="prod"`, `env!="prod"`, `env=~"prod.*"`,
//!   `env!~"prod.*"` into structured [`kiora_model::Matcher`] values
//! - **Duration resolution**: `30m`, `1h`, `2d`, `1w` into end timestamps,
//!   with calendar-day arithmetic for days and weeks
//! - **Request building**: silence-creation and alert-acknowledgement
//!   payloads with client-side validation
//! - **Filter round-trip**: matcher strings persisted as repeated `filter`
//!   query parameters
//!
//! The parsing functions are pure, synchronous, and never panic; every
//! rejection is a `None` return, so they are safe to call on each keystroke
//! of a form field.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use kiora_silence::{parse_matcher, SilenceRequest, silence_end};
//!
//! let matcher = parse_matcher(r#"env="prod""#).unwrap();
//! assert_eq!(matcher.label, "env");
//!
//! let now = Utc::now();
//! let ends_at = silence_end("1h", now).unwrap();
//! assert_eq!(ends_at - now, chrono::Duration::hours(1));
//!
//! let silence = SilenceRequest::new()
//!     .duration("4h")
//!     .matcher(r#"env="prod""#)
//!     .creator("admin")
//!     .comment("maintenance window")
//!     .build(now)
//!     .unwrap();
//! assert_eq!(silence.id, "");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod duration;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod request;

// Re-export main types at crate root
pub use duration::{format_duration, silence_end};
pub use error::{Result, SilenceError};
pub use filter::{FILTER_PARAM, filters_from_pairs, parse_filters, set_filters};
pub use matcher::parse_matcher;
pub use request::{AcknowledgementRequest, DEFAULT_DURATION, SilenceRequest};
