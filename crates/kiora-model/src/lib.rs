//! Wire-format data model for the Kiora alerting API.
//!
//! `kiora-model` provides the types exchanged with a Kiora server: alerts
//! and their acknowledgements, label matchers, silences, and aggregated
//! stats results. Serialization matches the server's JSON wire format
//! exactly, so these types can be used directly as request and response
//! bodies.
//!
//! # Example
//!
//! ```rust
//! use kiora_model::{Labels, Matcher};
//!
//! let matcher = Matcher::equal("env", "prod");
//!
//! let mut labels = Labels::new();
//! labels.insert("env".to_string(), "prod".to_string());
//! labels.insert("alertname".to_string(), "HighCPU".to_string());
//!
//! assert!(matcher.matches(&labels));
//! assert_eq!(matcher.to_string(), r#"env="prod""#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alert;
pub mod matcher;
pub mod silence;
pub mod stats;

// Re-export main types at crate root
pub use alert::{Acknowledgement, Alert, AlertStatus, Labels};
pub use matcher::Matcher;
pub use silence::Silence;
pub use stats::StatsResult;
