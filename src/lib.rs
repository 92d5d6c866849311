//! # Player Roster
//!
//! In-memory roster of player records with two read-only queries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       PLAYER ROSTER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  roster/          - Record store & query engine              │
//! │  ├── record.rs    - PlayerRecord and PlayerId                │
//! │  ├── collection.rs- Ordered, read-only RecordCollection      │
//! │  └── query.rs     - Lowest-runs and match-type filter        │
//! │                                                              │
//! │  report.rs        - Caller-side rendering of query results   │
//! │  config.rs        - Environment configuration for the binary │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query Guarantees
//!
//! Both queries are pure functions over an immutable snapshot:
//! - "No match" is an explicit `None` / empty `Vec`, never a sentinel value
//! - Matching is exact and case-sensitive
//! - Identifier output is sorted ascending regardless of record order

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use config::{ConfigError, RosterConfig};
pub use report::QueryReport;
pub use roster::{find_by_match_type, lowest_runs, PlayerId, PlayerRecord, RecordCollection, RosterError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of records the reference program reads before querying.
pub const REFERENCE_ROSTER_SIZE: usize = 4;
