//! Record Store & Query Engine
//!
//! Holds an ordered collection of player records and the two pure
//! queries over it.
//!
//! ## Module Structure
//!
//! - `record`: Player record and identifier types
//! - `collection`: Read-only ordered record collection
//! - `query`: Lowest-runs and match-type filter queries

pub mod collection;
pub mod query;
pub mod record;

// Re-export key types
pub use collection::{RecordCollection, RosterError};
pub use query::{find_by_match_type, lowest_runs};
pub use record::{PlayerId, PlayerRecord};
