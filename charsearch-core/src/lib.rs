//! Core of the character search widget
//!
//! This crate holds everything that does not depend on a platform:
//! - [CharacterRecord] and the GraphQL wire types used to fetch them ([query]);
//! - the case-insensitive filter with match highlighting ([filter_and_highlight()]);
//! - the interaction state machine ([SearchState]), driven by [SearchEvent] values.
//!
//! Platform crates (browser widget, native client) only perform the I/O requested by the state
//! machine through [Command] values, then feed the outcome back as events.
//!
//! # Example
//! ```
//! use charsearch_core::{CharacterRecord, filter_and_highlight};
//!
//! let records = vec![
//!     CharacterRecord::new("1", "Rick Sanchez"),
//!     CharacterRecord::new("2", "Morty Smith"),
//! ];
//! let suggestions = filter_and_highlight(&records, "ri");
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].matched_text(), "Ri");
//! ```

pub mod query;
mod highlight;
mod state;

pub use query::{CharacterRecord, FetchError};
pub use highlight::{
    filter_and_highlight,
    find_match,
    Segment,
    Suggestion,
};
pub use state::{
    Command,
    FetchStatus,
    FormKey,
    ListView,
    RequestId,
    SearchEvent,
    SearchState,
};

/// Result type for fetch operations
pub type Result<T, E = FetchError> = std::result::Result<T, E>;
