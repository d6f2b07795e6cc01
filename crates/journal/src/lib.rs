//! # Haven Journal
//!
//! Session-side operation journal for the relief registry.

mod journal;

pub use journal::{EventKind, JournalEntry, JournalStats, OperationJournal};
