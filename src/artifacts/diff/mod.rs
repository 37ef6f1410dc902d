//! Snapshot comparison
//!
//! - `diff_entry`: one classified difference
//! - `comparison_report`: the ordered result of comparing two snapshots

pub mod comparison_report;
pub mod diff_entry;
