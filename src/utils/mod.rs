//! Utility modules shared by the catalog and the checker.

pub mod date;
pub mod slug;
