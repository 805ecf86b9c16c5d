//! Storage contracts for host-persisted desktop state.

pub mod prefs;
