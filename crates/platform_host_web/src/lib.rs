//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On non-wasm targets every adapter degrades to an empty, always-successful backend so the
//! runtime and its tests build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::prefs_store;
pub use storage::local_prefs::WebPrefsStore;
