//! Typed host-domain contracts shared by the desktop runtime and the browser adapters.
//!
//! This crate is the API boundary for platform services the desktop shell depends on. Today
//! that is a small key-value preference store; concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
