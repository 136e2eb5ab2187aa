//! State File Management Module
//!
//! Handles persistence of small key/value state in a YAML file, including:
//! - Lazy creation of the backing file on first access
//! - Full load-modify-save cycles for every mutation
//! - Typed errors for I/O and parse failures

mod statefile;

pub use statefile::{StateError, StateFile};
