//! DocuMind client core: the response-formatting pipeline and the namespaced
//! artifact cache, plus the ambient config and path helpers the binary wires
//! them up with.
//!
//! Everything is synchronous: the formatter is pure (text in, text out) and
//! the cache performs plain blocking storage calls with no locking beyond
//! last-write-wins.

pub mod app;
pub mod cache;
pub mod config;
pub mod format;
pub mod paths;
