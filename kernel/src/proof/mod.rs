//! Proof module: canonical bytes and content hashes for reproducibility
//! checks.
//!
//! Nothing here knows about problems or searches. Callers build a
//! `serde_json::Value`, turn it into canonical bytes, and hash those bytes
//! under a domain prefix they own.

pub mod canon;
pub mod hash;
