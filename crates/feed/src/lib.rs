//! HTTP client for the upstream resource-utilization feed.
//!
//! The feed is an external collaborator with a fixed contract: one
//! authenticated GET returning a JSON array of per-lens usage records.
//! This crate only moves bytes; all structural and schema checks live in
//! `lenswatch-core`.

pub mod client;

pub use client::{FeedClient, FeedError};
