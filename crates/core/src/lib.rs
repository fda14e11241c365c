//! Pure pipeline logic for the lenswatch utilization dashboard.
//!
//! Everything in this crate is synchronous and side-effect free -- no HTTP,
//! no database, no global state. The caller (the `lenswatch-api` crate)
//! fetches the raw feed payload and runs it through the stages in order:
//!
//! ```text
//! validate -> normalize -> filter -> evaluate (alerts)
//! ```
//!
//! Each stage either produces a new value or fails the whole run with a
//! [`CoreError`]; there is no per-row recovery anywhere in the pipeline.

pub mod alert;
pub mod columns;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod normalize;

pub use dataset::{Dataset, RawRecord, Record};
pub use error::CoreError;
