//! Outline model types.
//!
//! An [`Outline`] is the ordered list of [`OutlineRecord`]s produced by the
//! classifier: one record per heading or subheading line, each owning the
//! body lines read until the next classifying line.

mod metadata;
mod outline;
mod record;

pub use metadata::Metadata;
pub use outline::{BuildStats, Outline};
pub use record::{OutlineRecord, RecordKind};
