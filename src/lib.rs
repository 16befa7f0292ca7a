//! Zest - an ls that fits your terminal: colored columns, long rows, recursion

pub mod entries;
pub mod info;
pub mod output;
pub mod walk;

pub use entries::{Entry, ListingBatch, collect};
pub use info::{FileInfo, FileKind};
pub use output::{DisplayMode, GridLayout, OutputConfig};
pub use walk::Walker;
