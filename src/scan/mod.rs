//! Directory scanning
//!
//! Two independent recursions live here:
//!
//! - `Scanner`: collects `FileRecord`s accepted by the filter pipeline
//! - `TreeWalker`: captures the full hierarchy for tree output, ignoring filters
//!
//! Both treat depth 0 as the root's direct children and never follow
//! symlinked directories.

mod config;
mod node;
mod traversal;
mod utils;
mod walker;

pub use config::{OutputModes, ScanConfig, ScanOptions, parse_extensions};
pub use node::TreeNode;
pub use traversal::{ScanResult, Scanner};
pub use walker::TreeWalker;
