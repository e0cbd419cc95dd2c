//! Record filtering
//!
//! - `size` - size constraint parser (`>1MB`, `<=500`)
//! - `pattern` - glob name matcher
//! - `pipeline` - named predicates and their conjunction

mod pattern;
mod pipeline;
mod size;

pub use pattern::NamePattern;
pub use pipeline::{
    ContentFilter, ExtensionFilter, FilterPipeline, NameFilter, RecordFilter, SizeRangeFilter,
};
pub use size::{SizeFilter, SizeOperator};
