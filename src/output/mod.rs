//! Report formatting and display
//!
//! Every renderer consumes the scan result independently:
//!
//! - `tree` - hierarchy with box-drawing connectors (from `TreeWalker`)
//! - `list` - numbered flat list, the default report
//! - `json` - structured dump of the matched records
//! - `csv` - tabular dump of the matched records
//! - `utils` - byte and timestamp formatting shared by the renderers
//!
//! Statistics live in `crate::stats`.

mod config;
mod csv;
mod json;
mod list;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use csv::{CSV_HEADER, format_csv, format_csv_row, print_csv};
pub use json::{ScanReport, format_json, print_json};
pub use list::{format_list, print_list};
pub use tree::TreeFormatter;
pub use utils::{continuation_prefix, format_bytes, format_timestamp};
