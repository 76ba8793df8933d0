//! Tree formatting and output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `tree` - Formatter that renders a `DirNode` as indented text
//! - `writer` - Writes the rendered text to the output file
//! - `console` - Confirmation line on stdout

mod config;
mod console;
mod tree;
mod writer;

pub use config::{DEFAULT_OUTPUT_FILE, OutputConfig};
pub use console::{confirmation_message, print_confirmation, should_use_color};
pub use tree::{TreeFormatter, root_label};
pub use writer::write_output;
