//! Configuration section definitions.

mod sheet;
mod tools;

pub use sheet::SheetConfig;
pub use tools::{Tool, ToolsConfig};
