mod parser;
mod types;

pub use parser::parse_sections;
pub use types::{DisplayCategory, PanelStyle, Report, Section};
