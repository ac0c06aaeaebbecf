pub mod position;

pub use position::{format_line_col, parse_locus};
