mod args;

pub use args::{normalize_flag_style, Args};
