pub mod constants;
pub mod filename;
pub mod format;
pub mod parse;
pub mod progress;

pub use constants::*;
pub use filename::generate_default_output_filename;
pub use format::{float_or_sentinel_string, format_fixed};
pub use parse::{
    parse_float, parse_float_bounded, parse_float_scaled, parse_int, parse_int_bounded,
    parse_int_scaled,
};
pub use progress::ProgressReporter;
