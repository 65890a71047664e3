pub mod config;
pub mod list;
pub mod random;
pub mod size;
pub mod text;

pub use size::{ByteSize, ParseSizeError, format_size, parse_size};
pub use text::{ellipt_left, ellipt_right, truncate_output};
