pub mod ellipsis;
pub mod output;

pub use ellipsis::{ELLIPSIS, ellipt_left, ellipt_right};
pub use output::truncate_output;
