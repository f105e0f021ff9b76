// Utils compartidos

pub mod constants;
pub mod format;

pub use format::{format_diamonds, format_price};
