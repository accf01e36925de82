pub mod format;
pub mod storage;

pub use format::{format_currency, format_timestamp, or_na};
