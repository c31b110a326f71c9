//! Log discovery and throughput sample extraction for kvs server logs.

pub mod discover;
pub mod parse;

pub use discover::{LogFile, discover_log_files};
pub use parse::{extract_samples, parse_samples_file, parse_throughput_line};
