use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read one server log and extract its throughput samples.
///
/// A read failure on a matched file is fatal for the whole run, with the
/// offending path in the error context.
pub fn parse_samples_file(path: &Path) -> anyhow::Result<Vec<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    Ok(extract_samples(&text))
}

/// Extract all throughput samples from a log's text, in line order.
pub fn extract_samples(text: &str) -> Vec<f64> {
    text.lines().filter_map(parse_throughput_line).collect()
}

/// Parse one log line into a throughput sample.
///
/// Throughput records are lines containing the literal `ops/s`; the value is
/// the second whitespace-delimited token. The kvs client emits:
///
/// throughput 1523.40 ops/s
///
/// Returns None when the line is not a throughput record, has fewer than two
/// tokens, or the second token is not a float. Tokens like "inf" or "nan"
/// parse as valid floats and flow through unmodified.
pub fn parse_throughput_line(line: &str) -> Option<f64> {
    if !line.contains("ops/s") {
        return None;
    }
    let value = line.split_whitespace().nth(1)?;
    value.parse::<f64>().ok()
}
