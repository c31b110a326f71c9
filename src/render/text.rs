use crate::model::ReportData;
use std::fmt::Write;

/// Render the plain-text report.
///
/// One line per node in name order, a blank separator, then the fleet total.
/// Values print with `{:.0}`: nearest integer, no decimal point. Rounding is
/// display-only; the total was summed at full precision.
pub fn render_text_report(data: &ReportData) -> anyhow::Result<String> {
    let mut out = String::new();

    for summary in data.nodes.values() {
        match summary.median_ops {
            Some(median) => writeln!(out, "{} median {:.0} op/s", summary.node, median)?,
            None => writeln!(out, "{} no ops/s data found", summary.node)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "total {:.0} op/s", data.totals.total_ops)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log, model};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn render(samples_by_node: Vec<(&str, Vec<f64>)>) -> String {
        let data = model::build_report_data(
            samples_by_node
                .into_iter()
                .map(|(node, samples)| (node.to_string(), samples))
                .collect(),
        );
        render_text_report(&data).unwrap()
    }

    #[test]
    fn renders_medians_and_total() {
        let out = render(vec![
            ("alpha", vec![10.0, 20.0, 30.0]),
            ("beta", vec![10.0, 20.0, 30.0, 40.0]),
        ]);
        assert_eq!(
            out,
            "alpha median 20 op/s\n\
             beta median 25 op/s\n\
             \n\
             total 45 op/s\n"
        );
    }

    #[test]
    fn renders_no_data_marker() {
        let out = render(vec![("alpha", vec![1200.0]), ("beta", vec![])]);
        assert_eq!(
            out,
            "alpha median 1200 op/s\n\
             beta no ops/s data found\n\
             \n\
             total 1200 op/s\n"
        );
    }

    #[test]
    fn total_rounds_after_summing() {
        // Each node displays 10, but the total displays the rounded sum 21.
        let out = render(vec![("a", vec![10.4]), ("b", vec![10.4])]);
        assert_eq!(
            out,
            "a median 10 op/s\n\
             b median 10 op/s\n\
             \n\
             total 21 op/s\n"
        );
    }

    fn write_log(dir: &std::path::Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    fn run_report(dir: &std::path::Path) -> String {
        let files = log::discover_log_files(dir).unwrap();
        let mut samples_by_node = Vec::new();
        for file in &files {
            let samples = log::parse_samples_file(&file.path).unwrap();
            samples_by_node.push((file.node.clone(), samples));
        }
        let data = model::build_report_data(samples_by_node);
        render_text_report(&data).unwrap()
    }

    #[test]
    fn full_pipeline_from_log_directory() {
        let dir = TempDir::new().unwrap();
        write_log(
            dir.path(),
            "kvsserver-b.log",
            "throughput 10 ops/s\nthroughput 30 ops/s\nthroughput 20 ops/s\n",
        );
        write_log(
            dir.path(),
            "kvsserver-a.log",
            "Starting KVS server on :9000\nthroughput 1523.40 ops/s\nbad ops/s\n",
        );
        write_log(dir.path(), "kvsserver-idle.log", "gets 41\nputs 12\n");

        let out = run_report(dir.path());
        assert_eq!(
            out,
            "a median 1523 op/s\n\
             b median 20 op/s\n\
             idle no ops/s data found\n\
             \n\
             total 1543 op/s\n"
        );
    }

    #[test]
    fn report_is_idempotent_over_unchanged_input() {
        let dir = TempDir::new().unwrap();
        write_log(
            dir.path(),
            "kvsserver-a.log",
            "throughput 99.9 ops/s\nthroughput 100.1 ops/s\n",
        );

        assert_eq!(run_report(dir.path()), run_report(dir.path()));
    }
}
