//! Aggregation model: reduce each node's samples to a median, then fold the
//! medians into a fleet total.

use std::collections::BTreeMap;

/// Per-node outcome. `median_ops` is None when the node's log held no
/// parseable throughput records.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub node: String,
    pub median_ops: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ReportData {
    /// Keyed by node name, so iteration order is node name ascending.
    pub nodes: BTreeMap<String, NodeSummary>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone)]
pub struct TotalsView {
    pub nodes: usize,
    pub nodes_with_data: usize,
    /// Sum of present medians at full precision; rounding is render-only.
    pub total_ops: f64,
}

/// Build report data from the per-node sample collections.
pub fn build_report_data(samples_by_node: Vec<(String, Vec<f64>)>) -> ReportData {
    let mut nodes: BTreeMap<String, NodeSummary> = BTreeMap::new();
    for (node, samples) in samples_by_node {
        let summary = NodeSummary {
            node: node.clone(),
            median_ops: median(&samples),
        };
        nodes.insert(node, summary);
    }

    // Totals are a fold over the finished summaries; no-data nodes are listed
    // but contribute nothing.
    let nodes_with_data = nodes.values().filter(|s| s.median_ops.is_some()).count();
    let total_ops: f64 = nodes.values().filter_map(|s| s.median_ops).sum();

    ReportData {
        totals: TotalsView {
            nodes: nodes.len(),
            nodes_with_data,
            total_ops,
        },
        nodes,
    }
}

/// Statistical median: middle element for odd counts, mean of the two middle
/// elements for even counts. None for an empty slice.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
