use plotly::layout::{Axis, Layout};
use plotly::{Bar, Pie, Plot};

use crate::stats::RiskDistribution;

/// Plot the waste-risk split as a pie chart.
pub fn plot_risk_pie(distribution: &RiskDistribution, title: &str) -> Result<Plot, String> {
    if distribution.total() == 0 {
        return Err("Cannot plot an empty risk distribution".to_string());
    }

    let mut labels = Vec::new();
    let mut counts = Vec::new();
    for (label, count) in distribution.as_pairs() {
        if count > 0 {
            labels.push(label.to_string());
            counts.push(count as u64);
        }
    }

    let trace = Pie::new(counts).labels(labels);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(Layout::new().title(title));

    Ok(plot)
}

/// Plot the expiry histogram: item count per days-to-expiry bucket.
///
/// Buckets must already be ascending (as produced by `expiry_distribution`);
/// negative buckets render like any other.
pub fn plot_expiry_bar(distribution: &[(i64, usize)], title: &str) -> Result<Plot, String> {
    if distribution.is_empty() {
        return Err("Cannot plot an empty expiry distribution".to_string());
    }

    let days: Vec<i64> = distribution.iter().map(|(days, _)| *days).collect();
    let counts: Vec<u64> = distribution.iter().map(|(_, count)| *count as u64).collect();

    let trace = Bar::new(days, counts).name("Item Count");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Days to Expiry"))
        .y_axis(Axis::new().title("Item Count"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}
