//! Static HTML rendering of the SmartExpiry report.
//!
//! Assembles the two charts and three tables of the dashboard into one
//! self-contained page: visual insights, inventory overview, the top
//! high-risk items, and donation suggestions.
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::data_handling::{InventoryRecord, InventoryTable};
use crate::report::plots::{plot_expiry_bar, plot_risk_pie};
use crate::stats::{expiry_distribution, risk_distribution};

/// Nearest NGO partner shown alongside donation suggestions.
const NGO_PARTNER: &str = "Robin Hood Army | +91-9876543210";

/// Render the full report page for a (typically filtered) table.
///
/// Charts are omitted when the table is empty; the donation section shows
/// its "no action needed" state instead of erroring on an empty candidate
/// set.
pub fn render_report(table: &InventoryTable, top_n: usize) -> Result<String, String> {
    let risk = risk_distribution(table);
    let expiry = expiry_distribution(table);

    let risk_chart = if risk.total() > 0 {
        Some(plot_risk_pie(&risk, "Waste Risk Distribution")?.to_inline_html(Some("risk-pie")))
    } else {
        None
    };
    let expiry_chart = if expiry.is_empty() {
        None
    } else {
        Some(
            plot_expiry_bar(&expiry, "Expiry Distribution (Days Left)")?
                .to_inline_html(Some("expiry-bar")),
        )
    };

    let top_risk = table.top_risk_items(top_n);
    let donations = table.donation_candidates();

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "SmartExpiry Report" }
            }
            body {
                h1 { "SmartExpiry: Food Waste Reduction Report" }
                p { "Last updated: " (Local::now().format("%d %b %Y, %I:%M %p")) }

                h2 { "Visual Insights" }
                @if let Some(chart) = &risk_chart {
                    div { (PreEscaped(chart.as_str())) }
                }
                @if let Some(chart) = &expiry_chart {
                    div { (PreEscaped(chart.as_str())) }
                }

                h2 { "Inventory Overview" }
                (overview_table(table))

                h2 { "Top " (top_risk.len()) " High-Risk Items" }
                (top_risk_table(&top_risk))

                h2 { "Suggested Donations" }
                @if donations.is_empty() {
                    p { "No items require donation today." }
                } @else {
                    p { "Items that should be donated soon:" }
                    (donation_table(&donations))
                    p { "Nearest NGO Partner: " (NGO_PARTNER) }
                }
            }
        }
    };

    Ok(markup.into_string())
}

fn overview_table(table: &InventoryTable) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Item" }
                    th { "Category" }
                    th { "Store Location" }
                    th { "Stock" }
                    th { "Expiry Date" }
                    th { "Days to Expiry" }
                    th { "Waste Risk Score" }
                    th { "Suggested Discount" }
                }
            }
            tbody {
                @for record in table.records() {
                    tr {
                        td { (record.item) }
                        td { (record.category) }
                        td { (record.store_location) }
                        td { (record.stock) }
                        td { (record.expiry_date.format("%Y-%m-%d")) }
                        td { (record.days_to_expiry) }
                        td { (record.waste_risk) }
                        td { (record.suggested_discount) }
                    }
                }
            }
        }
    }
}

fn top_risk_table(records: &[&InventoryRecord]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Item" }
                    th { "Store Location" }
                    th { "Stock" }
                    th { "Days to Expiry" }
                    th { "Suggested Discount" }
                }
            }
            tbody {
                @for record in records {
                    tr {
                        td { (record.item) }
                        td { (record.store_location) }
                        td { (record.stock) }
                        td { (record.days_to_expiry) }
                        td { (record.suggested_discount) }
                    }
                }
            }
        }
    }
}

fn donation_table(records: &[&InventoryRecord]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Item" }
                    th { "Stock" }
                    th { "Expiry Date" }
                    th { "Store Location" }
                }
            }
            tbody {
                @for record in records {
                    tr {
                        td { (record.item) }
                        td { (record.stock) }
                        td { (record.expiry_date.format("%Y-%m-%d")) }
                        td { (record.store_location) }
                    }
                }
            }
        }
    }
}
