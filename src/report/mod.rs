//! Reporting and plotting helpers.
//!
//! This module wraps plotting helpers (Plotly) and the maud page template
//! used to render the static SmartExpiry report. Plots are intentionally
//! small helper functions converting projection data into `plotly::Plot`.
pub mod html;
pub mod plots;

pub use html::render_report;
