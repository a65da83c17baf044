//! smartexpiry: inventory expiry analytics and food-waste reporting.
//!
//! Loads a pre-computed inventory CSV, derives per-row flags (days to
//! expiry, waste risk, suggested discount, donation recommendation),
//! applies store/category/expiry filters, and produces the projections a
//! presentation layer renders: risk and expiry distributions, the filtered
//! table, the top high-risk rows, donation candidates, and a CSV export.
//!
//! Loading is the only fallible step; filter and projection operations are
//! total over a valid table. Tables are immutable after load, so a cached
//! table can be shared freely across readers.
pub mod cache;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;
