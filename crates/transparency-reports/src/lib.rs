//! Algorand transparency report dashboard
//!
//! Turns the Foundation and Technologies transparency disclosures into chart
//! series, dense tables and pie aggregates, with feature gating driven by a
//! wallet's gating-token balance.

pub mod access;
pub mod chart;
pub mod config;
pub mod constants;
pub mod data;
pub mod export;
pub mod formula;
pub mod indexer;
pub mod poller;
pub mod selection;
pub mod series;
pub mod store;
pub mod taxonomy;
