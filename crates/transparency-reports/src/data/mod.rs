//! Hand-authored disclosure tables, one module per organization
//!
//! Figures are sample values laid out the way the published reports present
//! them (millions of ALGO unless the metric name gives another unit). Gaps are
//! left out of the value lists; "N/R" entries mark line items a report listed
//! without a figure.

pub mod foundation;
pub mod technologies;
