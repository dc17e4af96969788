//! Centralized constants for the transparency report pipeline
//!
//! Deployment-specific values (wallet, indexer URL overrides) are loaded
//! from config.toml; defaults live in `shared::CONFIG`.

// =============================================================================
// Canonical Report Sequences
// =============================================================================

/// Algorand Foundation reports, oldest first
pub const FOUNDATION_REPORTS: [&str; 18] = [
    "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13", "R14", "R15", "R16", "R17",
    "R18",
];

/// Algorand Technologies reports, oldest first
pub const TECHNOLOGIES_REPORTS: [&str; 7] = ["R1", "R2", "R3", "R4", "R5", "R6", "R7"];

// =============================================================================
// Series Ids
// =============================================================================

/// Characters removed from names when building series ids (whitespace is removed too)
pub const SLUG_BLACKLIST: &[char] = &['(', ')', '&', '/'];

/// Separator between category, subcategory and metric parts of an id
pub const SLUG_SEPARATOR: &str = "-";

/// Name given to synthetic total series
pub const TOTAL_SERIES_NAME: &str = "Total";

/// Id prefix for user-built calculated series
pub const CALCULATED_ID_PREFIX: &str = "calc";

// =============================================================================
// Chart Palette
// =============================================================================

/// Series colors, assigned round-robin in creation order
pub const PALETTE: [&str; 24] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    "#393b79", "#637939", "#8c6d31", "#843c39", "#7b4173", "#3182bd", "#e6550d", "#31a354", "#756bb1", "#636363",
    "#6baed6", "#fd8d3c", "#74c476", "#9e9ac8",
];

// =============================================================================
// Access Tiers
// =============================================================================

/// Micro-units per whole token (6 decimals)
pub const MICRO_UNITS_PER_TOKEN: i64 = 1_000_000;

/// Balance (micro-units) for the top tier: 1 token
pub const GOLD_THRESHOLD_MICRO: i64 = 1_000_000;

/// Balance (micro-units) for the second tier: 0.333 tokens
pub const SILVER_THRESHOLD_MICRO: i64 = 333_000;

// =============================================================================
// Indexer Response Fields
// =============================================================================

/// Field names tried, in order, for an asset holding's asset id
pub const ASSET_ID_FIELDS: &[&str] = &["asset-id", "assetId", "asset_id", "index"];

/// Field names tried, in order, for an asset holding's amount
pub const ASSET_AMOUNT_FIELDS: &[&str] = &["amount", "balance"];

/// Paths tried, in order, for the list of asset holdings
pub const ASSET_LIST_PATHS: &[&[&str]] = &[&["assets"], &["account", "assets"]];

// =============================================================================
// File Names
// =============================================================================

/// Default config file path
pub const CONFIG_FILENAME: &str = "config.toml";
