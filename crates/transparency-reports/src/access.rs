//! Membership tiers derived from the gating token balance
//!
//! Thresholds (whole tokens, 6 decimals):
//! - >= 1      Gold
//! - >= 0.333  Silver
//! - > 0       Bronze
//! - otherwise Visitor

use serde::Serialize;
use std::fmt;

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AccessTier {
    Visitor,
    Bronze,
    Silver,
    Gold,
}

/// Dashboard features that can be gated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    ViewTables,
    ViewCharts,
    ExportCsv,
    ExportXlsx,
    ExportPng,
    ExportPdf,
    FormulaBuilder,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::ViewTables,
        Feature::ViewCharts,
        Feature::ExportCsv,
        Feature::ExportXlsx,
        Feature::ExportPng,
        Feature::ExportPdf,
        Feature::FormulaBuilder,
    ];

    /// Lowest tier with access
    pub fn required_tier(self) -> AccessTier {
        match self {
            Feature::ViewTables | Feature::ViewCharts => AccessTier::Visitor,
            Feature::ExportCsv => AccessTier::Bronze,
            Feature::ExportXlsx | Feature::ExportPng | Feature::FormulaBuilder => AccessTier::Silver,
            Feature::ExportPdf => AccessTier::Gold,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::ViewTables => "view tables",
            Feature::ViewCharts => "view charts",
            Feature::ExportCsv => "export CSV",
            Feature::ExportXlsx => "export XLSX",
            Feature::ExportPng => "export PNG",
            Feature::ExportPdf => "export PDF",
            Feature::FormulaBuilder => "formula builder",
        }
    }
}

impl AccessTier {
    pub fn name(self) -> &'static str {
        match self {
            AccessTier::Gold => "Gold",
            AccessTier::Silver => "Silver",
            AccessTier::Bronze => "Bronze",
            AccessTier::Visitor => "Visitor",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AccessTier::Gold => "#d4af37",
            AccessTier::Silver => "#c0c0c0",
            AccessTier::Bronze => "#cd7f32",
            AccessTier::Visitor => "#9e9e9e",
        }
    }

    pub fn allows(self, feature: Feature) -> bool {
        self >= feature.required_tier()
    }

    pub fn features(self) -> Vec<Feature> {
        Feature::ALL.into_iter().filter(|f| self.allows(*f)).collect()
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier for a balance in micro-units. Zero and negative balances get Visitor.
pub fn tier_for(balance_micro: i64) -> AccessTier {
    if balance_micro >= constants::GOLD_THRESHOLD_MICRO {
        AccessTier::Gold
    } else if balance_micro >= constants::SILVER_THRESHOLD_MICRO {
        AccessTier::Silver
    } else if balance_micro > 0 {
        AccessTier::Bronze
    } else {
        AccessTier::Visitor
    }
}

/// Micro-units to whole tokens, for display
pub fn whole_units(balance_micro: i64) -> f64 {
    balance_micro as f64 / constants::MICRO_UNITS_PER_TOKEN as f64
}
