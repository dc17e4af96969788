//! Report store: organizations, canonical report sequences and raw disclosures
//!
//! Everything here is static data defined at compile time. The aggregation
//! pipeline reads it through `categories(org)` and `Org::sequence()`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::data;

/// Report identifier ("R1", "R2", ...). Ordering comes from the sequence, never from the text.
pub type ReportId = &'static str;

/// Reporting organization. Each has its own report sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Org {
    Foundation,
    Technologies,
}

impl Org {
    pub fn sequence(self) -> &'static ReportSequence {
        match self {
            Org::Foundation => &FOUNDATION_SEQUENCE,
            Org::Technologies => &TECHNOLOGIES_SEQUENCE,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Org::Foundation => shared::CONFIG.organizations.foundation,
            Org::Technologies => shared::CONFIG.organizations.technologies,
        }
    }
}

impl fmt::Display for Org {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Org::Foundation => write!(f, "foundation"),
            Org::Technologies => write!(f, "technologies"),
        }
    }
}

impl FromStr for Org {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "foundation" | "af" => Ok(Org::Foundation),
            "technologies" | "at" => Ok(Org::Technologies),
            other => Err(format!("unknown organization '{other}' (expected foundation or technologies)")),
        }
    }
}

/// Canonical, ordered list of reports for one organization
#[derive(Debug)]
pub struct ReportSequence {
    pub org: Org,
    pub ids: &'static [ReportId],
    /// Reporting period label per report, index-aligned with `ids`
    pub periods: &'static [&'static str],
}

pub static FOUNDATION_SEQUENCE: ReportSequence = ReportSequence {
    org: Org::Foundation,
    ids: &constants::FOUNDATION_REPORTS,
    periods: &[
        "2019 Q3", "2019 Q4", "2020 Q1", "2020 Q2", "2020 Q3", "2020 Q4", "2021 Q1", "2021 Q2", "2021 Q3",
        "2021 Q4", "2022 Q1", "2022 Q2", "2022 Q3", "2022 Q4", "2023 Q1", "2023 Q2", "2023 Q3", "2023 Q4",
    ],
};

pub static TECHNOLOGIES_SEQUENCE: ReportSequence = ReportSequence {
    org: Org::Technologies,
    ids: &constants::TECHNOLOGIES_REPORTS,
    periods: &["2020 H2", "2021 H1", "2021 H2", "2022 H1", "2022 H2", "2023 H1", "2023 H2"],
};

impl ReportSequence {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Positional index of a report id, if it belongs to this sequence
    pub fn position(&self, report: &str) -> Option<usize> {
        self.ids.iter().position(|id| *id == report)
    }

    pub fn period(&self, report: &str) -> Option<&'static str> {
        self.position(report).and_then(|idx| self.periods.get(idx).copied())
    }

    pub fn first(&self) -> Option<ReportId> {
        self.ids.first().copied()
    }

    pub fn last(&self) -> Option<ReportId> {
        self.ids.last().copied()
    }

    /// Inclusive slice between two report ids in sequence order.
    ///
    /// Empty when either id is unknown or `start` comes after `end`.
    /// The endpoints are never swapped.
    pub fn window(&self, start: &str, end: &str) -> &'static [ReportId] {
        match (self.position(start), self.position(end)) {
            (Some(s), Some(e)) if s <= e => &self.ids[s..=e],
            _ => &[],
        }
    }
}

/// A single disclosed value as it appears in a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Disclosure {
    Number(f64),
    /// Non-numeric disclosure such as "N/R"
    Text(&'static str),
    Missing,
}

/// "Not reported" placeholder used throughout the reports
pub const NOT_REPORTED: Disclosure = Disclosure::Text("N/R");

impl Disclosure {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Disclosure::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Value as shown in pre-formatted exports (empty for missing)
    pub fn raw(&self) -> String {
        match self {
            Disclosure::Number(v) => v.to_string(),
            Disclosure::Text(t) => t.to_string(),
            Disclosure::Missing => String::new(),
        }
    }
}

/// A named quantity tracked across reports
#[derive(Debug, PartialEq)]
pub struct RawMetric {
    pub name: &'static str,
    /// Sparse: reports without an entry are `Missing`
    pub values: &'static [(ReportId, Disclosure)],
}

impl RawMetric {
    pub fn value_at(&self, report: &str) -> Disclosure {
        self.values
            .iter()
            .find(|(id, _)| *id == report)
            .map(|(_, value)| *value)
            .unwrap_or(Disclosure::Missing)
    }
}

/// Hand-specified category definition
#[derive(Debug)]
pub struct CategoryDef {
    pub name: &'static str,
    pub metrics: &'static [RawMetric],
    pub sub_categories: &'static [SubCategoryDef],
    /// Emit a total series over every metric in the category
    pub total: bool,
    /// Drop subcategories that end up with no series
    pub prune_empty_subcategories: bool,
}

/// Hand-specified subcategory definition
#[derive(Debug)]
pub struct SubCategoryDef {
    pub name: &'static str,
    pub metrics: &'static [RawMetric],
    /// Emit a total series over this subcategory's metrics
    pub total: bool,
}

impl CategoryDef {
    /// Every metric in the category, own metrics first
    pub fn all_metrics(&self) -> impl Iterator<Item = &'static RawMetric> {
        let own = self.metrics.iter();
        let subs = self.sub_categories.iter().flat_map(|sub| sub.metrics.iter());
        own.chain(subs)
    }
}

/// Category definitions for an organization
pub fn categories(org: Org) -> &'static [CategoryDef] {
    match org {
        Org::Foundation => data::foundation::CATEGORIES,
        Org::Technologies => data::technologies::CATEGORIES,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoanStatus {
    Outstanding,
    Repaid,
    WrittenOff,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::Outstanding => write!(f, "Outstanding"),
            LoanStatus::Repaid => write!(f, "Repaid"),
            LoanStatus::WrittenOff => write!(f, "Written off"),
        }
    }
}

/// One entry of an organization's loan ledger
#[derive(Debug, PartialEq)]
pub struct LoanEntry {
    pub report: ReportId,
    pub counterparty: &'static str,
    pub amount: Disclosure,
    pub status: LoanStatus,
}

/// An issue a report flagged
#[derive(Debug, PartialEq)]
pub struct Issue {
    pub report: ReportId,
    pub title: &'static str,
    pub note: &'static str,
}

/// Loan ledger for an organization, in report order
pub fn loans(org: Org) -> &'static [LoanEntry] {
    match org {
        Org::Foundation => data::foundation::LOANS,
        Org::Technologies => data::technologies::LOANS,
    }
}

pub fn issues(org: Org) -> &'static [Issue] {
    match org {
        Org::Foundation => data::foundation::ISSUES,
        Org::Technologies => data::technologies::ISSUES,
    }
}

/// Records whose report falls inside `window`
pub fn in_window<'a, T>(records: &'a [T], window: &[ReportId], report: impl Fn(&T) -> ReportId) -> Vec<&'a T> {
    records.iter().filter(|r| window.contains(&report(*r))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_have_expected_lengths() {
        assert_eq!(Org::Foundation.sequence().len(), 18);
        assert_eq!(Org::Technologies.sequence().len(), 7);
        assert_eq!(FOUNDATION_SEQUENCE.periods.len(), FOUNDATION_SEQUENCE.ids.len());
        assert_eq!(TECHNOLOGIES_SEQUENCE.periods.len(), TECHNOLOGIES_SEQUENCE.ids.len());
    }

    #[test]
    fn test_position_is_positional_not_lexical() {
        let seq = Org::Foundation.sequence();
        assert_eq!(seq.position("R2"), Some(1));
        assert_eq!(seq.position("R10"), Some(9));
        assert!(seq.position("R2") < seq.position("R10"));
        assert_eq!(seq.position("R19"), None);
        assert_eq!(Org::Technologies.sequence().position("R8"), None);
    }

    #[test]
    fn test_window_inclusive() {
        let seq = Org::Foundation.sequence();
        assert_eq!(seq.window("R3", "R5"), &["R3", "R4", "R5"]);
        assert_eq!(seq.window("R7", "R7"), &["R7"]);
    }

    #[test]
    fn test_window_reversed_or_unknown_is_empty() {
        let seq = Org::Foundation.sequence();
        assert!(seq.window("R10", "R5").is_empty());
        assert!(seq.window("R1", "R99").is_empty());
        assert!(Org::Technologies.sequence().window("R1", "R18").is_empty());
    }

    #[test]
    fn test_disclosure_number_and_raw() {
        assert_eq!(Disclosure::Number(0.0).as_number(), Some(0.0));
        assert_eq!(NOT_REPORTED.as_number(), None);
        assert_eq!(Disclosure::Missing.as_number(), None);
        assert_eq!(NOT_REPORTED.raw(), "N/R");
        assert_eq!(Disclosure::Missing.raw(), "");
        assert_eq!(Disclosure::Number(12.5).raw(), "12.5");
    }

    #[test]
    fn test_value_at_defaults_to_missing() {
        let metric = RawMetric {
            name: "Grants",
            values: &[("R1", Disclosure::Number(3.0)), ("R3", NOT_REPORTED)],
        };
        assert_eq!(metric.value_at("R1"), Disclosure::Number(3.0));
        assert_eq!(metric.value_at("R2"), Disclosure::Missing);
        assert_eq!(metric.value_at("R3"), NOT_REPORTED);
    }

    #[test]
    fn test_org_from_str() {
        assert_eq!("Foundation".parse::<Org>(), Ok(Org::Foundation));
        assert_eq!("at".parse::<Org>(), Ok(Org::Technologies));
        assert!("labs".parse::<Org>().is_err());
    }

    #[test]
    fn test_loan_and_issue_reports_are_in_their_sequence() {
        for org in [Org::Foundation, Org::Technologies] {
            let seq = org.sequence();
            for entry in loans(org) {
                assert!(
                    seq.position(entry.report).is_some(),
                    "loan to {} references {} outside the {} sequence",
                    entry.counterparty,
                    entry.report,
                    org
                );
            }
            for issue in issues(org) {
                assert!(
                    seq.position(issue.report).is_some(),
                    "issue '{}' references {} outside the {} sequence",
                    issue.title,
                    issue.report,
                    org
                );
            }
        }
    }

    #[test]
    fn test_loan_ledger_in_report_order() {
        for org in [Org::Foundation, Org::Technologies] {
            let seq = org.sequence();
            let positions: Vec<_> = loans(org).iter().map(|l| seq.position(l.report)).collect();
            assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{} ledger out of order", org);
        }
    }

    #[test]
    fn test_in_window_filters_by_report() {
        let window = Org::Foundation.sequence().window("R9", "R12");
        let entries = in_window(loans(Org::Foundation), window, |l| l.report);
        let counterparties: Vec<_> = entries.iter().map(|l| l.counterparty).collect();
        assert_eq!(counterparties, vec!["Market Maker A", "Market Maker B", "DeFi Liquidity Program"]);

        assert!(in_window(issues(Org::Foundation), &[], |i| i.report).is_empty());
        assert_eq!(LoanStatus::WrittenOff.to_string(), "Written off");
    }

    #[test]
    fn test_every_static_report_id_is_in_its_sequence() {
        for org in [Org::Foundation, Org::Technologies] {
            let seq = org.sequence();
            for category in categories(org) {
                for metric in category.all_metrics() {
                    for (report, _) in metric.values {
                        assert!(
                            seq.position(report).is_some(),
                            "{} / {} references {} outside the {} sequence",
                            category.name,
                            metric.name,
                            report,
                            org
                        );
                    }
                }
            }
        }
    }
}
