//! User selection state: chosen series plus calculated series built from them
//!
//! Calculated series store only their operands and operator. They are
//! recomputed from the current taxonomy on every `resolve`.

use serde::Serialize;
use tracing::warn;

use crate::constants;
use crate::formula::{Operator, build_calculated};
use crate::series::DataSeries;
use crate::store::Org;
use crate::taxonomy::{ColorCursor, Taxonomy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown series '{0}'")]
    UnknownSeries(String),
    #[error("series from the {found} reports cannot be combined with the {expected} selection")]
    OrgMismatch { expected: Org, found: Org },
}

/// A user-defined `operand_a <operator> operand_b` series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedSeries {
    pub id: String,
    pub name: String,
    pub color: &'static str,
    pub operand_a: String,
    pub operand_b: String,
    pub operator: Operator,
}

#[derive(Debug, Clone)]
pub struct Selection {
    org: Org,
    selected: Vec<String>,
    calculated: Vec<CalculatedSeries>,
    /// Monotonic, so removed calculated ids are never reused
    created: usize,
}

impl Selection {
    pub fn new(org: Org) -> Self {
        Self {
            org,
            selected: Vec::new(),
            calculated: Vec::new(),
            created: 0,
        }
    }

    pub fn org(&self) -> Org {
        self.org
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn calculated(&self) -> &[CalculatedSeries] {
        &self.calculated
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.calculated.is_empty()
    }

    fn check_org(&self, taxonomy: &Taxonomy) -> Result<(), SelectionError> {
        if taxonomy.org == self.org {
            Ok(())
        } else {
            Err(SelectionError::OrgMismatch {
                expected: self.org,
                found: taxonomy.org,
            })
        }
    }

    /// Add a taxonomy series to the selection. Selecting twice is a no-op.
    pub fn select(&mut self, taxonomy: &Taxonomy, id: &str) -> Result<(), SelectionError> {
        self.check_org(taxonomy)?;
        if taxonomy.find(id).is_none() {
            return Err(SelectionError::UnknownSeries(id.to_string()));
        }
        if !self.selected.iter().any(|s| s == id) {
            self.selected.push(id.to_string());
        }
        Ok(())
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    /// Define `a <op> b`. Operands must be taxonomy series; calculated series do not nest.
    pub fn add_calculated(
        &mut self,
        taxonomy: &Taxonomy,
        operand_a: &str,
        operand_b: &str,
        operator: Operator,
    ) -> Result<&CalculatedSeries, SelectionError> {
        self.check_org(taxonomy)?;
        let a = taxonomy
            .find(operand_a)
            .ok_or_else(|| SelectionError::UnknownSeries(operand_a.to_string()))?;
        let b = taxonomy
            .find(operand_b)
            .ok_or_else(|| SelectionError::UnknownSeries(operand_b.to_string()))?;

        let index = self.created;
        self.created += 1;

        self.calculated.push(CalculatedSeries {
            id: format!("{}-{}", constants::CALCULATED_ID_PREFIX, index + 1),
            name: format!("{} {} {}", a.name, operator, b.name),
            color: ColorCursor::starting_at(index).next_color(),
            operand_a: a.id.clone(),
            operand_b: b.id.clone(),
            operator,
        });

        Ok(&self.calculated[self.calculated.len() - 1])
    }

    pub fn remove_calculated(&mut self, id: &str) -> bool {
        let before = self.calculated.len();
        self.calculated.retain(|c| c.id != id);
        self.calculated.len() != before
    }

    /// Drop every selection and every calculated series
    pub fn clear(&mut self) {
        self.selected.clear();
        self.calculated.clear();
    }

    /// Selected series followed by freshly computed calculated series
    pub fn resolve(&self, taxonomy: &Taxonomy) -> Result<Vec<DataSeries>, SelectionError> {
        self.check_org(taxonomy)?;
        let sequence = taxonomy.sequence();

        let mut series: Vec<DataSeries> = self
            .selected
            .iter()
            .filter_map(|id| taxonomy.find(id).cloned())
            .collect();

        for calc in &self.calculated {
            let (Some(a), Some(b)) = (taxonomy.find(&calc.operand_a), taxonomy.find(&calc.operand_b)) else {
                warn!("Calculated series '{}' lost an operand; skipping", calc.id);
                continue;
            };

            series.push(DataSeries {
                id: calc.id.clone(),
                name: calc.name.clone(),
                color: calc.color,
                ..build_calculated(a, b, calc.operator, sequence)
            });
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Point;
    use crate::taxonomy::build;

    const GRANTS: &str = "outflows-ecosystem-ecosystemgrants";
    const INCENTIVES: &str = "outflows-ecosystem-developerincentives";

    #[test]
    fn test_select_and_resolve_in_order() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);

        selection.select(&taxonomy, INCENTIVES).unwrap();
        selection.select(&taxonomy, GRANTS).unwrap();
        selection.select(&taxonomy, INCENTIVES).unwrap();

        let resolved = selection.resolve(&taxonomy).unwrap();
        let ids: Vec<_> = resolved.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![INCENTIVES, GRANTS]);
    }

    #[test]
    fn test_select_unknown_series() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);
        assert_eq!(
            selection.select(&taxonomy, "nope"),
            Err(SelectionError::UnknownSeries("nope".to_string()))
        );
    }

    #[test]
    fn test_org_mismatch_is_rejected() {
        let taxonomy = build(Org::Technologies);
        let mut selection = Selection::new(Org::Foundation);
        assert_eq!(
            selection.select(&taxonomy, "tokenholdings-treasury"),
            Err(SelectionError::OrgMismatch {
                expected: Org::Foundation,
                found: Org::Technologies,
            })
        );
    }

    #[test]
    fn test_calculated_series_recomputed_on_resolve() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);

        let calc = selection
            .add_calculated(&taxonomy, GRANTS, INCENTIVES, Operator::Add)
            .unwrap()
            .clone();
        assert_eq!(calc.id, "calc-1");
        assert_eq!(calc.name, "Ecosystem Grants + Developer Incentives");
        assert_eq!(selection.org(), Org::Foundation);
        assert_eq!(selection.calculated().len(), 1);

        let resolved = selection.resolve(&taxonomy).unwrap();
        assert_eq!(resolved.len(), 1);
        let series = &resolved[0];
        assert_eq!(series.id, "calc-1");
        assert_eq!(series.color, calc.color);

        // R3 has grants only; R11 has grants with incentives listed as N/R
        assert_eq!(series.points[0], Point { report: "R3", value: -4.2 });
        assert_eq!(series.value_at("R11"), Some(-22.0));
        assert_eq!(series.value_at("R8"), Some(-18.7 + -2.5));
        assert_eq!(series.value_at("R1"), None);
    }

    #[test]
    fn test_calculated_ids_not_reused_after_removal() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);

        selection.add_calculated(&taxonomy, GRANTS, GRANTS, Operator::Subtract).unwrap();
        assert!(selection.remove_calculated("calc-1"));
        assert!(!selection.remove_calculated("calc-1"));

        let second = selection
            .add_calculated(&taxonomy, GRANTS, INCENTIVES, Operator::Divide)
            .unwrap();
        assert_eq!(second.id, "calc-2");
    }

    #[test]
    fn test_calculated_operands_must_be_taxonomy_series() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);
        selection.add_calculated(&taxonomy, GRANTS, INCENTIVES, Operator::Add).unwrap();

        let err = selection
            .add_calculated(&taxonomy, "calc-1", GRANTS, Operator::Add)
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownSeries("calc-1".to_string()));
    }

    #[test]
    fn test_clear_drops_everything() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);
        selection.select(&taxonomy, GRANTS).unwrap();
        selection.add_calculated(&taxonomy, GRANTS, INCENTIVES, Operator::Multiply).unwrap();
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.resolve(&taxonomy).unwrap().is_empty());
    }

    #[test]
    fn test_deselect() {
        let taxonomy = build(Org::Foundation);
        let mut selection = Selection::new(Org::Foundation);
        selection.select(&taxonomy, GRANTS).unwrap();
        assert!(selection.deselect(GRANTS));
        assert!(!selection.deselect(GRANTS));
        assert!(selection.selected().is_empty());
    }
}
