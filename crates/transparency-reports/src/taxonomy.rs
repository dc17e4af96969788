//! Category aggregation: static definitions to a two-level series taxonomy
//!
//! Every build is a pure rebuild. Colors come from a `ColorCursor` created at
//! the start of the build, so repeated builds assign identical ids and colors.

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::constants;
use crate::series::{DataSeries, Point, normalize};
use crate::store::{self, CategoryDef, Org, RawMetric, ReportSequence};

/// Round-robin palette position, scoped to one build
#[derive(Debug, Default)]
pub struct ColorCursor {
    next: usize,
}

impl ColorCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start somewhere other than the first palette entry
    pub fn starting_at(index: usize) -> Self {
        Self { next: index }
    }

    pub fn next_color(&mut self) -> &'static str {
        let color = constants::PALETTE[self.next % constants::PALETTE.len()];
        self.next += 1;
        color
    }

    /// Number of colors handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubCategory {
    pub name: String,
    pub series: Vec<DataSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub series: Vec<DataSeries>,
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    /// Own series plus every subcategory's series
    pub fn series_count(&self) -> usize {
        self.series.len() + self.sub_categories.iter().map(|sub| sub.series.len()).sum::<usize>()
    }

    pub fn iter_series(&self) -> impl Iterator<Item = &DataSeries> {
        self.series
            .iter()
            .chain(self.sub_categories.iter().flat_map(|sub| sub.series.iter()))
    }
}

/// All categories for one organization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Taxonomy {
    pub org: Org,
    pub categories: Vec<Category>,
}

impl Taxonomy {
    pub fn all_series(&self) -> impl Iterator<Item = &DataSeries> {
        self.categories.iter().flat_map(|category| category.iter_series())
    }

    /// Series offered for selection, in taxonomy order
    pub fn selectable(&self) -> Vec<&DataSeries> {
        self.all_series().filter(|series| !series.is_empty()).collect()
    }

    pub fn find(&self, id: &str) -> Option<&DataSeries> {
        self.all_series().find(|series| series.id == id)
    }

    pub fn series_count(&self) -> usize {
        self.categories.iter().map(Category::series_count).sum()
    }

    pub fn sequence(&self) -> &'static ReportSequence {
        self.org.sequence()
    }
}

/// Build the taxonomy for an organization from the static report store
pub fn build(org: Org) -> Taxonomy {
    build_taxonomy(store::categories(org), org)
}

/// Build a taxonomy from category definitions.
///
/// Series order (and therefore color order) per category: own metrics,
/// then each subcategory's metrics followed by its total, then the category total.
pub fn build_taxonomy(defs: &'static [CategoryDef], org: Org) -> Taxonomy {
    let sequence = org.sequence();
    let mut cursor = ColorCursor::new();

    let categories: Vec<Category> = defs
        .iter()
        .map(|def| build_category(def, org, sequence, &mut cursor))
        .collect();

    let taxonomy = Taxonomy { org, categories };
    warn_on_duplicate_ids(&taxonomy);
    debug!(
        "Built {} taxonomy: {} categories, {} series, {} colors issued",
        org,
        taxonomy.categories.len(),
        taxonomy.series_count(),
        cursor.issued()
    );
    taxonomy
}

fn build_category(
    def: &'static CategoryDef,
    org: Org,
    sequence: &ReportSequence,
    cursor: &mut ColorCursor,
) -> Category {
    let mut series = build_leaf(def.name, &[def.name], def.metrics, org, sequence, cursor);

    let mut sub_categories = Vec::with_capacity(def.sub_categories.len());
    for sub in def.sub_categories {
        let parts = [def.name, sub.name];
        let mut sub_series = build_leaf(def.name, &parts, sub.metrics, org, sequence, cursor);

        if sub.total {
            let metrics: Vec<_> = sub.metrics.iter().collect();
            if let Some(total) = build_total(def.name, &parts, &metrics, org, sequence, cursor) {
                sub_series.push(total);
            }
        }

        if sub_series.is_empty() && def.prune_empty_subcategories {
            debug!("Pruning empty subcategory {} / {}", def.name, sub.name);
            continue;
        }

        sub_categories.push(SubCategory {
            name: sub.name.to_string(),
            series: sub_series,
        });
    }

    if def.total {
        let metrics: Vec<_> = def.all_metrics().collect();
        if let Some(total) = build_total(def.name, &[def.name], &metrics, org, sequence, cursor) {
            series.push(total);
        }
    }

    Category {
        name: def.name.to_string(),
        series,
        sub_categories,
    }
}

/// Normalize each metric; metrics without a single numeric point produce no series
fn build_leaf(
    category: &str,
    parts: &[&str],
    metrics: &'static [RawMetric],
    org: Org,
    sequence: &ReportSequence,
    cursor: &mut ColorCursor,
) -> Vec<DataSeries> {
    metrics
        .iter()
        .filter_map(|metric| {
            let points = normalize(metric, sequence);
            if points.is_empty() {
                return None;
            }

            let mut id_parts = parts.to_vec();
            id_parts.push(metric.name);

            Some(DataSeries {
                id: slugify(&id_parts),
                name: metric.name.to_string(),
                category: category.to_string(),
                color: cursor.next_color(),
                org,
                points,
                source: Some(metric),
            })
        })
        .collect()
}

/// Synthetic total over sibling metrics.
///
/// Absent and non-numeric values count as 0 in the sum. A report gets a point
/// only when at least one sibling disclosed a number there.
fn build_total(
    category: &str,
    parts: &[&str],
    metrics: &[&'static RawMetric],
    org: Org,
    sequence: &ReportSequence,
    cursor: &mut ColorCursor,
) -> Option<DataSeries> {
    let points = total_points(metrics, sequence);
    if points.is_empty() {
        return None;
    }

    let mut id_parts = parts.to_vec();
    id_parts.push(constants::TOTAL_SERIES_NAME);
    let label = parts.last().copied().unwrap_or(category);

    Some(DataSeries {
        id: slugify(&id_parts),
        name: format!("{} ({})", constants::TOTAL_SERIES_NAME, label),
        category: category.to_string(),
        color: cursor.next_color(),
        org,
        points,
        source: None,
    })
}

pub fn total_points(metrics: &[&RawMetric], sequence: &ReportSequence) -> Vec<Point> {
    sequence
        .ids
        .iter()
        .filter_map(|&report| {
            let values: Vec<f64> = metrics
                .iter()
                .filter_map(|metric| metric.value_at(report).as_number())
                .collect();

            if values.is_empty() {
                None
            } else {
                Some(Point {
                    report,
                    value: values.iter().sum(),
                })
            }
        })
        .collect()
}

/// Series id from name parts: joined with '-', lower-cased, whitespace and
/// `( ) & /` removed. Distinct names can collapse to the same id.
pub fn slugify(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| {
            part.chars()
                .filter(|c| !c.is_whitespace() && !constants::SLUG_BLACKLIST.contains(c))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(constants::SLUG_SEPARATOR)
}

fn warn_on_duplicate_ids(taxonomy: &Taxonomy) {
    let mut seen = HashSet::new();
    for series in taxonomy.all_series() {
        if !seen.insert(series.id.as_str()) {
            warn!("Duplicate series id '{}' in {} taxonomy", series.id, taxonomy.org);
        }
    }
}
