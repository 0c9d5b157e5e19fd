use crate::models::{Category, TenderRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Number of words kept when truncating contractor names for chart labels.
const CHART_LABEL_WORDS: usize = 4;

/// Selected hospitals and categories. An empty set on a dimension means no
/// constraint on that dimension; a record must match every non-empty
/// dimension (intersection across dimensions, union within one).
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    hospitals: BTreeSet<String>,
    categories: BTreeSet<Category>,
}

impl FilterSet {
    /// Replaces the hospital selection. Names are matched case-insensitively
    /// on trimmed text, so the selection is normalized here once.
    pub fn set_hospitals<I, S>(&mut self, hospitals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hospitals = hospitals
            .into_iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
    }

    /// Replaces the category selection.
    pub fn set_categories<I>(&mut self, categories: I)
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories = categories.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.hospitals.clear();
        self.categories.clear();
    }

    pub fn hospitals(&self) -> &BTreeSet<String> {
        &self.hospitals
    }

    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty() && self.categories.is_empty()
    }

    pub fn matches(&self, record: &TenderRecord) -> bool {
        let hospital_ok = self.hospitals.is_empty()
            || self
                .hospitals
                .contains(&record.hospital.trim().to_lowercase());
        let category_ok = self.categories.is_empty() || self.categories.contains(&record.category);
        hospital_ok && category_ok
    }
}

/// Returns the records matching the filter set, in input order.
pub fn apply<'a>(records: &'a [TenderRecord], filters: &FilterSet) -> Vec<&'a TenderRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}

/// Distinct hospital names in first-seen order, for presenting the
/// available filter options.
pub fn unique_hospitals(records: &[TenderRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut hospitals = Vec::new();
    for record in records {
        if seen.insert(record.hospital.trim().to_lowercase()) {
            hospitals.push(record.hospital.trim().to_string());
        }
    }
    hospitals
}

/// Counts records per contractor for the distribution chart.
///
/// Grouping is by the full contractor string; only the returned label is
/// truncated to its first four words for readability. Sorted by count
/// descending, then label, so the chart order is deterministic.
pub fn contractor_counts(records: &[&TenderRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.contractors.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(contractor, count)| (truncate_label(contractor, CHART_LABEL_WORDS), count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

/// Keeps the first `max_words` whitespace-separated words of a label.
pub fn truncate_label(label: &str, max_words: usize) -> String {
    label
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
