use crate::filter::{self, FilterSet};
use crate::models::TenderRecord;

/// Session-scoped state for one interactive run: the records loaded from
/// the last successful fetch plus the current filter selection. Passed
/// explicitly into render and export calls; there is no module-level
/// mutable state.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<TenderRecord>,
    filters: FilterSet,
    source_url: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the loaded data with a fresh fetch result. The previous
    /// records are discarded; filters are reset since their options (the
    /// hospital list in particular) belong to the old data.
    pub fn load(&mut self, records: Vec<TenderRecord>, source_url: String) {
        self.records = records;
        self.source_url = Some(source_url);
        self.filters.clear();
    }

    /// Drops all loaded data and filters, returning to the safe empty
    /// state. Called after a failed fetch so stale records from the
    /// previous URL are never shown against the new one.
    pub fn reset(&mut self) {
        self.records.clear();
        self.source_url = None;
        self.filters.clear();
    }

    pub fn is_loaded(&self) -> bool {
        !self.records.is_empty() || self.source_url.is_some()
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn records(&self) -> &[TenderRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSet {
        &mut self.filters
    }

    /// The records matching the current filter selection.
    pub fn filtered(&self) -> Vec<&TenderRecord> {
        filter::apply(&self.records, &self.filters)
    }

    /// Hospital names available as filter options for the loaded data.
    pub fn hospital_options(&self) -> Vec<String> {
        filter::unique_hospitals(&self.records)
    }
}
