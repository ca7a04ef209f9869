//! `HolidayManager` — the merged workday/holiday lookup.
//!
//! The manager owns a bundled dataset and, optionally, an external one
//! supplied through [`HolidayManager::refresh`]. Lookups read an immutable
//! [`HolidayTable`] behind a `parking_lot::RwLock<Arc<_>>`; a refresh builds
//! the next table off to the side and swaps the `Arc`, so a reader sees
//! either the whole old table or the whole new one.

use std::collections::HashMap;
use std::sync::Arc;

use lb_core::errors::Result;
use lb_time::{MonthDay, SolarDate};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::dataset::{HolidayDataset, HolidayType};

/// An immutable merge of the bundled and external datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    entries: HashMap<(i32, MonthDay), HolidayType>,
    external_len: usize,
}

impl HolidayTable {
    fn merge(bundled: &HolidayDataset, external: Option<&HolidayDataset>) -> Self {
        let mut entries = HashMap::with_capacity(bundled.len());
        let layers = std::iter::once(bundled).chain(external);
        for entry in layers.flat_map(HolidayDataset::entries) {
            entries.insert((entry.year, entry.month_day), entry.kind);
        }
        Self {
            entries,
            external_len: external.map_or(0, HolidayDataset::len),
        }
    }

    /// The adjustment for `key` in `year`, [`HolidayType::None`] if absent.
    pub fn get(&self, year: i32, key: MonthDay) -> HolidayType {
        self.entries.get(&(year, key)).copied().unwrap_or_default()
    }

    /// Number of distinct `(year, MMDD)` keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no day is adjusted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records in the external layer this table was built with.
    pub fn external_len(&self) -> usize {
        self.external_len
    }
}

/// Workday/holiday lookups over a bundled dataset and a refreshable
/// external one. External entries win per key.
#[derive(Debug)]
pub struct HolidayManager {
    bundled: HolidayDataset,
    table: RwLock<Arc<HolidayTable>>,
}

impl HolidayManager {
    /// A manager whose bundled layer is `bundled`.
    pub fn new(bundled: HolidayDataset) -> Self {
        let table = HolidayTable::merge(&bundled, None);
        Self {
            bundled,
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// A manager over the dataset compiled into this crate.
    pub fn with_default_data() -> Result<Self> {
        Ok(Self::new(HolidayDataset::bundled()?))
    }

    /// A manager with no data at all.
    pub fn empty() -> Self {
        Self::new(HolidayDataset::default())
    }

    /// The adjustment for solar `key` in `year`.
    pub fn type_of(&self, year: i32, key: MonthDay) -> HolidayType {
        self.table.read().get(year, key)
    }

    /// The adjustment for `date`.
    pub fn type_of_date(&self, date: SolarDate) -> HolidayType {
        self.type_of(i32::from(date.year()), date.month_day())
    }

    /// The current merged table. It stays valid, and unchanged, across
    /// later refreshes.
    pub fn snapshot(&self) -> Arc<HolidayTable> {
        Arc::clone(&self.table.read())
    }

    /// Replace the external layer with `dataset`.
    pub fn refresh(&self, dataset: HolidayDataset) {
        let next = Arc::new(HolidayTable::merge(&self.bundled, Some(&dataset)));
        info!(
            external = dataset.len(),
            merged = next.len(),
            "holiday table refreshed"
        );
        *self.table.write() = next;
    }

    /// Run `fetch` and refresh with its result. On failure the current
    /// table is kept, the error is logged, and `false` is returned.
    pub fn try_refresh<F>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Result<HolidayDataset>,
    {
        match fetch() {
            Ok(dataset) => {
                self.refresh(dataset);
                true
            }
            Err(error) => {
                warn!(%error, "keeping current holiday table");
                false
            }
        }
    }

    /// Number of distinct keys in the merged table.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// `true` if the merged table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// Number of records in the current external layer.
    pub fn external_len(&self) -> usize {
        self.table.read().external_len()
    }
}

impl Default for HolidayManager {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::HolidayEntry;
    use lb_core::Error;

    fn md(s: &str) -> MonthDay {
        s.parse().unwrap()
    }

    fn dataset(entries: &[(i32, &str, HolidayType)]) -> HolidayDataset {
        entries
            .iter()
            .map(|&(y, k, t)| HolidayEntry::new(y, md(k), t))
            .collect()
    }

    #[test]
    fn absent_keys_are_none() {
        let mgr = HolidayManager::empty();
        assert_eq!(mgr.type_of(2024, md("0101")), HolidayType::None);
        assert!(mgr.is_empty());
    }

    #[test]
    fn external_layer_wins_per_key() {
        let mgr = HolidayManager::new(dataset(&[
            (2024, "0101", HolidayType::Holiday),
            (2024, "0204", HolidayType::Workday),
        ]));
        mgr.refresh(dataset(&[(2024, "0204", HolidayType::Holiday)]));
        assert_eq!(mgr.type_of(2024, md("0204")), HolidayType::Holiday);
        assert_eq!(mgr.type_of(2024, md("0101")), HolidayType::Holiday);
        assert_eq!(mgr.len(), 2);
        assert_eq!(mgr.external_len(), 1);
    }

    #[test]
    fn refresh_replaces_the_previous_external_layer() {
        let mgr = HolidayManager::empty();
        mgr.refresh(dataset(&[(2030, "0101", HolidayType::Holiday)]));
        mgr.refresh(dataset(&[(2030, "0102", HolidayType::Holiday)]));
        assert_eq!(mgr.type_of(2030, md("0101")), HolidayType::None);
        assert_eq!(mgr.type_of(2030, md("0102")), HolidayType::Holiday);
    }

    #[test]
    fn failed_fetch_keeps_the_table() {
        let mgr = HolidayManager::new(dataset(&[(2024, "0101", HolidayType::Holiday)]));
        let before = mgr.snapshot();
        assert!(!mgr.try_refresh(|| Err(Error::Fetch("offline".into()))));
        assert!(Arc::ptr_eq(&before, &mgr.snapshot()));
        assert!(mgr.try_refresh(|| Ok(HolidayDataset::default())));
        assert_eq!(mgr.type_of(2024, md("0101")), HolidayType::Holiday);
    }

    #[test]
    fn snapshots_are_immutable() {
        let mgr = HolidayManager::empty();
        let old = mgr.snapshot();
        mgr.refresh(dataset(&[(2024, "0610", HolidayType::Holiday)]));
        assert_eq!(old.get(2024, md("0610")), HolidayType::None);
        assert_eq!(mgr.snapshot().get(2024, md("0610")), HolidayType::Holiday);
    }
}
