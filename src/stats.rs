//! Summary statistics over a record set
//!
//! Statistics are computed on demand from whatever record set the cache
//! currently serves; nothing here is stored.

use std::collections::HashMap;

use crate::data::Record;

/// Summary of a record set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Number of records
    pub total_species: usize,
    /// Sum of all populations
    pub total_population: u64,
    /// Record with the largest population (first one wins ties)
    pub most_populous: Option<Record>,
    /// Record with the smallest population (first one wins ties)
    pub least_populous: Option<Record>,
    /// Number of endangered records
    pub endangered_count: usize,
    /// Number of records per location
    pub regional_distribution: HashMap<String, usize>,
}

impl Statistics {
    /// Mean population per record, 0.0 for an empty set
    pub fn average_population(&self) -> f64 {
        if self.total_species == 0 {
            return 0.0;
        }
        self.total_population as f64 / self.total_species as f64
    }

    /// Regions sorted by record count descending, then by name
    pub fn regions_by_count(&self) -> Vec<(&str, usize)> {
        let mut regions: Vec<(&str, usize)> = self
            .regional_distribution
            .iter()
            .map(|(region, count)| (region.as_str(), *count))
            .collect();
        regions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        regions
    }
}

/// Computes statistics for `records`
pub fn summarize(records: &[Record]) -> Statistics {
    let mut stats = Statistics {
        total_species: records.len(),
        ..Statistics::default()
    };

    let mut most: Option<&Record> = None;
    let mut least: Option<&Record> = None;

    for record in records {
        // Clamps at u64::MAX
        stats.total_population = stats.total_population.saturating_add(record.population);

        if record.is_endangered() {
            stats.endangered_count += 1;
        }

        *stats
            .regional_distribution
            .entry(record.location.clone())
            .or_insert(0) += 1;

        // Strict comparisons keep the first record on ties
        if most.map_or(true, |m| record.population > m.population) {
            most = Some(record);
        }
        if least.map_or(true, |l| record.population < l.population) {
            least = Some(record);
        }
    }

    stats.most_populous = most.cloned();
    stats.least_populous = least.cloned();
    stats
}
