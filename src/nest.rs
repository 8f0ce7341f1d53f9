//! Nests: records that share identical coordinates.

#[cfg(test)]
#[path = "nest_test.rs"]
mod nest_test;

use std::collections::HashMap;
use std::fmt;

use crate::record::ExpenseRecord;

/// Identity of a nest: the exact (lat, lon) of its members.
///
/// Compares coordinates bit-for-bit after folding `-0.0` into `0.0`, so two
/// records are in the same nest exactly when their coordinates are equal.
/// Displays as `"lat_lon"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NestKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl NestKey {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat_bits: canonical_bits(lat), lon_bits: canonical_bits(lon) }
    }

    #[must_use]
    pub fn lat(self) -> f64 {
        f64::from_bits(self.lat_bits)
    }

    #[must_use]
    pub fn lon(self) -> f64 {
        f64::from_bits(self.lon_bits)
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() }
}

impl fmt::Display for NestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.lat(), self.lon())
    }
}

/// Index from nest key to member record indices, in record order.
#[derive(Debug, Clone, Default)]
pub struct NestIndex {
    members: HashMap<NestKey, Vec<usize>>,
}

impl NestIndex {
    /// Group `records` by coordinates.
    #[must_use]
    pub fn build(records: &[ExpenseRecord]) -> Self {
        let mut members: HashMap<NestKey, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            members.entry(record.nest_key()).or_default().push(i);
        }
        Self { members }
    }

    /// Record indices in the nest, or an empty slice for an unknown key.
    #[must_use]
    pub fn members(&self, key: &NestKey) -> &[usize] {
        self.members.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of records in the nest.
    #[must_use]
    pub fn size(&self, key: &NestKey) -> usize {
        self.members(key).len()
    }

    /// Number of distinct coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of nests with at least two members.
    #[must_use]
    pub fn explodable_count(&self) -> usize {
        self.members.values().filter(|m| m.len() >= 2).count()
    }
}
