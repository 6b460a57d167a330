use crate::domain::errors::ResourceError;
use std::collections::BTreeMap;

/// Forecasted consumer price index per calendar year.
///
/// Built once at startup and read-only afterwards. Construction rejects
/// empty tables and non-positive values, so `median` always exists and
/// every lookup yields a positive CPI.
#[derive(Debug, Clone, PartialEq)]
pub struct CpiTable {
    entries: BTreeMap<i32, f64>,
    median: f64,
}

impl CpiTable {
    pub fn new(entries: BTreeMap<i32, f64>) -> Result<Self, ResourceError> {
        if let Some((year, cpi)) = entries
            .iter()
            .find(|(_, cpi)| !cpi.is_finite() || **cpi <= 0.0)
        {
            return Err(ResourceError::CpiInvalid {
                reason: format!("CPI for {} must be positive, got {}", year, cpi),
            });
        }

        let median = median(entries.values().copied()).ok_or(ResourceError::CpiInvalid {
            reason: "table is empty".to_string(),
        })?;

        Ok(Self { entries, median })
    }

    /// Builds a table from `(year, cpi)` pairs, rejecting repeated years.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut entries = BTreeMap::new();
        for (year, cpi) in pairs {
            if entries.insert(year, cpi).is_some() {
                return Err(ResourceError::CpiInvalid {
                    reason: format!("duplicate year {}", year),
                });
            }
        }
        Self::new(entries)
    }

    /// CPI for `year`, falling back to the median of the whole table when the
    /// year was not forecast.
    pub fn lookup(&self, year: i32) -> f64 {
        self.entries.get(&year).copied().unwrap_or(self.median)
    }

    /// Exact entry for `year`, without the median fallback
    pub fn get(&self, year: i32) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.entries.iter().map(|(year, cpi)| (*year, *cpi))
    }

    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some((*first, *last))
    }
}

/// Median of the values; mean of the two middle values for an even count.
fn median(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_year_table() -> CpiTable {
        CpiTable::from_pairs([(2025, 100.0), (2026, 105.0)]).unwrap()
    }

    #[test]
    fn test_lookup_known_years_exact() {
        let table = two_year_table();
        assert_eq!(table.lookup(2025), 100.0);
        assert_eq!(table.lookup(2026), 105.0);
    }

    #[test]
    fn test_lookup_missing_year_uses_median() {
        let table = two_year_table();
        assert_eq!(table.lookup(2030), 102.5);
        assert_eq!(table.lookup(1999), 102.5);
        assert_eq!(table.get(2030), None);
    }

    #[test]
    fn test_median_odd_count_ignores_order() {
        let table =
            CpiTable::from_pairs([(2027, 120.0), (2025, 101.0), (2026, 110.0)]).unwrap();
        assert_eq!(table.median(), 110.0);
        assert_eq!(table.year_span(), Some((2025, 2027)));
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = CpiTable::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, ResourceError::CpiInvalid { .. }));
    }

    #[test]
    fn test_rejects_non_positive_cpi() {
        assert!(CpiTable::from_pairs([(2025, 0.0)]).is_err());
        assert!(CpiTable::from_pairs([(2025, -3.0)]).is_err());
        assert!(CpiTable::from_pairs([(2025, f64::NAN)]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_year() {
        let err = CpiTable::from_pairs([(2025, 100.0), (2025, 101.0)]).unwrap_err();
        assert!(err.to_string().contains("duplicate year 2025"));
    }
}
