use super::attributes::{FlatType, StoreyRange, Town};
use crate::domain::errors::FeatureError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Purchase years the CPI forecast and the model were prepared for
pub const YEAR_RANGE: RangeInclusive<u16> = 2025..=2040;

/// Remaining lease on a 99-year HDB lease
pub const LEASE_YEARS_RANGE: RangeInclusive<u8> = 1..=99;

pub const DEFAULT_LEASE_YEARS_LEFT: u8 = 65;

/// The five housing attributes submitted for one prediction.
///
/// Fields are private: a record only exists once every value has been
/// checked against its range or enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    year: u16,
    lease_years_left: u8,
    flat_type: FlatType,
    town: Town,
    storey_range: StoreyRange,
}

impl FeatureRecord {
    pub fn new(
        year: u16,
        lease_years_left: u8,
        flat_type: FlatType,
        town: Town,
        storey_range: StoreyRange,
    ) -> Result<Self, FeatureError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(FeatureError::OutOfRange {
                field: "year",
                value: year as i64,
                min: *YEAR_RANGE.start() as i64,
                max: *YEAR_RANGE.end() as i64,
            });
        }
        if !LEASE_YEARS_RANGE.contains(&lease_years_left) {
            return Err(FeatureError::OutOfRange {
                field: "lease_years_left",
                value: lease_years_left as i64,
                min: *LEASE_YEARS_RANGE.start() as i64,
                max: *LEASE_YEARS_RANGE.end() as i64,
            });
        }

        Ok(Self {
            year,
            lease_years_left,
            flat_type,
            town,
            storey_range,
        })
    }

    /// Builds a record from raw labels, e.g. command-line arguments.
    pub fn parse(
        year: i64,
        lease_years_left: i64,
        flat_type: &str,
        town: &str,
        storey_range: &str,
    ) -> Result<Self, FeatureError> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| YEAR_RANGE.contains(y))
            .ok_or(FeatureError::OutOfRange {
                field: "year",
                value: year,
                min: *YEAR_RANGE.start() as i64,
                max: *YEAR_RANGE.end() as i64,
            })?;
        let lease_years_left = u8::try_from(lease_years_left)
            .ok()
            .filter(|l| LEASE_YEARS_RANGE.contains(l))
            .ok_or(FeatureError::OutOfRange {
                field: "lease_years_left",
                value: lease_years_left,
                min: *LEASE_YEARS_RANGE.start() as i64,
                max: *LEASE_YEARS_RANGE.end() as i64,
            })?;

        Self::new(
            year,
            lease_years_left,
            flat_type.parse()?,
            town.parse()?,
            storey_range.parse()?,
        )
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn lease_years_left(&self) -> u8 {
        self.lease_years_left
    }

    pub fn flat_type(&self) -> FlatType {
        self.flat_type
    }

    pub fn town(&self) -> Town {
        self.town
    }

    pub fn storey_range(&self) -> StoreyRange {
        self.storey_range
    }
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            year: *YEAR_RANGE.start(),
            lease_years_left: DEFAULT_LEASE_YEARS_LEFT,
            flat_type: FlatType::default(),
            town: Town::default(),
            storey_range: StoreyRange::default(),
        }
    }
}
