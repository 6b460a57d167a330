use hdb_forecast::application::ml::PriceModel;
use hdb_forecast::application::pricing::PricingService;
use hdb_forecast::domain::errors::{FeatureError, PredictionError};
use hdb_forecast::domain::housing::{FeatureRecord, FlatType, StoreyRange, Town};
use hdb_forecast::domain::pricing::CpiTable;
use std::sync::Arc;

/// Returns the same real price for every record
struct FixedPriceModel(f64);

impl PriceModel for FixedPriceModel {
    fn predict(&self, _record: &FeatureRecord) -> Result<f64, PredictionError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn version(&self) -> &str {
        "test"
    }
}

fn service(real_price: f64, cpi: &[(i32, f64)]) -> PricingService {
    let table = CpiTable::from_pairs(cpi.iter().copied()).unwrap();
    PricingService::new(Arc::new(FixedPriceModel(real_price)), Arc::new(table))
}

#[test]
fn test_base_cpi_leaves_price_unchanged() {
    let pricing = service(450_000.0, &[(2025, 100.0), (2026, 104.0)]);
    let record = FeatureRecord::parse(2025, 65, "4 room", "bedok", "04 TO 06").unwrap();

    let result = pricing.quote(&record).unwrap();

    assert_eq!(result.real_price, 450_000.0);
    assert_eq!(result.cpi_used, 100.0);
    assert_eq!(result.nominal_price, 450_000.0);
}

#[test]
fn test_forecast_year_inflates_price() {
    let pricing = service(500_000.0, &[(2025, 100.0), (2030, 105.0)]);
    let record = FeatureRecord::parse(2030, 80, "5 room", "punggol", "10 TO 12").unwrap();

    let result = pricing.quote(&record).unwrap();

    assert_eq!(result.cpi_used, 105.0);
    assert!((result.nominal_price - 525_000.0).abs() < 1e-6);
}

#[test]
fn test_missing_year_uses_median_cpi() {
    let pricing = service(
        400_000.0,
        &[(2025, 100.0), (2026, 102.0), (2027, 103.0), (2028, 110.0)],
    );
    let record = FeatureRecord::parse(2040, 30, "executive", "woodlands", "01 TO 03").unwrap();

    let result = pricing.quote(&record).unwrap();

    assert_eq!(result.cpi_used, 102.5);
    assert!((result.nominal_price - 410_000.0).abs() < 1e-6);
}

#[test]
fn test_default_form_values_produce_a_quote() {
    let pricing = service(350_000.0, &[(2025, 100.0)]);
    let record = FeatureRecord::default();

    assert_eq!(record.year(), 2025);
    assert_eq!(record.lease_years_left(), 65);
    assert_eq!(record.flat_type(), FlatType::TwoRoom);
    assert_eq!(record.town(), Town::AngMoKio);
    assert_eq!(record.storey_range(), StoreyRange::ALL[0]);

    let result = pricing.quote(&record).unwrap();
    assert_eq!(result.nominal_price, 350_000.0);
}

#[test]
fn test_out_of_range_inputs_are_rejected_before_pricing() {
    let err = FeatureRecord::parse(2041, 65, "4 room", "bedok", "04 TO 06").unwrap_err();
    assert!(matches!(err, FeatureError::OutOfRange { field: "year", .. }));

    let err = FeatureRecord::parse(2025, 0, "4 room", "bedok", "04 TO 06").unwrap_err();
    assert!(matches!(
        err,
        FeatureError::OutOfRange {
            field: "lease_years_left",
            ..
        }
    ));

    let err = FeatureRecord::parse(2025, 65, "1 room", "bedok", "04 TO 06").unwrap_err();
    assert!(matches!(err, FeatureError::UnknownLabel { .. }));
}

#[test]
fn test_nominal_price_grows_with_cpi() {
    let pricing = service(
        300_000.0,
        &[(2025, 100.0), (2026, 101.5), (2027, 103.0), (2028, 104.2)],
    );

    let mut previous = 0.0;
    for year in 2025..=2028 {
        let record = FeatureRecord::parse(year, 65, "3 room", "clementi", "07 TO 09").unwrap();
        let result = pricing.quote(&record).unwrap();
        assert!(result.nominal_price > previous);
        previous = result.nominal_price;
    }
}
