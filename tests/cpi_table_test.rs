use hdb_forecast::domain::errors::ResourceError;
use hdb_forecast::infrastructure::persistence::{load_cpi_table, parse_cpi_csv};
use std::fs;
use std::path::PathBuf;

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hdb-cpi-{}-{}.csv", name, std::process::id()));
    fs::write(&path, contents).expect("Failed to write test CSV");
    path
}

#[test]
fn test_loads_forecast_file_from_disk() {
    let path = write_temp_csv(
        "full",
        "year,cpi\n2025,100.0\n2026,101.8\n2027,103.1\n2028,104.9\n2029,106.0\n",
    );

    let table = load_cpi_table(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(table.len(), 5);
    assert_eq!(table.lookup(2026), 101.8);
    assert_eq!(table.median(), 103.1);
    assert_eq!(table.lookup(2035), 103.1);
    assert_eq!(table.year_span(), Some((2025, 2029)));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("hdb-cpi-does-not-exist.csv");
    let err = load_cpi_table(&path).unwrap_err();
    assert!(matches!(err, ResourceError::CpiRead { .. }));
}

#[test]
fn test_extra_columns_are_ignored() {
    let csv = "cpi,source,year\n100.0,forecast,2025\n104.0,forecast,2026\n";
    let table = parse_cpi_csv(csv.as_bytes()).unwrap();

    assert_eq!(table.get(2025), Some(100.0));
    assert_eq!(table.get(2026), Some(104.0));
}

#[test]
fn test_lookup_returns_stored_value_or_median() {
    let csv = "year,cpi\n2025,100.0\n2026,102.0\n2027,103.0\n2028,110.0\n";
    let table = parse_cpi_csv(csv.as_bytes()).unwrap();

    for year in 2020..=2045 {
        let cpi = table.lookup(year);
        match table.get(year) {
            Some(stored) => assert_eq!(cpi, stored),
            None => assert_eq!(cpi, 102.5),
        }
    }
}

#[test]
fn test_empty_forecast_is_rejected() {
    let err = parse_cpi_csv("year,cpi\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ResourceError::CpiInvalid { .. }));
}

#[test]
fn test_malformed_row_reports_its_position() {
    let err = parse_cpi_csv("year,cpi\n2025,100.0\n2026,abc\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ResourceError::CpiParse { row: 2, .. }));
}
