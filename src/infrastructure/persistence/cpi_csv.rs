use crate::domain::errors::ResourceError;
use crate::domain::pricing::CpiTable;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One forecast row. Other columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct CpiRow {
    year: i32,
    cpi: f64,
}

/// Reads the CPI forecast CSV from disk.
pub fn load_cpi_table(path: &Path) -> Result<CpiTable, ResourceError> {
    let file = std::fs::File::open(path).map_err(|source| ResourceError::CpiRead {
        path: path.display().to_string(),
        source,
    })?;

    let table = parse_cpi_csv(file)?;
    if let Some((first, last)) = table.year_span() {
        info!(
            "Loaded CPI forecast from {:?}: {} years ({}-{}), median {:.2}",
            path,
            table.len(),
            first,
            last,
            table.median()
        );
    }
    Ok(table)
}

/// Parses a CSV with a header row holding at least `year` and `cpi`.
pub fn parse_cpi_csv<R: Read>(reader: R) -> Result<CpiTable, ResourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ResourceError::CpiParse {
            row: 0,
            reason: e.to_string(),
        })?
        .clone();
    for required in ["year", "cpi"] {
        if !headers.iter().any(|h| h == required) {
            return Err(ResourceError::CpiParse {
                row: 0,
                reason: format!("missing '{}' column", required),
            });
        }
    }

    let mut pairs = Vec::new();
    for (index, result) in reader.deserialize::<CpiRow>().enumerate() {
        let row = result.map_err(|e| ResourceError::CpiParse {
            row: index + 1,
            reason: e.to_string(),
        })?;
        pairs.push((row.year, row.cpi));
    }

    CpiTable::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_year_and_cpi_columns() {
        let csv = "year,cpi\n2025,100.0\n2026,105.0\n";
        let table = parse_cpi_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(2025), 100.0);
        assert_eq!(table.lookup(2026), 105.0);
    }

    #[test]
    fn test_ignores_extra_columns_and_order() {
        let csv = "cpi, lower_ci ,year\n112.4,108.0,2030\n 115.1 ,110.2, 2031\n";
        let table = parse_cpi_csv(csv.as_bytes()).unwrap();

        assert_eq!(table.get(2030), Some(112.4));
        assert_eq!(table.get(2031), Some(115.1));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let err = parse_cpi_csv("year,value\n2025,100\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing 'cpi' column"));
    }

    #[test]
    fn test_bad_value_reports_row() {
        let err = parse_cpi_csv("year,cpi\n2025,100\n2026,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ResourceError::CpiParse { row: 2, .. }));
    }

    #[test]
    fn test_header_only_file_is_invalid() {
        let err = parse_cpi_csv("year,cpi\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ResourceError::CpiInvalid { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_cpi_table(Path::new("no/such/cpi.csv")).unwrap_err();
        assert!(matches!(err, ResourceError::CpiRead { .. }));
    }
}
