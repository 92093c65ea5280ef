//! Integration tests: building curves from quote files.

use std::io::Write;

use approx::assert_abs_diff_eq;
use tempfile::NamedTempFile;

use zerocurve_curves::prelude::*;
use zerocurve_ext_file::{open_quote_source, CsvQuoteSource, JsonQuoteSource};

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const CSV: &str = "\
Tenor,Rate,Maturity,Settlement_Date,Source
3 MO,\"6,673567\",15.10.2021,15.07.2021,desk
 4 MO , 6.88047 ,15.11.2021,15.07.2021,desk
1 YR,7.347589,2022-07-15,2021-07-15,desk
";

#[test]
fn test_csv_source() {
    let file = temp_file(".csv", CSV);
    let source = CsvQuoteSource::new(file.path());

    let rows = source.load().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].tenor.as_deref(), Some("4 MO"));
    assert_eq!(rows[1].rate.as_deref(), Some("6.88047"));

    let spot = SpotCurve::from_source(&source).unwrap();
    assert_eq!(spot.min_tenor_days(), 90);
    assert_eq!(spot.max_tenor_days(), 365);
    assert_abs_diff_eq!(spot.rate_at_tenor("4 MO").unwrap(), 0.068_804_7, epsilon = 1e-12);
}

#[test]
fn test_csv_semicolon_delimiter() {
    let file = temp_file(
        ".csv",
        "Tenor;Rate;Maturity;Settlement_Date\n3 MO;6,5;15.10.2021;15.07.2021\n6 MO;7,0;15.01.2022;15.07.2021\n",
    );
    let source = CsvQuoteSource::new(file.path()).with_delimiter(b';');

    let spot = SpotCurve::from_source(&source).unwrap();
    assert_abs_diff_eq!(spot.rate_at_days(180).unwrap(), 0.07, epsilon = 1e-12);
}

#[test]
fn test_csv_missing_column_reported() {
    let file = temp_file(
        ".csv",
        "Tenor,Rate,Settlement_Date\n3 MO,6.5,15.07.2021\n",
    );
    let err = SpotCurve::from_source(&CsvQuoteSource::new(file.path())).unwrap_err();
    assert_eq!(
        err,
        CurveError::InvalidColumns {
            missing: vec!["Maturity".to_string()]
        }
    );
}

#[test]
fn test_csv_empty_file_is_empty_dataset() {
    let file = temp_file(".csv", "Tenor,Rate,Maturity,Settlement_Date\n");
    let err = SpotCurve::from_source(&CsvQuoteSource::new(file.path())).unwrap_err();
    assert_eq!(err, CurveError::EmptyDataset);
}

#[test]
fn test_json_source() {
    let file = temp_file(
        ".json",
        r#"[
            {"Tenor": "3 MO", "Rate": 6.673567, "Maturity": "15.10.2021", "Settlement_Date": "15.07.2021"},
            {"Tenor": "4 MO", "Rate": "6,88047", "Maturity": "15.11.2021", "Settlement_Date": "15.07.2021"}
        ]"#,
    );
    let source = JsonQuoteSource::new(file.path());

    let spot = SpotCurve::from_source(&source).unwrap();
    assert_abs_diff_eq!(spot.rate_at_days(90).unwrap(), 0.066_735_67, epsilon = 1e-12);
    assert_abs_diff_eq!(spot.rate_at_days(120).unwrap(), 0.068_804_7, epsilon = 1e-12);
}

#[test]
fn test_json_malformed() {
    let file = temp_file(".json", "{ not json");
    let err = JsonQuoteSource::new(file.path()).load().unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));

    let err = SpotCurve::from_source(&JsonQuoteSource::new(file.path())).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_open_by_extension() {
    let json = temp_file(
        ".json",
        r#"[{"Tenor": "3 MO", "Rate": 6.5, "Maturity": "15.10.2021", "Settlement_Date": "15.07.2021"}]"#,
    );
    let tsv = temp_file(
        ".tsv",
        "Tenor\tRate\tMaturity\tSettlement_Date\n3 MO\t6.5\t15.10.2021\t15.07.2021\n",
    );
    let csv = temp_file(".csv", CSV);

    for path in [json.path(), tsv.path(), csv.path()] {
        let source = open_quote_source(path, None);
        let spot = SpotCurve::from_source(&source).unwrap();
        assert_eq!(spot.min_tenor_days(), 90);
    }
}

#[test]
fn test_missing_file() {
    let err = SpotCurve::from_source(&open_quote_source("/no/such/rates.csv", None)).unwrap_err();
    assert!(matches!(err, CurveError::Source(SourceError::NotFound(_))));
}
