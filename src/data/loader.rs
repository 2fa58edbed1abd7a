use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::Array;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Direction, RawRecord, RawRow, RejectedRow, TradeDataset};

// ---------------------------------------------------------------------------
// Record parser
// ---------------------------------------------------------------------------

/// Why a raw row could not become a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{field}': '{raw}' is not a number")]
    NotNumeric { field: &'static str, raw: String },
    #[error("field '{field}': '{raw}' is not an integer")]
    NotInteger { field: &'static str, raw: String },
    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(i64),
    #[error("unknown import_export value '{0}'")]
    UnknownDirection(String),
}

/// Turn one raw row into a typed record.
///
/// String columns are copied as-is. `year` and `month` must be integers,
/// `month` within 1–12, and `value` a finite number; surrounding whitespace
/// is ignored. Anything else is reported as a [`ParseError`] rather than
/// coerced.
pub fn parse_record(row: &RawRow) -> Result<RawRecord, ParseError> {
    let year = parse_integer(row, "year")?;
    let year = i32::try_from(year).map_err(|_| ParseError::NotInteger {
        field: "year",
        raw: field(row, "year").unwrap_or_default().to_string(),
    })?;

    let month = parse_integer(row, "month")?;
    if !(1..=12).contains(&month) {
        return Err(ParseError::MonthOutOfRange(month));
    }

    Ok(RawRecord {
        fiber_type: field(row, "fiber_type")?.to_string(),
        import_export: field(row, "import_export")?.parse::<Direction>()?,
        category: field(row, "category")?.to_string(),
        sub_category: field(row, "sub_category")?.to_string(),
        year,
        month: month as u8,
        value: parse_number(row, "value")?,
    })
}

fn field<'a>(row: &'a RawRow, name: &'static str) -> Result<&'a str, ParseError> {
    row.get(name)
        .map(String::as_str)
        .ok_or(ParseError::MissingField(name))
}

fn parse_number(row: &RawRow, name: &'static str) -> Result<f64, ParseError> {
    let raw = field(row, name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingField(name));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::NotNumeric {
            field: name,
            raw: raw.to_string(),
        }),
    }
}

fn parse_integer(row: &RawRow, name: &'static str) -> Result<i64, ParseError> {
    let v = parse_number(row, name)?;
    if v.fract() != 0.0 || v.abs() > i64::MAX as f64 {
        return Err(ParseError::NotInteger {
            field: name,
            raw: field(row, name).unwrap_or_default().to_string(),
        });
    }
    Ok(v as i64)
}

/// Parse every row, keeping the good ones and recording the rest.
pub fn parse_rows(rows: impl IntoIterator<Item = RawRow>) -> TradeDataset {
    let mut dataset = TradeDataset::default();
    for (row, raw) in rows.into_iter().enumerate() {
        match parse_record(&raw) {
            Ok(record) => dataset.records.push(record),
            Err(error) => {
                log::warn!("Skipping row {row}: {error}");
                dataset.rejected.push(RejectedRow { row, error });
            }
        }
    }
    dataset
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a trade dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `fiber_type, import_export, category,
///   sub_category, year, month, value`
/// * `.json`    – `[{ "fiber_type": "raw_cotton", "year": 2020, ... }, ...]`
/// * `.parquet` – one column per field, any scalar type
pub fn load_file(path: &Path) -> Result<TradeDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => parse_rows(read_csv(path)?),
        "json" => parse_rows(read_json(path)?),
        "parquet" | "pq" => parse_rows(read_parquet(path)?),
        other => bail!("Unsupported file extension: .{other}"),
    };

    log::info!(
        "Loaded {} records from {} ({} rejected)",
        dataset.len(),
        path.display(),
        dataset.rejected.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    // Short rows are kept; their missing columns surface as parse errors.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.trim().to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`). Scalars are
/// stringified and go through the same parser as CSV cells; nulls count as
/// missing.
fn read_json(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            Ok(obj
                .iter()
                .filter_map(|(key, val)| json_to_cell(val).map(|cell| (key.clone(), cell)))
                .collect())
        })
        .collect()
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

fn read_parquet(path: &Path) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        for row in 0..batch.num_rows() {
            let mut raw = RawRow::new();
            for (col_idx, field) in schema.fields().iter().enumerate() {
                let col = batch.column(col_idx);
                if col.is_null(row) {
                    continue;
                }
                let cell = array_value_to_string(col, row)
                    .with_context(|| format!("Row {row}: formatting '{}'", field.name()))?;
                raw.insert(field.name().clone(), cell);
            }
            rows.push(raw);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn cotton_row(month: &str, value: &str) -> RawRow {
        row(&[
            ("fiber_type", "raw_cotton"),
            ("import_export", "import"),
            ("category", "raw_fiber"),
            ("sub_category", "cotton"),
            ("year", "2020"),
            ("month", month),
            ("value", value),
        ])
    }

    #[test]
    fn parses_numeric_fields() {
        let record = parse_record(&cotton_row(" 3 ", "1250.5")).unwrap();
        assert_eq!(record.year, 2020);
        assert_eq!(record.month, 3);
        assert_eq!(record.value, 1250.5);
        assert_eq!(record.import_export, Direction::Import);
        assert_eq!(record.sub_category, "cotton");
    }

    #[test]
    fn malformed_number_is_flagged_the_same_way_every_time() {
        let bad = cotton_row("3", "lots");
        let first = parse_record(&bad);
        assert_eq!(
            first,
            Err(ParseError::NotNumeric {
                field: "value",
                raw: "lots".into()
            })
        );
        assert_eq!(parse_record(&bad), first);
    }

    #[test]
    fn rejects_nan_fractional_and_out_of_range_values() {
        assert!(matches!(
            parse_record(&cotton_row("3", "NaN")),
            Err(ParseError::NotNumeric { field: "value", .. })
        ));
        assert!(matches!(
            parse_record(&cotton_row("2.5", "1")),
            Err(ParseError::NotInteger { field: "month", .. })
        ));
        assert_eq!(
            parse_record(&cotton_row("13", "1")),
            Err(ParseError::MonthOutOfRange(13))
        );
        assert_eq!(
            parse_record(&cotton_row("", "1")),
            Err(ParseError::MissingField("month"))
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let mut r = cotton_row("1", "1");
        r.remove("category");
        assert_eq!(parse_record(&r), Err(ParseError::MissingField("category")));
    }

    #[test]
    fn parse_rows_keeps_row_numbers_of_rejects() {
        let dataset = parse_rows(vec![
            cotton_row("1", "10"),
            cotton_row("x", "10"),
            cotton_row("2", "20"),
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected.len(), 1);
        assert_eq!(dataset.rejected[0].row, 1);
    }

    #[test]
    fn loads_csv_and_skips_bad_rows() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "fiber_type,import_export,category,sub_category,year,month,value\n\
             raw_cotton,import,raw_fiber,cotton,2020,1,100\n\
             raw_cotton,export,raw_fiber,cotton,2020,1,abc\n\
             wool,export,apparel,sweaters,2019,12,7.5"
        )
        .unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected.len(), 1);
        assert_eq!(dataset.records[1].fiber_type, "wool");
        assert_eq!(dataset.records[1].value, 7.5);
    }

    #[test]
    fn short_csv_row_is_rejected_not_fatal() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "fiber_type,import_export,category,sub_category,year,month,value\n\
             raw_cotton,import,raw_fiber,cotton,2020,1,100\n\
             raw_cotton,import,raw_fiber,cotton,2020,2"
        )
        .unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rejected.len(), 1);
        assert_eq!(dataset.rejected[0].row, 1);
        assert_eq!(dataset.rejected[0].error, ParseError::MissingField("value"));
    }

    #[test]
    fn loads_json_records() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"fiber_type":"raw_cotton","import_export":"export","category":"raw_fiber",
                "sub_category":"cotton","year":2020,"month":6,"value":12.25}},
               {{"fiber_type":"raw_cotton","import_export":"export","category":"raw_fiber",
                "sub_category":"cotton","year":2020,"month":null,"value":1}}]"#
        )
        .unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].month, 6);
        assert_eq!(dataset.records[0].value, 12.25);
        assert_eq!(
            dataset.rejected[0].error,
            ParseError::MissingField("month")
        );
    }

    #[test]
    fn loads_parquet_columns() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("fiber_type", DataType::Utf8, false),
            Field::new("import_export", DataType::Utf8, false),
            Field::new("category", DataType::Utf8, false),
            Field::new("sub_category", DataType::Utf8, false),
            Field::new("year", DataType::Int64, false),
            Field::new("month", DataType::Int64, false),
            Field::new("value", DataType::Float64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["raw_cotton", "raw_cotton"])),
                Arc::new(StringArray::from(vec!["import", "export"])),
                Arc::new(StringArray::from(vec!["raw_fiber", "raw_fiber"])),
                Arc::new(StringArray::from(vec!["cotton", "cotton"])),
                Arc::new(Int64Array::from(vec![2020, 2020])),
                Arc::new(Int64Array::from(vec![4, 5])),
                Arc::new(Float64Array::from(vec![80.0, 0.5])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.as_file().try_clone().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let dataset = load_file(file.path()).unwrap();
        assert!(dataset.rejected.is_empty());
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].month, 4);
        assert_eq!(dataset.records[1].import_export, Direction::Export);
        assert_eq!(dataset.records[1].value, 0.5);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(load_file(file.path()).is_err());
    }
}
