use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Table, Value, dedup_column_names};

/// Two columns are needed to pick an X and a Y axis.
pub const MIN_COLUMNS: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row followed by records
/// * `.json`    – `[{ "col": value, ... }, ...]`
/// * `.parquet` – flat columns of strings, ints, floats or bools
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" | "txt" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)?
        }
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if table.columns().len() < MIN_COLUMNS {
        bail!(
            "{} has {} column(s); at least {MIN_COLUMNS} are needed for X and Y",
            path.display(),
            table.columns().len()
        );
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per table row.
/// Cell types are inferred per cell; records with the wrong number of
/// fields fail the whole load.
pub fn read_csv<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(Value::infer).collect());
    }

    Table::new(dedup_column_names(headers), rows).context("building table from CSV")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "x": 0.0, "y": 0.12, "note": "first" },
///   { "x": 0.1, "y": 0.14, "note": "second" }
/// ]
/// ```
///
/// Columns appear in first-seen key order; absent keys become null.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<Table> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            columns
                .iter()
                .map(|col| obj.get(col).map_or(Value::Null, json_to_value))
                .collect()
        })
        .collect();

    Table::new(columns, rows).context("building table from JSON")
}

fn json_to_value(val: &JsonValue) -> Value {
    match val {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        other => Value::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one scalar column per table column.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Unsupported column types are shown as
/// their type name.
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for row in 0..batch.num_rows() {
            rows.push(
                batch
                    .columns()
                    .iter()
                    .map(|col| extract_value(col, row))
                    .collect(),
            );
        }
    }

    Table::new(dedup_column_names(columns), rows).context("building table from parquet")
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_value(col: &Arc<dyn Array>, row: usize) -> Value {
    if col.is_null(row) {
        return Value::Null;
    }
    match col.data_type() {
        DataType::Utf8 => Value::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Value::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => Value::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => Value::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => Value::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => Value::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => Value::Bool(col.as_boolean().value(row)),
        other => Value::String(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_csv_infers_cell_types() {
        let csv = "time,value,label\n0,1.5,a\n1,,b\n2,2.5,\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.columns(), ["time", "value", "label"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0][1], Value::Float(1.5));
        assert_eq!(table.rows()[1][1], Value::Null);
        assert_eq!(table.rows()[2][0], Value::Integer(2));
        assert_eq!(table.rows()[0][2], Value::String("a".into()));
    }

    #[test]
    fn test_csv_renames_repeated_headers() {
        let csv = "x,x,y,x\n1,2,3,4\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.columns(), ["x", "x.1", "y", "x.2"]);
        assert_eq!(table.column_index("x.1"), Some(1));
        assert_eq!(table.rows()[0][3], Value::Integer(4));
    }

    #[test]
    fn test_csv_ragged_row_fails() {
        let csv = "a,b\n1,2\n3\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_json_records_union_columns() {
        let json = r#"[{"x": 1, "y": 2.5}, {"x": 2, "note": "n"}]"#;
        let table = parse_json(json).unwrap();
        assert_eq!(table.columns(), ["x", "y", "note"]);
        assert_eq!(table.rows()[1][1], Value::Null);
        assert_eq!(table.rows()[1][2], Value::String("n".into()));
    }

    #[test]
    fn test_json_rejects_non_object_rows() {
        assert!(parse_json("[1, 2]").is_err());
        assert!(parse_json(r#"{"x": 1}"#).is_err());
    }

    #[test]
    fn test_load_file_requires_two_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "only\n1\n2").unwrap();
        drop(f);
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("at least 2"));
    }

    #[test]
    fn test_load_file_csv_and_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "x,y\n0,0\n1,1\n").unwrap();
        assert_eq!(load_file(&path).unwrap().len(), 2);

        let other = dir.path().join("data.xlsx");
        std::fs::write(&other, "").unwrap();
        assert!(load_file(&other).is_err());
    }

    #[test]
    fn test_load_parquet() {
        use arrow::array::{Float64Array, Int64Array, StringArray};
        use arrow::datatypes::{Field, Schema};
        use arrow::record_batch::RecordBatch;
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("value", DataType::Float64, true),
            Field::new("label", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(Float64Array::from(vec![Some(0.5), None])),
                Arc::new(StringArray::from(vec!["a", "b"])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.parquet");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.columns(), ["id", "value", "label"]);
        assert_eq!(table.rows()[0][1], Value::Float(0.5));
        assert_eq!(table.rows()[1][1], Value::Null);
        assert_eq!(table.rows()[1][2], Value::String("b".into()));
    }
}
