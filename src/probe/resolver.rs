use crate::data::model::Table;
use crate::error::ProbeError;

// ---------------------------------------------------------------------------
// Nearest-point resolver
// ---------------------------------------------------------------------------

/// Index of the row whose `column` value is closest to `x`.
///
/// Ties go to the lowest index. Rows with a non-numeric or NaN cell are
/// skipped, like a dataframe `idxmin` skips missing values.
pub fn nearest_index(table: &Table, column: &str, x: f64) -> Result<usize, ProbeError> {
    if table.is_empty() {
        return Err(ProbeError::EmptyTable);
    }
    let col = table
        .column_index(column)
        .ok_or_else(|| ProbeError::ColumnNotFound(column.to_string()))?;

    let mut best: Option<(usize, f64)> = None;
    for (i, row) in table.rows().iter().enumerate() {
        let Some(v) = row[col].as_f64() else {
            continue;
        };
        let dist = (v - x).abs();
        if dist.is_nan() {
            continue;
        }
        // Strict comparison keeps the first of equal distances.
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }

    best.map(|(i, _)| i)
        .ok_or_else(|| ProbeError::NonNumericColumn(column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    fn table_with_x(xs: &[Value]) -> Table {
        Table::new(
            vec!["x".into(), "y".into()],
            xs.iter().map(|x| vec![x.clone(), Value::Integer(0)]).collect(),
        )
        .unwrap()
    }

    fn floats(xs: &[f64]) -> Table {
        table_with_x(&xs.iter().map(|&x| Value::Float(x)).collect::<Vec<_>>())
    }

    #[test]
    fn test_nearest_picks_closest() {
        let t = floats(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(nearest_index(&t, "x", 2.4), Ok(2));
        assert_eq!(nearest_index(&t, "x", 2.6), Ok(3));
        assert_eq!(nearest_index(&t, "x", -50.0), Ok(0));
        assert_eq!(nearest_index(&t, "x", 50.0), Ok(4));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let t = floats(&[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(nearest_index(&t, "x", 1.5), Ok(1));

        let dup = floats(&[5.0, 1.0, 1.0, 5.0]);
        assert_eq!(nearest_index(&dup, "x", 1.0), Ok(1));
        assert_eq!(nearest_index(&dup, "x", 5.0), Ok(0));
    }

    #[test]
    fn test_no_strictly_closer_row() {
        let xs = [3.2, -1.0, 7.5, 0.4, 2.9, 2.9, 10.0];
        let t = floats(&xs);
        for probe in [-3.0, 0.0, 0.7, 2.9, 3.05, 5.0, 8.8, 12.0] {
            let i = nearest_index(&t, "x", probe).unwrap();
            let best = (xs[i] - probe).abs();
            for (j, &x) in xs.iter().enumerate() {
                assert!((x - probe).abs() >= best);
                if (x - probe).abs() == best {
                    assert!(j >= i);
                }
            }
        }
    }

    #[test]
    fn test_unsorted_and_integer_columns() {
        let t = table_with_x(&[Value::Integer(10), Value::Integer(-4), Value::Integer(3)]);
        assert_eq!(nearest_index(&t, "x", 2.0), Ok(2));
    }

    #[test]
    fn test_skips_non_numeric_cells() {
        let t = table_with_x(&[
            Value::String("n/a".into()),
            Value::Null,
            Value::Float(f64::NAN),
            Value::Float(9.0),
        ]);
        assert_eq!(nearest_index(&t, "x", 0.0), Ok(3));
    }

    #[test]
    fn test_empty_table() {
        let t = floats(&[]);
        assert_eq!(nearest_index(&t, "x", 1.0), Err(ProbeError::EmptyTable));
    }

    #[test]
    fn test_bad_column() {
        let t = floats(&[1.0]);
        assert_eq!(
            nearest_index(&t, "z", 1.0),
            Err(ProbeError::ColumnNotFound("z".into()))
        );
        let text = table_with_x(&[Value::String("a".into())]);
        assert_eq!(
            nearest_index(&text, "x", 1.0),
            Err(ProbeError::NonNumericColumn("x".into()))
        );
    }
}
