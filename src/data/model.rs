use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::TableError;

// ---------------------------------------------------------------------------
// Value – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{}", format_float(*v)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

/// Significant digits shown for floats on screen.
const DISPLAY_DIGITS: i32 = 6;

/// Six significant digits, switching to scientific notation for very small
/// or very large magnitudes so tiny readings never collapse to zero.
fn format_float(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v:?}");
    }
    let magnitude = v.abs().log10().floor() as i32;
    if !(-4..DISPLAY_DIGITS).contains(&magnitude) {
        return format!("{v:.4e}");
    }
    let decimals = (DISPLAY_DIGITS - 1 - magnitude).max(1) as usize;
    let text = format!("{v:.decimals$}");
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Rename repeated names the way dataframe readers do: the second `a`
/// becomes `a.1`, the third `a.2`, skipping names already in use.
pub fn dedup_column_names(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if !out.contains(name) {
            out.push(name.clone());
            continue;
        }
        let taken =
            |candidate: &String| out.contains(candidate) || names[i + 1..].contains(candidate);
        let renamed = (1..)
            .map(|n| format!("{name}.{n}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| name.clone());
        out.push(renamed);
    }
    out
}

impl Value {
    /// Numeric projection used for plotting and nearest-point lookup.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Full-precision text for file export (the `Display` form is rounded).
    pub fn to_field(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(v) => format!("{v:?}"),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
        }
    }

    /// Infer the type of a raw text field (CSV cell).
    pub fn infer(s: &str) -> Value {
        if s.is_empty() {
            return Value::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
        match s {
            "true" | "True" => Value::Bool(true),
            "false" | "False" => Value::Bool(false),
            _ => Value::String(s.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Named columns over ordered rows. A row's position is its index.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, checking column names are unique and every row has
    /// one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        if let Some(name) = columns
            .iter()
            .enumerate()
            .find_map(|(i, name)| columns[..i].contains(name).then_some(name))
        {
            return Err(TableError::DuplicateColumn(name.clone()));
        }
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(TableError::RowWidth {
                row,
                expected: columns.len(),
                found: values.len(),
            });
        }
        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Numeric value of `column` at `row`, if both exist and the cell is numeric.
    pub fn f64_at(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column)?.as_f64()
    }

    /// Project rows onto two columns, keeping only rows numeric in both.
    pub fn points(&self, x: usize, y: usize) -> Vec<[f64; 2]> {
        (0..self.len())
            .filter_map(|i| Some([self.f64_at(i, x)?, self.f64_at(i, y)?]))
            .collect()
    }

    /// New table holding the given rows in the given order.
    /// Indices past the end are skipped.
    pub fn take(&self, indices: impl IntoIterator<Item = usize>) -> Table {
        let rows = indices
            .into_iter()
            .filter_map(|i| self.rows.get(i).cloned())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Rows in an inclusive index range, e.g. a selector neighbourhood.
    pub fn slice(&self, range: RangeInclusive<usize>) -> Table {
        self.take(range)
    }

    /// `base`, or `base.1`, `base.2`, ... if that name is taken.
    pub fn unused_column_name(&self, base: &str) -> String {
        if self.column_index(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n}"))
            .find(|candidate| self.column_index(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Prepend a column. `values` must have one entry per row and `name`
    /// must not already be a column.
    pub fn with_leading_column(
        mut self,
        name: &str,
        values: Vec<Value>,
    ) -> Result<Table, TableError> {
        if self.column_index(name).is_some() {
            return Err(TableError::DuplicateColumn(name.to_string()));
        }
        if values.len() != self.rows.len() {
            return Err(TableError::RowWidth {
                row: values.len().min(self.rows.len()),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        self.columns.insert(0, name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(0, value);
        }
        Ok(self)
    }
}
