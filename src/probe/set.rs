use crate::data::model::{Table, Value};
use crate::error::ProbeError;

/// Header of the synthetic label column prepended on export.
pub const PROBE_LABEL_COLUMN: &str = "probe label";

/// Whether any probes are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSetState {
    Empty,
    Populated,
}

// ---------------------------------------------------------------------------
// ProbeSet – ordered, deduplicated row indices
// ---------------------------------------------------------------------------

/// Row indices picked by the user, in the order they were picked.
///
/// A set is bound to the row count of the table it was created for; a new
/// table gets a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSet {
    indices: Vec<usize>,
    row_count: usize,
}

impl ProbeSet {
    pub fn new(row_count: usize) -> Self {
        Self {
            indices: Vec::new(),
            row_count,
        }
    }

    /// Append `index` unless it is already present. Returns whether the set changed.
    pub fn add(&mut self, index: usize) -> Result<bool, ProbeError> {
        if index >= self.row_count {
            return Err(ProbeError::OutOfRange {
                index,
                row_count: self.row_count,
            });
        }
        if self.indices.contains(&index) {
            return Ok(false);
        }
        self.indices.push(index);
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.indices.clear();
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn state(&self) -> ProbeSetState {
        if self.indices.is_empty() {
            ProbeSetState::Empty
        } else {
            ProbeSetState::Populated
        }
    }

    /// `P1`, `P2`, ... for the 0-based position in the set.
    pub fn label(position: usize) -> String {
        format!("P{}", position + 1)
    }

    /// Probed rows in probe order, led by a `probe label` column. If the
    /// source already has a column of that name, the label column becomes
    /// `probe label.1` (or the next free suffix).
    pub fn export(&self, table: &Table) -> Table {
        let picked = table.take(self.indices.iter().copied());
        let name = picked.unused_column_name(PROBE_LABEL_COLUMN);
        let labels = (0..picked.len())
            .map(|i| Value::String(Self::label(i)))
            .collect();
        picked
            .with_leading_column(&name, labels)
            .expect("label column name is unused and has one label per row")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> Table {
        Table::new(
            vec!["x".into(), "y".into()],
            (0..rows)
                .map(|i| vec![Value::Integer(i as i64), Value::Integer(10 * i as i64)])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_dedups_keeping_first_position() {
        let mut set = ProbeSet::new(10);
        assert_eq!(set.add(5), Ok(true));
        assert_eq!(set.add(5), Ok(false));
        assert_eq!(set.add(2), Ok(true));
        assert_eq!(set.indices(), [5, 2]);
        assert_eq!(set.add(5), Ok(false));
        assert_eq!(set.indices(), [5, 2]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = ProbeSet::new(4);
        once.add(3).unwrap();
        let mut twice = once.clone();
        twice.add(3).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_out_of_range() {
        let mut set = ProbeSet::new(3);
        assert_eq!(
            set.add(3),
            Err(ProbeError::OutOfRange {
                index: 3,
                row_count: 3
            })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_reset_matches_fresh_session() {
        let mut used = ProbeSet::new(8);
        for i in [7, 1, 4] {
            used.add(i).unwrap();
        }
        used.reset();
        let mut fresh = ProbeSet::new(8);
        for i in [2, 6, 2] {
            used.add(i).unwrap();
            fresh.add(i).unwrap();
        }
        assert_eq!(used, fresh);
        assert_eq!(used.indices(), [2, 6]);
    }

    #[test]
    fn test_state_transitions() {
        let mut set = ProbeSet::new(2);
        assert_eq!(set.state(), ProbeSetState::Empty);
        set.reset();
        assert_eq!(set.state(), ProbeSetState::Empty);
        set.add(0).unwrap();
        assert_eq!(set.state(), ProbeSetState::Populated);
        set.add(0).unwrap();
        assert_eq!(set.state(), ProbeSetState::Populated);
        set.reset();
        assert_eq!(set.state(), ProbeSetState::Empty);
    }

    #[test]
    fn test_export_order_and_labels() {
        let t = table(10);
        let mut set = ProbeSet::new(t.len());
        for i in [9, 0, 4] {
            set.add(i).unwrap();
        }
        let out = set.export(&t);
        assert_eq!(out.columns(), [PROBE_LABEL_COLUMN, "x", "y"]);
        assert_eq!(out.len(), set.len());
        let labels: Vec<String> = out.rows().iter().map(|r| r[0].to_string()).collect();
        assert_eq!(labels, ["P1", "P2", "P3"]);
        let xs: Vec<Value> = out.rows().iter().map(|r| r[1].clone()).collect();
        assert_eq!(xs, [Value::Integer(9), Value::Integer(0), Value::Integer(4)]);
    }

    #[test]
    fn test_export_label_column_does_not_clash() {
        let t = Table::new(
            vec!["x".into(), PROBE_LABEL_COLUMN.into()],
            vec![
                vec![Value::Integer(0), Value::String("a".into())],
                vec![Value::Integer(1), Value::String("b".into())],
            ],
        )
        .unwrap();
        let mut set = ProbeSet::new(t.len());
        set.add(1).unwrap();
        set.add(0).unwrap();
        let out = set.export(&t);
        assert_eq!(out.columns(), ["probe label.1", "x", PROBE_LABEL_COLUMN]);
        let labels: Vec<String> = out.rows().iter().map(|r| r[0].to_string()).collect();
        assert_eq!(labels, ["P1", "P2"]);
        assert_eq!(out.rows()[0][2], Value::String("b".into()));
    }

    #[test]
    fn test_export_empty() {
        let out = ProbeSet::new(3).export(&table(3));
        assert!(out.is_empty());
        assert_eq!(out.columns().len(), 3);
    }
}
