use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Mode;
use crate::data::export;
use crate::data::loader;
use crate::data::model::Table;
use crate::error::{ExportError, ProbeError};
use crate::probe::resolver::nearest_index;
use crate::probe::selector::{DEFAULT_RADIUS, IndexSelector};
use crate::probe::set::ProbeSet;

// ---------------------------------------------------------------------------
// Where the table came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Generated sample data (no file loaded).
    Sample,
    File(PathBuf),
}

/// Columns projected onto the chart axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
}

impl AxisSelection {
    /// First column on X, second (or the first again) on Y.
    pub fn default_for(table: &Table) -> Self {
        let cols = table.columns();
        let x = cols.first().cloned().unwrap_or_default();
        let y = cols.get(1).cloned().unwrap_or_else(|| x.clone());
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded table; replaced wholesale on load.
    pub table: Table,

    pub source: DataSource,

    pub axes: AxisSelection,

    pub mode: Mode,

    /// Multi-probe mode selection.
    pub probes: ProbeSet,

    /// Single-probe mode selection.
    pub selector: IndexSelector,

    /// Rows shown on each side of the slider probe.
    pub radius: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: Table, source: DataSource, mode: Mode) -> Self {
        Self {
            axes: AxisSelection::default_for(&table),
            probes: ProbeSet::new(table.len()),
            selector: IndexSelector::new(table.len()),
            table,
            source,
            mode,
            radius: DEFAULT_RADIUS,
            status_message: None,
        }
    }

    /// Replace the table. Probes and the slider index belong to the old
    /// table and start over.
    pub fn set_table(&mut self, table: Table, source: DataSource) {
        self.axes = AxisSelection::default_for(&table);
        self.probes = ProbeSet::new(table.len());
        self.selector = IndexSelector::new(table.len());
        self.table = table;
        self.source = source;
        self.status_message = None;
    }

    /// Load a file. On failure the current table and probes are kept and
    /// the error is shown in the status line.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        match loader::load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?} from {}",
                    table.len(),
                    table.columns(),
                    path.display()
                );
                self.set_table(table, DataSource::File(path.to_path_buf()));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    pub fn set_x_column(&mut self, col: String) {
        self.axes.x = col;
    }

    pub fn set_y_column(&mut self, col: String) {
        self.axes.y = col;
    }

    /// Add the row nearest to a clicked X coordinate as a probe.
    /// Returns whether a new probe was added.
    pub fn click_at(&mut self, x: f64) -> Result<bool, ProbeError> {
        let index = nearest_index(&self.table, &self.axes.x, x)?;
        let added = self.probes.add(index)?;
        if added {
            log::debug!(
                "Probe {} at row {index} (clicked x = {x})",
                ProbeSet::label(self.probes.len() - 1)
            );
        }
        Ok(added)
    }

    pub fn reset_probes(&mut self) {
        log::debug!("Removing {} probes", self.probes.len());
        self.probes.reset();
    }

    /// Move the slider probe.
    pub fn select(&mut self, index: usize) -> Result<(), ProbeError> {
        self.selector.set(index)
    }

    /// Probed rows with their `P1..Pn` labels.
    pub fn probed_table(&self) -> Table {
        self.probes.export(&self.table)
    }

    /// Rows around the slider probe, with the index of the first one.
    pub fn neighborhood(&self) -> Option<(usize, Table)> {
        let index = self.selector.index()?;
        let range = self.selector.neighborhood(index, self.radius).ok()?;
        Some((*range.start(), self.table.slice(range)))
    }

    pub fn export_probes(&mut self, path: &Path) -> Result<usize, ExportError> {
        let result = export::export_to_path(&self.probed_table(), path);
        match &result {
            Ok(n) => {
                log::info!("Exported {n} probes to {}", path.display());
                self.status_message = Some(format!("Saved {n} probes to {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        result
    }
}
