use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::probe::selector::DEFAULT_RADIUS;

/// Which probing workflow the window starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Click the chart to add probes P1..Pn, then export them.
    #[default]
    Multi,
    /// Move one probe with a slider and inspect the surrounding rows.
    Single,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Multi => "Multi-probe",
            Mode::Single => "Slider probe",
        }
    }
}

/// Interactive X/Y chart for probing rows of tabular data.
#[derive(Debug, Parser)]
#[command(name = "data-probe", version, about)]
pub struct Cli {
    /// Table to open (.csv, .json or .parquet). Without one, sample data is shown.
    pub file: Option<PathBuf>,

    /// Probing mode to start in.
    #[arg(long, value_enum, default_value_t = Mode::Multi)]
    pub mode: Mode,

    /// Seed for the sample data noise (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows shown on each side of the slider probe.
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Write the sample dataset to this CSV file and exit.
    #[arg(long, value_name = "PATH")]
    pub write_sample: Option<PathBuf>,
}
