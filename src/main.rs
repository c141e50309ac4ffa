mod app;
mod color;
mod config;
mod data;
mod error;
mod probe;
mod state;
mod ui;
mod view;

use std::process::ExitCode;

use app::DataProbeApp;
use clap::Parser;
use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use config::Cli;
use data::model::Table;
use state::{AppState, DataSource};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.write_sample {
        let table = sample_table(cli.seed);
        return match data::export::export_to_path(&table, path) {
            Ok(n) => {
                println!("Wrote {n} sample rows to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut state = AppState::new(sample_table(cli.seed), DataSource::Sample, cli.mode);
    state.radius = cli.radius;
    if let Some(path) = &cli.file {
        // On failure the sample data stays and the error shows in the status line.
        if let Err(e) = state.load_file(path) {
            log::debug!("Starting with sample data instead of {}: {e:#}", path.display());
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Data Probe",
        options,
        Box::new(move |_cc| Ok(Box::new(DataProbeApp::new(state)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn sample_table(seed: Option<u64>) -> Table {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Generating sample data with seed {seed}");
    data::sample::sample_table(&mut StdRng::seed_from_u64(seed))
}
