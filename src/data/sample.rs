use rand::Rng;

use super::model::{Table, Value};

// ---------------------------------------------------------------------------
// Synthetic fallback dataset
// ---------------------------------------------------------------------------

pub const SAMPLE_ROWS: usize = 100;
pub const SAMPLE_X_MAX: f64 = 10.0;
pub const SAMPLE_NOISE_STD: f64 = 0.05;

/// Dataset shown when no file is loaded: `x` evenly spaced over
/// `[0, 10]`, `y = sin(x)^2 + noise`, and a descriptive `note` column.
pub fn sample_table<R: Rng + ?Sized>(rng: &mut R) -> Table {
    let columns = vec!["x".to_string(), "y".to_string(), "note".to_string()];
    let rows = (0..SAMPLE_ROWS)
        .map(|i| {
            let x = SAMPLE_X_MAX * i as f64 / (SAMPLE_ROWS - 1) as f64;
            let y = x.sin().powi(2) + gauss(rng, 0.0, SAMPLE_NOISE_STD);
            vec![
                Value::Float(x),
                Value::Float(y),
                Value::String(format!("sample data {i}")),
            ]
        })
        .collect();

    Table::new(columns, rows).expect("sample rows have one value per column")
}

/// Box-Muller transform for normal distribution
fn gauss<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.random::<f64>().max(1e-15);
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
