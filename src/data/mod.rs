//! Data layer: the table model, loading, the sample fallback and export.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet        (no file)
//!        │                            │
//!        ▼                            ▼
//!   ┌──────────┐               ┌──────────┐
//!   │  loader   │              │  sample   │  sin²(x) + noise
//!   └──────────┘               └──────────┘
//!        │                            │
//!        └─────────────┬──────────────┘
//!                      ▼
//!               ┌────────────┐
//!               │   Table     │  columns + ordered rows
//!               └────────────┘
//!                      │  probed rows
//!                      ▼
//!               ┌────────────┐
//!               │  export     │  → .csv / .json
//!               └────────────┘
//! ```

pub mod export;
pub mod loader;
pub mod model;
pub mod sample;
