//! Probe selection: mapping chart clicks to rows and holding the picked rows.
//!
//! * [`resolver`] – clicked X coordinate → nearest row index
//! * [`set`]      – multi-probe mode: ordered, deduplicated indices
//! * [`selector`] – single-probe mode: one slider-driven index

pub mod resolver;
pub mod selector;
pub mod set;
