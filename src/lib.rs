//! waveplot crate root: re-exports and module wiring.
//!
//! Two small demo UIs built on egui/eframe:
//! - `csv-plotter`: load a CSV file and plot up to five columns as
//!   line + scatter series against row index.
//! - `waveform`: live animated sine/cosine/triangular signal with frequency
//!   and amplitude sliders, plus the same CSV view as a secondary plot.
//!
//! The reusable logic lives in cohesive modules:
//! - `waveform`: kinds, parameters, phase domain, oscillator, noise sources
//! - `dataset`: CSV loading and the load-boundary error type
//! - `series`: pure dataset → drawable-series construction
//! - `scheduler`: the recurring UI tick
//! - `app`: the two window controllers and launch helpers

pub mod app;
pub mod dataset;
pub mod scheduler;
pub mod series;
pub mod waveform;

// Public re-exports for a compact external API
pub use app::{run_csv_plotter, run_waveform, CsvPlotterApp, CsvView, WaveformApp};
pub use dataset::{Column, Dataset, DatasetError};
pub use scheduler::TickScheduler;
pub use series::{build_series, SeriesDesc, MARKER_CYCLE};
pub use waveform::{
    phase_domain, sample_waveform, GaussianNoise, NoiseSource, Oscillator, WaveformKind,
    WaveformParams, ZeroNoise,
};
