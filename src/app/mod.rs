//! Window controllers for the two demo apps, plus launch helpers.
//!
//! - [`CsvPlotterApp`]: load a CSV file and plot its columns.
//! - [`WaveformApp`]: live animated waveform with an optional secondary CSV
//!   view; embeds the same [`CsvView`] the CSV plotter uses.

mod csv_app;
mod csv_view;
mod run;
mod waveform_app;

pub use csv_app::CsvPlotterApp;
pub use csv_view::CsvView;
pub use run::{run_csv_plotter, run_waveform};
pub use waveform_app::WaveformApp;
