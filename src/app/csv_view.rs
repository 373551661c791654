//! Shared CSV selection, loading, and plotting state.
//!
//! Both window controllers embed a [`CsvView`]; this is the single home of
//! the file-dialog prompt, the dataset ownership, and the series rendering.

use std::path::PathBuf;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use log::{error, info};

use crate::dataset::Dataset;
use crate::series::{build_series, SeriesDesc};

/// CSV state owned by a window controller. With no file selected every graph
/// path through here is a no-op.
#[derive(Default)]
pub struct CsvView {
    csv_path: Option<PathBuf>,
    dataset: Option<Dataset>,
    series: Vec<SeriesDesc>,
    load_error: Option<String>,
}

impl CsvView {
    /// Open the native file picker (CSV plus catch-all filter) and load the
    /// chosen file. Blocks the UI thread for the dialog's duration.
    pub fn prompt_and_load(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.load_path(path);
        }
    }

    /// Load `path`, replacing any previously loaded dataset. On failure the
    /// previous dataset is discarded and the error is kept for display.
    pub fn load_path(&mut self, path: PathBuf) {
        match Dataset::load(&path) {
            Ok(dataset) => {
                info!("CSV file loaded: {}", path.display());
                self.series = build_series(&dataset);
                self.dataset = Some(dataset);
                self.csv_path = Some(path);
                self.load_error = None;
            }
            Err(err) => {
                error!("failed to load {}: {err}", path.display());
                self.series.clear();
                self.dataset = None;
                self.csv_path = None;
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn series(&self) -> &[SeriesDesc] {
        &self.series
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Render the last load error, if any, as a single status line.
    pub fn show_status(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.load_error {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("⚠ {err}"));
        }
    }

    /// Draw the loaded columns as line + scatter series. No-op when no file
    /// has been selected.
    pub fn show_plot(&self, ui: &mut egui::Ui) {
        if self.series.is_empty() {
            return;
        }
        Plot::new("csv_data")
            .legend(Legend::default())
            .x_axis_label("Row")
            .y_axis_label("Column")
            .show(ui, |plot_ui| {
                for series in &self.series {
                    plot_ui.line(
                        Line::new(series.name.clone(), PlotPoints::from(series.points.clone()))
                            .color(series.color)
                            .width(1.0),
                    );
                    plot_ui.points(
                        Points::new(format!("Points {}", series.name), series.points.clone())
                            .shape(series.marker)
                            .radius(3.0)
                            .color(series.color),
                    );
                }
            });
    }
}
