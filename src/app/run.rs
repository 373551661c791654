//! Native-window launch helpers for the two apps.
//!
//! Each helper builds the app, sets up the viewport, and enters the eframe
//! event loop; the call blocks until the window is closed.

use eframe::egui;

use super::{CsvPlotterApp, WaveformApp};

/// Launch the CSV plotter window. Blocks until the window is closed.
pub fn run_csv_plotter() -> eframe::Result<()> {
    let opts = native_options(egui::vec2(1000.0, 700.0));
    eframe::run_native(
        "CSV Plotter",
        opts,
        Box::new(|_cc| Ok(Box::new(CsvPlotterApp::new()))),
    )
}

/// Launch the waveform generator window. Blocks until the window is closed.
pub fn run_waveform() -> eframe::Result<()> {
    let opts = native_options(egui::vec2(1200.0, 800.0));
    eframe::run_native(
        "Waveform Generator",
        opts,
        Box::new(|_cc| Ok(Box::new(WaveformApp::new()))),
    )
}

fn native_options(size: egui::Vec2) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    }
}
