//! The live waveform window: animated signal plus an optional CSV view.

use std::time::Instant;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::csv_view::CsvView;
use crate::scheduler::TickScheduler;
use crate::waveform::{
    phase_domain, GaussianNoise, NoiseSource, Oscillator, WaveformKind, WaveformParams,
};

/// Redraw interval for the animated trace.
const TICK_MILLIS: u64 = 100;

/// Single-window controller: waveform menu + dropdown + sliders, a 100 ms
/// tick that re-renders the signal, and the shared CSV view as a secondary
/// plot.
pub struct WaveformApp {
    oscillator: Oscillator,
    noise: Box<dyn NoiseSource>,
    domain: Vec<f64>,
    /// Latest rendered samples, paired index-for-index with `domain`.
    samples: Vec<f64>,
    ticker: TickScheduler,
    view: CsvView,
}

impl WaveformApp {
    pub fn new() -> Self {
        Self::with_noise(Box::new(GaussianNoise::new()))
    }

    /// Construct with a caller-supplied noise source (deterministic renders).
    pub fn with_noise(noise: Box<dyn NoiseSource>) -> Self {
        let mut app = Self {
            oscillator: Oscillator::new(WaveformParams::default()),
            noise,
            domain: phase_domain(),
            samples: Vec::new(),
            ticker: TickScheduler::every_millis(TICK_MILLIS),
            view: CsvView::default(),
        };
        app.render_samples();
        app
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    fn render_samples(&mut self) {
        self.samples = self.oscillator.render(&self.domain, self.noise.as_mut());
    }

    /// Apply control changes. Each parameter setter resets the phase
    /// accumulator; any change triggers an immediate re-render rather than
    /// waiting for the next tick.
    fn apply_params(&mut self, new: WaveformParams) {
        let current = self.oscillator.params();
        if new == current {
            return;
        }
        if new.kind != current.kind {
            self.oscillator.set_kind(new.kind);
        }
        if new.frequency != current.frequency {
            self.oscillator.set_frequency(new.frequency);
        }
        if new.amplitude != current.amplitude {
            self.oscillator.set_amplitude(new.amplitude);
        }
        self.render_samples();
    }

    fn select_kind(&mut self, kind: WaveformKind) {
        // Menu re-selection restarts the sweep even for the current kind.
        self.oscillator.set_kind(kind);
        self.render_samples();
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let mut pick_csv = false;
        let mut pick_kind: Option<WaveformKind> = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Select File…").clicked() {
                        pick_csv = true;
                        ui.close();
                    }
                });
                ui.menu_button("Select WaveForm", |ui| {
                    for kind in WaveformKind::ALL {
                        if ui.button(kind.label()).clicked() {
                            pick_kind = Some(kind);
                            ui.close();
                        }
                    }
                });
            });
        });
        if pick_csv {
            self.view.prompt_and_load();
        }
        if let Some(kind) = pick_kind {
            self.select_kind(kind);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut params = self.oscillator.params();
        egui::ComboBox::from_label("Waveform")
            .selected_text(params.kind.label())
            .show_ui(ui, |ui| {
                for kind in WaveformKind::ALL {
                    ui.selectable_value(&mut params.kind, kind, kind.label());
                }
            });
        ui.add(
            egui::Slider::new(&mut params.frequency, 1..=10)
                .text("Frequency")
                .integer(),
        )
        .on_hover_text("Choose Frequency...");
        ui.add(
            egui::Slider::new(&mut params.amplitude, 1..=100)
                .text("Amplitude")
                .integer(),
        )
        .on_hover_text("Choose Amplitude...");
        self.apply_params(params);
    }

    fn render_waveform_plot(&self, ui: &mut egui::Ui, height: f32) {
        let kind = self.oscillator.params().kind;
        let points: Vec<[f64; 2]> = self
            .domain
            .iter()
            .zip(&self.samples)
            .map(|(&x, &y)| [x, y])
            .collect();
        Plot::new("waveform")
            .legend(Legend::default())
            .height(height)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(kind.label(), PlotPoints::from(points))
                        .color(kind.color())
                        .width(1.0),
                );
            });
    }
}

impl Default for WaveformApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for WaveformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);

        if self.ticker.due(Instant::now()) {
            self.render_samples();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
            self.view.show_status(ui);

            // Split the remaining space with the CSV plot when one is loaded.
            let available = ui.available_height();
            let waveform_height = if self.view.has_data() {
                available * 0.55
            } else {
                available
            };
            self.render_waveform_plot(ui, waveform_height);
            if self.view.has_data() {
                self.view.show_plot(ui);
            }
        });

        // Guarantee a frame when the next tick is due.
        ctx.request_repaint_after(self.ticker.interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{sample_waveform, ZeroNoise, ACCUMULATOR_START, DOMAIN_LEN};

    #[test]
    fn initial_render_fills_the_sample_buffer() {
        let app = WaveformApp::with_noise(Box::new(ZeroNoise));
        assert_eq!(app.samples.len(), DOMAIN_LEN);
    }

    #[test]
    fn param_change_resets_accumulator_and_rerenders() {
        let mut app = WaveformApp::with_noise(Box::new(ZeroNoise));
        // Advance the accumulator a few ticks.
        app.render_samples();
        app.render_samples();
        assert!(app.oscillator.accumulator() > ACCUMULATOR_START);

        let mut params = app.oscillator.params();
        params.frequency = 5;
        app.apply_params(params);
        // apply_params renders once, advancing the fresh accumulator by one step.
        assert_eq!(app.oscillator.accumulator(), ACCUMULATOR_START + 0.5);
        let expected = sample_waveform(app.oscillator.params(), ACCUMULATOR_START, &app.domain);
        assert_eq!(app.samples, expected);
    }

    #[test]
    fn unchanged_params_do_not_reset() {
        let mut app = WaveformApp::with_noise(Box::new(ZeroNoise));
        app.render_samples();
        let acc = app.oscillator.accumulator();
        let params = app.oscillator.params();
        app.apply_params(params);
        assert_eq!(app.oscillator.accumulator(), acc);
    }

    #[test]
    fn menu_selection_resets_even_for_current_kind() {
        let mut app = WaveformApp::with_noise(Box::new(ZeroNoise));
        app.render_samples();
        app.render_samples();
        app.select_kind(WaveformKind::Sine);
        // select_kind resets, then its immediate render advances one step.
        assert_eq!(app.oscillator.accumulator(), ACCUMULATOR_START + 0.5);
    }
}
