//! The standalone CSV plotter window.

use eframe::egui;

use super::csv_view::CsvView;

/// Single-window controller: a File menu and one CSV plot.
#[derive(Default)]
pub struct CsvPlotterApp {
    view: CsvView,
}

impl CsvPlotterApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .button("Select File…")
                        .on_hover_text("Open a CSV file and plot its columns")
                        .clicked()
                    {
                        self.view.prompt_and_load();
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for CsvPlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show_status(ui);
            if self.view.has_data() {
                self.view.show_plot(ui);
            } else if self.view.load_error().is_none() {
                ui.centered_and_justified(|ui| {
                    ui.weak("No CSV file loaded — File → Select File…");
                });
            }
        });
    }
}
