//! Entry point for the standalone CSV plotter window.

fn main() -> eframe::Result<()> {
    env_logger::init();
    waveplot::run_csv_plotter()
}
