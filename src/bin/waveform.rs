//! Entry point for the live waveform generator window.

fn main() -> eframe::Result<()> {
    env_logger::init();
    waveplot::run_waveform()
}
