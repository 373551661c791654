//! Waveform kinds, parameters, and the animated sampler.
//!
//! The sampling pipeline is split in two:
//! - [`sample_waveform`] is a pure function of (parameters, accumulator,
//!   domain) and is what the exactness tests exercise.
//! - [`Oscillator`] owns the parameters plus the mutable phase accumulator,
//!   applies noise through a pluggable [`NoiseSource`], and advances the
//!   accumulator between renders.

use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Number of points in the fixed phase domain.
pub const DOMAIN_LEN: usize = 1000;

/// Accumulator value after a reset (initial value and after any parameter change).
pub const ACCUMULATOR_START: f64 = 0.01;

/// Accumulator advance per render for the kinds that animate.
pub const ACCUMULATOR_STEP: f64 = 0.5;

/// Standard deviation of the Gaussian display noise.
pub const NOISE_STD_DEV: f64 = 0.2;

/// The fixed phase domain: [`DOMAIN_LEN`] evenly spaced points spanning
/// `[0, 2π]` inclusive. Computed once per app session.
pub fn phase_domain() -> Vec<f64> {
    let step = std::f64::consts::TAU / (DOMAIN_LEN - 1) as f64;
    (0..DOMAIN_LEN).map(|i| i as f64 * step).collect()
}

/// The three selectable waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformKind {
    Sine,
    Cosine,
    Triangular,
}

impl WaveformKind {
    /// All kinds, in menu/dropdown order.
    pub const ALL: [WaveformKind; 3] = [
        WaveformKind::Sine,
        WaveformKind::Cosine,
        WaveformKind::Triangular,
    ];

    /// Human-readable name, used for menus, dropdowns, and the plot legend.
    pub fn label(&self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine",
            WaveformKind::Cosine => "Cosine",
            WaveformKind::Triangular => "Triangular",
        }
    }

    /// Display colour of the rendered trace.
    pub fn color(&self) -> Color32 {
        match self {
            WaveformKind::Sine => Color32::GREEN,
            WaveformKind::Cosine => Color32::RED,
            WaveformKind::Triangular => Color32::BLUE,
        }
    }

    /// Whether this kind reads (and advances) the phase accumulator.
    ///
    /// The triangular branch ignores the accumulator entirely, so its trace
    /// does not animate. That asymmetry is the documented behaviour of the
    /// generator, not an oversight here.
    pub fn uses_accumulator(&self) -> bool {
        !matches!(self, WaveformKind::Triangular)
    }
}

/// Immutable waveform parameters as selected by the UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformParams {
    pub kind: WaveformKind,
    /// Integer frequency multiplier, slider range 1..=10.
    pub frequency: u32,
    /// Integer peak amplitude, slider range 1..=100.
    pub amplitude: u32,
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            kind: WaveformKind::Sine,
            frequency: 1,
            amplitude: 100,
        }
    }
}

/// Compute one pre-noise sample vector for the given parameters.
///
/// - Sine: `a * sin(t + acc * f)`
/// - Cosine: `a * cos(t + acc * f)`
/// - Triangular: `a * (2 * |(t * f) mod 1| - 1)`; the accumulator is unused.
///
/// The output always has the same length as `domain`.
pub fn sample_waveform(params: WaveformParams, accumulator: f64, domain: &[f64]) -> Vec<f64> {
    let a = params.amplitude as f64;
    let f = params.frequency as f64;
    domain
        .iter()
        .map(|&t| match params.kind {
            WaveformKind::Sine => a * (t + accumulator * f).sin(),
            WaveformKind::Cosine => a * (t + accumulator * f).cos(),
            WaveformKind::Triangular => a * (2.0 * ((t * f) % 1.0).abs() - 1.0),
        })
        .collect()
}

/// Source of per-sample additive noise.
///
/// Injected into [`Oscillator::render`] so tests can substitute a zero or
/// seeded source for the production Gaussian one.
pub trait NoiseSource {
    fn next_sample(&mut self) -> f64;
}

/// Gaussian noise with mean 0 and [`NOISE_STD_DEV`] standard deviation.
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Deterministic variant for reproducible renders.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GaussianNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for GaussianNoise {
    fn next_sample(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * NOISE_STD_DEV
    }
}

/// Noise source that contributes nothing. Used by tests asserting exact
/// sample values.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn next_sample(&mut self) -> f64 {
        0.0
    }
}

/// Owns the current [`WaveformParams`] plus the single mutable accumulator
/// cell. Every parameter change resets the accumulator to
/// [`ACCUMULATOR_START`], producing a visible discontinuity in the animation.
#[derive(Debug, Clone)]
pub struct Oscillator {
    params: WaveformParams,
    accumulator: f64,
}

impl Oscillator {
    pub fn new(params: WaveformParams) -> Self {
        Self {
            params,
            accumulator: ACCUMULATOR_START,
        }
    }

    pub fn params(&self) -> WaveformParams {
        self.params
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Select a new waveform shape. Always resets the accumulator, even when
    /// the kind is unchanged (re-selecting from the menu restarts the sweep).
    pub fn set_kind(&mut self, kind: WaveformKind) {
        self.params.kind = kind;
        self.accumulator = ACCUMULATOR_START;
    }

    /// Slider range is 1..=10; out-of-range values are clamped.
    pub fn set_frequency(&mut self, frequency: u32) {
        self.params.frequency = frequency.clamp(1, 10);
        self.accumulator = ACCUMULATOR_START;
    }

    /// Slider range is 1..=100; out-of-range values are clamped.
    pub fn set_amplitude(&mut self, amplitude: u32) {
        self.params.amplitude = amplitude.clamp(1, 100);
        self.accumulator = ACCUMULATOR_START;
    }

    /// Produce one noisy sample vector for `domain` and advance the
    /// accumulator by [`ACCUMULATOR_STEP`] for the kinds that animate.
    pub fn render(&mut self, domain: &[f64], noise: &mut dyn NoiseSource) -> Vec<f64> {
        let mut samples = sample_waveform(self.params, self.accumulator, domain);
        for sample in &mut samples {
            *sample += noise.next_sample();
        }
        if self.params.kind.uses_accumulator() {
            self.accumulator += ACCUMULATOR_STEP;
        }
        samples
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(WaveformParams::default())
    }
}
