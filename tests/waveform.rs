use waveplot::waveform::{
    phase_domain, sample_waveform, Oscillator, WaveformKind, WaveformParams, ZeroNoise,
    ACCUMULATOR_START, ACCUMULATOR_STEP, DOMAIN_LEN,
};

#[test]
fn pre_noise_sine_matches_formula_exactly() {
    let domain = phase_domain();
    for frequency in [1u32, 3, 10] {
        for amplitude in [1u32, 42, 100] {
            let params = WaveformParams {
                kind: WaveformKind::Sine,
                frequency,
                amplitude,
            };
            let accumulator = ACCUMULATOR_START;
            let samples = sample_waveform(params, accumulator, &domain);
            for (i, &t) in domain.iter().enumerate() {
                let expected = amplitude as f64 * (t + accumulator * frequency as f64).sin();
                assert_eq!(samples[i], expected, "mismatch at index {i}");
            }
        }
    }
}

#[test]
fn any_parameter_change_resets_accumulator() {
    let mut osc = Oscillator::default();
    let domain = phase_domain();

    // Advance past the start value first, then check each setter resets.
    for setter in [
        (|o: &mut Oscillator| o.set_kind(WaveformKind::Cosine)) as fn(&mut Oscillator),
        |o| o.set_frequency(5),
        |o| o.set_amplitude(50),
    ] {
        osc.render(&domain, &mut ZeroNoise);
        osc.render(&domain, &mut ZeroNoise);
        assert!(osc.accumulator() > ACCUMULATOR_START);
        setter(&mut osc);
        assert_eq!(osc.accumulator(), ACCUMULATOR_START);
    }
}

#[test]
fn sine_and_cosine_advance_the_accumulator() {
    let domain = phase_domain();
    for kind in [WaveformKind::Sine, WaveformKind::Cosine] {
        let mut osc = Oscillator::new(WaveformParams {
            kind,
            ..WaveformParams::default()
        });
        let mut expected = ACCUMULATOR_START;
        for _ in 0..3 {
            osc.render(&domain, &mut ZeroNoise);
            expected += ACCUMULATOR_STEP;
            assert_eq!(osc.accumulator(), expected);
        }
    }
}

#[test]
fn triangular_never_uses_the_accumulator() {
    let domain = phase_domain();
    let mut osc = Oscillator::new(WaveformParams {
        kind: WaveformKind::Triangular,
        frequency: 3,
        amplitude: 20,
    });
    let first = osc.render(&domain, &mut ZeroNoise);
    let second = osc.render(&domain, &mut ZeroNoise);
    // Consecutive ticks with unchanged parameters and zero noise are identical,
    // and the accumulator does not advance.
    assert_eq!(first, second);
    assert_eq!(osc.accumulator(), ACCUMULATOR_START);

    // Even a wildly different accumulator yields the same pre-noise output.
    let params = osc.params();
    assert_eq!(
        sample_waveform(params, 0.01, &domain),
        sample_waveform(params, 123.45, &domain)
    );
}

#[test]
fn sample_buffer_length_is_always_1000() {
    let domain = phase_domain();
    assert_eq!(domain.len(), 1000);
    assert_eq!(DOMAIN_LEN, 1000);
    for kind in WaveformKind::ALL {
        for (frequency, amplitude) in [(1u32, 1u32), (10, 100), (4, 73)] {
            let mut osc = Oscillator::new(WaveformParams {
                kind,
                frequency,
                amplitude,
            });
            assert_eq!(osc.render(&domain, &mut ZeroNoise).len(), 1000);
        }
    }
}
