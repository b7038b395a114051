use adc_rms::{Engine, FilterState, OFFSET_COUNTS, SampleResult, SignalParams, compute_sample};

const STEP_US: u64 = 100;
const RUN_US: u64 = 2_000_000;

/// Run a fresh engine over `0..end` and collect every result.
fn run(params: SignalParams, end: u64) -> Vec<(u64, SampleResult)> {
    let mut engine = Engine::new();
    (0..end)
        .step_by(STEP_US as usize)
        .map(|t| (t, engine.update(t, &params)))
        .collect()
}

fn settled_smoothed(amplitude: f64) -> i32 {
    let results = run(SignalParams::new(50.0, amplitude), RUN_US);
    results.last().map(|(_, r)| r.smoothed_magnitude).unwrap()
}

#[test]
fn test_same_inputs_same_outputs() {
    let inputs: Vec<(u64, f64, f64)> = (0..5_000_u64)
        .map(|i| (i * STEP_US, 10.0 + (i % 7) as f64, 500.0 + (i % 13) as f64 * 100.0))
        .collect();

    let replay = || {
        let mut state = FilterState::initial();
        let mut out = Vec::with_capacity(inputs.len());
        for &(t, f, a) in &inputs {
            let (result, next) = compute_sample(state, t, f, a);
            state = next;
            out.push(result);
        }
        (out, state)
    };

    assert_eq!(replay(), replay());
}

#[test]
fn test_first_tick_from_initial_state() {
    let (result, _) = compute_sample(FilterState::initial(), 0, 50.0, 1000.0);
    assert_eq!(
        result,
        SampleResult {
            raw_sample: 2048,
            rectified_magnitude: 0,
            smoothed_magnitude: 0,
        }
    );
}

#[test]
fn test_zero_amplitude_is_silent() {
    for (_, result) in run(SignalParams::new(50.0, 0.0), 200_000) {
        assert_eq!(result.raw_sample, OFFSET_COUNTS);
        assert_eq!(result.rectified_magnitude, 0);
        assert_eq!(result.smoothed_magnitude, 0);
    }
}

#[test]
fn test_quarter_period_peak() {
    let results = run(SignalParams::new(50.0, 1000.0), 10_000);
    let (_, at_quarter) = results.iter().find(|(t, _)| *t == 5_000).unwrap();
    assert!(
        (at_quarter.raw_sample - 3048).abs() <= 1,
        "raw at 5000 µs was {}",
        at_quarter.raw_sample
    );
}

#[test]
fn test_golden_run_50hz_1000_counts() {
    let results = run(SignalParams::new(50.0, 1000.0), RUN_US);
    assert_eq!(results.len(), 20_000);

    let (t, last) = results.last().copied().unwrap();
    assert_eq!(t, 1_999_900);
    assert_eq!(last.raw_sample, 2016);
    assert_eq!(last.rectified_magnitude, 637);
    assert_eq!(last.smoothed_magnitude, 636);
}

#[test]
fn test_steady_state_band() {
    let results = run(SignalParams::new(50.0, 1000.0), RUN_US);
    let tail = &results[results.len() - 2_000..];

    let min = tail.iter().map(|(_, r)| r.smoothed_magnitude).min().unwrap();
    let max = tail.iter().map(|(_, r)| r.smoothed_magnitude).max().unwrap();

    assert_eq!((min, max), (633, 636));
    // Mean absolute value of a 1000-count sine is 2/pi * 1000
    assert!(max < 1000 && min > 600);
}

#[test]
fn test_settled_magnitude_monotonic_in_amplitude() {
    let amplitudes = [0.0, 100.0, 500.0, 1000.0, 2000.0, 4000.0];
    let settled: Vec<i32> = amplitudes.iter().map(|&a| settled_smoothed(a)).collect();

    assert!(
        settled.windows(2).all(|w| w[0] <= w[1]),
        "settled values not monotonic: {:?}",
        settled
    );
    assert_eq!(settled[0], 0);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = Engine::new();
    let params = SignalParams::new(73.2, 3000.0);
    for t in (0..500_000).step_by(100) {
        engine.update(t, &params);
    }
    assert_ne!(*engine.state(), FilterState::initial());

    engine.reset();
    assert_eq!(*engine.state(), FilterState::initial());
    assert_eq!(engine, Engine::new());
}

#[test]
fn test_reset_replays_identically() {
    let params = SignalParams::new(50.0, 1000.0);
    let mut engine = Engine::new();

    let first: Vec<SampleResult> = (0..50_000)
        .step_by(100)
        .map(|t| engine.update(t, &params))
        .collect();
    engine.reset();
    let second: Vec<SampleResult> = (0..50_000)
        .step_by(100)
        .map(|t| engine.update(t, &params))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_engine_matches_pure_function() {
    let params = SignalParams::new(120.0, 1500.0);
    let mut engine = Engine::new();
    let mut state = FilterState::initial();

    for t in (0..100_000).step_by(100) {
        let (expected, next) =
            compute_sample(state, t, params.frequency_hz, params.amplitude_counts);
        state = next;
        assert_eq!(engine.update(t, &params), expected);
    }
    assert_eq!(*engine.state(), state);
}

#[test]
fn test_out_of_range_inputs_do_not_panic() {
    let mut state = FilterState::initial();
    for t in (0..10_000).step_by(100) {
        let (result, next) = compute_sample(state, t, 1.0e6, 1.0e12);
        let _ = result.centered_raw();
        assert!(result.rectified_magnitude >= 0);
        state = next;
    }
    let (result, _) = compute_sample(state, 0, f64::NAN, -5.0);
    let _ = result.centered_raw();
}

#[test]
fn test_saturated_reading_centers_without_overflow() {
    // Trough of a huge sine saturates the reading at i32::MIN
    let (result, _) = compute_sample(FilterState::initial(), 15_000, 50.0, 1.0e12);
    assert_eq!(result.raw_sample, i32::MIN);
    assert_eq!(result.centered_raw(), i32::MIN);

    let (result, _) = compute_sample(FilterState::initial(), 5_000, 50.0, 1.0e12);
    assert_eq!(result.raw_sample, i32::MAX);
    assert_eq!(result.centered_raw(), i32::MAX - 2048);
}

#[test]
fn test_rectifier_saturates_on_huge_swing() {
    let mut cascade = adc_rms::FilterCascade::new();
    cascade.process(i32::MAX);
    let m = cascade.process(i32::MIN);
    assert!(m.rectified_input >= 0);
}

#[test]
fn test_centered_raw() {
    let (result, _) = compute_sample(FilterState::initial(), 0, 50.0, 1000.0);
    assert_eq!(result.centered_raw(), 0);
}
